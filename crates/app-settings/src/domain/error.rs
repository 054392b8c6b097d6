//! The single error type raised by every getter.
//!
//! Each variant carries the key, and where it helps, the offending raw value
//! and the target type, so a misconfiguration can be diagnosed from the error
//! text alone.  Connection-string values never appear in
//! [`ConfigError::MissingConnectionString`]; only the key is reported.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a configuration value is missing or malformed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// The key has no value, or the value is empty or whitespace.
    #[error("no application setting available for key: {key}")]
    Missing { key: String },

    /// The value does not parse as the requested type.
    #[error("unable to parse app setting value for {key} as {type_name}: {value}")]
    Invalid {
        key: String,
        value: String,
        type_name: &'static str,
    },

    /// The number parsed but is not finite or overflows a `TimeDelta`.
    #[error("app setting value for {key} is out of range for a duration in {unit}: {value}")]
    DurationOutOfRange {
        key: String,
        value: f64,
        unit: &'static str,
    },

    /// The value does not name any member of the enum.
    #[error(
        "configuration key '{key}' has value '{value}' that could not be parsed as a member of the {enum_name} enum type"
    )]
    UnknownEnumMember {
        key: String,
        value: String,
        enum_name: &'static str,
    },

    /// The value is not a valid URI.
    #[error("configuration key '{key}' holds an invalid URI '{value}': {source}")]
    InvalidUri {
        key: String,
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// The caller-supplied default is not a valid URI.
    #[error("default URI '{value}' supplied for key '{key}' is invalid: {source}")]
    InvalidDefault {
        key: String,
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// The value names a path with no regular file behind it.
    #[error("configuration key '{key}' holds a non-existent file path: {}", .path.display())]
    FileNotFound { key: String, path: PathBuf },

    /// The connection-string store has no entry for the key.
    #[error("no connection string found for key: {key}")]
    MissingConnectionString { key: String },
}

impl ConfigError {
    /// The key the failing lookup was made with.
    pub fn key(&self) -> &str {
        match self {
            Self::Missing { key }
            | Self::Invalid { key, .. }
            | Self::DurationOutOfRange { key, .. }
            | Self::UnknownEnumMember { key, .. }
            | Self::InvalidUri { key, .. }
            | Self::InvalidDefault { key, .. }
            | Self::FileNotFound { key, .. }
            | Self::MissingConnectionString { key } => key,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
