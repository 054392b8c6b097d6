//! In-memory stores and a deserializable pair of settings sections.
//!
//! [`MemoryStore`] is the workhorse: a plain `HashMap<String, String>` that
//! implements both store traits.  A host that already parsed its
//! configuration file builds one with `collect()`, `insert()`, or serde.
//!
//! [`HostSettings`] mirrors the usual shape of a process configuration file,
//! an application-settings section next to a connection-strings section:
//!
//! ```toml
//! [app_settings]
//! retries = 3
//! endpoint = "https://api.example.com/"
//!
//! [connection_strings]
//! Main = "Data Source=db01;Initial Catalog=orders"
//! ```
//!
//! # Serde default values
//!
//! Both sections carry `#[serde(default)]`, so a document with only one of
//! them (or neither) still deserializes.  Scalar values that are not strings
//! (`retries = 3`, `verbose = true`) are stored as their display text, since
//! every store value is a raw string by contract.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer};

use super::{ConnectionStore, FsFileProbe, SettingsStore};
use crate::application::accessor::ConfigAccessor;

/// A case-sensitive `key → raw value` map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct MemoryStore {
    #[serde(deserialize_with = "deserialize_scalar_map")]
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, returning the previous value if there was one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    /// Returns the raw value for `key` without copying it.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl From<HashMap<String, String>> for MemoryStore {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl SettingsStore for MemoryStore {
    fn lookup(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

impl ConnectionStore for MemoryStore {
    fn lookup(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

// ── Scalar value deserialization ──────────────────────────────────────────────

/// Any scalar a configuration format may use for a setting value.
#[derive(Deserialize)]
#[serde(untagged)]
enum ScalarValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

fn deserialize_scalar_map<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: HashMap<String, ScalarValue> = HashMap::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|(k, v)| (k, v.to_string())).collect())
}

// ── Host settings ─────────────────────────────────────────────────────────────

/// The application-settings and connection-strings sections of a host
/// configuration, already resolved to strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HostSettings {
    /// Flat application settings.
    #[serde(default, alias = "appSettings")]
    pub app_settings: MemoryStore,
    /// Named connection strings.
    #[serde(default, alias = "connectionStrings")]
    pub connection_strings: MemoryStore,
}

impl HostSettings {
    /// Builds an accessor over both sections, probing the real file system
    /// for existing-file-path settings.
    pub fn into_accessor(self) -> ConfigAccessor<MemoryStore, MemoryStore, FsFileProbe> {
        ConfigAccessor::new(self.app_settings, self.connection_strings)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
