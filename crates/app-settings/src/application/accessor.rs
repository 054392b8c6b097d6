//! Typed getters over a settings store and a connection-string store.
//!
//! # The access pattern
//!
//! Every value type comes as a pair of getters:
//!
//! | Form      | Signature                       | Missing / blank | Unparsable |
//! |-----------|---------------------------------|-----------------|------------|
//! | required  | `get_int(key)`                  | `Err`           | `Err`      |
//! | defaulted | `get_int_or(key, default)`      | `default`       | `default`  |
//!
//! "Blank" means empty or whitespace-only and is treated exactly like
//! absence.  The defaulted string getter returns whatever default it is
//! given, even a blank one: passing a default is what makes a key optional.
//!
//! A few getters have only one form: [`ConfigAccessor::get_csv`],
//! [`ConfigAccessor::get_existing_file_path`], and
//! [`ConfigAccessor::get_connection_string`] are required-only;
//! [`ConfigAccessor::get_color_or`] is defaulted-only.
//!
//! # Statelessness
//!
//! The accessor caches nothing.  Each call performs exactly one store lookup
//! and is a pure function of the key, the store contents at that moment, and
//! the default.  Sharing one accessor between threads is safe whenever the
//! stores are `Sync`.
//!
//! # Logging
//!
//! Defaulted getters log at `debug` when a key is absent and at `warn` when a
//! *present* value is rejected in favour of the default.  Connection-string
//! values are never logged.

use std::path::PathBuf;

use chrono::TimeDelta;
use tracing::{debug, warn};
use url::Url;

use super::parse::{is_blank, SettingValue};
use crate::domain::{Color, ConfigEnum, ConfigError, TimeUnit};
use crate::infrastructure::store::{ConnectionStore, FileProbe, FsFileProbe, SettingsStore};

/// Typed, stateless view over application settings and connection strings.
///
/// `S` supplies application settings, `C` connection strings, and `P` answers
/// file-existence questions for [`ConfigAccessor::get_existing_file_path`].
#[derive(Debug, Clone)]
pub struct ConfigAccessor<S, C, P = FsFileProbe> {
    settings: S,
    connections: C,
    files: P,
}

impl<S, C> ConfigAccessor<S, C, FsFileProbe> {
    /// Creates an accessor that checks file paths against the real file
    /// system.
    pub fn new(settings: S, connections: C) -> Self {
        Self {
            settings,
            connections,
            files: FsFileProbe,
        }
    }
}

impl<S, C, P> ConfigAccessor<S, C, P> {
    /// Replaces the file-existence probe.
    pub fn with_file_probe<Q>(self, files: Q) -> ConfigAccessor<S, C, Q> {
        ConfigAccessor {
            settings: self.settings,
            connections: self.connections,
            files,
        }
    }

    /// The application-settings store.
    pub fn settings(&self) -> &S {
        &self.settings
    }

    /// The connection-string store.
    pub fn connections(&self) -> &C {
        &self.connections
    }
}

impl<S, C, P> ConfigAccessor<S, C, P>
where
    S: SettingsStore,
    C: ConnectionStore,
    P: FileProbe,
{
    // ── Strings ───────────────────────────────────────────────────────────────

    /// Returns the value for `key` verbatim.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Missing`] if the key is absent or its value is blank.
    pub fn get_string(&self, key: &str) -> Result<String, ConfigError> {
        match self.settings.lookup(key) {
            Some(raw) if !is_blank(&raw) => Ok(raw),
            _ => {
                debug!(key, "required setting is missing or blank");
                Err(ConfigError::Missing {
                    key: key.to_string(),
                })
            }
        }
    }

    /// Returns the value for `key`, or `default` if it is absent or blank.
    pub fn get_string_or(&self, key: &str, default: impl Into<String>) -> String {
        match self.settings.lookup(key) {
            Some(raw) if !is_blank(&raw) => raw,
            _ => {
                debug!(key, "setting is missing or blank; using default");
                default.into()
            }
        }
    }

    // ── Scalars ───────────────────────────────────────────────────────────────

    /// Required getter for any [`SettingValue`].
    ///
    /// # Errors
    ///
    /// [`ConfigError::Missing`] if the value is absent or blank,
    /// [`ConfigError::Invalid`] if it does not parse as `T`.
    fn get_parsed<T: SettingValue>(&self, key: &str) -> Result<T, ConfigError> {
        let raw = self.get_string(key)?;
        T::parse_setting(&raw).ok_or_else(|| {
            debug!(key, value = %raw, "required setting does not parse as {}", T::TYPE_NAME);
            ConfigError::Invalid {
                key: key.to_string(),
                value: raw,
                type_name: T::TYPE_NAME,
            }
        })
    }

    /// Defaulted getter for any [`SettingValue`].
    ///
    /// Reads the raw value directly: absent, blank, and unparsable values all
    /// yield `default`.
    fn get_parsed_or<T: SettingValue>(&self, key: &str, default: T) -> T {
        let Some(raw) = self.settings.lookup(key) else {
            debug!(key, "setting is absent; using default");
            return default;
        };
        match T::parse_setting(&raw) {
            Some(value) => value,
            None if is_blank(&raw) => {
                debug!(key, "setting is blank; using default");
                default
            }
            None => {
                warn!(key, value = %raw, "setting does not parse as {}; using default", T::TYPE_NAME);
                default
            }
        }
    }

    /// Returns the value for `key` as an `i32`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Missing`] or [`ConfigError::Invalid`].
    pub fn get_int(&self, key: &str) -> Result<i32, ConfigError> {
        self.get_parsed(key)
    }

    /// Returns the value for `key` as an `i32`, or `default`.
    pub fn get_int_or(&self, key: &str, default: i32) -> i32 {
        self.get_parsed_or(key, default)
    }

    /// Returns the value for `key` as an `i16`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Missing`] or [`ConfigError::Invalid`], including for
    /// integers outside the 16-bit range.
    pub fn get_short(&self, key: &str) -> Result<i16, ConfigError> {
        self.get_parsed(key)
    }

    /// Returns the value for `key` as an `i16`, or `default`.
    pub fn get_short_or(&self, key: &str, default: i16) -> i16 {
        self.get_parsed_or(key, default)
    }

    /// Returns the value for `key` as an `f64`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Missing`] or [`ConfigError::Invalid`].
    pub fn get_double(&self, key: &str) -> Result<f64, ConfigError> {
        self.get_parsed(key)
    }

    /// Returns the value for `key` as an `f64`, or `default`.
    pub fn get_double_or(&self, key: &str, default: f64) -> f64 {
        self.get_parsed_or(key, default)
    }

    /// Returns the value for `key` as a `bool` (`true`/`false`, any case).
    ///
    /// # Errors
    ///
    /// [`ConfigError::Missing`] or [`ConfigError::Invalid`].
    pub fn get_bool(&self, key: &str) -> Result<bool, ConfigError> {
        self.get_parsed(key)
    }

    /// Returns the value for `key` as a `bool`, or `default`.
    pub fn get_bool_or(&self, key: &str, default: bool) -> bool {
        self.get_parsed_or(key, default)
    }

    /// Probes `key` for a boolean.
    ///
    /// `Some(value)` only if the key exists and holds a boolean token;
    /// `None` otherwise.  Never fails.
    pub fn try_get_bool(&self, key: &str) -> Option<bool> {
        self.settings
            .lookup(key)
            .and_then(|raw| bool::parse_setting(&raw))
    }

    // ── Durations ─────────────────────────────────────────────────────────────

    /// Reads `key` as a number of `unit`s.
    ///
    /// # Errors
    ///
    /// Everything [`ConfigAccessor::get_double`] can return, plus
    /// [`ConfigError::DurationOutOfRange`] for non-finite numbers or spans
    /// beyond the range of [`TimeDelta`].  Negative numbers are valid.
    pub fn get_duration(&self, key: &str, unit: TimeUnit) -> Result<TimeDelta, ConfigError> {
        let amount = self.get_double(key)?;
        unit.to_duration(amount).ok_or_else(|| {
            debug!(key, amount, unit = unit.name(), "setting is out of range for a duration");
            ConfigError::DurationOutOfRange {
                key: key.to_string(),
                value: amount,
                unit: unit.name(),
            }
        })
    }

    /// Reads `key` as a number of `unit`s, falling back to `default_amount`
    /// by the rules of [`ConfigAccessor::get_double_or`].
    ///
    /// A stored number that cannot be a `TimeDelta` also falls back.  A
    /// default that cannot be one saturates: `NaN` gives zero, out-of-range
    /// amounts give `TimeDelta::MAX` or `TimeDelta::MIN`.
    pub fn get_duration_or(&self, key: &str, unit: TimeUnit, default_amount: f64) -> TimeDelta {
        let amount = self.get_double_or(key, default_amount);
        unit.to_duration(amount).unwrap_or_else(|| {
            if amount.to_bits() != default_amount.to_bits() {
                warn!(key, amount, unit = unit.name(), "setting is out of range for a duration; using default");
            }
            unit.to_duration_saturating(default_amount)
        })
    }

    /// Reads `key` as a number of milliseconds.
    ///
    /// # Errors
    ///
    /// As [`ConfigAccessor::get_duration`].
    pub fn get_milliseconds(&self, key: &str) -> Result<TimeDelta, ConfigError> {
        self.get_duration(key, TimeUnit::Milliseconds)
    }

    /// Reads `key` as a number of milliseconds, or `default_millis`.
    pub fn get_milliseconds_or(&self, key: &str, default_millis: f64) -> TimeDelta {
        self.get_duration_or(key, TimeUnit::Milliseconds, default_millis)
    }

    /// Reads `key` as a number of seconds.
    ///
    /// # Errors
    ///
    /// As [`ConfigAccessor::get_duration`].
    pub fn get_seconds(&self, key: &str) -> Result<TimeDelta, ConfigError> {
        self.get_duration(key, TimeUnit::Seconds)
    }

    /// Reads `key` as a number of seconds, or `default_seconds`.
    pub fn get_seconds_or(&self, key: &str, default_seconds: f64) -> TimeDelta {
        self.get_duration_or(key, TimeUnit::Seconds, default_seconds)
    }

    /// Reads `key` as a number of minutes.
    ///
    /// # Errors
    ///
    /// As [`ConfigAccessor::get_duration`].
    pub fn get_minutes(&self, key: &str) -> Result<TimeDelta, ConfigError> {
        self.get_duration(key, TimeUnit::Minutes)
    }

    /// Reads `key` as a number of minutes, or `default_minutes`.
    pub fn get_minutes_or(&self, key: &str, default_minutes: f64) -> TimeDelta {
        self.get_duration_or(key, TimeUnit::Minutes, default_minutes)
    }

    /// Reads `key` as a number of days.
    ///
    /// # Errors
    ///
    /// As [`ConfigAccessor::get_duration`].
    pub fn get_days(&self, key: &str) -> Result<TimeDelta, ConfigError> {
        self.get_duration(key, TimeUnit::Days)
    }

    /// Reads `key` as a number of days, or `default_days`.
    pub fn get_days_or(&self, key: &str, default_days: f64) -> TimeDelta {
        self.get_duration_or(key, TimeUnit::Days, default_days)
    }

    // ── Lists and paths ───────────────────────────────────────────────────────

    /// Splits the value for `key` on every `,`.
    ///
    /// Segments are returned verbatim: no trimming, and empty segments are
    /// kept (`"a,,c"` gives `["a", "", "c"]`).
    ///
    /// # Errors
    ///
    /// [`ConfigError::Missing`] if the value is absent or blank.
    pub fn get_csv(&self, key: &str) -> Result<Vec<String>, ConfigError> {
        let raw = self.get_string(key)?;
        Ok(raw.split(',').map(str::to_string).collect())
    }

    /// Returns the value for `key` as a path to an existing regular file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Missing`] if the value is absent or blank,
    /// [`ConfigError::FileNotFound`] if no regular file exists there.
    pub fn get_existing_file_path(&self, key: &str) -> Result<PathBuf, ConfigError> {
        let path = PathBuf::from(self.get_string(key)?);
        if !self.files.is_file(&path) {
            debug!(key, path = %path.display(), "configured file does not exist");
            return Err(ConfigError::FileNotFound {
                key: key.to_string(),
                path,
            });
        }
        Ok(path)
    }

    // ── Colors and enums ──────────────────────────────────────────────────────

    /// Returns the named color stored under `key`, or `default`.
    ///
    /// Falls back when the key is absent, when the name is unknown, and when
    /// the resolved color packs to ARGB zero.  A setting whose legitimate
    /// value is transparent black therefore cannot be read with this getter.
    pub fn get_color_or(&self, key: &str, default: Color) -> Color {
        let Some(raw) = self.settings.lookup(key) else {
            debug!(key, "color setting is absent; using default");
            return default;
        };
        match Color::from_name(&raw) {
            Some(color) if color.to_argb() != 0 => color,
            _ => {
                warn!(key, value = %raw, "setting is not a known color name; using default");
                default
            }
        }
    }

    /// Returns the enum member named by the value for `key`, matched
    /// ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Missing`] if the value is absent or blank,
    /// [`ConfigError::UnknownEnumMember`] if no member has that name.
    pub fn get_enum<T: ConfigEnum>(&self, key: &str) -> Result<T, ConfigError> {
        let raw = self.get_string(key)?;
        T::from_name_ignore_case(&raw).ok_or_else(|| {
            debug!(key, value = %raw, "setting is not a member of {}", T::TYPE_NAME);
            ConfigError::UnknownEnumMember {
                key: key.to_string(),
                value: raw,
                enum_name: T::TYPE_NAME,
            }
        })
    }

    /// Returns the enum member named by the value for `key`, or `default` if
    /// the value is absent, blank, or names no member.
    pub fn get_enum_or<T: ConfigEnum>(&self, key: &str, default: T) -> T {
        let Some(raw) = self.settings.lookup(key).filter(|raw| !is_blank(raw)) else {
            debug!(key, "setting is missing or blank; using default");
            return default;
        };
        T::from_name_ignore_case(&raw).unwrap_or_else(|| {
            warn!(key, value = %raw, "setting is not a member of {}; using default", T::TYPE_NAME);
            default
        })
    }

    // ── URIs ──────────────────────────────────────────────────────────────────

    /// Returns the value for `key` parsed as an absolute URI.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Missing`] if the value is absent or blank,
    /// [`ConfigError::InvalidUri`] if it is not a valid URI.
    pub fn get_uri(&self, key: &str) -> Result<Url, ConfigError> {
        let raw = self.get_string(key)?;
        Url::parse(&raw).map_err(|source| {
            debug!(key, value = %raw, "setting is not a valid URI: {source}");
            ConfigError::InvalidUri {
                key: key.to_string(),
                value: raw,
                source,
            }
        })
    }

    /// Returns the value for `key` parsed as a URI, or `default` parsed as
    /// one when the value is absent, blank, or invalid.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidDefault`] only when the fallback is needed and
    /// `default` itself is not a valid URI.
    pub fn get_uri_or(&self, key: &str, default: &str) -> Result<Url, ConfigError> {
        match self.settings.lookup(key).filter(|raw| !is_blank(raw)) {
            Some(raw) => match Url::parse(&raw) {
                Ok(url) => return Ok(url),
                Err(e) => warn!(key, value = %raw, "setting is not a valid URI ({e}); using default"),
            },
            None => debug!(key, "setting is missing or blank; using default"),
        }
        Url::parse(default).map_err(|source| ConfigError::InvalidDefault {
            key: key.to_string(),
            value: default.to_string(),
            source,
        })
    }

    // ── Connection strings ────────────────────────────────────────────────────

    /// Returns the connection string registered under `key`, verbatim.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingConnectionString`] if there is no entry.
    pub fn get_connection_string(&self, key: &str) -> Result<String, ConfigError> {
        self.connections.lookup(key).ok_or_else(|| {
            debug!(key, "no connection string registered");
            ConfigError::MissingConnectionString {
                key: key.to_string(),
            }
        })
    }

    /// Returns `true` if a connection string is registered under `key`.
    pub fn connection_string_exists(&self, key: &str) -> bool {
        self.connections.lookup(key).is_some()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
