//! Process-environment store.
//!
//! Reads settings straight from environment variables, optionally under a
//! prefix so `EnvStore::with_prefix("APP_")` resolves key `PORT` from
//! `APP_PORT`.  Variables whose value is not valid Unicode are treated as
//! absent.

use super::{ConnectionStore, SettingsStore};

/// Store backed by the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvStore {
    prefix: String,
}

impl EnvStore {
    /// Reads keys as variable names, unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads key `K` from the variable `{prefix}K`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The prefix prepended to every key.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(format!("{}{key}", self.prefix)).ok()
    }
}

impl SettingsStore for EnvStore {
    fn lookup(&self, key: &str) -> Option<String> {
        self.var(key)
    }
}

impl ConnectionStore for EnvStore {
    fn lookup(&self, key: &str) -> Option<String> {
        self.var(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    /// A variable name no other test (or the host) will use.
    fn unique_name() -> String {
        format!("APPSETTINGS_TEST_{}", Uuid::new_v4().simple())
    }

    #[test]
    fn test_lookup_reads_variable() {
        // Arrange
        let name = unique_name();
        std::env::set_var(&name, "42");

        // Act
        let value = SettingsStore::lookup(&EnvStore::new(), &name);

        // Assert
        assert_eq!(value, Some("42".to_string()));
        std::env::remove_var(&name);
    }

    #[test]
    fn test_prefix_is_prepended() {
        let name = unique_name();
        std::env::set_var(format!("SVC_{name}"), "on");

        let store = EnvStore::with_prefix("SVC_");
        assert_eq!(store.prefix(), "SVC_");
        assert_eq!(ConnectionStore::lookup(&store, &name), Some("on".to_string()));
        assert_eq!(ConnectionStore::lookup(&EnvStore::new(), &name), None);

        std::env::remove_var(format!("SVC_{name}"));
    }

    #[test]
    fn test_unset_variable_is_absent() {
        assert_eq!(SettingsStore::lookup(&EnvStore::new(), &unique_name()), None);
    }
}
