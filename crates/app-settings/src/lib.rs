//! # app-settings
//!
//! Typed access to flat key/value application settings.
//!
//! A host process resolves its configuration (an `appSettings`-style section
//! and a `connectionStrings`-style section) into two string maps.  This crate
//! turns single values out of those maps into typed Rust values with one
//! uniform rule set:
//!
//! - `get_x(key)` is the *required* form.  A missing, blank, or unparsable
//!   value is a [`ConfigError`].
//! - `get_x_or(key, default)` is the *defaulted* form.  The same conditions
//!   silently yield `default` instead.
//!
//! # Architecture overview
//!
//! ```text
//! host configuration (already resolved)
//!         ↓
//! infrastructure/store   SettingsStore / ConnectionStore / FileProbe adapters
//!         ↓
//! application/accessor   ConfigAccessor: presence rules, defaults, logging
//!         ↓
//! domain/                ConfigError, Color, ConfigEnum, duration units
//! ```
//!
//! # Example
//!
//! ```rust
//! use app_settings::{ConfigAccessor, MemoryStore};
//!
//! let settings: MemoryStore = [("retries", "3"), ("verbose", "True")].into_iter().collect();
//! let config = ConfigAccessor::new(settings, MemoryStore::new());
//!
//! assert_eq!(config.get_int("retries").unwrap(), 3);
//! assert!(config.get_bool("verbose").unwrap());
//! assert_eq!(config.get_int_or("timeout", 30), 30);
//! assert!(config.get_string("missing").is_err());
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::accessor::ConfigAccessor;
pub use domain::color::Color;
pub use domain::enums::ConfigEnum;
pub use domain::error::ConfigError;
pub use domain::units::TimeUnit;
pub use infrastructure::store::{
    ConnectionStore, EnvStore, FileProbe, FsFileProbe, HostSettings, MemoryStore, SettingsStore,
};
pub use chrono::TimeDelta;
pub use url::Url;
