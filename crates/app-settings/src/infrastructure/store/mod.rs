//! Store abstractions the accessor reads from.
//!
//! The accessor never owns configuration.  It asks three narrow
//! collaborators:
//!
//! - [`SettingsStore`] – the flat `key → value` application settings;
//! - [`ConnectionStore`] – the `name → connection string` section;
//! - [`FileProbe`] – "is there a regular file at this path?".
//!
//! Each is a single-method trait so tests can substitute an in-memory map or
//! a mock without touching process-wide state.  Adapters for the common
//! cases live in the submodules:
//!
//! | Adapter          | Implements                          |
//! |------------------|-------------------------------------|
//! | [`MemoryStore`]  | `SettingsStore`, `ConnectionStore`  |
//! | [`EnvStore`]     | `SettingsStore`, `ConnectionStore`  |
//! | [`FsFileProbe`]  | `FileProbe`                         |

use std::path::Path;
use std::sync::Arc;

pub mod env;
pub mod fs;
pub mod memory;

pub use env::EnvStore;
pub use fs::FsFileProbe;
pub use memory::{HostSettings, MemoryStore};

/// Source of raw application-setting values.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsStore {
    /// Returns the raw value stored under `key`, or `None` if there is none.
    ///
    /// Keys are case-sensitive.  Blank values are returned as-is; deciding
    /// what "blank" means is the accessor's job.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Source of raw connection strings.
#[cfg_attr(test, mockall::automock)]
pub trait ConnectionStore {
    /// Returns the connection string registered under `key`, verbatim.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Checks whether a path names an existing regular file.
#[cfg_attr(test, mockall::automock)]
pub trait FileProbe {
    fn is_file(&self, path: &Path) -> bool;
}

// ── Forwarding impls ──────────────────────────────────────────────────────────
//
// Let callers hand the accessor a borrowed or shared store.

impl<T: SettingsStore + ?Sized> SettingsStore for &T {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

impl<T: SettingsStore + ?Sized> SettingsStore for Box<T> {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

impl<T: SettingsStore + ?Sized> SettingsStore for Arc<T> {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

impl<T: ConnectionStore + ?Sized> ConnectionStore for &T {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

impl<T: ConnectionStore + ?Sized> ConnectionStore for Box<T> {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

impl<T: ConnectionStore + ?Sized> ConnectionStore for Arc<T> {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

impl<T: FileProbe + ?Sized> FileProbe for &T {
    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }
}
