//! Application layer: the typed getters and the parsing rules behind them.
//!
//! The scalar getters cover a closed set of types.  The parsing rules are
//! internal, so callers cannot name them:
//!
//! ```compile_fail
//! use app_settings::application::parse::SettingValue;
//! ```
//!
//! and the generic getter behind `get_int` and friends is not callable:
//!
//! ```compile_fail
//! use app_settings::{ConfigAccessor, MemoryStore};
//!
//! let config = ConfigAccessor::new(MemoryStore::new(), MemoryStore::new());
//! let _ = config.get_parsed::<i32>("retries");
//! ```

pub mod accessor;
mod parse;

pub use accessor::ConfigAccessor;
