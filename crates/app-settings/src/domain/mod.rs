//! Domain layer: value types and the error type.
//!
//! Nothing here touches a store, the file system, or the environment.  The
//! types describe *what* a setting can turn into and *how* a failure is
//! reported; the application layer decides *when*.

pub mod color;
pub mod enums;
pub mod error;
pub mod units;

pub use color::Color;
pub use enums::ConfigEnum;
pub use error::ConfigError;
pub use units::TimeUnit;
