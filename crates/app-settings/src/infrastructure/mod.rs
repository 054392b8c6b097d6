//! Infrastructure layer: where raw setting values come from.

pub mod store;
