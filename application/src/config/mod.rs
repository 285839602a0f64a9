//! Application-level configuration.
//!
//! - [`QueryDefaults`]: request parameters used when a caller leaves them out

pub mod query_defaults;

pub use query_defaults::QueryDefaults;
