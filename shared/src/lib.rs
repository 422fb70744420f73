//! Shared types for the secret santa appspace
//!
//! Holds the identifiers the host hands us, the shared error type, and the
//! logging setup every binary in the workspace uses.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
