//! Service tests
//!
//! File-backed services run against throwaway directories from `tempfile`.

pub mod fixtures;
pub mod pairing_store;
