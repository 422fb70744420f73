//! Service implementations
//!
//! Real implementations of the service traits, plus the template renderer

pub mod pairing_store;
pub mod templates;
pub mod user_directory;

#[cfg(test)]
mod tests;

// Re-export service implementations
pub use pairing_store::{FilePairingStore, PAIRINGS_FILE};
pub use templates::Templates;
pub use user_directory::JsonUserDirectory;
