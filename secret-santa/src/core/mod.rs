//! Core pairing logic, free of HTTP and file I/O

pub mod generator;
pub mod oracle;
pub mod pairing_map;
pub mod secret_santa;

pub use pairing_map::{PairingMap, PairingMapError};
pub use secret_santa::{GenerateOutcome, SecretSanta, too_few};
