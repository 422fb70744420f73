//! Secret santa appspace app
//!
//! Shuffles the appspace's users into one gift-giving cycle, keeps the result
//! in a flat JSON file, and serves a page showing each user who they give to.

pub mod app_impl;
pub mod config;
pub mod core;
pub mod error;
pub mod migrations;
pub mod services;
pub mod traits;
pub mod web;

// Re-export main types
pub use app_impl::{FileSantaApp, SantaApp};
pub use config::AppConfig;
pub use core::{GenerateOutcome, PairingMap, SecretSanta};
pub use error::{SantaError, SantaResult, StorageError};
pub use migrations::Migrator;

// Re-export trait definitions
pub use traits::{PairingStore, UserDirectory};

// Re-export service implementations
pub use services::{FilePairingStore, JsonUserDirectory, Templates};
