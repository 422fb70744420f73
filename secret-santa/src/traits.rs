//! Service trait definitions for dependency injection
//!
//! The pairings file and the host's user directory are reached only through
//! these traits so the core logic can run against mocks.

use async_trait::async_trait;
use shared::{ProxyId, User};

use crate::core::PairingMap;
use crate::error::SantaResult;

/// Persistent home of the pairing map
#[mockall::automock]
#[async_trait]
pub trait PairingStore: Send + Sync {
    /// Load the stored pairing map
    async fn read(&self) -> SantaResult<PairingMap>;

    /// Replace the stored pairing map in full
    async fn write(&self, pairings: &PairingMap) -> SantaResult<()>;

    /// Create the store holding an empty map (install time)
    async fn initialize(&self) -> SantaResult<()>;

    /// Remove the store (uninstall time)
    async fn destroy(&self) -> SantaResult<()>;
}

/// Host-provided roster of appspace users
#[mockall::automock]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// All current appspace users
    async fn users(&self) -> SantaResult<Vec<User>>;

    /// A single user by proxy id
    async fn user(&self, proxy_id: &ProxyId) -> SantaResult<User>;
}
