//! Install and uninstall steps
//!
//! The host tracks which schema version an appspace is at and asks the app
//! to move it from one version to another. Each step owns one version: `up`
//! brings an appspace to it, `down` takes it back to the previous one.

use async_trait::async_trait;
use shared::{AppspaceId, appspace_info};

use crate::error::{SantaError, SantaResult};
use crate::traits::PairingStore;

#[async_trait]
pub trait Migration: Send + Sync {
    /// Version this step migrates up to
    fn version(&self) -> u32;

    async fn up(&self) -> SantaResult<()>;

    async fn down(&self) -> SantaResult<()>;
}

/// Version 1: the pairings file exists and holds a map
pub struct CreatePairingsFile<P> {
    store: P,
}

impl<P: PairingStore> CreatePairingsFile<P> {
    pub fn new(store: P) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<P: PairingStore> Migration for CreatePairingsFile<P> {
    fn version(&self) -> u32 {
        1
    }

    async fn up(&self) -> SantaResult<()> {
        self.store.initialize().await
    }

    async fn down(&self) -> SantaResult<()> {
        self.store.destroy().await
    }
}

#[derive(Default)]
pub struct Migrator {
    steps: Vec<Box<dyn Migration>>,
}

impl Migrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The app's migration set
    pub fn for_store<P: PairingStore + 'static>(store: P) -> Self {
        Self::new().with_step(CreatePairingsFile::new(store))
    }

    pub fn with_step(mut self, step: impl Migration + 'static) -> Self {
        self.steps.push(Box::new(step));
        self.steps.sort_by_key(|s| s.version());
        self
    }

    pub fn latest_version(&self) -> u32 {
        self.steps.last().map(|s| s.version()).unwrap_or(0)
    }

    /// Move from version `from` to version `to`, returning the version reached
    pub async fn migrate(&self, from: u32, to: u32) -> SantaResult<u32> {
        let latest = self.latest_version();
        for version in [from, to] {
            if version > latest {
                return Err(SantaError::Migration {
                    from,
                    to,
                    reason: format!("unknown version {version}, latest is {latest}"),
                });
            }
        }

        if to > from {
            for step in self.steps.iter().filter(|s| s.version() > from && s.version() <= to) {
                appspace_info!(AppspaceId::current(), "⬆️ Migrating up to version {}", step.version());
                step.up().await?;
            }
        } else if to < from {
            for step in self
                .steps
                .iter()
                .rev()
                .filter(|s| s.version() > to && s.version() <= from)
            {
                appspace_info!(AppspaceId::current(), "⬇️ Migrating down from version {}", step.version());
                step.down().await?;
            }
        }

        Ok(to)
    }
}
