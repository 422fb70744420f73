//! File-backed pairing store
//!
//! Keeps the pairing map as one JSON object in the appspace data directory.
//! Writes land in a sibling temp file that is renamed over the target, so a
//! reader sees either the previous map or the new one.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use shared::{AppspaceId, appspace_debug, appspace_info};
use tokio::fs;

use crate::core::PairingMap;
use crate::error::{SantaResult, StorageError};
use crate::traits::PairingStore;

/// File name of the pairings blob inside the appspace directory
pub const PAIRINGS_FILE: &str = "pairings.txt";

pub struct FilePairingStore {
    path: PathBuf,
}

impl FilePairingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the conventional location inside `appspace_dir`
    pub fn in_appspace(appspace_dir: impl AsRef<Path>) -> Self {
        Self::new(appspace_dir.as_ref().join(PAIRINGS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| PAIRINGS_FILE.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn replace_contents(&self, contents: String) -> Result<(), StorageError> {
        let temp = self.temp_path();
        fs::write(&temp, contents)
            .await
            .map_err(|e| StorageError::from_io(&temp, e))?;
        fs::rename(&temp, &self.path)
            .await
            .map_err(|e| StorageError::from_io(&self.path, e))
    }
}

#[async_trait]
impl PairingStore for FilePairingStore {
    async fn read(&self) -> SantaResult<PairingMap> {
        let contents = fs::read_to_string(&self.path)
            .await
            .map_err(|e| StorageError::from_io(&self.path, e))?;

        let pairings: PairingMap = serde_json::from_str(&contents).map_err(|source| StorageError::Malformed {
            path: self.path.clone(),
            source,
        })?;
        Ok(pairings)
    }

    async fn write(&self, pairings: &PairingMap) -> SantaResult<()> {
        let contents = serde_json::to_string(pairings).map_err(|source| StorageError::Malformed {
            path: self.path.clone(),
            source,
        })?;
        self.replace_contents(contents).await?;

        appspace_debug!(
            AppspaceId::current(),
            "💾 Wrote {} pairings to {}",
            pairings.len(),
            self.path.display()
        );
        Ok(())
    }

    async fn initialize(&self) -> SantaResult<()> {
        self.write(&PairingMap::new()).await?;
        appspace_info!(AppspaceId::current(), "📁 Created pairings file {}", self.path.display());
        Ok(())
    }

    async fn destroy(&self) -> SantaResult<()> {
        fs::remove_file(&self.path)
            .await
            .map_err(|e| StorageError::from_io(&self.path, e))?;
        appspace_info!(AppspaceId::current(), "🗑️ Removed pairings file {}", self.path.display());
        Ok(())
    }
}
