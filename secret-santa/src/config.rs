//! Resolved runtime configuration

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{SantaError, SantaResult};
use crate::services::PAIRINGS_FILE;

/// Where the app reads code-side assets and appspace-side data
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory with `templates/` and `static/`
    pub app_dir: PathBuf,
    /// Per-appspace data directory holding the pairings file
    pub appspace_dir: PathBuf,
    /// Host avatars directory served under `/avatars`
    pub avatars_dir: PathBuf,
    /// Roster exported by the host
    pub users_file: PathBuf,
}

impl AppConfig {
    /// Defaults: avatars and roster live inside the appspace directory
    pub fn new(app_dir: impl Into<PathBuf>, appspace_dir: impl Into<PathBuf>) -> Self {
        let appspace_dir = appspace_dir.into();
        Self {
            app_dir: app_dir.into(),
            avatars_dir: appspace_dir.join("avatars"),
            users_file: appspace_dir.join("users.json"),
            appspace_dir,
        }
    }

    pub fn with_avatars_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.avatars_dir = dir.into();
        self
    }

    pub fn with_users_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.users_file = path.into();
        self
    }

    pub fn pairings_file(&self) -> PathBuf {
        self.appspace_dir.join(PAIRINGS_FILE)
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.app_dir.join("templates")
    }

    pub fn static_dir(&self) -> PathBuf {
        self.app_dir.join("static")
    }

    /// Fail early when a directory the server needs is absent
    pub fn validate(&self) -> SantaResult<()> {
        require_dir(&self.templates_dir())?;
        require_dir(&self.appspace_dir)?;
        Ok(())
    }
}

fn require_dir(path: &Path) -> SantaResult<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(SantaError::Config(format!(
            "directory not found: {}",
            path.display()
        )))
    }
}

/// Parse the HTTP bind address from host and port
pub fn bind_address(host: &str, port: u16) -> SantaResult<SocketAddr> {
    format!("{host}:{port}")
        .parse()
        .map_err(|e| SantaError::Config(format!("Invalid bind address {host}:{port}: {e}")))
}
