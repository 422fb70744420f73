//! User directory backed by the roster file the host exports
//!
//! The file is a JSON array of users. It is read on every call so roster
//! changes made by the host show up on the next request.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use shared::{ProxyId, User};
use tokio::fs;

use crate::error::{SantaError, SantaResult};
use crate::traits::UserDirectory;

pub struct JsonUserDirectory {
    path: PathBuf,
}

impl JsonUserDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> SantaResult<Vec<User>> {
        let contents = fs::read_to_string(&self.path)
            .await
            .map_err(|e| SantaError::UserDirectory {
                reason: format!("cannot read {}: {}", self.path.display(), e),
            })?;

        let users: Vec<User> =
            serde_json::from_str(&contents).map_err(|e| SantaError::UserDirectory {
                reason: format!("cannot parse {}: {}", self.path.display(), e),
            })?;

        let mut seen = HashSet::new();
        for user in &users {
            if !seen.insert(&user.proxy_id) {
                return Err(SantaError::DuplicateUser {
                    proxy_id: user.proxy_id.clone(),
                });
            }
        }

        Ok(users)
    }
}

#[async_trait]
impl UserDirectory for JsonUserDirectory {
    async fn users(&self) -> SantaResult<Vec<User>> {
        self.load().await
    }

    async fn user(&self, proxy_id: &ProxyId) -> SantaResult<User> {
        self.load()
            .await?
            .into_iter()
            .find(|u| &u.proxy_id == proxy_id)
            .ok_or_else(|| SantaError::UserNotFound {
                proxy_id: proxy_id.clone(),
            })
    }
}
