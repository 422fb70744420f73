//! Secret santa service
//!
//! Composes the pairing store and the host user directory with the generator
//! and oracle. Every call reads the store and the roster fresh.

use std::fmt;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared::{AppspaceId, ProxyId, User, appspace_debug, appspace_info};
use tokio::sync::Mutex;

use crate::core::{generator, oracle};
use crate::error::{SantaError, SantaResult};
use crate::traits::{PairingStore, UserDirectory};

/// Rosters of this size or smaller are refused
pub const MAX_TOO_FEW: usize = 2;

/// Result of a generation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateOutcome {
    Created,
    AlreadyGenerated,
    NotEnoughPeople,
}

impl GenerateOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            GenerateOutcome::Created => "Created Secret Santa List!",
            GenerateOutcome::AlreadyGenerated => "Already generated",
            GenerateOutcome::NotEnoughPeople => {
                "Not enough people to generate a secret santa list!"
            }
        }
    }
}

impl fmt::Display for GenerateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// True when a roster of `count` users is too small to generate
pub fn too_few(count: usize) -> bool {
    count <= MAX_TOO_FEW
}

pub struct SecretSanta<P, U> {
    store: Arc<P>,
    directory: Arc<U>,
    // Serialises the read-check-write in `generate_with`
    generation_lock: Arc<Mutex<()>>,
}

impl<P, U> Clone for SecretSanta<P, U> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            directory: self.directory.clone(),
            generation_lock: self.generation_lock.clone(),
        }
    }
}

impl<P, U> SecretSanta<P, U>
where
    P: PairingStore,
    U: UserDirectory,
{
    pub fn new(store: P, directory: U) -> Self {
        Self {
            store: Arc::new(store),
            directory: Arc::new(directory),
            generation_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Current appspace roster
    pub async fn users(&self) -> SantaResult<Vec<User>> {
        self.directory.users().await
    }

    /// Whether the stored pairing covers exactly the current roster
    pub async fn is_generated(&self) -> SantaResult<bool> {
        let users = self.directory.users().await?;
        self.is_generated_for(&users).await
    }

    async fn is_generated_for(&self, users: &[User]) -> SantaResult<bool> {
        let pairings = self.store.read().await?;
        let ids: Vec<ProxyId> = users.iter().map(|u| u.proxy_id.clone()).collect();
        Ok(oracle::is_generated(&pairings, &ids))
    }

    /// Generate and store a new pairing if the roster allows it
    pub async fn generate(&self) -> SantaResult<GenerateOutcome> {
        let mut rng = StdRng::from_entropy();
        self.generate_with(&mut rng).await
    }

    pub async fn generate_with<R>(&self, rng: &mut R) -> SantaResult<GenerateOutcome>
    where
        R: Rng + Send + ?Sized,
    {
        let _guard = self.generation_lock.lock().await;

        let users = self.directory.users().await?;
        let generated = self.is_generated_for(&users).await?;

        // Roster size is checked last so it wins over "already generated"
        let outcome = if too_few(users.len()) {
            GenerateOutcome::NotEnoughPeople
        } else if generated {
            GenerateOutcome::AlreadyGenerated
        } else {
            let ids: Vec<ProxyId> = users.iter().map(|u| u.proxy_id.clone()).collect();
            let pairings = generator::generate_pairings(&ids, rng)?;
            self.store.write(&pairings).await?;
            appspace_info!(
                AppspaceId::current(),
                "🎁 Generated secret santa pairings for {} users",
                pairings.len()
            );
            GenerateOutcome::Created
        };

        appspace_debug!(AppspaceId::current(), "Generation request: {}", outcome);
        Ok(outcome)
    }

    /// The user and the pairee they give to
    pub async fn pairing_for(&self, proxy_id: &ProxyId) -> SantaResult<(User, User)> {
        let pairings = self.store.read().await?;
        let pairee_id = pairings
            .pairee_of(proxy_id)
            .ok_or_else(|| SantaError::PairingNotFound {
                proxy_id: proxy_id.clone(),
            })?;

        let user = self.directory.user(proxy_id).await?;
        let pairee = self.directory.user(pairee_id).await?;
        Ok((user, pairee))
    }
}
