//! Main app implementation
//!
//! `SantaApp` carries the explicit host capabilities (pairing store, user
//! directory) plus the templates and paths, and is the state every handler
//! receives.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use shared::{AppspaceId, appspace_info, logging};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::core::SecretSanta;
use crate::error::{SantaError, SantaResult};
use crate::services::{FilePairingStore, JsonUserDirectory, Templates};
use crate::traits::{PairingStore, UserDirectory};
use crate::web::auth::require_appspace_user;
use crate::web::handlers::{generate_pairings, home};

/// App wired to the pairings file and the host roster file
pub type FileSantaApp = SantaApp<FilePairingStore, JsonUserDirectory>;

pub struct SantaApp<P, U> {
    santa: SecretSanta<P, U>,
    templates: Arc<Templates>,
    config: Arc<AppConfig>,
}

impl<P, U> Clone for SantaApp<P, U> {
    fn clone(&self) -> Self {
        Self {
            santa: self.santa.clone(),
            templates: self.templates.clone(),
            config: self.config.clone(),
        }
    }
}

impl FileSantaApp {
    /// Wire the real services from configuration
    pub fn from_config(config: AppConfig) -> SantaResult<Self> {
        config.validate()?;
        let store = FilePairingStore::new(config.pairings_file());
        let directory = JsonUserDirectory::new(&config.users_file);
        let templates = Templates::from_dir(config.templates_dir())?;
        Ok(Self::new(SecretSanta::new(store, directory), templates, config))
    }
}

impl<P, U> SantaApp<P, U>
where
    P: PairingStore + 'static,
    U: UserDirectory + 'static,
{
    pub fn new(santa: SecretSanta<P, U>, templates: Templates, config: AppConfig) -> Self {
        Self {
            santa,
            templates: Arc::new(templates),
            config: Arc::new(config),
        }
    }

    pub fn santa(&self) -> &SecretSanta<P, U> {
        &self.santa
    }

    pub fn templates(&self) -> &Templates {
        &self.templates
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Build the router; every route sits behind the appspace-user guard
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/", get(home::<P, U>))
            .route("/generate-pairings", post(generate_pairings::<P, U>))
            .nest_service("/avatars", ServeDir::new(&self.config.avatars_dir))
            .nest_service("/static", ServeDir::new(self.config.static_dir()))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(middleware::from_fn_with_state(
                        self.clone(),
                        require_appspace_user::<P, U>,
                    ))
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Serve until Ctrl+C
    pub async fn run(&self, addr: SocketAddr) -> SantaResult<()> {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| SantaError::ServerStartup(format!("Failed to bind to {addr}: {e}")))?;

        appspace_info!(AppspaceId::current(), "🌐 Secret santa listening on http://{}", addr);

        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown(AppspaceId::current(), "Received Ctrl+C signal"),
        Err(err) => logging::log_error(AppspaceId::current(), "Signal handling", &err),
    }
}
