//! Secret santa error types

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shared::{AppspaceId, ProxyId, SharedError, appspace_error, appspace_warn};
use thiserror::Error;

/// Failures of the pairings file
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Pairings file not found: {}", .path.display())]
    Missing { path: PathBuf },

    #[error("Pairings file I/O failed on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Pairings file {} is malformed: {}", .path.display(), .source)]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    /// Classify an I/O error against the file it happened on
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            StorageError::Missing { path }
        } else {
            StorageError::Io { path, source }
        }
    }
}

#[derive(Error, Debug)]
pub enum SantaError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("User directory unavailable: {reason}")]
    UserDirectory { reason: String },

    #[error("User not found: {proxy_id}")]
    UserNotFound { proxy_id: ProxyId },

    #[error("No pairing recorded for user: {proxy_id}")]
    PairingNotFound { proxy_id: ProxyId },

    #[error("Expected an authenticated user")]
    Unauthenticated,

    #[error("User is not a member of this appspace: {proxy_id}")]
    Forbidden { proxy_id: ProxyId },

    #[error("Cannot generate pairings for an empty roster")]
    EmptyRoster,

    #[error("User appears more than once in the roster: {proxy_id}")]
    DuplicateUser { proxy_id: ProxyId },

    #[error("Template registration failed: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Template rendering failed: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("Migration from {from} to {to} failed: {reason}")]
    Migration { from: u32, to: u32, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Shared component error: {0}")]
    Shared(#[from] SharedError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SantaError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SantaError::Unauthenticated => StatusCode::UNAUTHORIZED,
            SantaError::Forbidden { .. } => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SantaError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            appspace_error!(AppspaceId::current(), "Request failed: {}", self);
        } else {
            appspace_warn!(AppspaceId::current(), "Request rejected: {}", self);
        }
        (status, self.to_string()).into_response()
    }
}

pub type SantaResult<T> = Result<T, SantaError>;
