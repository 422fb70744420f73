//! Shared error types for the secret santa appspace

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid proxy id: {input:?}")]
    InvalidProxyId { input: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
