//! HTTP surface: appspace-user guard and page handlers

pub mod auth;
pub mod handlers;

pub use auth::{AuthenticatedUser, PROXY_ID_HEADER};
