//! Shared logging utilities for consistent tracing across the workspace

use crate::types::AppspaceId;
use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Build the env filter directive for a given base level
pub fn filter_directive(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    format!("secret_santa={base_level},shared={base_level},tower_http=debug,axum={base_level}")
}

/// Initialize tracing subscriber writing to stdout
///
/// `RUST_LOG` takes precedence over the level passed in, so operators can
/// widen the filter without touching the host's launch arguments.
pub fn init_tracing(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(log_level)));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for appspace-aware info logging
#[macro_export]
macro_rules! appspace_info {
    ($appspace:expr, $($arg:tt)*) => {
        tracing::info!(
            appspace = %$appspace,
            timestamp = shared::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for appspace-aware warning logging
#[macro_export]
macro_rules! appspace_warn {
    ($appspace:expr, $($arg:tt)*) => {
        tracing::warn!(
            appspace = %$appspace,
            timestamp = shared::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for appspace-aware error logging
#[macro_export]
macro_rules! appspace_error {
    ($appspace:expr, $($arg:tt)*) => {
        tracing::error!(
            appspace = %$appspace,
            timestamp = shared::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for appspace-aware debug logging
#[macro_export]
macro_rules! appspace_debug {
    ($appspace:expr, $($arg:tt)*) => {
        tracing::debug!(
            appspace = %$appspace,
            timestamp = shared::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(appspace: &AppspaceId, details: &str) {
    info!(
        appspace = %appspace,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(appspace: &AppspaceId, reason: &str) {
    info!(
        appspace = %appspace,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(appspace: &AppspaceId, context: &str, error: &dyn std::fmt::Display) {
    error!(
        appspace = %appspace,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(appspace: &AppspaceId, message: &str) {
    info!(
        appspace = %appspace,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}
