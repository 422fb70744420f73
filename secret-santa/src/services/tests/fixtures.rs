//! Test fixtures for service tests

use std::path::{Path, PathBuf};

use shared::{ProxyId, User};
use tempfile::TempDir;

use crate::core::PairingMap;
use crate::core::generator::cycle_from_order;

pub fn proxy_id(id: &str) -> ProxyId {
    ProxyId::new(id).unwrap()
}

pub fn test_user(id: &str, name: &str) -> User {
    User::new(proxy_id(id), name)
}

/// Three users with distinct display names
pub fn test_roster() -> Vec<User> {
    vec![
        test_user("u-ada", "Ada"),
        test_user("u-bo", "Bo").with_avatar("u-bo.png"),
        test_user("u-cy", "Cy"),
    ]
}

/// The cycle produced by the order ada, bo, cy
pub fn test_pairings() -> PairingMap {
    cycle_from_order(&[proxy_id("u-ada"), proxy_id("u-bo"), proxy_id("u-cy")]).unwrap()
}

pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Write `users` as the host roster file and return its path
pub fn write_roster(dir: &Path, users: &[User]) -> PathBuf {
    let path = dir.join("users.json");
    std::fs::write(&path, serde_json::to_string_pretty(users).unwrap()).unwrap();
    path
}

/// Directory holding the shipped templates
pub fn templates_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}
