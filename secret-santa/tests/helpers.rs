//! Test helper utilities for secret santa integration tests

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use secret_santa::web::PROXY_ID_HEADER;
use secret_santa::{AppConfig, FileSantaApp, Migrator, FilePairingStore};
use shared::User;
use tempfile::TempDir;
use tower::ServiceExt;

/// An appspace directory with a roster, an installed pairings file and the app
pub struct TestAppspace {
    pub dir: TempDir,
    pub app: FileSantaApp,
}

impl TestAppspace {
    pub async fn new(users: &[User]) -> Self {
        let dir = tempfile::tempdir().expect("create appspace dir");

        let avatars = dir.path().join("avatars");
        std::fs::create_dir_all(&avatars).unwrap();
        std::fs::write(avatars.join("u-ada.png"), b"fake png").unwrap();

        let config = AppConfig::new(env!("CARGO_MANIFEST_DIR"), dir.path());
        Migrator::for_store(FilePairingStore::new(config.pairings_file()))
            .migrate(0, 1)
            .await
            .expect("install migration");

        let appspace = Self {
            app: FileSantaApp::from_config(config).expect("app from config"),
            dir,
        };
        appspace.set_roster(users);
        appspace
    }

    pub fn set_roster(&self, users: &[User]) {
        std::fs::write(
            self.dir.path().join("users.json"),
            serde_json::to_string(users).unwrap(),
        )
        .unwrap();
    }

    pub fn pairings_path(&self) -> PathBuf {
        self.dir.path().join("pairings.txt")
    }

    pub fn raw_pairings(&self) -> String {
        std::fs::read_to_string(self.pairings_path()).unwrap()
    }

    pub fn pairings(&self) -> BTreeMap<String, String> {
        serde_json::from_str(&self.raw_pairings()).unwrap()
    }

    pub async fn get(&self, uri: &str, proxy_id: Option<&str>) -> (StatusCode, String) {
        send(&self.app, Method::GET, uri, proxy_id).await
    }

    pub async fn post(&self, uri: &str, proxy_id: Option<&str>) -> (StatusCode, String) {
        send(&self.app, Method::POST, uri, proxy_id).await
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Run one request through a fresh router and collect the body as text
pub async fn send(
    app: &FileSantaApp,
    method: Method,
    uri: &str,
    proxy_id: Option<&str>,
) -> (StatusCode, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(id) = proxy_id {
        builder = builder.header(PROXY_ID_HEADER, id);
    }
    let request = builder.body(Body::empty()).unwrap();

    let response = app.build_router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}
