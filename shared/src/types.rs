//! Host-facing identifiers and user records

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use crate::errors::{SharedError, SharedResult};

/// Global appspace identity used to tag log events
static APPSPACE_ID: OnceLock<AppspaceId> = OnceLock::new();

/// Name of the appspace this process serves
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AppspaceId(String);

impl AppspaceId {
    /// Initialize the global appspace ID (first call wins)
    pub fn init(name: impl Into<String>) -> &'static AppspaceId {
        let name = name.into();
        APPSPACE_ID.get_or_init(|| AppspaceId(name))
    }

    /// Get the global appspace ID, falling back to "appspace" before init
    pub fn current() -> &'static AppspaceId {
        APPSPACE_ID.get_or_init(|| AppspaceId("appspace".to_string()))
    }
}

impl fmt::Display for AppspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque, host-assigned user identifier
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProxyId(String);

impl ProxyId {
    pub fn new(id: impl Into<String>) -> SharedResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(SharedError::InvalidProxyId { input: id });
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProxyId {
    type Error = SharedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ProxyId::new(value)
    }
}

impl From<ProxyId> for String {
    fn from(id: ProxyId) -> Self {
        id.0
    }
}

impl std::str::FromStr for ProxyId {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProxyId::new(s)
    }
}

impl fmt::Display for ProxyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Appspace user as exported by the host directory
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub proxy_id: ProxyId,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    pub fn new(proxy_id: ProxyId, display_name: impl Into<String>) -> Self {
        Self {
            proxy_id,
            display_name: display_name.into(),
            avatar: None,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proxy_id_rejects_blank() {
        assert!(ProxyId::new("").is_err());
        assert!(ProxyId::new("   ").is_err());
        assert_eq!(ProxyId::new("abc123").unwrap().as_str(), "abc123");
    }

    #[test]
    fn test_user_uses_host_field_names() {
        let json = r#"{"proxyId":"u1","displayName":"Ada","avatar":"u1.jpg"}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.proxy_id.as_str(), "u1");
        assert_eq!(user.display_name, "Ada");
        assert_eq!(user.avatar.as_deref(), Some("u1.jpg"));

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["proxyId"], "u1");
        assert_eq!(back["displayName"], "Ada");
    }

    #[test]
    fn test_user_without_avatar() {
        let user: User = serde_json::from_str(r#"{"proxyId":"u2","displayName":"Bo"}"#).unwrap();
        assert!(user.avatar.is_none());
        assert!(serde_json::from_str::<User>(r#"{"proxyId":"","displayName":"X"}"#).is_err());
    }

    #[test]
    fn test_appspace_id_display() {
        let id = AppspaceId::current();
        assert!(!id.to_string().is_empty());
    }
}
