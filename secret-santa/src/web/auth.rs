//! Appspace-user guard
//!
//! Authentication happens upstream; the host forwards the signed-in user's
//! proxy id in a request header. Requests only get through when that id
//! belongs to the current roster.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use shared::{AppspaceId, ProxyId, appspace_debug};

use crate::app_impl::SantaApp;
use crate::error::{SantaError, SantaResult};
use crate::traits::{PairingStore, UserDirectory};

/// Header carrying the authenticated user's proxy id
pub const PROXY_ID_HEADER: &str = "x-proxy-id";

/// Proxy id of the user making the request, set by the guard
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser(pub ProxyId);

fn proxy_id_from(request: &Request) -> Option<ProxyId> {
    request
        .headers()
        .get(PROXY_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| ProxyId::new(value).ok())
}

/// Reject requests that do not come from an appspace user
pub async fn require_appspace_user<P, U>(
    State(app): State<SantaApp<P, U>>,
    mut request: Request,
    next: Next,
) -> SantaResult<Response>
where
    P: PairingStore + 'static,
    U: UserDirectory + 'static,
{
    let proxy_id = proxy_id_from(&request).ok_or(SantaError::Unauthenticated)?;

    let users = app.santa().users().await?;
    if !users.iter().any(|u| u.proxy_id == proxy_id) {
        return Err(SantaError::Forbidden { proxy_id });
    }

    appspace_debug!(
        AppspaceId::current(),
        "{} {} by {}",
        request.method(),
        request.uri().path(),
        proxy_id
    );
    request.extensions_mut().insert(AuthenticatedUser(proxy_id));
    Ok(next.run(request).await)
}
