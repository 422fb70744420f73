//! Page handlers for `/` and `/generate-pairings`

use axum::extract::State;
use axum::response::Html;
use axum::Extension;

use crate::app_impl::SantaApp;
use crate::core::too_few;
use crate::error::{SantaError, SantaResult};
use crate::traits::{PairingStore, UserDirectory};
use crate::web::AuthenticatedUser;

/// Show the visitor's pairing once generated, otherwise the generate form
pub async fn home<P, U>(
    State(app): State<SantaApp<P, U>>,
    user: Option<Extension<AuthenticatedUser>>,
) -> SantaResult<Html<String>>
where
    P: PairingStore + 'static,
    U: UserDirectory + 'static,
{
    let Some(Extension(AuthenticatedUser(proxy_id))) = user else {
        return Err(SantaError::Unauthenticated);
    };

    let html = if app.santa().is_generated().await? {
        let (user, pairee) = app.santa().pairing_for(&proxy_id).await?;
        app.templates().your_pairing(&user, &pairee)?
    } else {
        let users = app.santa().users().await?;
        app.templates().generate_form(&users, too_few(users.len()))?
    };

    Ok(Html(html))
}

/// Generate the list if possible and answer with a message fragment
pub async fn generate_pairings<P, U>(State(app): State<SantaApp<P, U>>) -> SantaResult<Html<String>>
where
    P: PairingStore + 'static,
    U: UserDirectory + 'static,
{
    let outcome = app.santa().generate().await?;
    Ok(Html(app.templates().generate_message(outcome.message())?))
}
