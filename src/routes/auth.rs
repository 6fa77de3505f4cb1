//! OAuth2 authorization-code flow endpoints

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tower_cookies::Cookies;

use super::session::{clear_session_cookie, get_or_create_session, get_session_from_cookies};
use crate::bnet::{self, BnetApi};
use crate::error::ArmoryError;
use crate::state::AppState;
use crate::store::SessionStore;

/// 302 redirect, matching the provider-facing flow the front end expects
fn redirect_found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// GET /auth/login
///
/// Issues a fresh CSRF state token, stores it as the session's single
/// pending value (invalidating any in-flight prior attempt) and redirects
/// to the provider's authorization endpoint.
pub async fn login<S, A>(
    State(state): State<Arc<AppState<S, A>>>,
    cookies: Cookies,
) -> Result<Response, ArmoryError>
where
    S: SessionStore,
    A: BnetApi,
{
    let session = get_or_create_session(&cookies, &state.session_store)?;

    let state_token = bnet::generate_state();
    state
        .session_store
        .set_pending_state(&session.id, &state_token)?;

    let url = bnet::authorize_url(&state.config, &state_token);
    Ok(redirect_found(&url))
}

#[derive(Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
}

/// GET /callback
///
/// Validates the echoed state against the session's pending value, then
/// exchanges the authorization code for an access token. The pending state
/// is consumed before validation so a captured callback cannot be replayed,
/// success or failure.
pub async fn callback<S, A>(
    State(state): State<Arc<AppState<S, A>>>,
    Query(params): Query<CallbackParams>,
    cookies: Cookies,
) -> Result<Response, ArmoryError>
where
    S: SessionStore,
    A: BnetApi,
{
    let session = get_session_from_cookies(&cookies, &state.session_store)
        .ok_or(ArmoryError::InvalidState)?;

    // Consumed unconditionally: one callback per login attempt
    let pending = state.session_store.take_pending_state(&session.id)?;

    let (code, echoed_state) = match (params.code, params.state) {
        (Some(code), Some(echoed)) => (code, echoed),
        _ => return Err(ArmoryError::InvalidState),
    };

    match pending {
        Some(pending) if pending == echoed_state => {}
        _ => return Err(ArmoryError::InvalidState),
    }

    let tokens = state.api.exchange_code(&code).await?;
    state
        .session_store
        .set_access_token(&session.id, &tokens.access_token)?;

    Ok(redirect_found("/#login"))
}

/// GET /auth/logout
///
/// Destroys the whole session server-side and returns to the anonymous
/// landing view.
pub async fn logout<S, A>(
    State(state): State<Arc<AppState<S, A>>>,
    cookies: Cookies,
) -> Result<Response, ArmoryError>
where
    S: SessionStore,
    A: BnetApi,
{
    if let Some(session) = get_session_from_cookies(&cookies, &state.session_store) {
        let _ = state.session_store.destroy(&session.id);
    }
    clear_session_cookie(&cookies);

    Ok(redirect_found("/"))
}
