//! Enriched profile endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use tower_cookies::Cookies;

use super::session::get_session_from_cookies;
use crate::bnet::BnetApi;
use crate::enrich::{enrich_profile, EnrichedProfile};
use crate::error::ArmoryError;
use crate::state::AppState;
use crate::store::SessionStore;

/// GET /api/profile
///
/// The session's bound access token is the sole authorization gate. The
/// base profile fetch has no fallback; per-character enrichment branches
/// fail to defaults inside the aggregator.
pub async fn get_profile<S, A>(
    State(state): State<Arc<AppState<S, A>>>,
    cookies: Cookies,
) -> Result<Json<EnrichedProfile>, ArmoryError>
where
    S: SessionStore,
    A: BnetApi,
{
    let token = get_session_from_cookies(&cookies, &state.session_store)
        .and_then(|session| session.access_token)
        .ok_or(ArmoryError::NotAuthenticated)?;

    let profile = state.api.fetch_profile(&token).await?;
    let enriched = enrich_profile(&state.api, &token, profile).await;

    Ok(Json(enriched))
}
