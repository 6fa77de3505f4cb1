//! HTTP routes for the armory backend

mod auth;
mod profile;
mod session;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_cookies::CookieManagerLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::bnet::BnetApi;
use crate::state::AppState;
use crate::store::SessionStore;

/// Create the router with all routes
pub fn create_router<S, A>(state: Arc<AppState<S, A>>) -> Router
where
    S: SessionStore + 'static,
    A: BnetApi + 'static,
{
    let static_path = state.config.static_dir.clone();

    Router::new()
        .route("/auth/login", get(auth::login))
        .route("/callback", get(auth::callback))
        .route("/auth/logout", get(auth::logout))
        .route("/api/profile", get(profile::get_profile))
        // Serve the front end (index.html, app.js, style.css)
        .fallback_service(ServeDir::new(static_path))
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
