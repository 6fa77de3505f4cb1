//! Battle.net API surface
//!
//! `BnetApi` is the seam between the core and the provider: handlers and the
//! enrichment aggregator only ever call the trait, so tests can substitute a
//! scripted fake for the reqwest-backed `BnetClient`.

pub mod http;
pub mod models;

pub use http::BnetClient;
pub use models::*;

use async_trait::async_trait;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::RngCore;

use crate::config::Config;
use crate::error::ArmoryError;

/// Downstream API operations consumed by the core
#[async_trait]
pub trait BnetApi: Send + Sync {
    /// Exchange an authorization code for an access token
    async fn exchange_code(&self, code: &str) -> Result<TokenResponse, ArmoryError>;

    /// Fetch the base account profile with the bearer token
    async fn fetch_profile(&self, token: &str) -> Result<ProfileSummary, ArmoryError>;

    /// Fetch the character media document. `name` is the slug-normalized,
    /// URL-encoded character name.
    async fn fetch_media(
        &self,
        token: &str,
        realm_slug: &str,
        name: &str,
    ) -> Result<CharacterMedia, ArmoryError>;

    /// Fetch the Mythic+ keystone profile
    async fn fetch_mythic(
        &self,
        token: &str,
        realm_slug: &str,
        name: &str,
    ) -> Result<MythicProfile, ArmoryError>;

    /// Fetch the character summary (class, item level)
    async fn fetch_summary(
        &self,
        token: &str,
        realm_slug: &str,
        name: &str,
    ) -> Result<CharacterSummary, ArmoryError>;
}

/// Generate a random state token for CSRF protection (16 bytes of entropy,
/// URL-safe base64 without padding).
pub fn generate_state() -> String {
    let mut state_bytes = [0u8; 16];
    rand::rng().fill_bytes(&mut state_bytes);
    URL_SAFE_NO_PAD.encode(state_bytes)
}

/// Build the provider authorization URL for the login redirect
pub fn authorize_url(config: &Config, state: &str) -> String {
    let params = [
        ("client_id", config.client_id.as_str()),
        ("redirect_uri", config.redirect_uri.as_str()),
        ("response_type", "code"),
        ("scope", config.scope.as_str()),
        ("state", state),
    ];

    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}/authorize?{}", config.oauth_base, query)
}
