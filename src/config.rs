//! Process configuration
//!
//! Loaded once at startup from the environment (a `.env` file is honored by
//! `main`). Everything except the client credentials has a sensible default.

use std::env;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Port to listen on
    pub port: u16,

    /// Battle.net OAuth client id
    pub client_id: String,

    /// Battle.net OAuth client secret
    pub client_secret: String,

    /// Redirect URI registered with the provider
    pub redirect_uri: String,

    /// Base URL of the OAuth endpoints (authorize, token)
    pub oauth_base: String,

    /// Base URL of the profile API
    pub api_base: String,

    /// API namespace parameter
    pub namespace: String,

    /// API locale parameter
    pub locale: String,

    /// Scopes requested at login
    pub scope: String,

    /// Directory of static front-end assets
    pub static_dir: String,
}

impl Config {
    /// Build a config from environment variables, falling back to defaults
    /// for everything except the client credentials.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            client_id: env::var("BLIZZARD_CLIENT_ID").unwrap_or(defaults.client_id),
            client_secret: env::var("BLIZZARD_CLIENT_SECRET").unwrap_or(defaults.client_secret),
            redirect_uri: env::var("REDIRECT_URI").unwrap_or(defaults.redirect_uri),
            oauth_base: env::var("BNET_OAUTH_BASE").unwrap_or(defaults.oauth_base),
            api_base: env::var("BNET_API_BASE").unwrap_or(defaults.api_base),
            namespace: env::var("BNET_NAMESPACE").unwrap_or(defaults.namespace),
            locale: env::var("BNET_LOCALE").unwrap_or(defaults.locale),
            scope: env::var("BNET_SCOPE").unwrap_or(defaults.scope),
            static_dir: env::var("STATIC_DIR").unwrap_or(defaults.static_dir),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            client_id: String::new(),
            client_secret: String::new(),
            redirect_uri: "http://localhost:3000/callback".to_string(),
            oauth_base: "https://oauth.battle.net".to_string(),
            api_base: "https://us.api.blizzard.com".to_string(),
            namespace: "profile-us".to_string(),
            locale: "en_US".to_string(),
            scope: "openid wow.profile".to_string(),
            static_dir: "public".to_string(),
        }
    }
}
