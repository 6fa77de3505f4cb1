//! reqwest-backed Battle.net client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::models::{
    CharacterMedia, CharacterSummary, MythicProfile, ProfileSummary, TokenResponse,
};
use super::BnetApi;
use crate::config::Config;
use crate::error::ArmoryError;

/// HTTP client for the Battle.net OAuth and profile endpoints
pub struct BnetClient {
    client: Client,
    config: Config,
}

impl BnetClient {
    /// Create a new client. Every downstream call is bounded by a 10-second
    /// timeout so one unresponsive branch cannot hang an aggregate response.
    pub fn new(config: Config) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// GET a profile-API document as JSON with bearer auth and the
    /// namespace/locale parameters every profile endpoint expects.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        token: &str,
    ) -> Result<T, ArmoryError> {
        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .query(&[
                ("namespace", self.config.namespace.as_str()),
                ("locale", self.config.locale.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ArmoryError::Upstream(format!("request to {} failed: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(ArmoryError::Upstream(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ArmoryError::Upstream(format!("invalid JSON from {}: {}", url, e)))
    }

    fn character_url(&self, realm_slug: &str, name: &str, suffix: &str) -> String {
        format!(
            "{}/profile/wow/character/{}/{}{}",
            self.config.api_base, realm_slug, name, suffix
        )
    }
}

#[async_trait]
impl BnetApi for BnetClient {
    async fn exchange_code(&self, code: &str) -> Result<TokenResponse, ArmoryError> {
        let url = format!("{}/token", self.config.oauth_base);
        let response = self
            .client
            .post(&url)
            .form(&[
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("code", code),
                ("grant_type", "authorization_code"),
                ("redirect_uri", self.config.redirect_uri.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ArmoryError::ExchangeFailed(format!("token request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ArmoryError::ExchangeFailed(format!(
                "token endpoint returned {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ArmoryError::ExchangeFailed(format!("invalid token response: {}", e)))
    }

    async fn fetch_profile(&self, token: &str) -> Result<ProfileSummary, ArmoryError> {
        let url = format!("{}/profile/user/wow", self.config.api_base);
        self.get_json(&url, token).await
    }

    async fn fetch_media(
        &self,
        token: &str,
        realm_slug: &str,
        name: &str,
    ) -> Result<CharacterMedia, ArmoryError> {
        let url = self.character_url(realm_slug, name, "/character-media");
        self.get_json(&url, token).await
    }

    async fn fetch_mythic(
        &self,
        token: &str,
        realm_slug: &str,
        name: &str,
    ) -> Result<MythicProfile, ArmoryError> {
        let url = self.character_url(realm_slug, name, "/mythic-keystone-profile");
        self.get_json(&url, token).await
    }

    async fn fetch_summary(
        &self,
        token: &str,
        realm_slug: &str,
        name: &str,
    ) -> Result<CharacterSummary, ArmoryError> {
        let url = self.character_url(realm_slug, name, "");
        self.get_json(&url, token).await
    }
}
