//! Common test utilities for armory integration tests

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use axum_test::TestServer;

use armory::bnet::{
    BnetApi, CharacterMedia, CharacterSummary, ClassRef, MediaAsset, MythicProfile, MythicRating,
    ProfileAccount, ProfileCharacter, ProfileSummary, Realm, TokenResponse,
};
use armory::{routes, AppState, ArmoryError, Config, InMemorySessionStore};

pub const MOCK_TOKEN: &str = "mock-access-token";

#[derive(Default)]
struct MockInner {
    fail_exchange: AtomicBool,
    exchange_calls: AtomicUsize,
    profile_calls: AtomicUsize,
    media_calls: AtomicUsize,
    mythic_calls: AtomicUsize,
    summary_calls: AtomicUsize,
    /// None simulates a base-fetch failure
    profile: RwLock<Option<ProfileSummary>>,
    /// Keyed by normalized (lowercase, URL-encoded) character name
    media: RwLock<HashMap<String, Vec<MediaAsset>>>,
    ratings: RwLock<HashMap<String, f64>>,
    summaries: RwLock<HashMap<String, (Option<String>, Option<u32>)>>,
    fail_media: RwLock<HashSet<String>>,
    fail_mythic: RwLock<HashSet<String>>,
    fail_summary: RwLock<HashSet<String>>,
}

/// Scripted stand-in for the Battle.net API. Records every call so tests
/// can assert which downstream requests were (not) made.
#[derive(Clone)]
pub struct MockBnetApi {
    inner: Arc<MockInner>,
}

impl MockBnetApi {
    pub fn new() -> Self {
        let inner = MockInner {
            profile: RwLock::new(Some(ProfileSummary::default())),
            ..MockInner::default()
        };
        Self {
            inner: Arc::new(inner),
        }
    }

    pub fn set_profile(&self, profile: ProfileSummary) {
        *self.inner.profile.write().unwrap() = Some(profile);
    }

    pub fn fail_profile(&self) {
        *self.inner.profile.write().unwrap() = None;
    }

    pub fn fail_exchange(&self) {
        self.inner.fail_exchange.store(true, Ordering::SeqCst);
    }

    pub fn set_media(&self, name: &str, assets: &[(&str, &str)]) {
        let assets = assets
            .iter()
            .map(|(key, value)| MediaAsset {
                key: key.to_string(),
                value: value.to_string(),
            })
            .collect();
        self.inner
            .media
            .write()
            .unwrap()
            .insert(name.to_string(), assets);
    }

    pub fn set_rating(&self, name: &str, rating: f64) {
        self.inner
            .ratings
            .write()
            .unwrap()
            .insert(name.to_string(), rating);
    }

    pub fn set_summary(&self, name: &str, class: Option<&str>, item_level: Option<u32>) {
        self.inner
            .summaries
            .write()
            .unwrap()
            .insert(name.to_string(), (class.map(String::from), item_level));
    }

    pub fn fail_media_for(&self, name: &str) {
        self.inner.fail_media.write().unwrap().insert(name.to_string());
    }

    pub fn fail_mythic_for(&self, name: &str) {
        self.inner.fail_mythic.write().unwrap().insert(name.to_string());
    }

    pub fn fail_summary_for(&self, name: &str) {
        self.inner.fail_summary.write().unwrap().insert(name.to_string());
    }

    pub fn exchange_calls(&self) -> usize {
        self.inner.exchange_calls.load(Ordering::SeqCst)
    }

    pub fn profile_calls(&self) -> usize {
        self.inner.profile_calls.load(Ordering::SeqCst)
    }

    pub fn character_calls(&self) -> usize {
        self.inner.media_calls.load(Ordering::SeqCst)
            + self.inner.mythic_calls.load(Ordering::SeqCst)
            + self.inner.summary_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BnetApi for MockBnetApi {
    async fn exchange_code(&self, _code: &str) -> Result<TokenResponse, ArmoryError> {
        self.inner.exchange_calls.fetch_add(1, Ordering::SeqCst);
        if self.inner.fail_exchange.load(Ordering::SeqCst) {
            return Err(ArmoryError::ExchangeFailed(
                "simulated token endpoint failure".to_string(),
            ));
        }
        Ok(TokenResponse {
            access_token: MOCK_TOKEN.to_string(),
            token_type: "bearer".to_string(),
            expires_in: 86400,
        })
    }

    async fn fetch_profile(&self, token: &str) -> Result<ProfileSummary, ArmoryError> {
        self.inner.profile_calls.fetch_add(1, Ordering::SeqCst);
        if token != MOCK_TOKEN {
            return Err(ArmoryError::Upstream("invalid bearer token".to_string()));
        }
        self.inner
            .profile
            .read()
            .unwrap()
            .clone()
            .ok_or_else(|| ArmoryError::Upstream("simulated profile failure".to_string()))
    }

    async fn fetch_media(
        &self,
        _token: &str,
        _realm_slug: &str,
        name: &str,
    ) -> Result<CharacterMedia, ArmoryError> {
        self.inner.media_calls.fetch_add(1, Ordering::SeqCst);
        if self.inner.fail_media.read().unwrap().contains(name) {
            return Err(ArmoryError::Upstream("simulated media failure".to_string()));
        }
        let assets = self
            .inner
            .media
            .read()
            .unwrap()
            .get(name)
            .cloned()
            .unwrap_or_default();
        Ok(CharacterMedia { assets })
    }

    async fn fetch_mythic(
        &self,
        _token: &str,
        _realm_slug: &str,
        name: &str,
    ) -> Result<MythicProfile, ArmoryError> {
        self.inner.mythic_calls.fetch_add(1, Ordering::SeqCst);
        if self.inner.fail_mythic.read().unwrap().contains(name) {
            return Err(ArmoryError::Upstream("simulated mythic+ failure".to_string()));
        }
        let current_mythic_rating = self
            .inner
            .ratings
            .read()
            .unwrap()
            .get(name)
            .map(|rating| MythicRating { rating: *rating });
        Ok(MythicProfile {
            current_mythic_rating,
        })
    }

    async fn fetch_summary(
        &self,
        _token: &str,
        _realm_slug: &str,
        name: &str,
    ) -> Result<CharacterSummary, ArmoryError> {
        self.inner.summary_calls.fetch_add(1, Ordering::SeqCst);
        if self.inner.fail_summary.read().unwrap().contains(name) {
            return Err(ArmoryError::Upstream(
                "simulated summary failure".to_string(),
            ));
        }
        let (class, item_level) = self
            .inner
            .summaries
            .read()
            .unwrap()
            .get(name)
            .cloned()
            .unwrap_or((None, None));
        Ok(CharacterSummary {
            character_class: class.map(|name| ClassRef { name }),
            equipped_item_level: item_level,
        })
    }
}

/// Create a test server backed by the mock API and an in-memory store
pub fn create_test_server() -> (TestServer, MockBnetApi) {
    let api = MockBnetApi::new();

    let state = Arc::new(AppState::new(
        Config::default(),
        InMemorySessionStore::new(),
        api.clone(),
    ));

    let app = routes::create_router(state);
    let server = TestServer::new(app).expect("Failed to create test server");

    (server, api)
}

/// Build a character at the given level
pub fn character(name: &str, realm_slug: &str, level: u32) -> ProfileCharacter {
    ProfileCharacter {
        name: name.to_string(),
        id: None,
        level,
        realm: Realm {
            slug: realm_slug.to_string(),
            name: None,
        },
    }
}

/// Build a single-account profile from a character list
pub fn profile_with(characters: Vec<ProfileCharacter>) -> ProfileSummary {
    ProfileSummary {
        id: Some(12345),
        wow_accounts: vec![ProfileAccount {
            id: Some(1),
            characters,
        }],
    }
}

/// Extract a raw query parameter value from a URL
pub fn query_param(url: &str, key: &str) -> Option<String> {
    let query = url.split('?').nth(1)?;
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix(&format!("{}=", key)))
        .map(|value| value.to_string())
}

/// Run the login redirect plus a valid callback; returns the session cookie
pub async fn login(server: &TestServer) -> String {
    let response = server.get("/auth/login").await;
    assert_eq!(response.status_code(), 302);

    let session_cookie = response
        .maybe_cookie("armory_session")
        .expect("No session cookie")
        .value()
        .to_string();

    let location = response
        .header("location")
        .to_str()
        .expect("Invalid location header")
        .to_string();
    let state = query_param(&location, "state").expect("No state in authorize URL");

    let response = server
        .get("/callback")
        .add_query_param("code", "auth-code")
        .add_query_param("state", state)
        .add_cookie(cookie::Cookie::new("armory_session", session_cookie.clone()))
        .await;
    assert_eq!(response.status_code(), 302);

    session_cookie
}
