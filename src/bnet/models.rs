//! Wire types for the Battle.net OAuth and profile APIs
//!
//! Only the fields the backend actually reads are modeled; everything else
//! the provider returns is ignored on deserialization.

use serde::{Deserialize, Serialize};

/// Result of the authorization-code exchange. Only the bearer token is
/// retained; expiry is not tracked (stale tokens surface as upstream
/// failures on the next profile fetch).
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: u64,
}

/// Base account profile: the root aggregate returned by `/profile/user/wow`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileSummary {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub wow_accounts: Vec<ProfileAccount>,
}

/// One game account under the identity
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileAccount {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub characters: Vec<ProfileCharacter>,
}

/// One playable character as reported by the base profile fetch
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileCharacter {
    pub name: String,
    #[serde(default)]
    pub id: Option<u64>,
    pub level: u32,
    pub realm: Realm,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Realm {
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Character media document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CharacterMedia {
    #[serde(default)]
    pub assets: Vec<MediaAsset>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaAsset {
    pub key: String,
    pub value: String,
}

/// Mythic+ keystone profile document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MythicProfile {
    #[serde(default)]
    pub current_mythic_rating: Option<MythicRating>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MythicRating {
    pub rating: f64,
}

/// Character summary document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CharacterSummary {
    #[serde(default)]
    pub character_class: Option<ClassRef>,
    #[serde(default)]
    pub equipped_item_level: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassRef {
    pub name: String,
}
