//! Profile enrichment aggregator
//!
//! Given a base profile and a bearer token, decorates every max-level
//! character with its portrait, Mythic+ rating, class and item level. The
//! three per-character fetches run concurrently and are fault-isolated: a
//! failed branch is logged and replaced with its documented default, never
//! propagated. The caller cannot tell "provider had no data" from "provider
//! call failed" — both yield the same sentinel.

use futures::future;
use futures::stream::{self, StreamExt};
use serde::{Serialize, Serializer};

use crate::bnet::{BnetApi, MediaAsset, ProfileAccount, ProfileCharacter, ProfileSummary, Realm};

/// Only characters at this level are enriched; everyone else is dropped
/// from the response.
pub const MAX_LEVEL: u32 = 80;

/// Cap on simultaneous per-character enrichments within one account, so a
/// roster full of max-level characters cannot exhaust downstream connections.
const ENRICH_CONCURRENCY: usize = 8;

/// Sentinel for a rating or item level that could not be determined
const UNAVAILABLE: &str = "N/A";

/// Class name used when the summary fetch yields none
const UNKNOWN_CLASS: &str = "Unknown";

/// Display color for classes not in the table
const DEFAULT_CLASS_COLOR: &str = "#FFFFFF";

/// Static mapping from class name to its representative display color
const CLASS_COLORS: &[(&str, &str)] = &[
    ("Warrior", "#C79C6E"),
    ("Paladin", "#F58CBA"),
    ("Hunter", "#ABD473"),
    ("Rogue", "#FFF569"),
    ("Priest", "#FFFFFF"),
    ("Death Knight", "#C41F3B"),
    ("Shaman", "#0070DE"),
    ("Mage", "#69CCF0"),
    ("Warlock", "#9482C9"),
    ("Monk", "#00FF96"),
    ("Druid", "#FF7D0A"),
    ("Demon Hunter", "#A330C9"),
];

/// Look up the display color for a class name
pub fn class_color(class: &str) -> &'static str {
    CLASS_COLORS
        .iter()
        .find(|(name, _)| *name == class)
        .map_or(DEFAULT_CLASS_COLOR, |(_, color)| color)
}

/// A value that may be unavailable, serialized as the raw value or as the
/// `"N/A"` sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stat<T> {
    Known(T),
    Unavailable,
}

impl<T: Serialize> Serialize for Stat<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Stat::Known(value) => value.serialize(serializer),
            Stat::Unavailable => serializer.serialize_str(UNAVAILABLE),
        }
    }
}

/// Fully enriched profile, mirroring the base profile's account ordering
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub wow_accounts: Vec<EnrichedAccount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnrichedAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub characters: Vec<EnrichedCharacter>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PortraitMedia {
    pub avatar_url: String,
}

/// A character with all four enrichment fields populated. Defaults stand in
/// for failed or empty branches; no field is ever left unset.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedCharacter {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub level: u32,
    pub realm: Realm,
    pub media: PortraitMedia,
    pub mythic_plus_score: Stat<f64>,
    #[serde(rename = "class")]
    pub class_name: String,
    #[serde(rename = "itemLevel")]
    pub item_level: Stat<u32>,
    #[serde(rename = "classColor")]
    pub class_color: String,
}

/// Select the avatar asset by key priority: `avatar`, else `render`, else
/// `main`, else the first asset; empty string with no assets at all.
pub fn pick_avatar(assets: &[MediaAsset]) -> String {
    for key in ["avatar", "render", "main"] {
        if let Some(asset) = assets.iter().find(|a| a.key == key) {
            return asset.value.clone();
        }
    }
    assets.first().map(|a| a.value.clone()).unwrap_or_default()
}

/// Enrich every account of the base profile. Accounts fan out in parallel
/// and the result preserves the ordering the provider supplied.
pub async fn enrich_profile<A: BnetApi>(
    api: &A,
    token: &str,
    profile: ProfileSummary,
) -> EnrichedProfile {
    let wow_accounts = future::join_all(
        profile
            .wow_accounts
            .into_iter()
            .map(|account| enrich_account(api, token, account)),
    )
    .await;

    EnrichedProfile {
        id: profile.id,
        wow_accounts,
    }
}

/// Filter an account to its max-level characters and enrich each one.
/// Accounts with no qualifying characters come back with an empty list.
async fn enrich_account<A: BnetApi>(
    api: &A,
    token: &str,
    account: ProfileAccount,
) -> EnrichedAccount {
    let qualifying = account
        .characters
        .into_iter()
        .filter(|character| character.level == MAX_LEVEL);

    // `buffered` bounds the fan-out width while keeping base-profile order
    let characters = stream::iter(qualifying)
        .map(|character| enrich_character(api, token, character))
        .buffered(ENRICH_CONCURRENCY)
        .collect::<Vec<_>>()
        .await;

    EnrichedAccount {
        id: account.id,
        characters,
    }
}

/// Run the three enrichment branches for one character concurrently and
/// join on all of them. Each branch absorbs its own failure.
async fn enrich_character<A: BnetApi>(
    api: &A,
    token: &str,
    character: ProfileCharacter,
) -> EnrichedCharacter {
    let realm_slug = character.realm.slug.clone();
    let name_key = urlencoding::encode(&character.name.to_lowercase()).into_owned();

    let media_branch = async {
        match api.fetch_media(token, &realm_slug, &name_key).await {
            Ok(media) => pick_avatar(&media.assets),
            Err(e) => {
                tracing::warn!(character = %character.name, error = %e, "media fetch failed");
                String::new()
            }
        }
    };

    let mythic_branch = async {
        match api.fetch_mythic(token, &realm_slug, &name_key).await {
            Ok(mythic) => mythic
                .current_mythic_rating
                .map_or(Stat::Unavailable, |r| Stat::Known(r.rating)),
            Err(e) => {
                tracing::warn!(character = %character.name, error = %e, "mythic+ fetch failed");
                Stat::Unavailable
            }
        }
    };

    let summary_branch = async {
        match api.fetch_summary(token, &realm_slug, &name_key).await {
            Ok(summary) => (
                summary
                    .character_class
                    .map_or_else(|| UNKNOWN_CLASS.to_string(), |c| c.name),
                summary
                    .equipped_item_level
                    .map_or(Stat::Unavailable, Stat::Known),
            ),
            Err(e) => {
                tracing::warn!(character = %character.name, error = %e, "summary fetch failed");
                (UNKNOWN_CLASS.to_string(), Stat::Unavailable)
            }
        }
    };

    let (avatar_url, mythic_plus_score, (class_name, item_level)) =
        tokio::join!(media_branch, mythic_branch, summary_branch);

    let class_color = class_color(&class_name).to_string();

    EnrichedCharacter {
        name: character.name,
        id: character.id,
        level: character.level,
        realm: character.realm,
        media: PortraitMedia { avatar_url },
        mythic_plus_score,
        class_name,
        item_level,
        class_color,
    }
}
