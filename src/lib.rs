//! Armory backend
//!
//! Authenticates users against Battle.net OAuth2 and serves an enriched
//! World of Warcraft profile: every max-level character is decorated with
//! its portrait, Mythic+ rating, class and item level, fetched concurrently
//! with per-branch fallback.

pub mod bnet;
pub mod config;
pub mod enrich;
pub mod error;
pub mod routes;
pub mod state;
pub mod store;

pub use bnet::{BnetApi, BnetClient};
pub use config::Config;
pub use error::ArmoryError;
pub use state::AppState;
pub use store::{InMemorySessionStore, SessionStore};
