//! Session storage abstraction
//!
//! The core only ever talks to this trait; the in-memory store is the default
//! backing, but anything with per-key isolation (Redis, a database) can be
//! substituted.

pub mod memory;
pub mod models;

pub use memory::InMemorySessionStore;
pub use models::*;

use crate::error::ArmoryError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, ArmoryError>;

/// Trait for session storage
pub trait SessionStore: Send + Sync {
    /// Create a new, anonymous session
    fn create(&self) -> StoreResult<Session>;

    /// Get a session by ID
    fn get(&self, session_id: &SessionId) -> StoreResult<Option<Session>>;

    /// Set the pending OAuth state, overwriting any prior pending value
    fn set_pending_state(&self, session_id: &SessionId, state: &str) -> StoreResult<()>;

    /// Remove and return the pending OAuth state. The state is single-use:
    /// once taken it is gone, whether or not the caller's validation succeeds.
    fn take_pending_state(&self, session_id: &SessionId) -> StoreResult<Option<String>>;

    /// Bind an access token to the session
    fn set_access_token(&self, session_id: &SessionId, token: &str) -> StoreResult<()>;

    /// Destroy the entire session
    fn destroy(&self, session_id: &SessionId) -> StoreResult<()>;
}
