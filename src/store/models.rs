//! Data models for session storage

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique session identifier, presented to the browser as an opaque cookie
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// Server-side state bound to one browser
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    /// Pending CSRF state for an in-flight login attempt; single-use
    pub oauth_state: Option<String>,
    /// Bearer token bound at callback completion
    pub access_token: Option<String>,
    pub created_at: DateTime<Utc>,
}
