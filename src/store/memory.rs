//! In-memory session store

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use super::{Session, SessionId, SessionStore, StoreResult};
use crate::error::ArmoryError;

/// In-memory session store
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    fn with_session<T>(
        &self,
        session_id: &SessionId,
        f: impl FnOnce(&mut Session) -> T,
    ) -> StoreResult<T> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| ArmoryError::Internal("session store lock poisoned".to_string()))?;
        match sessions.get_mut(session_id) {
            Some(session) => Ok(f(session)),
            None => Err(ArmoryError::Internal("unknown session".to_string())),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for InMemorySessionStore {
    fn create(&self) -> StoreResult<Session> {
        let session = Session {
            id: SessionId(Uuid::new_v4().to_string()),
            oauth_state: None,
            access_token: None,
            created_at: Utc::now(),
        };
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| ArmoryError::Internal("session store lock poisoned".to_string()))?;
        sessions.insert(session.id.clone(), session.clone());
        Ok(session)
    }

    fn get(&self, session_id: &SessionId) -> StoreResult<Option<Session>> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| ArmoryError::Internal("session store lock poisoned".to_string()))?;
        Ok(sessions.get(session_id).cloned())
    }

    fn set_pending_state(&self, session_id: &SessionId, state: &str) -> StoreResult<()> {
        self.with_session(session_id, |session| {
            session.oauth_state = Some(state.to_string());
        })
    }

    fn take_pending_state(&self, session_id: &SessionId) -> StoreResult<Option<String>> {
        self.with_session(session_id, |session| session.oauth_state.take())
    }

    fn set_access_token(&self, session_id: &SessionId, token: &str) -> StoreResult<()> {
        self.with_session(session_id, |session| {
            session.access_token = Some(token.to_string());
        })
    }

    fn destroy(&self, session_id: &SessionId) -> StoreResult<()> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| ArmoryError::Internal("session store lock poisoned".to_string()))?;
        sessions.remove(session_id);
        Ok(())
    }
}
