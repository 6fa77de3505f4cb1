//! Application state

use crate::bnet::BnetApi;
use crate::config::Config;
use crate::store::SessionStore;

/// Shared application state, generic over the session store and the
/// downstream API client so tests can substitute in-memory fakes.
pub struct AppState<S, A> {
    pub config: Config,
    pub session_store: S,
    pub api: A,
}

impl<S, A> AppState<S, A>
where
    S: SessionStore,
    A: BnetApi,
{
    pub fn new(config: Config, session_store: S, api: A) -> Self {
        Self {
            config,
            session_store,
            api,
        }
    }
}
