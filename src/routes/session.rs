//! Session cookie helpers

use tower_cookies::{Cookie, Cookies};

use crate::store::{Session, SessionId, SessionStore, StoreResult};

const SESSION_COOKIE: &str = "armory_session";

/// Helper to get the current session from cookies
pub fn get_session_from_cookies<S: SessionStore>(
    cookies: &Cookies,
    session_store: &S,
) -> Option<Session> {
    cookies.get(SESSION_COOKIE).and_then(|c| {
        let session_id = SessionId(c.value().to_string());
        session_store.get(&session_id).ok().flatten()
    })
}

/// Get the caller's session, creating one (and setting the cookie) if the
/// browser does not present a valid session id yet.
pub fn get_or_create_session<S: SessionStore>(
    cookies: &Cookies,
    session_store: &S,
) -> StoreResult<Session> {
    if let Some(session) = get_session_from_cookies(cookies, session_store) {
        return Ok(session);
    }
    let session = session_store.create()?;
    set_session_cookie(cookies, &session.id.0);
    Ok(session)
}

/// Helper to set the session cookie
pub fn set_session_cookie(cookies: &Cookies, session_id: &str) {
    let cookie = Cookie::build((SESSION_COOKIE, session_id.to_string()))
        .path("/")
        .http_only(true)
        .build();
    cookies.add(cookie);
}

/// Helper to clear the session cookie
pub fn clear_session_cookie(cookies: &Cookies) {
    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .max_age(tower_cookies::cookie::time::Duration::ZERO)
        .build();
    cookies.add(cookie);
}
