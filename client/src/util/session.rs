//! Persisted sign-in marker.
//!
//! After a successful code check the page stores `{phone, timestamp}` under
//! [`AUTH_KEY`]. A marker younger than [`SESSION_TTL_MS`] is what "signed in"
//! means for the header. Expired or unreadable markers are deleted on load.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use basket::{KeyValueStore, StoreError};
use serde::{Deserialize, Serialize};

use crate::util::storage::save_json;

/// Storage key for the sign-in marker.
pub const AUTH_KEY: &str = "wbAuth";

/// Sessions last seven days.
pub const SESSION_TTL_MS: u64 = 7 * 24 * 60 * 60 * 1000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    /// Phone as the user typed it.
    pub phone: String,
    /// Sign-in time, milliseconds since the Unix epoch.
    pub timestamp: u64,
}

impl AuthSession {
    pub fn is_fresh(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.timestamp) < SESSION_TTL_MS
    }
}

/// The stored session if it is still valid at `now_ms`.
pub fn load_session(store: &impl KeyValueStore, now_ms: u64) -> Option<AuthSession> {
    let raw = match store.get_item(AUTH_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("sign-in marker unreadable: {e}");
            return None;
        }
    };
    match serde_json::from_str::<AuthSession>(&raw) {
        Ok(session) if session.is_fresh(now_ms) => return Some(session),
        Ok(_) => log::info!("sign-in marker expired"),
        Err(e) => log::warn!("sign-in marker malformed: {e}"),
    }
    if let Err(e) = forget_session(store) {
        log::warn!("stale sign-in marker not removed: {e}");
    }
    None
}

/// # Errors
///
/// Returns [`StoreError`] if the store rejects the write.
pub fn save_session(store: &impl KeyValueStore, session: &AuthSession) -> Result<(), StoreError> {
    save_json(store, AUTH_KEY, session)
}

/// Sign out: drop the marker.
///
/// # Errors
///
/// Returns [`StoreError`] if the store rejects the removal.
pub fn forget_session(store: &impl KeyValueStore) -> Result<(), StoreError> {
    store.remove_item(AUTH_KEY)
}
