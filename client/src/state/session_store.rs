//! Durable session record.
//!
//! Two entries are kept: `auth` holds the JSON `{user, token}` record and
//! `token` holds a bare copy of the token. They are written and removed
//! together, but there is no transaction across them; a crash between the two
//! writes leaves `token` stale, which is harmless because only `auth` is read
//! back.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use crate::error::StoreError;
use crate::state::auth::Session;
use crate::util::storage::StorageBackend;

/// Storage key of the structured session record.
pub const AUTH_KEY: &str = "auth";
/// Storage key of the bare token copy.
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Default)]
pub struct SessionStore<B> {
    backend: B,
}

impl<B: StorageBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Read the persisted session. Anything that does not decode into a
    /// complete session is logged and reported as absent.
    pub fn read(&self) -> Option<Session> {
        let raw = self.backend.get_item(AUTH_KEY)?;
        match decode_session(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                leptos::logging::warn!("ignoring stored session: {e}");
                None
            }
        }
    }

    /// Persist `session` under both keys.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or the backend rejects either write.
    pub fn write(&self, session: &Session) -> Result<(), StoreError> {
        let encoded = encode_session(session)?;
        self.backend.set_item(AUTH_KEY, &encoded)?;
        self.backend.set_item(TOKEN_KEY, &session.token)
    }

    /// Remove both entries. Missing entries are not an error.
    pub fn clear(&self) {
        self.backend.remove_item(AUTH_KEY);
        self.backend.remove_item(TOKEN_KEY);
    }
}

/// Encode a session into the `auth` record format.
///
/// # Errors
///
/// Returns [`StoreError::Encode`] if serialization fails.
pub fn encode_session(session: &Session) -> Result<String, StoreError> {
    serde_json::to_string(session).map_err(|e| StoreError::Encode(e.to_string()))
}

/// Decode an `auth` record.
///
/// # Errors
///
/// Returns [`StoreError::Malformed`] for invalid JSON, a record missing the
/// user or token, or an empty token.
pub fn decode_session(raw: &str) -> Result<Session, StoreError> {
    let session: Session = serde_json::from_str(raw).map_err(|e| StoreError::Malformed(e.to_string()))?;
    if session.token.trim().is_empty() {
        return Err(StoreError::Malformed("empty token".to_owned()));
    }
    Ok(session)
}
