//! Credential check against the users resource.
//!
//! The REST service has no login endpoint. A login is a filtered
//! `GET /users?email=..&password=..`; the first match becomes the session
//! user and the token is fabricated from the user id. The token only marks
//! that a session exists; it is not a signed credential.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status, and decode failures are kept distinct in
//! [`GatewayError`] for logging. The session machine collapses all of them
//! into `AuthError::InvalidCredentials`.

#![allow(async_fn_in_trait, clippy::unused_async)]

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use crate::config::ApiConfig;
use crate::error::GatewayError;
use crate::net::types::User;
use crate::state::auth::Session;

pub const TOKEN_PREFIX: &str = "fake-token-";

/// Checks credentials and produces a session on success.
///
/// Implementations must not touch session state or storage; the caller owns
/// both.
pub trait AuthGateway {
    /// # Errors
    ///
    /// [`GatewayError::NoMatch`] when no user has these credentials, or a
    /// transport-level variant when the check could not be completed.
    async fn authenticate(&self, email: &str, password: &str) -> Result<Session, GatewayError>;
}

/// Placeholder token derived from the user id.
pub fn fabricate_token(user_id: i64) -> String {
    format!("{TOKEN_PREFIX}{user_id}")
}

/// Build a session from the credential-check result list.
///
/// # Errors
///
/// Returns [`GatewayError::NoMatch`] when `matches` is empty.
pub fn session_from_matches(matches: Vec<User>) -> Result<Session, GatewayError> {
    let user = matches.into_iter().next().ok_or(GatewayError::NoMatch)?;
    let token = fabricate_token(user.id);
    Ok(Session { user, token })
}

/// Gateway backed by the REST service's `/users` resource.
#[derive(Clone, Debug)]
pub struct HttpAuthGateway {
    config: ApiConfig,
}

impl HttpAuthGateway {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    fn users_endpoint(&self) -> String {
        self.config.endpoint("users")
    }
}

impl AuthGateway for HttpAuthGateway {
    async fn authenticate(&self, email: &str, password: &str) -> Result<Session, GatewayError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.users_endpoint())
                .query([("email", email), ("password", password)])
                .send()
                .await
                .map_err(|e| GatewayError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(GatewayError::Status(resp.status()));
            }
            let matches: Vec<User> = resp.json().await.map_err(|e| GatewayError::Decode(e.to_string()))?;
            session_from_matches(matches)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password, self.users_endpoint());
            Err(GatewayError::Transport("not available outside the browser".to_owned()))
        }
    }
}
