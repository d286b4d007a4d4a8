//! Error types for the session core and the REST layer.
//!
//! ERROR HANDLING
//! ==============
//! The session machine only ever reports [`AuthError`] to its callers. The
//! richer [`GatewayError`] and [`StoreError`] causes are logged where they
//! occur and then collapsed, so pages never branch on transport details.

/// Failure reported by a `login()` call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No user matched, or the credential check could not be completed.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The attempt resolved after the machine had already left
    /// `Authenticating` (logout mid-flight, or another attempt won).
    #[error("login attempt superseded")]
    Superseded,
}

/// Why the auth gateway could not produce a session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("no user matches the given credentials")]
    NoMatch,

    #[error("credential check failed: {0}")]
    Transport(String),

    #[error("credential check returned status {0}")]
    Status(u16),

    #[error("credential check returned an unreadable body: {0}")]
    Decode(String),
}

/// Every gateway failure looks the same to the session machine.
impl From<GatewayError> for AuthError {
    fn from(_: GatewayError) -> Self {
        AuthError::InvalidCredentials
    }
}

/// Session persistence failures.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("browser storage is unavailable")]
    Unavailable,

    #[error("failed to write storage key `{key}`")]
    Write { key: String },

    #[error("failed to encode session: {0}")]
    Encode(String),

    /// Stored content could not be decoded into a session.
    #[error("stored session is malformed: {0}")]
    Malformed(String),
}

/// Failure of a tutor/animal REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("request failed with status {0}")]
    Status(u16),

    #[error("unreadable response body: {0}")]
    Decode(String),

    #[error("not available outside the browser")]
    Unavailable,
}
