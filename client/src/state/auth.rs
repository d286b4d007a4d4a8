//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard and identity-aware pages; mutated only through
//! [`SessionState::transition`], which `SessionMachine` drives.
//!
//! DESIGN
//! ======
//! The state is a closed set of variants. A user without a token (or a token
//! without a user) has no representation, so the pair is always present or
//! absent together.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::net::types::User;

/// Authenticated identity plus its opaque credential. This is also the shape
/// of the persisted `auth` record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub token: String,
}

/// Where the session lifecycle currently stands.
///
/// ```text
///   Anonymous ──LoginStarted──→ Authenticating ──LoginSucceeded──→ Authenticated
///       ↑  │                          │                                 │
///       │  └──────Restored────────────┼────────────────────────────────→│
///       ├────────LoginFailed──────────┘                                 │
///       └────────────────────────LoggedOut──────────────────────────────┘
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Anonymous,
    /// A credential check is in flight.
    Authenticating,
    Authenticated(Session),
}

/// Inputs that drive a [`SessionState`] transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    Restored(Session),
    LoginStarted,
    LoginSucceeded(Session),
    LoginFailed,
    LoggedOut,
}

impl SessionState {
    /// Next state after `event`. Events that do not apply to the current
    /// variant leave it unchanged; `LoggedOut` applies everywhere.
    #[must_use]
    pub fn transition(self, event: AuthEvent) -> Self {
        match (self, event) {
            (_, AuthEvent::LoggedOut) => Self::Anonymous,
            (Self::Anonymous, AuthEvent::Restored(session))
            | (Self::Authenticating, AuthEvent::LoginSucceeded(session)) => Self::Authenticated(session),
            (Self::Anonymous, AuthEvent::LoginStarted) => Self::Authenticating,
            (Self::Authenticating, AuthEvent::LoginFailed) => Self::Anonymous,
            (state, _) => state,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            Self::Anonymous | Self::Authenticating => None,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.session().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session().map(|s| s.token.as_str())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Authenticating)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Flattened copy for views and the route guard.
    pub fn snapshot(&self) -> AuthState {
        AuthState {
            user: self.user().cloned(),
            token: self.token().map(str::to_owned),
            loading: self.is_loading(),
        }
    }
}

/// Read-only snapshot of the session handed to pages and the route guard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}
