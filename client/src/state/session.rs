//! Session state machine: the single owner of the current session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Built once at startup (`startup` runs `restore`), then injected into the
//! component tree as context. Login/logout actions call into it; the route
//! guard and pages only ever read [`SessionMachine::snapshot`].
//!
//! DESIGN
//! ======
//! `login` is split into `begin_login` and `complete_login` so a UI can
//! commit the `Authenticating` transition synchronously, release its borrow
//! of the machine across the gateway await, and apply the outcome afterwards.
//! The composed `login` does the same for callers that can hold `&mut self`.
//!
//! Overlapping attempts: the first outcome to arrive while `Authenticating`
//! resolves the state. Later outcomes (or an outcome that lands after a
//! logout) leave state alone and fail with `AuthError::Superseded`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::logging::{log, warn};

use crate::error::{AuthError, GatewayError};
use crate::net::gateway::AuthGateway;
use crate::state::auth::{AuthEvent, AuthState, Session, SessionState};
use crate::state::session_store::SessionStore;
use crate::util::storage::{LocalStorage, StorageBackend};

/// The machine the browser app runs with.
pub type AppSession = SessionMachine<LocalStorage>;

#[derive(Debug)]
pub struct SessionMachine<B> {
    state: SessionState,
    store: SessionStore<B>,
    restored: bool,
}

impl<B: StorageBackend> SessionMachine<B> {
    /// An anonymous machine that has not yet looked at storage.
    pub fn new(store: SessionStore<B>) -> Self {
        Self { state: SessionState::Anonymous, store, restored: false }
    }

    /// Build a machine over `backend` and run the one-time restore.
    pub fn startup(backend: B) -> Self {
        let mut machine = Self::new(SessionStore::new(backend));
        machine.restore();
        machine
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn snapshot(&self) -> AuthState {
        self.state.snapshot()
    }

    pub fn store(&self) -> &SessionStore<B> {
        &self.store
    }

    /// Rehydrate from storage. Takes no gateway, so a restore can never reach
    /// the network.
    ///
    /// Runs once; later calls are ignored. Missing or malformed records leave
    /// the machine anonymous.
    pub fn restore(&mut self) {
        if self.restored {
            warn!("session restore already ran; ignoring");
            return;
        }
        self.restored = true;

        if let Some(session) = self.store.read() {
            log!("restored session for user {}", session.user.id);
            self.apply(AuthEvent::Restored(session));
        }
    }

    /// Enter `Authenticating`. An existing session is logged out first so the
    /// attempt always starts from `Anonymous`.
    pub fn begin_login(&mut self) {
        if self.state.is_authenticated() {
            self.logout();
        }
        self.apply(AuthEvent::LoginStarted);
    }

    /// Apply a gateway outcome. On success the in-memory transition commits
    /// before the store write.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidCredentials`] for any gateway failure, or
    /// [`AuthError::Superseded`] when the machine is no longer
    /// `Authenticating`.
    pub fn complete_login(&mut self, outcome: Result<Session, GatewayError>) -> Result<(), AuthError> {
        if !self.state.is_loading() {
            warn!("discarding login outcome; session is no longer authenticating");
            return Err(AuthError::Superseded);
        }

        match outcome {
            Ok(session) => {
                let user_id = session.user.id;
                self.apply(AuthEvent::LoginSucceeded(session));
                if let Some(session) = self.state.session() {
                    if let Err(e) = self.store.write(session) {
                        warn!("session for user {user_id} not persisted: {e}");
                    }
                }
                log!("logged in as user {user_id}");
                Ok(())
            }
            Err(e) => {
                warn!("login failed: {e}");
                self.apply(AuthEvent::LoginFailed);
                Err(e.into())
            }
        }
    }

    /// Full login: enter `Authenticating`, ask the gateway, apply the outcome.
    ///
    /// # Errors
    ///
    /// See [`SessionMachine::complete_login`].
    pub async fn login<G: AuthGateway>(&mut self, gateway: &G, email: &str, password: &str) -> Result<(), AuthError> {
        self.begin_login();
        let outcome = gateway.authenticate(email, password).await;
        self.complete_login(outcome)
    }

    /// Clear storage and drop to `Anonymous`. Valid from any state.
    pub fn logout(&mut self) {
        self.store.clear();
        self.apply(AuthEvent::LoggedOut);
    }

    fn apply(&mut self, event: AuthEvent) {
        let current = std::mem::take(&mut self.state);
        self.state = current.transition(event);
    }
}
