//! Route guard shared by every protected route.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router evaluates [`route_condition`] before rendering a protected
//! target and again whenever the session changes. The decision keys off user
//! presence only; an in-flight login elsewhere never causes a redirect.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::session::AppSession;

/// Public entry point unauthenticated navigations are sent to.
pub const LOGIN_PATH: &str = "/login";

/// What the router should do with a protected navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(&'static str),
}

/// Decide a protected navigation from a session snapshot.
pub fn guard(state: &AuthState) -> GuardDecision {
    if state.user.is_some() { GuardDecision::Render } else { GuardDecision::Redirect(LOGIN_PATH) }
}

/// `ProtectedRoute` condition: always decided, never pending.
pub fn route_condition(session: RwSignal<AppSession>) -> Option<bool> {
    let decision = session.with(|m| guard(&m.snapshot()));
    Some(decision == GuardDecision::Render)
}
