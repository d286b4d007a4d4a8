use super::*;

fn make_session(id: i64) -> Session {
    Session {
        user: User { id, name: "Ana".to_owned(), email: "ana@hotel.com".to_owned() },
        token: format!("fake-token-{id}"),
    }
}

fn all_events() -> Vec<AuthEvent> {
    vec![
        AuthEvent::Restored(make_session(1)),
        AuthEvent::LoginStarted,
        AuthEvent::LoginSucceeded(make_session(2)),
        AuthEvent::LoginFailed,
        AuthEvent::LoggedOut,
    ]
}

fn all_states() -> Vec<SessionState> {
    vec![SessionState::Anonymous, SessionState::Authenticating, SessionState::Authenticated(make_session(3))]
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_anonymous() {
    assert_eq!(SessionState::default(), SessionState::Anonymous);
}

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.token.is_none());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn restore_from_anonymous_authenticates() {
    let next = SessionState::Anonymous.transition(AuthEvent::Restored(make_session(7)));
    assert_eq!(next, SessionState::Authenticated(make_session(7)));
}

#[test]
fn restore_is_ignored_outside_anonymous() {
    let next = SessionState::Authenticating.transition(AuthEvent::Restored(make_session(7)));
    assert_eq!(next, SessionState::Authenticating);

    let current = SessionState::Authenticated(make_session(1));
    assert_eq!(current.clone().transition(AuthEvent::Restored(make_session(7))), current);
}

#[test]
fn login_started_enters_authenticating_only_from_anonymous() {
    assert_eq!(SessionState::Anonymous.transition(AuthEvent::LoginStarted), SessionState::Authenticating);

    let current = SessionState::Authenticated(make_session(1));
    assert_eq!(current.clone().transition(AuthEvent::LoginStarted), current);
}

#[test]
fn login_success_requires_authenticating() {
    let next = SessionState::Authenticating.transition(AuthEvent::LoginSucceeded(make_session(7)));
    assert_eq!(next, SessionState::Authenticated(make_session(7)));

    let next = SessionState::Anonymous.transition(AuthEvent::LoginSucceeded(make_session(7)));
    assert_eq!(next, SessionState::Anonymous);
}

#[test]
fn login_failure_returns_to_anonymous() {
    let next = SessionState::Authenticating.transition(AuthEvent::LoginFailed);
    assert_eq!(next, SessionState::Anonymous);
    assert!(!next.is_loading());
}

#[test]
fn logout_applies_from_every_state() {
    for state in all_states() {
        assert_eq!(state.transition(AuthEvent::LoggedOut), SessionState::Anonymous);
    }
}

#[test]
fn user_and_token_present_together_for_every_transition() {
    for state in all_states() {
        for event in all_events() {
            let snapshot = state.clone().transition(event).snapshot();
            assert_eq!(snapshot.user.is_some(), snapshot.token.is_some(), "half-authenticated: {snapshot:?}");
        }
    }
}

#[test]
fn authenticated_state_is_never_loading() {
    for state in all_states() {
        for event in all_events() {
            let next = state.clone().transition(event);
            assert!(!(next.is_authenticated() && next.is_loading()));
        }
    }
}

// =============================================================
// Snapshot
// =============================================================

#[test]
fn snapshot_of_authenticating_is_loading_without_user() {
    let snapshot = SessionState::Authenticating.snapshot();
    assert!(snapshot.loading);
    assert!(snapshot.user.is_none());
    assert!(snapshot.token.is_none());
}

#[test]
fn snapshot_of_authenticated_carries_user_and_token() {
    let snapshot = SessionState::Authenticated(make_session(7)).snapshot();
    assert_eq!(snapshot.user.map(|u| u.id), Some(7));
    assert_eq!(snapshot.token.as_deref(), Some("fake-token-7"));
    assert!(!snapshot.loading);
}
