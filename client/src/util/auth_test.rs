use super::*;
use crate::net::types::User;

fn make_user() -> User {
    User { id: 1, name: "Alice".to_owned(), email: "alice@hotel.com".to_owned() }
}

#[test]
fn redirects_when_user_missing() {
    let state = AuthState { user: None, token: None, loading: false };
    assert_eq!(guard(&state), GuardDecision::Redirect(LOGIN_PATH));
}

#[test]
fn redirects_while_loading_without_user() {
    let state = AuthState { user: None, token: None, loading: true };
    assert_eq!(guard(&state), GuardDecision::Redirect(LOGIN_PATH));
}

#[test]
fn renders_when_user_exists() {
    let state = AuthState { user: Some(make_user()), token: Some("fake-token-1".to_owned()), loading: false };
    assert_eq!(guard(&state), GuardDecision::Render);
}

#[test]
fn renders_when_user_exists_regardless_of_loading() {
    let state = AuthState { user: Some(make_user()), token: Some("fake-token-1".to_owned()), loading: true };
    assert_eq!(guard(&state), GuardDecision::Render);
}

#[test]
fn login_path_is_public_entry() {
    assert_eq!(LOGIN_PATH, "/login");
}
