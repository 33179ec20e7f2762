//! Session guard integration tests

mod common;

use std::sync::Arc;

use baladi_client::{Access, LoadState, RegisterForm, Screen, SessionGuard, TokenStore};
use common::{StubAuth, StubDirectory};
use shared::client::{LoginRequest, ProfileUpdate};
use shared::error::PortalError;
use tempfile::TempDir;

fn login_request() -> LoginRequest {
    LoginRequest {
        email: "user@example.com".to_string(),
        password: "hunter2hunter2".to_string(),
    }
}

fn register_form(password: &str, confirm: &str) -> RegisterForm {
    RegisterForm {
        full_name: "New User".to_string(),
        email: "new@example.com".to_string(),
        phone: None,
        password: password.to_string(),
        confirm_password: confirm.to_string(),
    }
}

#[tokio::test]
async fn test_authorize_pending_until_bootstrap_resolves() {
    let temp_dir = TempDir::new().unwrap();
    let mut guard = SessionGuard::new(
        Arc::new(StubAuth::ok()),
        TokenStore::new(temp_dir.path()),
    );

    // Before bootstrap every protected screen is Pending
    assert_eq!(guard.load_state(), LoadState::Unresolved);
    assert_eq!(guard.authorize(&Screen::Dashboard), Access::Pending);

    // No stored token: bootstrap resolves to an unauthenticated session
    guard.bootstrap().await.unwrap();
    assert_eq!(guard.load_state(), LoadState::Resolved);
    assert_eq!(
        guard.authorize(&Screen::Dashboard),
        Access::Redirect {
            to: Screen::Login,
            from: Screen::Dashboard,
        }
    );
}

#[tokio::test]
async fn test_authorize_allows_public_screens_while_unresolved() {
    let temp_dir = TempDir::new().unwrap();
    let guard = SessionGuard::new(
        Arc::new(StubAuth::ok()),
        TokenStore::new(temp_dir.path()),
    );

    assert_eq!(guard.authorize(&Screen::Login), Access::Allow);
    assert_eq!(guard.authorize(&Screen::Register), Access::Allow);
}

#[tokio::test]
async fn test_bootstrap_restores_valid_stored_token() {
    let temp_dir = TempDir::new().unwrap();
    let store = TokenStore::new(temp_dir.path());
    store.save("stored-valid").unwrap();

    let mut guard = SessionGuard::new(Arc::new(StubAuth::with_valid_token("stored-valid")), store);
    guard.bootstrap().await.unwrap();

    assert!(guard.is_authenticated());
    assert_eq!(guard.token(), Some("stored-valid"));
    assert_eq!(guard.authorize(&Screen::Notifications), Access::Allow);
}

#[tokio::test]
async fn test_bootstrap_clears_rejected_token() {
    let temp_dir = TempDir::new().unwrap();
    let store = TokenStore::new(temp_dir.path());
    store.save("stale-token").unwrap();

    let mut guard = SessionGuard::new(Arc::new(StubAuth::with_valid_token("other")), store);
    guard.bootstrap().await.unwrap();

    assert_eq!(guard.load_state(), LoadState::Resolved);
    assert!(!guard.is_authenticated());
    assert_eq!(guard.token(), None);
    // The rejected token is gone from the slot too
    assert!(!TokenStore::new(temp_dir.path()).exists());
}

#[tokio::test]
async fn test_bootstrap_runs_at_most_once() {
    let temp_dir = TempDir::new().unwrap();
    let mut guard = SessionGuard::new(
        Arc::new(StubAuth::ok()),
        TokenStore::new(temp_dir.path()),
    );

    guard.bootstrap().await.unwrap();
    let err = guard.bootstrap().await.unwrap_err();
    assert!(matches!(err, PortalError::State(_)));
}

#[tokio::test]
async fn test_login_persists_token_and_user() {
    let temp_dir = TempDir::new().unwrap();
    let mut guard = SessionGuard::new(
        Arc::new(StubAuth::ok()),
        TokenStore::new(temp_dir.path()),
    );
    guard.bootstrap().await.unwrap();

    let user = guard.login(&login_request()).await.unwrap();
    assert_eq!(user.email, "user@example.com");
    assert!(guard.is_authenticated());
    assert_eq!(guard.authorize(&Screen::Dashboard), Access::Allow);

    // Token survives a restart: a fresh store sees it
    assert_eq!(
        TokenStore::new(temp_dir.path()).load().unwrap().as_deref(),
        Some("stub-token")
    );
}

#[tokio::test]
async fn test_login_failure_leaves_session_cleared() {
    let temp_dir = TempDir::new().unwrap();
    let mut guard = SessionGuard::new(
        Arc::new(StubAuth::failing("Invalid username or password")),
        TokenStore::new(temp_dir.path()),
    );
    guard.bootstrap().await.unwrap();

    let err = guard.login(&login_request()).await.unwrap_err();
    assert_eq!(err.message(), "Invalid username or password");
    assert!(!guard.is_authenticated());
    assert_eq!(guard.token(), None);
    assert!(!TokenStore::new(temp_dir.path()).exists());
}

#[tokio::test]
async fn test_register_mismatch_short_circuits_locally() {
    let temp_dir = TempDir::new().unwrap();
    let auth = Arc::new(StubAuth::ok());
    let mut guard = SessionGuard::new(auth.clone(), TokenStore::new(temp_dir.path()));

    let err = guard.register(&register_form("abc", "xyz")).await.unwrap_err();
    assert!(matches!(err, PortalError::Validation(_)));
    assert_eq!(err.message(), "Passwords do not match.");

    // The registration collaborator was never reached
    assert_eq!(auth.call_count(), 0);
}

#[tokio::test]
async fn test_register_rejects_short_password_locally() {
    let temp_dir = TempDir::new().unwrap();
    let auth = Arc::new(StubAuth::ok());
    let mut guard = SessionGuard::new(auth.clone(), TokenStore::new(temp_dir.path()));

    let err = guard
        .register(&register_form("short", "short"))
        .await
        .unwrap_err();
    assert!(matches!(err, PortalError::Validation(_)));
    assert_eq!(auth.call_count(), 0);
}

#[tokio::test]
async fn test_register_success_logs_in() {
    let temp_dir = TempDir::new().unwrap();
    let auth = Arc::new(StubAuth::ok());
    let mut guard = SessionGuard::new(auth.clone(), TokenStore::new(temp_dir.path()));

    let user = guard
        .register(&register_form("longenough", "longenough"))
        .await
        .unwrap();
    assert_eq!(user.display_name, "New User");
    assert!(guard.is_authenticated());
    assert_eq!(auth.call_count(), 1);
}

#[tokio::test]
async fn test_logout_clears_everything() {
    let temp_dir = TempDir::new().unwrap();
    let mut guard = SessionGuard::new(
        Arc::new(StubAuth::ok()),
        TokenStore::new(temp_dir.path()),
    );
    guard.bootstrap().await.unwrap();
    guard.login(&login_request()).await.unwrap();

    guard.logout();
    assert!(!guard.is_authenticated());
    assert_eq!(guard.token(), None);
    assert!(!TokenStore::new(temp_dir.path()).exists());
    assert_eq!(
        guard.authorize(&Screen::Profile),
        Access::Redirect {
            to: Screen::Login,
            from: Screen::Profile,
        }
    );
}

#[tokio::test]
async fn test_update_profile_requires_session() {
    let temp_dir = TempDir::new().unwrap();
    let mut guard = SessionGuard::new(
        Arc::new(StubAuth::ok()),
        TokenStore::new(temp_dir.path()),
    );
    guard.bootstrap().await.unwrap();

    let directory = StubDirectory::default();
    let update = ProfileUpdate {
        full_name: "Renamed".to_string(),
        phone: Some("123".to_string()),
    };

    let err = guard.update_profile(&directory, &update).await.unwrap_err();
    assert!(matches!(err, PortalError::State(_)));

    guard.login(&login_request()).await.unwrap();
    let user = guard.update_profile(&directory, &update).await.unwrap();
    assert_eq!(user.display_name, "Renamed");
    assert_eq!(guard.current_user().unwrap().display_name, "Renamed");
}
