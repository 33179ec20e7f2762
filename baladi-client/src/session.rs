//! Session Guard
//!
//! Tracks whether the caller is authenticated and decides, for every
//! navigation to a protected screen, whether to render, wait, or redirect.
//! The guard is the only writer of session state; collaborator failures are
//! converted into failure results and never escape as faults.

use std::sync::Arc;

use shared::client::{LoginRequest, ProfileUpdate, RegisterRequest};
use shared::error::{PortalError, PortalResult};
use shared::models::UserInfo;

use crate::api::{AuthApi, DirectoryApi};
use crate::routes::Screen;
use crate::storage::TokenStore;

/// Minimum accepted password length for registration
pub const MIN_PASSWORD_LEN: usize = 8;

/// Whether the initial credential check has completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Unresolved,
    Resolved,
}

/// Outcome of an authorization check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Bootstrap has not resolved yet; show a waiting indicator
    Pending,
    /// Render the requested screen
    Allow,
    /// Send the caller to `to`, remembering `from` for after login
    Redirect { to: Screen, from: Screen },
}

/// Registration form as filled in by the user, before precondition checks
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
    pub confirm_password: String,
}

/// Process-wide session state, owned by the guard
#[derive(Debug, Default)]
struct Session {
    token: Option<String>,
    user: Option<UserInfo>,
}

/// Gate for protected screens
///
/// One guard per application. All methods take `&mut self`; the
/// single-threaded UI event loop is the serialization point, so there is
/// no internal locking.
pub struct SessionGuard {
    auth: Arc<dyn AuthApi>,
    store: TokenStore,
    session: Session,
    load_state: LoadState,
    bootstrapped: bool,
}

impl SessionGuard {
    pub fn new(auth: Arc<dyn AuthApi>, store: TokenStore) -> Self {
        Self {
            auth,
            store,
            session: Session::default(),
            load_state: LoadState::Unresolved,
            bootstrapped: false,
        }
    }

    /// One-time startup credential check.
    ///
    /// Reads the stored token and validates it against the auth
    /// collaborator. Whatever the outcome, `load_state` ends up
    /// `Resolved`; a failed validation clears both the slot and the
    /// session. Calling this a second time is a state error.
    pub async fn bootstrap(&mut self) -> PortalResult<()> {
        if self.bootstrapped {
            return Err(PortalError::state("bootstrap already ran"));
        }
        self.bootstrapped = true;

        let token = match self.store.load() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored credential");
                None
            }
        };

        if let Some(token) = token {
            match self.auth.validate_token(&token).await {
                Ok(user) => {
                    tracing::info!(user_id = user.id, "Session restored from stored token");
                    self.session.token = Some(token);
                    self.session.user = Some(user);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Stored token rejected, clearing credential");
                    if let Err(e) = self.store.clear() {
                        tracing::warn!(error = %e, "Failed to clear credential slot");
                    }
                    self.session = Session::default();
                }
            }
        }

        self.load_state = LoadState::Resolved;
        Ok(())
    }

    /// Log in with email and password.
    ///
    /// On failure the session is left fully cleared, never partially
    /// populated, and the collaborator's message is returned for display.
    pub async fn login(&mut self, request: &LoginRequest) -> PortalResult<UserInfo> {
        match self.auth.login(request).await {
            Ok(response) => {
                self.install(response.token, response.user.clone());
                tracing::info!(user_id = response.user.id, email = %request.email, "User logged in");
                Ok(response.user)
            }
            Err(e) => {
                self.clear();
                tracing::warn!(email = %request.email, error = %e, "Login failed");
                Err(PortalError::collaborator(e.message().to_string()))
            }
        }
    }

    /// Register a new account and log it in.
    ///
    /// The password preconditions are checked locally first; the
    /// registration collaborator is only reached once they pass.
    pub async fn register(&mut self, form: &RegisterForm) -> PortalResult<UserInfo> {
        if form.password != form.confirm_password {
            return Err(PortalError::validation("Passwords do not match."));
        }
        if form.password.len() < MIN_PASSWORD_LEN {
            return Err(PortalError::validation(
                "Password must be at least 8 characters long.",
            ));
        }

        let request = RegisterRequest {
            full_name: form.full_name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            password: form.password.clone(),
        };

        match self.auth.register(&request).await {
            Ok(response) => {
                self.install(response.token, response.user.clone());
                tracing::info!(user_id = response.user.id, email = %request.email, "User registered");
                Ok(response.user)
            }
            Err(e) => {
                self.clear();
                tracing::warn!(email = %request.email, error = %e, "Registration failed");
                Err(PortalError::collaborator(e.message().to_string()))
            }
        }
    }

    /// Clear the session and the stored credential. Always succeeds;
    /// storage failures are logged, not surfaced.
    pub fn logout(&mut self) {
        if let Some(user) = &self.session.user {
            tracing::info!(user_id = user.id, "User logged out");
        }
        self.clear();
    }

    /// Decide access to a screen from current state alone.
    pub fn authorize(&self, screen: &Screen) -> Access {
        if !screen.is_protected() {
            return Access::Allow;
        }
        if self.load_state == LoadState::Unresolved {
            return Access::Pending;
        }
        if self.session.user.is_some() {
            Access::Allow
        } else {
            Access::Redirect {
                to: Screen::Login,
                from: *screen,
            }
        }
    }

    /// Update the authenticated user's profile via the directory
    /// collaborator, refreshing the cached identity on success.
    pub async fn update_profile(
        &mut self,
        directory: &dyn DirectoryApi,
        update: &ProfileUpdate,
    ) -> PortalResult<UserInfo> {
        if self.session.user.is_none() {
            return Err(PortalError::state("profile update requires a session"));
        }

        let user = directory.update_profile(update).await?;
        self.session.user = Some(user.clone());
        tracing::info!(user_id = user.id, "Profile updated");
        Ok(user)
    }

    pub fn current_user(&self) -> Option<&UserInfo> {
        self.session.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.user.is_some()
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// Install a fresh token + user pair, persisting the token. A
    /// persistence failure does not fail the login; the session still
    /// works for this run.
    fn install(&mut self, token: String, user: UserInfo) {
        if let Err(e) = self.store.save(&token) {
            tracing::warn!(error = %e, "Failed to persist auth token");
        }
        self.session.token = Some(token);
        self.session.user = Some(user);
    }

    fn clear(&mut self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "Failed to clear credential slot");
        }
        self.session = Session::default();
    }
}
