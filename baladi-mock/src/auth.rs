//! Mock auth collaborator
//!
//! Accepts any credentials, issues opaque `mock-jwt-token-*` tokens and
//! remembers them, so `validate_token` succeeds only for tokens this
//! instance issued. Real password checking belongs to the real backend.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use baladi_client::api::AuthApi;
use shared::client::{AuthResponse, LoginRequest, RegisterRequest};
use shared::error::{PortalError, PortalResult};
use shared::models::UserInfo;

pub struct MockAuth {
    latency: Duration,
    issued: Mutex<HashMap<String, UserInfo>>,
    next_id: AtomicI64,
}

impl Default for MockAuth {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAuth {
    pub fn new() -> Self {
        Self {
            latency: Duration::ZERO,
            issued: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Simulated network delay applied to every call
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Pre-seed a token, as if issued in a previous run (bootstrap tests)
    pub fn seed_token(&self, token: &str, user: UserInfo) {
        self.issued
            .lock()
            .unwrap()
            .insert(token.to_string(), user);
    }

    fn issue(&self, user: UserInfo) -> AuthResponse {
        let token = format!("mock-jwt-token-{}", uuid::Uuid::new_v4());
        self.issued
            .lock()
            .unwrap()
            .insert(token.clone(), user.clone());
        AuthResponse { token, user }
    }

    /// Display name derived from the email local part, the way the mock
    /// backend labels accounts it has never seen before
    fn name_from_email(email: &str) -> String {
        email
            .split('@')
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or("Citizen")
            .to_string()
    }
}

#[async_trait]
impl AuthApi for MockAuth {
    async fn login(&self, request: &LoginRequest) -> PortalResult<AuthResponse> {
        tokio::time::sleep(self.latency).await;

        if request.email.trim().is_empty() || request.password.is_empty() {
            return Err(PortalError::collaborator("Invalid email or password"));
        }

        let user = UserInfo {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            display_name: Self::name_from_email(&request.email),
            email: request.email.clone(),
            phone: None,
        };
        tracing::debug!(email = %request.email, "Mock login");
        Ok(self.issue(user))
    }

    async fn register(&self, request: &RegisterRequest) -> PortalResult<AuthResponse> {
        tokio::time::sleep(self.latency).await;

        let user = UserInfo {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            display_name: request.full_name.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
        };
        tracing::debug!(email = %request.email, "Mock registration");
        Ok(self.issue(user))
    }

    async fn validate_token(&self, token: &str) -> PortalResult<UserInfo> {
        tokio::time::sleep(self.latency).await;

        self.issued
            .lock()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or_else(|| PortalError::collaborator("Invalid token"))
    }
}
