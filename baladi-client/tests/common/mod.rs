//! Stub collaborators for guard and wizard tests

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use baladi_client::api::{AuthApi, DirectoryApi, GeolocationApi, SubmissionApi};
use baladi_client::wizard::{ComplaintDraft, ProblemDraft};
use shared::client::{AuthResponse, LoginRequest, ProfileUpdate, RegisterRequest, SubmitResponse};
use shared::error::{PortalError, PortalResult};
use shared::models::{GeoPoint, Notification, Report, ReportDetails, UserInfo};

pub fn user(id: i64, name: &str, email: &str) -> UserInfo {
    UserInfo {
        id,
        display_name: name.to_string(),
        email: email.to_string(),
        phone: None,
    }
}

/// Auth stub: counts calls, optionally fails, validates a fixed token set
#[derive(Default)]
pub struct StubAuth {
    pub calls: AtomicUsize,
    pub fail_with: Option<String>,
    pub valid_tokens: Vec<String>,
}

impl StubAuth {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn with_valid_token(token: &str) -> Self {
        Self {
            valid_tokens: vec![token.to_string()],
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn settle(&self, response: AuthResponse) -> PortalResult<AuthResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(message) => Err(PortalError::collaborator(message.clone())),
            None => Ok(response),
        }
    }
}

#[async_trait]
impl AuthApi for StubAuth {
    async fn login(&self, request: &LoginRequest) -> PortalResult<AuthResponse> {
        self.settle(AuthResponse {
            token: "stub-token".to_string(),
            user: user(1, "Stub User", &request.email),
        })
    }

    async fn register(&self, request: &RegisterRequest) -> PortalResult<AuthResponse> {
        self.settle(AuthResponse {
            token: "stub-token".to_string(),
            user: user(2, &request.full_name, &request.email),
        })
    }

    async fn validate_token(&self, token: &str) -> PortalResult<UserInfo> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.valid_tokens.iter().any(|t| t == token) {
            Ok(user(1, "Stub User", "user@example.com"))
        } else {
            Err(PortalError::collaborator("Invalid token"))
        }
    }
}

/// Submission stub: fixed id on success, optional forced failure
pub struct StubSubmission {
    pub id: i64,
    pub fail_with: Mutex<Option<String>>,
    pub calls: AtomicUsize,
}

impl StubSubmission {
    pub fn ok(id: i64) -> Self {
        Self {
            id,
            fail_with: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    /// Fails until [`StubSubmission::recover`] is called, then succeeds
    /// with the given id
    pub fn failing(message: &str, id: i64) -> Self {
        Self {
            id,
            fail_with: Mutex::new(Some(message.to_string())),
            calls: AtomicUsize::new(0),
        }
    }

    /// Let subsequent calls succeed (retry-after-failure scenarios)
    pub fn recover(&self) {
        *self.fail_with.lock().unwrap() = None;
    }

    fn settle(&self) -> PortalResult<SubmitResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &*self.fail_with.lock().unwrap() {
            Some(message) => Err(PortalError::collaborator(message.clone())),
            None => Ok(SubmitResponse { id: self.id }),
        }
    }
}

#[async_trait]
impl SubmissionApi for StubSubmission {
    async fn submit_report(&self, _draft: &ProblemDraft) -> PortalResult<SubmitResponse> {
        self.settle()
    }

    async fn submit_complaint(&self, _draft: &ComplaintDraft) -> PortalResult<SubmitResponse> {
        self.settle()
    }
}

/// Geolocation stub: returns queued points in order, then fails
pub struct StubGeolocation {
    points: Mutex<Vec<GeoPoint>>,
}

impl StubGeolocation {
    pub fn with_points(points: Vec<GeoPoint>) -> Self {
        Self {
            points: Mutex::new(points),
        }
    }

    pub fn failing() -> Self {
        Self::with_points(vec![])
    }
}

#[async_trait]
impl GeolocationApi for StubGeolocation {
    async fn detect(&self) -> PortalResult<GeoPoint> {
        let mut points = self.points.lock().unwrap();
        if points.is_empty() {
            Err(PortalError::collaborator("Location unavailable"))
        } else {
            Ok(points.remove(0))
        }
    }
}

/// Directory stub: profile updates echo back the payload
#[derive(Default)]
pub struct StubDirectory {
    pub marked_read: Mutex<Vec<i64>>,
}

#[async_trait]
impl DirectoryApi for StubDirectory {
    async fn fetch_reports(&self) -> PortalResult<Vec<Report>> {
        Ok(vec![])
    }

    async fn fetch_report_details(&self, id: i64) -> PortalResult<ReportDetails> {
        Err(PortalError::collaborator(format!("Report {} not found", id)))
    }

    async fn fetch_notifications(&self) -> PortalResult<Vec<Notification>> {
        Ok(vec![])
    }

    async fn mark_notifications_read(&self, ids: &[i64]) -> PortalResult<()> {
        self.marked_read.lock().unwrap().extend_from_slice(ids);
        Ok(())
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> PortalResult<UserInfo> {
        Ok(UserInfo {
            id: 1,
            display_name: update.full_name.clone(),
            email: "user@example.com".to_string(),
            phone: update.phone.clone(),
        })
    }
}
