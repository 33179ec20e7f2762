//! Collaborator traits
//!
//! Boundary contracts the portal core consumes. Implementations are
//! injected by the host application; `baladi-mock` provides in-process
//! versions for tests and demos. Every method performs a single attempt;
//! retrying is the caller's decision.

use async_trait::async_trait;
use shared::client::{AuthResponse, LoginRequest, ProfileUpdate, RegisterRequest, SubmitResponse};
use shared::error::PortalResult;
use shared::models::{GeoPoint, Notification, Report, ReportDetails, UserInfo};

use crate::wizard::{ComplaintDraft, ProblemDraft};

/// Authentication collaborator
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a token and user record
    async fn login(&self, request: &LoginRequest) -> PortalResult<AuthResponse>;

    /// Create an account and log it in
    async fn register(&self, request: &RegisterRequest) -> PortalResult<AuthResponse>;

    /// Resolve a stored token back into its user record
    async fn validate_token(&self, token: &str) -> PortalResult<UserInfo>;
}

/// Report/complaint submission collaborator
#[async_trait]
pub trait SubmissionApi: Send + Sync {
    async fn submit_report(&self, draft: &ProblemDraft) -> PortalResult<SubmitResponse>;

    async fn submit_complaint(&self, draft: &ComplaintDraft) -> PortalResult<SubmitResponse>;
}

/// Geolocation collaborator
#[async_trait]
pub trait GeolocationApi: Send + Sync {
    /// Detect the device position, or fail with a displayable message
    async fn detect(&self) -> PortalResult<GeoPoint>;
}

/// Read/update collaborator for the current user's records
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    async fn fetch_reports(&self) -> PortalResult<Vec<Report>>;

    async fn fetch_report_details(&self, id: i64) -> PortalResult<ReportDetails>;

    async fn fetch_notifications(&self) -> PortalResult<Vec<Notification>>;

    async fn mark_notifications_read(&self, ids: &[i64]) -> PortalResult<()>;

    async fn update_profile(&self, update: &ProfileUpdate) -> PortalResult<UserInfo>;
}
