//! Client-related types shared between the portal core and its collaborators
//!
//! Common request/response types used at the auth and submission seams.

use crate::models::UserInfo;
use serde::{Deserialize, Serialize};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request, after local precondition checks have passed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub password: String,
}

/// Successful login/register response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Profile update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

// =============================================================================
// Submission API DTOs
// =============================================================================

/// Successful submission response
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub id: i64,
}
