//! User Model

use serde::{Deserialize, Serialize};

/// Identity record carried by an authenticated session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub display_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}
