//! Report Model
//!
//! A `Report` is a submitted record as the directory collaborator returns
//! it; drafts under construction live in the client wizard, not here.

use crate::error::PortalError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Problem category, chosen from a fixed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Roads,
    Water,
    Electricity,
    Waste,
    PublicSpaces,
    Other,
}

impl Category {
    /// All selectable categories, in display order
    pub const ALL: [Category; 6] = [
        Category::Roads,
        Category::Water,
        Category::Electricity,
        Category::Waste,
        Category::PublicSpaces,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Roads => "Roads",
            Category::Water => "Water",
            Category::Electricity => "Electricity",
            Category::Waste => "Waste",
            Category::PublicSpaces => "Public Spaces",
            Category::Other => "Other",
        }
    }
}

impl FromStr for Category {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Roads" => Ok(Category::Roads),
            "Water" => Ok(Category::Water),
            "Electricity" => Ok(Category::Electricity),
            "Waste" => Ok(Category::Waste),
            "Public Spaces" | "PublicSpaces" => Ok(Category::PublicSpaces),
            "Other" => Ok(Category::Other),
            other => Err(PortalError::validation(format!(
                "Unknown category: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Report lifecycle status as assigned by the municipality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    Pending,
    InProgress,
    Fixed,
    Resolved,
    Rejected,
    Closed,
}

impl ReportStatus {
    /// Fixed and Resolved both count as settled in dashboard stats
    pub fn is_settled(&self) -> bool {
        matches!(self, ReportStatus::Fixed | ReportStatus::Resolved)
    }
}

/// Whether a record is a problem report or a complaint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Problem,
    Complaint,
}

/// A submitted report or complaint, as listed on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    pub kind: ReportKind,
    /// Problem title or complaint subject
    pub title: String,
    /// Set for problems only
    pub category: Option<Category>,
    pub status: ReportStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Free-text location (problems)
    #[serde(default)]
    pub location: Option<String>,
    /// Concerned municipality (complaints)
    #[serde(default)]
    pub municipality: Option<String>,
}

/// One entry in a report's status timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub status: ReportStatus,
    pub comment: String,
}

/// Full report record shown on the details screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDetails {
    #[serde(flatten)]
    pub report: Report,
    pub description: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub updates: Vec<StatusUpdate>,
}
