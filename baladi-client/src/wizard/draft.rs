//! Report drafts
//!
//! The in-progress record the wizard builds before submission. Drafts are
//! tagged by kind; each kind carries its own required-field set, checked
//! structurally at step-transition time rather than per keystroke.

use serde::{Deserialize, Serialize};
use shared::error::{PortalError, PortalResult};
use shared::models::{Category, GeoPoint, ReportKind};

/// Editable fields of the details step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Description,
    LocationText,
    Subject,
    Municipality,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Description => "description",
            Field::LocationText => "locationText",
            Field::Subject => "subject",
            Field::Municipality => "municipality",
        }
    }
}

/// An attached photo, as handed over by the input-capture layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoAttachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Draft of a problem report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProblemDraft {
    pub category: Option<Category>,
    pub description: String,
    pub location_text: String,
    pub photo: Option<PhotoAttachment>,
    pub coordinates: Option<GeoPoint>,
}

/// Draft of a complaint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintDraft {
    pub subject: String,
    pub description: String,
    pub municipality: Option<String>,
}

/// The in-progress record, tagged by kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ReportDraft {
    Problem(ProblemDraft),
    Complaint(ComplaintDraft),
}

impl ReportDraft {
    /// Create an empty draft of the given kind
    pub fn new(kind: ReportKind) -> Self {
        match kind {
            ReportKind::Problem => ReportDraft::Problem(ProblemDraft::default()),
            ReportKind::Complaint => ReportDraft::Complaint(ComplaintDraft::default()),
        }
    }

    pub fn kind(&self) -> ReportKind {
        match self {
            ReportDraft::Problem(_) => ReportKind::Problem,
            ReportDraft::Complaint(_) => ReportKind::Complaint,
        }
    }

    /// Write one details field. Writes are unconditional; a field that
    /// does not belong to this draft's kind is a validation error.
    pub fn set_field(&mut self, field: Field, value: String) -> PortalResult<()> {
        match (self, field) {
            (ReportDraft::Problem(draft), Field::Description) => draft.description = value,
            (ReportDraft::Problem(draft), Field::LocationText) => draft.location_text = value,
            (ReportDraft::Complaint(draft), Field::Description) => draft.description = value,
            (ReportDraft::Complaint(draft), Field::Subject) => draft.subject = value,
            (ReportDraft::Complaint(draft), Field::Municipality) => {
                draft.municipality = Some(value)
            }
            (draft, field) => {
                return Err(PortalError::validation(format!(
                    "Field {} does not apply to a {:?} draft",
                    field.name(),
                    draft.kind()
                )));
            }
        }
        Ok(())
    }

    /// Whether every required field for this kind is non-empty.
    ///
    /// Problem: category, description, location. Complaint: subject,
    /// description. Everything else is optional.
    pub fn is_complete(&self) -> bool {
        self.first_missing().is_none()
    }

    /// The first required field still empty, for the rejection message
    pub fn first_missing(&self) -> Option<&'static str> {
        match self {
            ReportDraft::Problem(draft) => {
                if draft.category.is_none() {
                    Some("category")
                } else if draft.description.trim().is_empty() {
                    Some("description")
                } else if draft.location_text.trim().is_empty() {
                    Some("locationText")
                } else {
                    None
                }
            }
            ReportDraft::Complaint(draft) => {
                if draft.subject.trim().is_empty() {
                    Some("subject")
                } else if draft.description.trim().is_empty() {
                    Some("description")
                } else {
                    None
                }
            }
        }
    }
}
