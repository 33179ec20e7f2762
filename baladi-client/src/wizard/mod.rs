//! Report Draft Wizard
//!
//! A linear, resumable state machine over exactly one [`ReportDraft`].
//! Each instance is owned by the screen that created it; a finished
//! wizard is not reusable; create a new one for the next report.
//!
//! Problem flow: Category -> Details -> Review -> Done. Complaint flow
//! skips the category step. Invoking a step-specific operation from the
//! wrong step is a state error, never a silent no-op.

mod draft;

pub use draft::{ComplaintDraft, Field, PhotoAttachment, ProblemDraft, ReportDraft};

use shared::error::{PortalError, PortalResult};
use shared::models::{Category, GeoPoint, ReportKind};

use crate::api::{GeolocationApi, SubmissionApi};

/// Current wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Category,
    Details,
    Review,
    /// Terminal success screen; no transitions leave it
    Done,
}

/// Submission lifecycle of the draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    InFlight,
    Succeeded(i64),
    Failed(String),
}

/// Wizard over one report draft
pub struct ReportWizard {
    draft: ReportDraft,
    step: WizardStep,
    status: SubmissionStatus,
}

impl ReportWizard {
    /// Start a problem-report wizard at the category step
    pub fn new_problem() -> Self {
        Self {
            draft: ReportDraft::new(ReportKind::Problem),
            step: WizardStep::Category,
            status: SubmissionStatus::Idle,
        }
    }

    /// Start a complaint wizard; complaints have no category step
    pub fn new_complaint() -> Self {
        Self {
            draft: ReportDraft::new(ReportKind::Complaint),
            step: WizardStep::Details,
            status: SubmissionStatus::Idle,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn draft(&self) -> &ReportDraft {
        &self.draft
    }

    pub fn kind(&self) -> ReportKind {
        self.draft.kind()
    }

    /// 1-based step number for the step indicator; the success screen is
    /// one past the last data-entry step.
    pub fn step_number(&self) -> u8 {
        let base = match self.step {
            WizardStep::Category => 1,
            WizardStep::Details => 2,
            WizardStep::Review => 3,
            WizardStep::Done => 4,
        };
        match self.kind() {
            ReportKind::Problem => base,
            ReportKind::Complaint => base - 1,
        }
    }

    /// Number of data-entry steps for this kind
    pub fn total_steps(&self) -> u8 {
        match self.kind() {
            ReportKind::Problem => 3,
            ReportKind::Complaint => 2,
        }
    }

    /// Record the chosen category and advance to the details step.
    pub fn select_category(&mut self, category: Category) -> PortalResult<()> {
        if self.step != WizardStep::Category {
            return Err(PortalError::state(
                "category selection is only available at the category step",
            ));
        }
        match &mut self.draft {
            ReportDraft::Problem(draft) => draft.category = Some(category),
            // Unreachable: complaint wizards never sit at the category step
            ReportDraft::Complaint(_) => {
                return Err(PortalError::state("complaints have no category step"));
            }
        }
        self.step = WizardStep::Details;
        Ok(())
    }

    /// Write one details field; completeness is not checked here.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) -> PortalResult<()> {
        if self.step != WizardStep::Details {
            return Err(PortalError::state(
                "field edits are only available at the details step",
            ));
        }
        self.draft.set_field(field, value.into())
    }

    /// Attach a photo, replacing any prior attachment.
    pub fn attach_photo(&mut self, photo: PhotoAttachment) -> PortalResult<()> {
        if self.step != WizardStep::Details {
            return Err(PortalError::state(
                "photo attachment is only available at the details step",
            ));
        }
        if photo.bytes.is_empty() {
            return Err(PortalError::validation("Photo attachment is empty"));
        }
        match &mut self.draft {
            ReportDraft::Problem(draft) => {
                draft.photo = Some(photo);
                Ok(())
            }
            ReportDraft::Complaint(_) => Err(PortalError::validation(
                "Complaints do not carry a photo attachment",
            )),
        }
    }

    /// Fill coordinates and the location text from the geolocation
    /// collaborator. A failed detection leaves the draft untouched.
    pub async fn detect_location(&mut self, api: &dyn GeolocationApi) -> PortalResult<GeoPoint> {
        if self.step != WizardStep::Details {
            return Err(PortalError::state(
                "location detection is only available at the details step",
            ));
        }
        let ReportDraft::Problem(draft) = &mut self.draft else {
            return Err(PortalError::validation(
                "Complaints do not carry a location",
            ));
        };

        let point = api.detect().await?;
        draft.coordinates = Some(point);
        draft.location_text = format!(
            "Detected location ({:.4}, {:.4})",
            point.latitude, point.longitude
        );
        Ok(point)
    }

    /// Advance one step. Leaving a data-entry step requires that step's
    /// required fields to be filled; completeness is checked only here.
    pub fn next(&mut self) -> PortalResult<WizardStep> {
        match self.step {
            WizardStep::Category => {
                let ReportDraft::Problem(draft) = &self.draft else {
                    return Err(PortalError::state("complaints have no category step"));
                };
                if draft.category.is_none() {
                    return Err(PortalError::validation("Select a category first"));
                }
                self.step = WizardStep::Details;
            }
            WizardStep::Details => {
                if let Some(field) = self.draft.first_missing() {
                    return Err(PortalError::validation(format!(
                        "Required field is empty: {}",
                        field
                    )));
                }
                self.step = WizardStep::Review;
            }
            WizardStep::Review => {
                return Err(PortalError::state(
                    "the review step is left via submit, not next",
                ));
            }
            WizardStep::Done => {
                return Err(PortalError::state("the wizard is finished"));
            }
        }
        Ok(self.step)
    }

    /// Go back one step; entered data is never cleared.
    pub fn back(&mut self) -> PortalResult<WizardStep> {
        match (self.step, self.kind()) {
            (WizardStep::Details, ReportKind::Problem) => self.step = WizardStep::Category,
            (WizardStep::Details, ReportKind::Complaint) => {
                return Err(PortalError::state("already at the first step"));
            }
            (WizardStep::Review, _) => self.step = WizardStep::Details,
            (WizardStep::Category, _) => {
                return Err(PortalError::state("already at the first step"));
            }
            (WizardStep::Done, _) => {
                return Err(PortalError::state("the wizard is finished"));
            }
        }
        Ok(self.step)
    }

    /// The accumulated draft, exactly as stored, for the review screen.
    pub fn review(&self) -> PortalResult<&ReportDraft> {
        match self.step {
            WizardStep::Review | WizardStep::Done => Ok(&self.draft),
            _ => Err(PortalError::state(
                "the draft is reviewed at the review step",
            )),
        }
    }

    /// Hand the draft to the submission collaborator.
    ///
    /// Only valid at the review step and refused while a previous call is
    /// still in flight. Success finishes the wizard; failure keeps the
    /// draft and the review step so the user can retry or edit.
    pub async fn submit(&mut self, api: &dyn SubmissionApi) -> PortalResult<i64> {
        if self.step != WizardStep::Review {
            return Err(PortalError::state(
                "submit is only available at the review step",
            ));
        }
        if self.status == SubmissionStatus::InFlight {
            return Err(PortalError::state("a submission is already in flight"));
        }

        self.status = SubmissionStatus::InFlight;
        let result = match &self.draft {
            ReportDraft::Problem(draft) => api.submit_report(draft).await,
            ReportDraft::Complaint(draft) => api.submit_complaint(draft).await,
        };

        match result {
            Ok(response) => {
                self.status = SubmissionStatus::Succeeded(response.id);
                self.step = WizardStep::Done;
                tracing::info!(report_id = response.id, kind = ?self.kind(), "Report submitted");
                Ok(response.id)
            }
            Err(e) => {
                let message = e.message().to_string();
                tracing::warn!(error = %message, kind = ?self.kind(), "Report submission failed");
                self.status = SubmissionStatus::Failed(message.clone());
                Err(PortalError::collaborator(message))
            }
        }
    }
}
