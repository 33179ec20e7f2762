//! Baladi Client - portal core for the Baladiyati citizen portal
//!
//! Owns the two pieces of logic the rendering layer drives: the session
//! guard that gates protected screens, and the report draft wizard that
//! collects a problem report or complaint across ordered steps. All
//! network-facing work goes through the injected collaborator traits in
//! [`api`]; nothing here performs I/O on its own except the credential
//! slot in [`storage`].

pub mod api;
pub mod dashboard;
pub mod notifications;
pub mod routes;
pub mod session;
pub mod storage;
pub mod wizard;

pub use api::{AuthApi, DirectoryApi, GeolocationApi, SubmissionApi};
pub use routes::Screen;
pub use session::{Access, LoadState, RegisterForm, SessionGuard};
pub use storage::TokenStore;
pub use wizard::{
    ComplaintDraft, Field, PhotoAttachment, ProblemDraft, ReportDraft, ReportWizard,
    SubmissionStatus, WizardStep,
};

// Re-export shared types for convenience
pub use shared::client::{AuthResponse, LoginRequest, ProfileUpdate, RegisterRequest};
pub use shared::error::{PortalError, PortalResult};
