//! Mock collaborators for the Baladiyati portal
//!
//! In-process implementations of the `baladi-client` collaborator traits,
//! standing in for a real backend. Deterministic by default: latency,
//! failure injection and geolocation jitter are opt-in knobs, so tests
//! stay reproducible while demos can feel like the real thing.

pub mod auth;
pub mod data;
pub mod geo;
pub mod submit;

pub use auth::MockAuth;
pub use data::MockDirectory;
pub use geo::MockGeolocation;
pub use submit::MockSubmission;
