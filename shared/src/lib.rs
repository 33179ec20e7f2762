//! Shared types for the Baladiyati portal
//!
//! Common types used across the portal crates: domain models,
//! request/response DTOs, error types, and utility helpers.

pub mod client;
pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{PortalError, PortalResult};
