//! Geolocation types

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair as returned by the geolocation collaborator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}
