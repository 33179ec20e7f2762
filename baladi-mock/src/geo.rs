//! Mock geolocation collaborator

use std::time::Duration;

use async_trait::async_trait;
use baladi_client::api::GeolocationApi;
use rand::Rng;
use shared::error::{PortalError, PortalResult};
use shared::models::GeoPoint;

/// Default center: Nouakchott
const DEFAULT_CENTER: GeoPoint = GeoPoint {
    latitude: 18.07,
    longitude: -15.95,
};

pub struct MockGeolocation {
    latency: Duration,
    center: GeoPoint,
    /// Uniform jitter applied to each axis, in degrees
    jitter: f64,
    unavailable: bool,
}

impl Default for MockGeolocation {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGeolocation {
    pub fn new() -> Self {
        Self {
            latency: Duration::ZERO,
            center: DEFAULT_CENTER,
            jitter: 0.0,
            unavailable: false,
        }
    }

    /// A detector that always returns exactly this point
    pub fn fixed(point: GeoPoint) -> Self {
        Self {
            center: point,
            ..Self::new()
        }
    }

    /// A detector that always fails, as when device permission is denied
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::new()
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Spread detections around the center, like the original simulation
    pub fn with_jitter(mut self, degrees: f64) -> Self {
        self.jitter = degrees.abs();
        self
    }
}

#[async_trait]
impl GeolocationApi for MockGeolocation {
    async fn detect(&self) -> PortalResult<GeoPoint> {
        tokio::time::sleep(self.latency).await;

        if self.unavailable {
            return Err(PortalError::collaborator("Unable to detect location"));
        }

        let point = if self.jitter > 0.0 {
            let mut rng = rand::thread_rng();
            GeoPoint {
                latitude: self.center.latitude + (rng.r#gen::<f64>() - 0.5) * self.jitter,
                longitude: self.center.longitude + (rng.r#gen::<f64>() - 0.5) * self.jitter,
            }
        } else {
            self.center
        };
        Ok(point)
    }
}
