//! Mock submission collaborator

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use baladi_client::api::SubmissionApi;
use baladi_client::wizard::{ComplaintDraft, ProblemDraft};
use rand::Rng;
use shared::client::SubmitResponse;
use shared::error::{PortalError, PortalResult};

pub struct MockSubmission {
    latency: Duration,
    /// Probability in [0, 1] that a call fails; 0 by default
    failure_rate: f64,
    /// When set, every call fails with exactly this message
    forced_error: Mutex<Option<String>>,
}

impl Default for MockSubmission {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSubmission {
    pub fn new() -> Self {
        Self {
            latency: Duration::ZERO,
            failure_rate: 0.0,
            forced_error: Mutex::new(None),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Random failure probability, like the original backend simulation
    pub fn with_failure_rate(mut self, rate: f64) -> Self {
        self.failure_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Force every call to fail with the given message until cleared
    pub fn fail_with(&self, message: &str) {
        *self.forced_error.lock().unwrap() = Some(message.to_string());
    }

    /// Clear a forced failure; random failure_rate still applies
    pub fn recover(&self) {
        *self.forced_error.lock().unwrap() = None;
    }

    async fn settle(&self, failure_message: &str) -> PortalResult<SubmitResponse> {
        tokio::time::sleep(self.latency).await;

        if let Some(message) = self.forced_error.lock().unwrap().clone() {
            return Err(PortalError::collaborator(message));
        }
        if self.failure_rate > 0.0 && rand::thread_rng().r#gen::<f64>() < self.failure_rate {
            return Err(PortalError::collaborator(failure_message.to_string()));
        }

        let id = shared::util::snowflake_id();
        tracing::debug!(report_id = id, "Mock submission accepted");
        Ok(SubmitResponse { id })
    }
}

#[async_trait]
impl SubmissionApi for MockSubmission {
    async fn submit_report(&self, _draft: &ProblemDraft) -> PortalResult<SubmitResponse> {
        self.settle("Failed to submit report. Please try again later.")
            .await
    }

    async fn submit_complaint(&self, _draft: &ComplaintDraft) -> PortalResult<SubmitResponse> {
        self.settle("Failed to submit complaint. Please try again later.")
            .await
    }
}
