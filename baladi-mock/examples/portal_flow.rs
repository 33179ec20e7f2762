// baladi-mock/examples/portal_flow.rs
// Drives a full portal session against the mock collaborators:
// bootstrap, login, report wizard, dashboard, notifications.

use std::sync::Arc;
use std::time::Duration;

use baladi_client::wizard::{Field, ReportWizard};
use baladi_client::{Access, Screen, SessionGuard, TokenStore, dashboard, notifications};
use baladi_mock::{MockAuth, MockDirectory, MockGeolocation, MockSubmission};
use shared::client::LoginRequest;
use shared::models::Category;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let state_dir = tempfile::tempdir()?;
    let latency = Duration::from_millis(300);

    let auth = Arc::new(MockAuth::new().with_latency(latency));
    let directory = MockDirectory::seeded().with_latency(latency);
    let submission = MockSubmission::new().with_latency(latency).with_failure_rate(0.1);
    let geolocation = MockGeolocation::new().with_latency(latency).with_jitter(0.1);

    // Session bootstrap: no stored token on first run
    let mut guard = SessionGuard::new(auth, TokenStore::new(state_dir.path()));
    guard.bootstrap().await?;

    match guard.authorize(&Screen::Dashboard) {
        Access::Allow => tracing::info!("Already signed in"),
        Access::Redirect { to, .. } => {
            tracing::info!("Redirected to {}", to);
            let user = guard
                .login(&LoginRequest {
                    email: "amina@example.com".to_string(),
                    password: "password123".to_string(),
                })
                .await?;
            tracing::info!("Signed in as {}", user.display_name);
        }
        Access::Pending => unreachable!("bootstrap already resolved"),
    }

    // Dashboard
    use baladi_client::api::DirectoryApi;
    let reports = directory.fetch_reports().await?;
    let stats = dashboard::problem_stats(&reports);
    tracing::info!(
        pending = stats.pending,
        in_progress = stats.in_progress,
        fixed = stats.fixed,
        "Report overview"
    );

    // Report a problem
    let mut wizard = ReportWizard::new_problem();
    wizard.select_category(Category::Roads)?;
    wizard.update_field(Field::Description, "Pothole near the market entrance")?;
    match wizard.detect_location(&geolocation).await {
        Ok(point) => tracing::info!(lat = point.latitude, lon = point.longitude, "Located"),
        Err(e) => {
            tracing::warn!("Detection failed: {}", e);
            wizard.update_field(Field::LocationText, "Market St, gate 3")?;
        }
    }
    wizard.next()?;

    // The mock fails about one submission in ten; retry once like the UI would
    let id = match wizard.submit(&submission).await {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!("Submission failed ({}), retrying", e);
            wizard.submit(&submission).await?
        }
    };
    tracing::info!(report_id = id, "Report submitted");

    // Notifications
    let mut list = directory.fetch_notifications().await?;
    let marked = notifications::mark_all_read(&directory, &mut list).await?;
    tracing::info!(marked, "Notifications cleared");

    Ok(())
}
