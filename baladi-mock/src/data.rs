//! Mock directory collaborator
//!
//! Serves the seeded reports, notifications and profile the original
//! portal shipped with, and mutates them in memory on writes.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use baladi_client::api::DirectoryApi;
use chrono::{TimeZone, Utc};
use shared::client::ProfileUpdate;
use shared::error::{PortalError, PortalResult};
use shared::models::{
    Category, Notification, NotificationKind, Report, ReportDetails, ReportKind, ReportStatus,
    StatusUpdate, UserInfo,
};

pub struct MockDirectory {
    latency: Duration,
    reports: Mutex<Vec<ReportDetails>>,
    notifications: Mutex<Vec<Notification>>,
    profile: Mutex<UserInfo>,
}

impl Default for MockDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}

impl MockDirectory {
    /// Directory pre-loaded with the demo data set
    pub fn seeded() -> Self {
        Self {
            latency: Duration::ZERO,
            reports: Mutex::new(seed_reports()),
            notifications: Mutex::new(seed_notifications()),
            profile: Mutex::new(UserInfo {
                id: 1,
                display_name: "Mock User".to_string(),
                email: "user@example.com".to_string(),
                phone: None,
            }),
        }
    }

    /// Directory with no records at all
    pub fn empty() -> Self {
        Self {
            latency: Duration::ZERO,
            reports: Mutex::new(vec![]),
            notifications: Mutex::new(vec![]),
            profile: Mutex::new(UserInfo {
                id: 1,
                display_name: "Mock User".to_string(),
                email: "user@example.com".to_string(),
                phone: None,
            }),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl DirectoryApi for MockDirectory {
    async fn fetch_reports(&self) -> PortalResult<Vec<Report>> {
        tokio::time::sleep(self.latency).await;
        Ok(self
            .reports
            .lock()
            .unwrap()
            .iter()
            .map(|d| d.report.clone())
            .collect())
    }

    async fn fetch_report_details(&self, id: i64) -> PortalResult<ReportDetails> {
        tokio::time::sleep(self.latency).await;
        self.reports
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.report.id == id)
            .cloned()
            .ok_or_else(|| PortalError::collaborator("Report not found"))
    }

    async fn fetch_notifications(&self) -> PortalResult<Vec<Notification>> {
        tokio::time::sleep(self.latency).await;
        Ok(self.notifications.lock().unwrap().clone())
    }

    async fn mark_notifications_read(&self, ids: &[i64]) -> PortalResult<()> {
        tokio::time::sleep(self.latency).await;
        let mut notifications = self.notifications.lock().unwrap();
        for notification in notifications.iter_mut() {
            if ids.contains(&notification.id) {
                notification.read = true;
            }
        }
        Ok(())
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> PortalResult<UserInfo> {
        tokio::time::sleep(self.latency).await;

        if update.full_name.trim().is_empty() {
            return Err(PortalError::collaborator("Name cannot be empty"));
        }

        let mut profile = self.profile.lock().unwrap();
        profile.display_name = update.full_name.clone();
        profile.phone = update.phone.clone();
        Ok(profile.clone())
    }
}

fn seed_reports() -> Vec<ReportDetails> {
    vec![
        ReportDetails {
            report: Report {
                id: 1,
                kind: ReportKind::Problem,
                title: "Pothole on Main Street".to_string(),
                category: Some(Category::Roads),
                status: ReportStatus::Pending,
                created_at: Utc.with_ymd_and_hms(2023, 10, 26, 10, 0, 0).unwrap(),
                location: Some("Main St & 1st Ave".to_string()),
                municipality: None,
            },
            description: "Large pothole near the crosswalk, growing after the rain.".to_string(),
            photo_url: Some("https://placehold.co/400x300?text=Pothole".to_string()),
            updates: vec![
                StatusUpdate {
                    timestamp: Utc.with_ymd_and_hms(2023, 10, 26, 11, 0, 0).unwrap(),
                    status: ReportStatus::InProgress,
                    comment: "Assigned to Roads Department.".to_string(),
                },
                StatusUpdate {
                    timestamp: Utc.with_ymd_and_hms(2023, 10, 26, 10, 5, 0).unwrap(),
                    status: ReportStatus::Pending,
                    comment: "Report Received.".to_string(),
                },
            ],
        },
        ReportDetails {
            report: Report {
                id: 2,
                kind: ReportKind::Problem,
                title: "Leaking fire hydrant".to_string(),
                category: Some(Category::Water),
                status: ReportStatus::InProgress,
                created_at: Utc.with_ymd_and_hms(2023, 10, 25, 14, 30, 0).unwrap(),
                location: Some("Park Avenue".to_string()),
                municipality: None,
            },
            description: "Hydrant has been leaking since Monday.".to_string(),
            photo_url: None,
            updates: vec![StatusUpdate {
                timestamp: Utc.with_ymd_and_hms(2023, 10, 25, 14, 35, 0).unwrap(),
                status: ReportStatus::Pending,
                comment: "Report Received.".to_string(),
            }],
        },
        ReportDetails {
            report: Report {
                id: 3,
                kind: ReportKind::Complaint,
                title: "Delayed garbage collection".to_string(),
                category: None,
                status: ReportStatus::Resolved,
                created_at: Utc.with_ymd_and_hms(2023, 10, 24, 9, 15, 0).unwrap(),
                location: None,
                municipality: Some("Municipality A".to_string()),
            },
            description: "Bins were not collected on the scheduled day.".to_string(),
            photo_url: None,
            updates: vec![StatusUpdate {
                timestamp: Utc.with_ymd_and_hms(2023, 10, 25, 15, 0, 0).unwrap(),
                status: ReportStatus::Resolved,
                comment: "Collection schedule restored.".to_string(),
            }],
        },
        ReportDetails {
            report: Report {
                id: 4,
                kind: ReportKind::Problem,
                title: "Street light out".to_string(),
                category: Some(Category::Electricity),
                status: ReportStatus::Fixed,
                created_at: Utc.with_ymd_and_hms(2023, 10, 20, 11, 0, 0).unwrap(),
                location: Some("Oak Streetlamp #123".to_string()),
                municipality: None,
            },
            description: "Lamp has been dark for a week.".to_string(),
            photo_url: None,
            updates: vec![StatusUpdate {
                timestamp: Utc.with_ymd_and_hms(2023, 10, 22, 16, 0, 0).unwrap(),
                status: ReportStatus::Fixed,
                comment: "Bulb replaced.".to_string(),
            }],
        },
    ]
}

fn seed_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 101,
            kind: NotificationKind::StatusUpdate,
            message: "Your report #2 (Leaking fire hydrant) status changed to IN_PROGRESS."
                .to_string(),
            read: false,
            timestamp: Utc.with_ymd_and_hms(2023, 10, 26, 11, 0, 0).unwrap(),
            link: Some("/report/2".to_string()),
        },
        Notification {
            id: 102,
            kind: NotificationKind::NewMessage,
            message: "Admin left a comment on report #1.".to_string(),
            read: false,
            timestamp: Utc.with_ymd_and_hms(2023, 10, 26, 9, 30, 0).unwrap(),
            link: Some("/report/1".to_string()),
        },
        Notification {
            id: 103,
            kind: NotificationKind::ReportResolved,
            message: "Your complaint #3 (Delayed garbage collection) has been RESOLVED."
                .to_string(),
            read: true,
            timestamp: Utc.with_ymd_and_hms(2023, 10, 25, 15, 0, 0).unwrap(),
            link: Some("/report/3".to_string()),
        },
        Notification {
            id: 104,
            kind: NotificationKind::SystemAlert,
            message: "Welcome to the new Baladiyati platform!".to_string(),
            read: true,
            timestamp: Utc.with_ymd_and_hms(2023, 10, 24, 8, 0, 0).unwrap(),
            link: None,
        },
    ]
}
