//! Dashboard view-model helpers
//!
//! Pure functions over the report list fetched from the directory
//! collaborator; the rendering layer consumes the results as-is.

use shared::models::{Report, ReportKind, ReportStatus};

/// Problem status tallies for the stat cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportStats {
    pub pending: usize,
    pub in_progress: usize,
    /// Fixed and Resolved both count here
    pub fixed: usize,
}

/// Tally problem reports by status; complaints are not counted.
pub fn problem_stats(reports: &[Report]) -> ReportStats {
    let mut stats = ReportStats::default();
    for report in reports {
        if report.kind != ReportKind::Problem {
            continue;
        }
        match report.status {
            ReportStatus::Pending => stats.pending += 1,
            ReportStatus::InProgress => stats.in_progress += 1,
            s if s.is_settled() => stats.fixed += 1,
            _ => {}
        }
    }
    stats
}

/// Reports of one kind, for the dashboard tabs
pub fn filter_by_kind(reports: &[Report], kind: ReportKind) -> Vec<&Report> {
    reports.iter().filter(|r| r.kind == kind).collect()
}

/// The `n` most recent reports, newest first
pub fn recent(reports: &[Report], n: usize) -> Vec<&Report> {
    let mut sorted: Vec<&Report> = reports.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(n);
    sorted
}
