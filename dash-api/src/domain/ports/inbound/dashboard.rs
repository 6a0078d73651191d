use async_trait::async_trait;

use crate::domain::{
    models::{DailySummary, NewTimeEntry, Project, TimerStatus, ToggleOutcome},
    TimeTrackingError,
};

/// Inbound port for the dashboard use cases.
///
/// The reads never fail: a failing remote call becomes an empty project list,
/// an error status or an error-marker summary.
#[async_trait]
pub trait DashboardService: Send + Sync + 'static {
    /// Active projects for the project picker. Empty if the listing fails.
    async fn list_projects(&self) -> Vec<Project>;

    /// Current timer state.
    async fn get_status(&self) -> TimerStatus;

    /// Totals for the current UTC day.
    async fn get_daily_summary(&self) -> DailySummary;

    /// Stop the running timer, or start a new one from `entry` if none is running.
    ///
    /// State is read from the remote service on every call, so a concurrent
    /// start from another client between the read and the write is not detected.
    async fn toggle(&self, entry: &NewTimeEntry) -> Result<ToggleOutcome, TimeTrackingError>;
}
