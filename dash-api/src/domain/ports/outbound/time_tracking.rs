use async_trait::async_trait;
use time::Date;

use crate::domain::{
    models::{
        GroupedReport, NewTimeEntry, Project, TimeEntry, TimeEntryId, Workspace, WorkspaceId,
    },
    TimeTrackingError,
};

/// Outbound port for the remote time tracking service.
///
/// Every call returns a `Result`; deciding which failures are fatal, degraded
/// or only logged is up to the caller.
#[async_trait]
pub trait TimeTrackingClient: Send + Sync + 'static {
    /// Workspaces the credential has access to, in the order the service lists them.
    async fn list_workspaces(&self) -> Result<Vec<Workspace>, TimeTrackingError>;

    /// Active projects of a workspace.
    async fn list_active_projects(
        &self,
        workspace_id: WorkspaceId,
    ) -> Result<Vec<Project>, TimeTrackingError>;

    /// The running entry, or `None` if no timer is running.
    async fn get_current_entry(&self) -> Result<Option<TimeEntry>, TimeTrackingError>;

    /// Entries of a single UTC calendar day, grouped by project and then by entry.
    async fn get_daily_report(
        &self,
        workspace_id: WorkspaceId,
        date: Date,
    ) -> Result<GroupedReport, TimeTrackingError>;

    /// Start an open-ended entry at the time of the call.
    async fn create_entry(
        &self,
        workspace_id: WorkspaceId,
        entry: &NewTimeEntry,
    ) -> Result<TimeEntry, TimeTrackingError>;

    /// Stop a running entry at the time of the call.
    async fn stop_entry(
        &self,
        workspace_id: WorkspaceId,
        entry_id: TimeEntryId,
    ) -> Result<TimeEntry, TimeTrackingError>;
}
