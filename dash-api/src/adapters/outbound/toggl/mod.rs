mod conversions;

use std::time::Duration;

use async_trait::async_trait;
use time::{Date, OffsetDateTime};

use crate::domain::{
    models::{
        GroupedReport, NewTimeEntry, Project, TimeEntry, TimeEntryId, Workspace, WorkspaceId,
    },
    ports::outbound::TimeTrackingClient,
    TimeTrackingError,
};

use self::conversions::{
    to_domain_project, to_domain_report, to_domain_time_entry, to_domain_workspace,
};

/// Status polls give up after this long.
pub const STATUS_TIMEOUT: Duration = Duration::from_secs(5);
/// Summary polls give up after this long.
pub const REPORT_TIMEOUT: Duration = Duration::from_secs(10);

/// Adapter that wraps the Toggl client to implement the TimeTrackingClient port.
pub struct TogglAdapter {
    client: toggl::TogglClient,
    created_with: String,
}

impl TogglAdapter {
    pub fn new(client: toggl::TogglClient, created_with: impl Into<String>) -> Self {
        Self {
            client,
            created_with: created_with.into(),
        }
    }
}

#[async_trait]
impl TimeTrackingClient for TogglAdapter {
    async fn list_workspaces(&self) -> Result<Vec<Workspace>, TimeTrackingError> {
        let workspaces = self
            .client
            .fetch_workspaces()
            .await
            .map_err(map_toggl_error)?;
        Ok(workspaces.into_iter().map(to_domain_workspace).collect())
    }

    async fn list_active_projects(
        &self,
        workspace_id: WorkspaceId,
    ) -> Result<Vec<Project>, TimeTrackingError> {
        let projects = self
            .client
            .fetch_active_projects(workspace_id.as_u64())
            .await
            .map_err(map_toggl_error)?;
        Ok(projects.into_iter().map(to_domain_project).collect())
    }

    async fn get_current_entry(&self) -> Result<Option<TimeEntry>, TimeTrackingError> {
        let entry = self
            .client
            .fetch_current_entry(Some(STATUS_TIMEOUT))
            .await
            .map_err(map_toggl_error)?;
        Ok(entry.map(to_domain_time_entry))
    }

    async fn get_daily_report(
        &self,
        workspace_id: WorkspaceId,
        date: Date,
    ) -> Result<GroupedReport, TimeTrackingError> {
        let report = self
            .client
            .fetch_summary_report(workspace_id.as_u64(), date, Some(REPORT_TIMEOUT))
            .await
            .map_err(map_toggl_error)?;
        Ok(to_domain_report(report))
    }

    async fn create_entry(
        &self,
        workspace_id: WorkspaceId,
        entry: &NewTimeEntry,
    ) -> Result<TimeEntry, TimeTrackingError> {
        let payload = toggl::NewTimeEntryPayload::running(
            workspace_id.as_u64(),
            entry.description.clone(),
            entry.project_id.map(u64::from),
            OffsetDateTime::now_utc(),
            self.created_with.clone(),
        );

        let created = self
            .client
            .create_time_entry(&payload)
            .await
            .map_err(map_toggl_error)?;
        Ok(to_domain_time_entry(created))
    }

    async fn stop_entry(
        &self,
        workspace_id: WorkspaceId,
        entry_id: TimeEntryId,
    ) -> Result<TimeEntry, TimeTrackingError> {
        let stopped = self
            .client
            .stop_time_entry(workspace_id.as_u64(), entry_id.as_u64())
            .await
            .map_err(map_toggl_error)?;
        Ok(to_domain_time_entry(stopped))
    }
}

fn map_toggl_error(e: toggl::TogglFetchError) -> TimeTrackingError {
    match e {
        toggl::TogglFetchError::Unauthorized | toggl::TogglFetchError::PaymentRequired => {
            TimeTrackingError::AuthenticationFailed
        }
        toggl::TogglFetchError::RateLimited => TimeTrackingError::RateLimited,
        toggl::TogglFetchError::Timeout => TimeTrackingError::Timeout,
        toggl::TogglFetchError::ServerError(msg) | toggl::TogglFetchError::ResponseError(msg) => {
            TimeTrackingError::Unavailable(msg)
        }
        toggl::TogglFetchError::ParsingError(msg) => TimeTrackingError::invalid_response(msg),
        toggl::TogglFetchError::Other(msg) => TimeTrackingError::unknown(msg),
    }
}
