use std::sync::Arc;

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::domain::{
    models::{
        DailySummary, NewTimeEntry, Project, TimerStatus, ToggleOutcome, WorkspaceContext,
        API_ERROR_TEXT,
    },
    ports::{inbound::DashboardService, outbound::TimeTrackingClient},
    TimeTrackingError,
};

/// Implementation of the DashboardService inbound port.
///
/// Holds no timer state of its own; every call re-reads the remote service
/// through the TimeTrackingClient outbound port.
pub struct DashboardServiceImpl<C> {
    client: Arc<C>,
    workspace: WorkspaceContext,
    clock: fn() -> OffsetDateTime,
}

impl<C> DashboardServiceImpl<C> {
    pub fn new(client: Arc<C>, workspace: WorkspaceContext) -> Self {
        Self {
            client,
            workspace,
            clock: OffsetDateTime::now_utc,
        }
    }

    /// Replace the UTC clock used for "now" and "today".
    #[cfg(test)]
    pub fn with_clock(mut self, clock: fn() -> OffsetDateTime) -> Self {
        self.clock = clock;
        self
    }

    fn now(&self) -> OffsetDateTime {
        (self.clock)()
    }
}

#[async_trait]
impl<C: TimeTrackingClient> DashboardService for DashboardServiceImpl<C> {
    async fn list_projects(&self) -> Vec<Project> {
        match self
            .client
            .list_active_projects(self.workspace.workspace_id())
            .await
        {
            Ok(projects) => projects,
            Err(e) => {
                tracing::error!("Failed to list projects, rendering an empty list: {}", e);
                Vec::new()
            }
        }
    }

    async fn get_status(&self) -> TimerStatus {
        match self.client.get_current_entry().await {
            Ok(entry) => TimerStatus::from_current_entry(entry, self.now()),
            Err(e) => {
                tracing::warn!("Failed to fetch current time entry: {}", e);
                TimerStatus::error(API_ERROR_TEXT)
            }
        }
    }

    async fn get_daily_summary(&self) -> DailySummary {
        let today = self.now().date();

        match self
            .client
            .get_daily_report(self.workspace.workspace_id(), today)
            .await
        {
            Ok(report) => DailySummary::from_report(&report),
            Err(e) => {
                tracing::warn!(%today, "Failed to fetch daily report: {}", e);
                DailySummary::unavailable()
            }
        }
    }

    async fn toggle(&self, entry: &NewTimeEntry) -> Result<ToggleOutcome, TimeTrackingError> {
        let workspace_id = self.workspace.workspace_id();

        if let Some(entry_id) = self.get_status().await.running_entry_id() {
            let stopped = self.client.stop_entry(workspace_id, entry_id).await?;
            tracing::info!(entry_id = %stopped.id, "stopped timer");
            return Ok(ToggleOutcome::Stopped(stopped.id));
        }

        let created = self.client.create_entry(workspace_id, entry).await?;
        tracing::info!(entry_id = %created.id, "started timer");
        Ok(ToggleOutcome::Started(created.id))
    }
}
