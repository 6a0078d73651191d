//! Scripted TimeTrackingClient for service and route tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use time::Date;

use crate::domain::{
    models::{
        GroupedReport, NewTimeEntry, Project, TimeEntry, TimeEntryId, Workspace, WorkspaceId,
    },
    ports::outbound::TimeTrackingClient,
    TimeTrackingError,
};

/// Id handed out for entries created through the mock.
pub const CREATED_ENTRY_ID: u64 = 9001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    Timeout,
    Unavailable,
    Unauthorized,
}

impl From<MockFailure> for TimeTrackingError {
    fn from(failure: MockFailure) -> Self {
        match failure {
            MockFailure::Timeout => TimeTrackingError::Timeout,
            MockFailure::Unavailable => TimeTrackingError::Unavailable("connection refused".into()),
            MockFailure::Unauthorized => TimeTrackingError::AuthenticationFailed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    ListWorkspaces,
    ListActiveProjects(WorkspaceId),
    GetCurrentEntry,
    GetDailyReport(WorkspaceId, Date),
    CreateEntry(WorkspaceId, NewTimeEntry),
    StopEntry(WorkspaceId, TimeEntryId),
}

/// Mock client that returns configured responses and records every call.
///
/// Clones share the call log, so a test can keep one handle and give another
/// to the code under test.
#[derive(Clone)]
pub struct MockTimeTrackingClient {
    workspaces: Result<Vec<Workspace>, MockFailure>,
    projects: Result<Vec<Project>, MockFailure>,
    current_entry: Result<Option<TimeEntry>, MockFailure>,
    report: Result<GroupedReport, MockFailure>,
    create_failure: Option<MockFailure>,
    stop_failure: Option<MockFailure>,
    calls: Arc<Mutex<Vec<MockCall>>>,
}

impl MockTimeTrackingClient {
    /// One workspace, no projects, no running entry and an empty report.
    pub fn new() -> Self {
        Self {
            workspaces: Ok(vec![Workspace::new(7, "Personal")]),
            projects: Ok(Vec::new()),
            current_entry: Ok(None),
            report: Ok(GroupedReport::default()),
            create_failure: None,
            stop_failure: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_workspaces(mut self, workspaces: Vec<Workspace>) -> Self {
        self.workspaces = Ok(workspaces);
        self
    }

    pub fn failing_workspaces(mut self, failure: MockFailure) -> Self {
        self.workspaces = Err(failure);
        self
    }

    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = Ok(projects);
        self
    }

    pub fn failing_projects(mut self, failure: MockFailure) -> Self {
        self.projects = Err(failure);
        self
    }

    pub fn with_current_entry(mut self, entry: TimeEntry) -> Self {
        self.current_entry = Ok(Some(entry));
        self
    }

    pub fn failing_current_entry(mut self, failure: MockFailure) -> Self {
        self.current_entry = Err(failure);
        self
    }

    pub fn with_report(mut self, report: GroupedReport) -> Self {
        self.report = Ok(report);
        self
    }

    pub fn failing_report(mut self, failure: MockFailure) -> Self {
        self.report = Err(failure);
        self
    }

    pub fn failing_create(mut self, failure: MockFailure) -> Self {
        self.create_failure = Some(failure);
        self
    }

    pub fn failing_stop(mut self, failure: MockFailure) -> Self {
        self.stop_failure = Some(failure);
        self
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn create_calls(&self) -> Vec<(WorkspaceId, NewTimeEntry)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                MockCall::CreateEntry(workspace_id, entry) => Some((workspace_id, entry)),
                _ => None,
            })
            .collect()
    }

    pub fn stop_calls(&self) -> Vec<(WorkspaceId, TimeEntryId)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                MockCall::StopEntry(workspace_id, entry_id) => Some((workspace_id, entry_id)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: MockCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Default for MockTimeTrackingClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TimeTrackingClient for MockTimeTrackingClient {
    async fn list_workspaces(&self) -> Result<Vec<Workspace>, TimeTrackingError> {
        self.record(MockCall::ListWorkspaces);
        self.workspaces.clone().map_err(Into::into)
    }

    async fn list_active_projects(
        &self,
        workspace_id: WorkspaceId,
    ) -> Result<Vec<Project>, TimeTrackingError> {
        self.record(MockCall::ListActiveProjects(workspace_id));
        self.projects.clone().map_err(Into::into)
    }

    async fn get_current_entry(&self) -> Result<Option<TimeEntry>, TimeTrackingError> {
        self.record(MockCall::GetCurrentEntry);
        self.current_entry.clone().map_err(Into::into)
    }

    async fn get_daily_report(
        &self,
        workspace_id: WorkspaceId,
        date: Date,
    ) -> Result<GroupedReport, TimeTrackingError> {
        self.record(MockCall::GetDailyReport(workspace_id, date));
        self.report.clone().map_err(Into::into)
    }

    async fn create_entry(
        &self,
        workspace_id: WorkspaceId,
        entry: &NewTimeEntry,
    ) -> Result<TimeEntry, TimeTrackingError> {
        self.record(MockCall::CreateEntry(workspace_id, entry.clone()));
        if let Some(failure) = self.create_failure {
            return Err(failure.into());
        }

        let mut created = TimeEntry::new(CREATED_ENTRY_ID, "2026-10-14T10:00:00Z")
            .with_description(entry.description.clone());
        created.project_id = entry.project_id;
        Ok(created)
    }

    async fn stop_entry(
        &self,
        workspace_id: WorkspaceId,
        entry_id: TimeEntryId,
    ) -> Result<TimeEntry, TimeTrackingError> {
        self.record(MockCall::StopEntry(workspace_id, entry_id));
        if let Some(failure) = self.stop_failure {
            return Err(failure.into());
        }

        let mut stopped = TimeEntry::new(entry_id.as_u64(), "2026-10-14T10:00:00Z");
        stopped.stop = Some("2026-10-14T11:00:00Z".to_string());
        Ok(stopped)
    }
}
