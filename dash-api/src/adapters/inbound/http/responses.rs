//! HTTP response types for the dashboard endpoints.
//!
//! These types serialize to the JSON format the dashboard page polls for.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::models::{DailySummary, ProjectId, TimeEntryId, TimerStatus, STOPPED_TEXT};

/// Response for the status poll, tagged by `status`.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum StatusResponse {
    Stopped {
        text: String,
    },
    Running {
        /// Entry description.
        text: String,
        /// Elapsed time as HH:MM:SS.
        duration: String,
        id: TimeEntryId,
        project_id: Option<ProjectId>,
        /// Start timestamp exactly as the service reported it.
        start: String,
    },
    Error {
        text: String,
    },
}

impl From<TimerStatus> for StatusResponse {
    fn from(status: TimerStatus) -> Self {
        match status {
            TimerStatus::Stopped => Self::Stopped {
                text: STOPPED_TEXT.to_string(),
            },
            TimerStatus::Running(timer) => Self::Running {
                text: timer.description,
                duration: timer.duration,
                id: timer.id,
                project_id: timer.project_id,
                start: timer.start,
            },
            TimerStatus::Error { message } => Self::Error { text: message },
        }
    }
}

/// Response for the summary poll.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct SummaryResponse {
    pub total_today: String,
    /// Project id -> HH:MM:SS.
    pub projects: BTreeMap<ProjectId, String>,
}

impl From<DailySummary> for SummaryResponse {
    fn from(summary: DailySummary) -> Self {
        Self {
            total_today: summary.total_today,
            projects: summary.projects,
        }
    }
}

/// Generic confirmation returned by the toggle action.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ToggleResponse {
    pub result: &'static str,
}

impl ToggleResponse {
    pub fn toggled() -> Self {
        Self { result: "toggled" }
    }
}
