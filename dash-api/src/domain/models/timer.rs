use time::{
    format_description::well_known::{Iso8601, Rfc3339},
    OffsetDateTime,
};

use super::{format_duration, ProjectId, TimeEntryId};

pub const STOPPED_TEXT: &str = "Timer stopped";
pub const NO_DESCRIPTION_TEXT: &str = "(no description)";
pub const API_ERROR_TEXT: &str = "API error";

/// A tracked interval in the time tracking service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEntry {
    pub id: TimeEntryId,
    pub description: Option<String>,
    /// Start timestamp as reported by the service (ISO 8601, UTC).
    pub start: String,
    pub project_id: Option<ProjectId>,
    pub stop: Option<String>,
}

impl TimeEntry {
    #[cfg(test)]
    pub fn new(id: u64, start: impl Into<String>) -> Self {
        Self {
            id: TimeEntryId::new(id),
            description: None,
            start: start.into(),
            project_id: None,
            stop: None,
        }
    }

    #[cfg(test)]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[cfg(test)]
    pub fn with_project(mut self, project_id: u64) -> Self {
        self.project_id = Some(ProjectId::new(project_id));
        self
    }

    pub fn is_running(&self) -> bool {
        self.stop.is_none()
    }

    /// Parse the start timestamp. Accepts both `Z` and explicit offsets.
    pub fn started_at(&self) -> Result<OffsetDateTime, time::error::Parse> {
        OffsetDateTime::parse(&self.start, &Rfc3339)
            .or_else(|_| OffsetDateTime::parse(&self.start, &Iso8601::DEFAULT))
    }
}

/// Request to start a new running entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTimeEntry {
    pub description: String,
    pub project_id: Option<ProjectId>,
}

impl NewTimeEntry {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            project_id: None,
        }
    }

    pub fn with_project(mut self, project_id: Option<ProjectId>) -> Self {
        self.project_id = project_id;
        self
    }
}

/// A timer that is currently running, with its elapsed time already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunningTimer {
    pub description: String,
    pub duration: String,
    pub id: TimeEntryId,
    pub project_id: Option<ProjectId>,
    pub start: String,
}

/// Current state of the remote timer as seen by one poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerStatus {
    Stopped,
    Running(RunningTimer),
    Error { message: String },
}

impl TimerStatus {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Derive the status from the service's current entry at the instant `now`.
    pub fn from_current_entry(entry: Option<TimeEntry>, now: OffsetDateTime) -> Self {
        let Some(entry) = entry.filter(TimeEntry::is_running) else {
            return Self::Stopped;
        };

        let started_at = match entry.started_at() {
            Ok(started_at) => started_at,
            Err(e) => {
                tracing::warn!(start = %entry.start, "unparseable start timestamp: {}", e);
                return Self::error(API_ERROR_TEXT);
            }
        };

        let elapsed_ms = i64::try_from((now - started_at).whole_milliseconds()).unwrap_or(i64::MAX);

        Self::Running(RunningTimer {
            description: entry
                .description
                .unwrap_or_else(|| NO_DESCRIPTION_TEXT.to_string()),
            duration: format_duration(Some(elapsed_ms)),
            id: entry.id,
            project_id: entry.project_id,
            start: entry.start,
        })
    }

    pub fn running_entry_id(&self) -> Option<TimeEntryId> {
        match self {
            Self::Running(timer) => Some(timer.id),
            _ => None,
        }
    }
}

/// What a toggle did to the remote timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Stopped(TimeEntryId),
    Started(TimeEntryId),
}
