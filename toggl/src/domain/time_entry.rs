use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Duration Toggl stores for an entry that is still running.
pub const RUNNING_DURATION: i64 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: u64,
    #[serde(default)]
    pub workspace_id: Option<u64>,
    #[serde(default)]
    pub project_id: Option<u64>,
    #[serde(default)]
    pub description: Option<String>,
    /// ISO 8601 start timestamp, exactly as sent by Toggl.
    pub start: String,
    #[serde(default)]
    pub stop: Option<String>,
    #[serde(default)]
    pub duration: i64,
}

impl TimeEntry {
    pub fn is_running(&self) -> bool {
        self.stop.is_none()
    }
}

/// Payload for `POST /workspaces/{workspace_id}/time_entries`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTimeEntryPayload {
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start: OffsetDateTime,
    pub duration: i64,
    pub workspace_id: u64,
    pub project_id: Option<u64>,
    pub created_with: String,
}

impl NewTimeEntryPayload {
    /// A running entry starting at `start`.
    pub fn running(
        workspace_id: u64,
        description: impl Into<String>,
        project_id: Option<u64>,
        start: OffsetDateTime,
        created_with: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            start,
            duration: RUNNING_DURATION,
            workspace_id,
            project_id,
            created_with: created_with.into(),
        }
    }
}
