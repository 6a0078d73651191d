use std::collections::BTreeMap;

use super::{format_duration, ProjectId};

/// Total shown in place of a duration when the report could not be fetched.
pub const SUMMARY_ERROR_TEXT: &str = "Error";

/// Report of one day's entries, grouped by project and then by entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedReport {
    pub groups: Vec<ReportGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportGroup {
    /// `None` for entries without a project.
    pub project_id: Option<ProjectId>,
    /// Tracked seconds of each entry in the group.
    pub entry_seconds: Vec<i64>,
}

impl ReportGroup {
    pub fn new(project_id: Option<ProjectId>, entry_seconds: Vec<i64>) -> Self {
        Self {
            project_id,
            entry_seconds,
        }
    }

    pub fn total_milliseconds(&self) -> i64 {
        self.entry_seconds
            .iter()
            .map(|seconds| seconds.saturating_mul(1000))
            .fold(0, i64::saturating_add)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySummary {
    pub total_today: String,
    pub projects: BTreeMap<ProjectId, String>,
}

impl DailySummary {
    /// Degraded summary for when the report is unavailable.
    pub fn unavailable() -> Self {
        Self {
            total_today: SUMMARY_ERROR_TEXT.to_string(),
            projects: BTreeMap::new(),
        }
    }

    pub fn from_report(report: &GroupedReport) -> Self {
        let mut total_ms: i64 = 0;
        let mut projects = BTreeMap::new();

        for group in &report.groups {
            let project_ms = group.total_milliseconds();
            total_ms = total_ms.saturating_add(project_ms);

            if let Some(project_id) = group.project_id {
                projects.insert(project_id, format_duration(Some(project_ms)));
            }
        }

        Self {
            total_today: format_duration(Some(total_ms)),
            projects,
        }
    }
}
