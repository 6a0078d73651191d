use serde::{Deserialize, Serialize};
use time::Date;

/// Body of `POST /workspace/{workspace_id}/summary/time_entries` in the reports API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryReportRequest {
    pub start_date: String,
    pub end_date: String,
    pub grouping: String,
    pub subgrouping: String,
}

impl SummaryReportRequest {
    /// Entries of a single calendar day, grouped by project and then by entry.
    pub fn projects_for_day(date: Date) -> Self {
        Self {
            start_date: date.to_string(),
            end_date: date.to_string(),
            grouping: "projects".to_string(),
            subgrouping: "time_entries".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SummaryReport {
    #[serde(default)]
    groups: Option<Vec<ReportGroup>>,
}

impl SummaryReport {
    pub fn new(groups: Vec<ReportGroup>) -> Self {
        Self {
            groups: Some(groups),
        }
    }

    pub fn groups(&self) -> &[ReportGroup] {
        self.groups.as_deref().unwrap_or_default()
    }
}

/// One project in the summary. `id` is `None` for entries without a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReportGroup {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    sub_groups: Option<Vec<ReportSubGroup>>,
}

impl ReportGroup {
    pub fn new(id: Option<u64>, sub_groups: Vec<ReportSubGroup>) -> Self {
        Self {
            id,
            sub_groups: Some(sub_groups),
        }
    }

    pub fn sub_groups(&self) -> &[ReportSubGroup] {
        self.sub_groups.as_deref().unwrap_or_default()
    }

    pub fn total_seconds(&self) -> i64 {
        self.sub_groups().iter().map(|sub| sub.seconds).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReportSubGroup {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub seconds: i64,
}

impl ReportSubGroup {
    pub fn new(title: impl Into<String>, seconds: i64) -> Self {
        Self {
            title: Some(title.into()),
            seconds,
        }
    }
}
