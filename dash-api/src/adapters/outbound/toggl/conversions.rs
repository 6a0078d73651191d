use crate::domain::models::{
    GroupedReport, Project, ProjectId, ReportGroup, TimeEntry, TimeEntryId, Workspace,
};

pub fn to_domain_workspace(workspace: toggl::Workspace) -> Workspace {
    Workspace::new(workspace.id, workspace.name)
}

pub fn to_domain_project(project: toggl::Project) -> Project {
    let domain = Project::new(project.id, project.name);
    match project.color {
        Some(color) => domain.with_color(color),
        None => domain,
    }
}

pub fn to_domain_time_entry(entry: toggl::TimeEntry) -> TimeEntry {
    TimeEntry {
        id: TimeEntryId::new(entry.id),
        description: entry.description,
        start: entry.start,
        project_id: entry.project_id.map(ProjectId::new),
        stop: entry.stop,
    }
}

pub fn to_domain_report(report: toggl::SummaryReport) -> GroupedReport {
    GroupedReport {
        groups: report
            .groups()
            .iter()
            .map(|group| {
                ReportGroup::new(
                    group.id.map(ProjectId::new),
                    group.sub_groups().iter().map(|sub| sub.seconds).collect(),
                )
            })
            .collect(),
    }
}
