use crate::domain::models::Project;

const INDEX_TEMPLATE: &str = include_str!("../../../../templates/index.html");
const PROJECT_OPTIONS_SLOT: &str = "{{project_options}}";

/// Render the dashboard page with one `<option>` per project.
pub fn render_index(projects: &[Project]) -> String {
    let options: String = projects.iter().map(project_option).collect();
    INDEX_TEMPLATE.replace(PROJECT_OPTIONS_SLOT, &options)
}

fn project_option(project: &Project) -> String {
    let color = project
        .color
        .as_deref()
        .map(|color| format!(r#" data-color="{}""#, ammonia::clean_text(color)))
        .unwrap_or_default();

    format!(
        r#"<option value="{}"{}>{}</option>"#,
        project.id,
        color,
        ammonia::clean_text(&project.name)
    )
}
