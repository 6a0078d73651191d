use serde::{de::IgnoredAny, Deserialize, Deserializer};

use crate::domain::models::{NewTimeEntry, ProjectId};

/// Body of the toggle action. Only read when a new timer is started.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TogglePayload {
    #[serde(default)]
    pub description: Option<String>,
    /// Accepts a number or a numeric string. Empty or unparseable values mean no project.
    #[serde(default, deserialize_with = "deserialize_project_id")]
    pub project_id: Option<ProjectId>,
}

impl From<TogglePayload> for NewTimeEntry {
    fn from(payload: TogglePayload) -> Self {
        NewTimeEntry::new(payload.description.unwrap_or_default()).with_project(payload.project_id)
    }
}

fn deserialize_project_id<'de, D>(deserializer: D) -> Result<Option<ProjectId>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawProjectId {
        Number(u64),
        Text(String),
        Other(IgnoredAny),
    }

    let project_id = match Option::<RawProjectId>::deserialize(deserializer)? {
        None => None,
        Some(RawProjectId::Number(id)) => Some(ProjectId::new(id)),
        Some(RawProjectId::Text(text)) if text.trim().is_empty() => None,
        Some(RawProjectId::Text(text)) => match text.parse() {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::warn!(project_id = %text, "ignoring invalid projectId: {}", e);
                None
            }
        },
        Some(RawProjectId::Other(_)) => {
            tracing::warn!("ignoring projectId that is neither a number nor a string");
            None
        }
    };

    Ok(project_id)
}
