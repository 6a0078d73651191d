use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    #[serde(default)]
    pub workspace_id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_project_listing() {
        let json = r##"[
            {"id": 1001, "workspace_id": 7, "name": "Client work", "active": true, "color": "#06aaf5", "billable": false},
            {"id": 1002, "name": "Internal"}
        ]"##;

        let projects: Vec<Project> = serde_json::from_str(json).unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].workspace_id, Some(7));
        assert_eq!(projects[0].color.as_deref(), Some("#06aaf5"));
        assert!(!projects[1].active);
    }
}
