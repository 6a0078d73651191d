use super::WorkspaceId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
}

impl Workspace {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: WorkspaceId::new(id),
            name: name.into(),
        }
    }
}

/// The workspace every request operates on.
///
/// Resolved once at startup and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkspaceContext {
    workspace_id: WorkspaceId,
}

impl WorkspaceContext {
    pub fn new(workspace_id: WorkspaceId) -> Self {
        Self { workspace_id }
    }

    pub fn workspace_id(&self) -> WorkspaceId {
        self.workspace_id
    }
}
