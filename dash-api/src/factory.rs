//! Composition root: the only place that knows about the concrete Toggl adapter.

use std::sync::Arc;

use thiserror::Error;

use crate::{
    adapters::outbound::toggl::TogglAdapter,
    app_state::AppState,
    config::TogglSettings,
    domain::{
        models::WorkspaceContext, ports::outbound::TimeTrackingClient,
        services::DashboardServiceImpl, TimeTrackingError,
    },
};

/// Conditions that must stop the process before it starts serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("missing Toggl API token (set TOGGL_API_TOKEN)")]
    MissingCredential,
    #[error("failed to create Toggl client: {0}")]
    Client(String),
    #[error("failed to list workspaces")]
    WorkspaceLookup(#[source] TimeTrackingError),
    #[error("no workspace found for this account")]
    NoWorkspaces,
}

pub fn toggl_adapter(settings: &TogglSettings) -> Result<TogglAdapter, StartupError> {
    let token = settings
        .api_token
        .as_deref()
        .ok_or(StartupError::MissingCredential)?;
    let credentials =
        toggl::Credentials::new(token).map_err(|_| StartupError::MissingCredential)?;

    let client =
        toggl::TogglClient::with_base_url(credentials, toggl::TogglURL::new(&settings.base_url))
            .map_err(|e| StartupError::Client(e.to_string()))?;

    Ok(TogglAdapter::new(client, settings.created_with.clone()))
}

/// Pick the first workspace the account lists.
pub async fn resolve_workspace<C>(client: &C) -> Result<WorkspaceContext, StartupError>
where
    C: TimeTrackingClient + ?Sized,
{
    let workspaces = client
        .list_workspaces()
        .await
        .map_err(StartupError::WorkspaceLookup)?;

    let workspace = workspaces
        .into_iter()
        .next()
        .ok_or(StartupError::NoWorkspaces)?;

    tracing::info!(workspace_id = %workspace.id, name = %workspace.name, "resolved workspace");
    Ok(WorkspaceContext::new(workspace.id))
}

/// Resolve the workspace through `client` and wire up the dashboard service.
pub async fn app_state_with<C: TimeTrackingClient>(
    client: Arc<C>,
) -> Result<AppState, StartupError> {
    let workspace = resolve_workspace(client.as_ref()).await?;
    Ok(AppState::new(DashboardServiceImpl::new(client, workspace)))
}

pub async fn build_app_state(settings: &TogglSettings) -> Result<AppState, StartupError> {
    let adapter = toggl_adapter(settings)?;
    app_state_with(Arc::new(adapter)).await
}
