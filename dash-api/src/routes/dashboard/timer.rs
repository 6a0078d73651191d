use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::instrument;

use crate::{
    adapters::inbound::http::{StatusResponse, TogglePayload, ToggleResponse},
    app_state::AppState,
    domain::models::{NewTimeEntry, ToggleOutcome},
};

// ============================================================================
// Get Status
// ============================================================================

#[instrument(name = "get_status", skip(app_state))]
pub async fn get_status(State(app_state): State<AppState>) -> Json<StatusResponse> {
    let status = app_state.dashboard.get_status().await;

    Json(StatusResponse::from(status))
}

// ============================================================================
// Toggle
// ============================================================================

/// Stop the running timer or start a new one.
///
/// Always answers with the generic confirmation; a failed start or stop is
/// only logged. A missing or malformed body is logged and starts an entry
/// without description or project.
#[instrument(name = "toggle", skip(app_state, payload))]
pub async fn toggle(
    State(app_state): State<AppState>,
    payload: Result<Json<TogglePayload>, JsonRejection>,
) -> Json<ToggleResponse> {
    let entry: NewTimeEntry = match payload {
        Ok(Json(payload)) => payload.into(),
        Err(rejection) => {
            tracing::warn!("Unreadable toggle body, using an empty payload: {}", rejection);
            NewTimeEntry::default()
        }
    };

    match app_state.dashboard.toggle(&entry).await {
        Ok(ToggleOutcome::Stopped(id)) => tracing::debug!(%id, "toggle stopped entry"),
        Ok(ToggleOutcome::Started(id)) => tracing::debug!(%id, "toggle started entry"),
        Err(e) => tracing::error!("Toggle failed: {}", e),
    }

    Json(ToggleResponse::toggled())
}
