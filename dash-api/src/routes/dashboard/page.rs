use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::{adapters::inbound::http::render_index, app_state::AppState};

#[instrument(name = "index", skip(app_state))]
pub async fn index(State(app_state): State<AppState>) -> Html<String> {
    let projects = app_state.dashboard.list_projects().await;
    tracing::debug!(count = projects.len(), "rendering project picker");

    Html(render_index(&projects))
}
