use axum::{extract::State, Json};
use tracing::instrument;

use crate::{adapters::inbound::http::SummaryResponse, app_state::AppState};

#[instrument(name = "get_summary", skip(app_state))]
pub async fn get_summary(State(app_state): State<AppState>) -> Json<SummaryResponse> {
    let summary = app_state.dashboard.get_daily_summary().await;

    Json(SummaryResponse::from(summary))
}
