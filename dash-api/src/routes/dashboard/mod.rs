mod page;
mod summary;
mod timer;

use axum::{
    routing::{get, post},
    Router,
};

use crate::app_state::AppState;

pub use page::index;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/status", get(timer::get_status))
        .route("/summary", get(summary::get_summary))
        .route("/toggle", post(timer::toggle))
}
