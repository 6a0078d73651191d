use std::sync::Arc;

use crate::domain::ports::inbound::DashboardService;

#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<dyn DashboardService>,
}

impl AppState {
    pub fn new(dashboard: impl DashboardService) -> Self {
        Self {
            dashboard: Arc::new(dashboard),
        }
    }
}
