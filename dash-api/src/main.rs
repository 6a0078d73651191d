mod adapters;
mod app_state;
mod config;
mod domain;
mod factory;
mod router;
mod routes;

use anyhow::Context;
use tracing_subscriber::{fmt::time::UtcTime, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "dash_api=debug,toggl=info,tower_http=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_timer(UtcTime::rfc_3339()))
        .init();

    let settings = config::read_config().context("Failed to read configuration")?;

    let app_state = factory::build_app_state(&settings.toggl)
        .await
        .context("Startup failed")?;
    let app = router::create(app_state);

    let address = settings.application.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!("listening on {}", address);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
