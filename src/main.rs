use anyhow::Context;
use moisture_relay::{AxumState, RelayConfig, app};
use tracing::*;
use tracing_subscriber::FmtSubscriber;

/// Application & Tokio executor entrypoint
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = RelayConfig::from_env()?;

    let subscriber = FmtSubscriber::builder()
        // all spans/events at or above the configured level will be written to stdout.
        .with_max_level(config.log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("setting default tracing subscriber failed")?;

    // Initialize application state, the moisture level starts at its default
    let state = AxumState::default();

    // Start serving webrequests
    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("unable to bind {}", config.bind_address))?;
    info!("Axum Router initialised");
    info!("Listening on http://{}", config.bind_address);
    axum::serve(listener, app(state)).await?;

    Ok(())
}
