use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use assistant_gateway::{config::Config, routes, state::AppState};

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    init_logging();
    match dotenv {
        Ok(path) => info!("read dotenv file from {}", path.display()),
        Err(err) if err.not_found() => info!("no dotenv file found"),
        Err(err) => return Err(err).context("failed to read dotenv file"),
    }

    let config = Config::from_env().context("invalid configuration")?;
    if config.api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; assistant requests will fail until it is provided");
    }
    info!(?config, "configuration loaded");

    let state = Arc::new(AppState::new(&config).context("failed to build HTTP client")?);
    let app = routes::create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!("assistant gateway listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
