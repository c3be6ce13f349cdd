mod config;
mod handlers;
mod models;
mod routes;
mod state;

#[cfg(test)]
mod test_support;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let config = Config::from_env()?;
    if config.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY not set, every song gets the fallback lyrics");
    }

    let cors = match &config.client_url {
        Some(client_url) => CorsLayer::new()
            .allow_origin(
                client_url
                    .parse::<HeaderValue>()
                    .with_context(|| format!("CLIENT_URL is not a valid origin: {}", client_url))?,
            )
            .allow_methods([Method::POST, Method::GET, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE]),
        None => CorsLayer::permissive(),
    };

    let state = AppState::from_config(&config)?;
    let app = routes::app(state).layer(cors);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("birthday song server listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
