mod server;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, service::guild_cache::BotGuildCache, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;
    let session_layer = startup::setup_session_layer(&config);

    let state = AppState::new(
        http_client,
        oauth_client,
        Arc::new(BotGuildCache::new()),
        config.bot_token.clone(),
        config.discord_api_base_url.clone(),
    );

    let app = server::router::router()
        .with_state(state)
        .layer(session_layer);

    tracing::info!("Starting server on port {}", config.port);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
