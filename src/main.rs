use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use filmfuse_api::{
    api::{create_router, AppState},
    config::Config,
    services::GroqProvider,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let provider = GroqProvider::new(&config)?;
    let state = AppState::new(Arc::new(provider));
    let app = create_router(state, config.origin_list());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, model = %config.groq_model, "FilmFuse API listening");
    axum::serve(listener, app).await?;

    Ok(())
}
