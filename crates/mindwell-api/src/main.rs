use tracing_subscriber::EnvFilter;

use mindwell_api::config::ApiConfig;
use mindwell_api::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ApiConfig::from_env()?;
    let app = mindwell_api::app(AppState::from(&config));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        default_language = %config.default_language,
        "mindwell-api listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
