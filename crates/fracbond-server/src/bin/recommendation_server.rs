//! Fracbond recommendation server entry point.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fracbond_server::{Server, ServerConfig, Service};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,fracbond=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Fracbond Recommendation Server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/recommendation.toml".to_string());
    let config = ServerConfig::load_or(&config_path, ServerConfig::recommendation_default())?;

    Server::new(Service::Recommendation, config).start().await?;

    Ok(())
}
