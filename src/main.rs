use anyhow::Result;
use lingo_relay::config::Config;
use lingo_relay::engine::TranslationEngine;
use lingo_relay::server;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lingo_relay=info".parse()?),
        )
        .init();

    info!("Starting translation engine");

    // Load configuration from environment
    let config = Config::from_env()?;
    let port = config.port;

    // Build the engine once and hand it to the HTTP surface
    let engine = Arc::new(TranslationEngine::new(config)?);

    server::serve(engine, port).await
}
