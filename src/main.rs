use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use image_catalog::{api::create_router, application::builder::ApplicationBuilder, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize tracing with structured logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    }

    info!("Starting image catalog service");

    config.validate()?;
    info!("Configuration loaded and validated");

    let listen_addr = config.listen_addr.clone();
    let state = ApplicationBuilder::new(config)
        .with_database()
        .await?
        .with_infrastructure()
        .await?
        .build()?;

    let app = create_router(state);

    // Start server
    info!("Listening on {}", listen_addr);
    let listener = TcpListener::bind(&listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
