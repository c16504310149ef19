//! # Tasa Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the scraper adapter
//! - Create the rate service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tasa_hex::{RateService, inbound::HttpServer};
use tasa_scraper::BcvScraper;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tasa_app=debug,tasa_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting tasa server on port {}", config.port);
    tracing::info!("Scraping rates from: {}", config.bcv_url);

    // Build the upstream adapter
    let scraper = BcvScraper::new(config.bcv_url.clone(), config.upstream_timeout)?;

    // Create the rate service
    let service = RateService::new(scraper, config.cache_ttl);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
