//! Client example demonstrating the conversion flow against a running server.
//!
//! Run with: cargo run -p tasa-app --example client_example

use std::net::SocketAddr;

use async_trait::async_trait;
use tasa_client::RateClient;
use tasa_hex::{RateService, inbound::HttpServer};
use tasa_types::{Direction, RateSource, SourceError};
use tokio::net::TcpListener;

/// Fixed-rate source so the example runs without touching the BCV.
struct FixedSource(f64);

#[async_trait]
impl RateSource for FixedSource {
    async fn fetch_rate(&self) -> Result<f64, SourceError> {
        Ok(self.0)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Find an available port
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    let port = addr.port();
    drop(listener);

    println!("🚀 Starting server on port {port}...");

    // Start server in background
    let service = RateService::new(FixedSource(36.5), chrono::Duration::minutes(10));
    let server = HttpServer::new(service);
    let router = server.router();

    let server_addr = format!("127.0.0.1:{port}");
    tokio::spawn(async move {
        axum::serve(
            TcpListener::bind(&server_addr).await.unwrap(),
            router.into_make_service(),
        )
        .await
        .unwrap();
    });

    // Wait for server to start
    tokio::time::sleep(std::time::Duration::from_millis(500)).await;

    // Create client
    let base_url = format!("http://127.0.0.1:{port}");
    let client = RateClient::new(&base_url);

    // ─────────────────────────────────────────────────────────────────────────
    // Demo: rate lookup and conversions
    // ─────────────────────────────────────────────────────────────────────────

    // Health check
    let health = client.health().await?;
    println!("✅ Server health: {health}");

    let rate = client.rate().await?;
    println!("✅ Current rate: {} (fetched {})", rate.formatted_rate, rate.fetched_at);

    let result = client.convert("1,000", Direction::UsdToVes).await?;
    println!(
        "✅ {} USD = {} VES",
        result.formatted_input,
        result.formatted_converted.as_deref().unwrap_or("-")
    );

    let result = client.convert("36,500", Direction::VesToUsd).await?;
    println!(
        "✅ {} VES = {} USD",
        result.formatted_input,
        result.formatted_converted.as_deref().unwrap_or("-")
    );

    let invalid = client.convert("abc", Direction::UsdToVes).await;
    assert!(invalid.is_err());
    println!("✅ Invalid amount rejected: {}", invalid.unwrap_err());

    Ok(())
}
