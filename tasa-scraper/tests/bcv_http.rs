//! HTTP-level tests for the BCV scraper adapter.
//!
//! A wiremock server stands in for the BCV site, so the full
//! request → status check → extract → parse path runs against real HTTP.

use std::time::Duration;

use tasa_scraper::BcvScraper;
use tasa_types::{RateSource, SourceError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SAMPLE_PAGE: &str = r#"
    <html><body>
      <div id="euro"><div class="centrado"><strong> 40,12 </strong></div></div>
      <div id="dolar"><div class="centrado"><strong> 36,50 </strong></div></div>
    </body></html>"#;

fn scraper_for(server: &MockServer) -> BcvScraper {
    BcvScraper::new(server.uri(), Duration::from_secs(2)).unwrap()
}

#[tokio::test]
async fn test_fetches_and_parses_rate() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE_PAGE))
        .mount(&server)
        .await;

    let rate = scraper_for(&server).fetch_rate().await.unwrap();
    assert_eq!(rate, 36.50);
}

#[tokio::test]
async fn test_non_success_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = scraper_for(&server).fetch_rate().await;
    assert!(matches!(result, Err(SourceError::UpstreamStatus(503))));
}

#[tokio::test]
async fn test_missing_rate_markup_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><body>maintenance</body></html>"),
        )
        .mount(&server)
        .await;

    let result = scraper_for(&server).fetch_rate().await;
    assert!(matches!(result, Err(SourceError::NotFound)));
}

#[tokio::test]
async fn test_non_numeric_rate_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<div id="dolar"><div class="centrado"><strong>N/A</strong></div></div>"#,
        ))
        .mount(&server)
        .await;

    let result = scraper_for(&server).fetch_rate().await;
    assert!(matches!(result, Err(SourceError::NumericFormat(_))));
}

#[tokio::test]
async fn test_unreachable_upstream_is_a_network_error() {
    let server = MockServer::start().await;
    let url = server.uri();
    drop(server);

    let scraper = BcvScraper::new(url, Duration::from_millis(500)).unwrap();
    let result = scraper.fetch_rate().await;
    assert!(matches!(result, Err(SourceError::Network(_))));
}

#[tokio::test]
async fn test_repeated_fetches_are_independent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE_PAGE))
        .expect(3)
        .mount(&server)
        .await;

    let scraper = scraper_for(&server);
    for _ in 0..3 {
        assert_eq!(scraper.fetch_rate().await.unwrap(), 36.50);
    }
}
