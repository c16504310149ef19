//! BCV homepage scraper.

use std::time::Duration;

use async_trait::async_trait;
use scraper::{Html, Selector};

use tasa_types::{RateSource, SourceError};

/// CSS selector for the USD rate on the BCV homepage: the bold text inside
/// the decorated block of the `#dolar` section. A markup change upstream
/// breaks this selector; that is an operational concern, not a logic bug.
const RATE_SELECTOR: &str = "#dolar .centrado strong";

/// Scrapes the official USD/VES rate from the BCV website.
///
/// Stateless beyond the HTTP client; caching belongs to the service layer.
pub struct BcvScraper {
    http: reqwest::Client,
    url: String,
}

impl BcvScraper {
    /// Creates a scraper for `url` with a bounded request timeout.
    ///
    /// The timeout is not optional: a hung upstream request would otherwise
    /// block every caller queued on the rate cache.
    pub fn new(url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("tasa/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            url: url.into(),
        })
    }
}

#[async_trait]
impl RateSource for BcvScraper {
    #[tracing::instrument(skip(self), fields(url = %self.url))]
    async fn fetch_rate(&self) -> Result<f64, SourceError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::UpstreamStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        extract_rate(&body)
    }
}

/// Pulls the rate out of the BCV homepage HTML.
///
/// When the selector matches several nodes the last one wins. The page
/// renders the rate with a decimal comma, so commas are normalized to a
/// period before the float parse.
fn extract_rate(html: &str) -> Result<f64, SourceError> {
    let document = Html::parse_document(html);
    let selector =
        Selector::parse(RATE_SELECTOR).map_err(|e| SourceError::Parse(e.to_string()))?;

    let text = document
        .select(&selector)
        .last()
        .map(|node| node.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or(SourceError::NotFound)?;

    let normalized = text.replace(',', ".");
    normalized
        .parse::<f64>()
        .map_err(|_| SourceError::NumericFormat(text))
}
