//! # Tasa Client SDK
//!
//! A typed Rust client for the rate API.

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use tasa_types::{ConvertRequest, ConvertResponse, Direction, RateResponse};

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rate API client.
pub struct RateClient {
    base_url: String,
    http: Client,
}

impl RateClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Gets the current USD/VES rate.
    pub async fn rate(&self) -> Result<RateResponse, ClientError> {
        self.get("/api/rate").await
    }

    /// Converts an amount in the given direction.
    ///
    /// The amount is free text; thousands separators are accepted.
    pub async fn convert(
        &self,
        amount: &str,
        direction: Direction,
    ) -> Result<ConvertResponse, ClientError> {
        let req = ConvertRequest {
            amount: amount.to_string(),
            direction,
        };
        self.post("/api/convert", &req).await
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        Self::parse_response(resp).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        Self::parse_response(resp).await
    }

    async fn parse_response<T: DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            Ok(resp.json::<T>().await?)
        } else {
            let message = resp
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|v| v["error"].as_str().map(str::to_string))
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                });
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
