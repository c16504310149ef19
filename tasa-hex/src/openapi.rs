//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use tasa_types::domain::Direction;
use tasa_types::dto::{ConvertRequest, ConvertResponse, RateResponse};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Current USD/VES rate
#[utoipa::path(
    get,
    path = "/api/rate",
    tag = "rates",
    responses(
        (status = 200, description = "Current rate", body = RateResponse),
        (status = 503, description = "Rate could not be fetched from the BCV")
    )
)]
async fn get_rate() {}

/// Convert an amount between USD and VES
#[utoipa::path(
    post,
    path = "/api/convert",
    tag = "rates",
    request_body = ConvertRequest,
    responses(
        (status = 200, description = "Conversion result (may carry an inline error message)", body = ConvertResponse),
        (status = 400, description = "Amount is not a valid number"),
        (status = 503, description = "Rate could not be fetched from the BCV")
    )
)]
async fn convert() {}

/// OpenAPI documentation for the rate API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tasa BCV Exchange-Rate API",
        version = "1.0.0",
        description = "USD/VES conversion backed by the official BCV rate, cached to keep upstream load bounded.",
        license(name = "MIT"),
    ),
    paths(health, get_rate, convert),
    components(schemas(ConvertRequest, ConvertResponse, RateResponse, Direction)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "rates", description = "Rate lookup and conversion"),
    )
)]
pub struct ApiDoc;
