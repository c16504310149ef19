//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Direction;

// ─────────────────────────────────────────────────────────────────────────────
// Conversion DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to convert an amount between USD and VES.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConvertRequest {
    /// Free-text amount; thousands separators are tolerated
    #[schema(example = "1,500.25")]
    pub amount: String,
    pub direction: Direction,
}

/// Result of a conversion, with display-ready strings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConvertResponse {
    /// Rate used for the conversion, in bolivars per US dollar
    #[schema(example = 36.5)]
    pub rate: f64,
    /// Rate rendered for display
    #[schema(example = "36.50")]
    pub formatted_rate: String,
    /// Parsed input amount
    #[schema(example = 1500.25)]
    pub input: f64,
    /// Input rendered for display
    #[schema(example = "1,500.25")]
    pub formatted_input: String,
    pub direction: Direction,
    /// Converted value; absent when the conversion could not run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted: Option<f64>,
    /// Converted value rendered for display
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_converted: Option<String>,
    /// Inline error for conversions that could not run (e.g. a zero rate)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// When the rate was fetched from the source (ISO 8601)
    #[schema(example = "2024-01-01T00:00:00Z")]
    pub fetched_at: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Rate DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// The current rate and when it was fetched.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RateResponse {
    /// Bolivars per US dollar
    #[schema(example = 36.5)]
    pub rate: f64,
    /// Rate rendered for display
    #[schema(example = "36.50")]
    pub formatted_rate: String,
    /// When the rate was fetched from the source (ISO 8601)
    #[schema(example = "2024-01-01T00:00:00Z")]
    pub fetched_at: String,
}
