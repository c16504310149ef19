//! Upstream rate source port.
//!
//! This trait defines the interface for obtaining the current USD/VES rate.
//! The production adapter scrapes the BCV website; tests inject
//! deterministic fakes implementing the same contract.

use crate::error::SourceError;

/// Port trait for upstream rate providers.
#[async_trait::async_trait]
pub trait RateSource: Send + Sync + 'static {
    /// Performs one fetch attempt against the upstream source.
    ///
    /// Must not mutate shared state and must be safe to call repeatedly;
    /// caching is the caller's concern.
    async fn fetch_rate(&self) -> Result<f64, SourceError>;
}
