//! Rate application service.
//!
//! Owns the rate cache and orchestrates freshness checks, upstream fetches,
//! and conversions. Contains NO infrastructure logic - the upstream adapter
//! is injected through the `RateSource` port.

use chrono::{Duration, Utc};
use tokio::sync::Mutex;

use tasa_types::{
    AmountFormat, AppError, CachedRate, ConvertRequest, ConvertResponse, DomainError, RateSource,
    convert,
};

/// Cache slot for the last fetched rate.
///
/// Bundles the entry, its lock, and the freshness window in one type. The
/// mutex is a tokio mutex on purpose: it is held across the upstream fetch
/// on a miss, so concurrent misses serialize into a single request.
struct RateCache {
    entry: Mutex<Option<CachedRate>>,
    ttl: Duration,
}

impl RateCache {
    fn new(ttl: Duration) -> Self {
        Self {
            entry: Mutex::new(None),
            ttl,
        }
    }
}

/// Application service for rate lookup and conversion.
///
/// Generic over `S: RateSource` - the adapter is injected at compile time.
/// This enables:
/// - Swapping the upstream (scraper, API, file) without code changes
/// - Testing with a scripted in-memory source
/// - Compile-time checks for port implementation
pub struct RateService<S: RateSource> {
    source: S,
    cache: RateCache,
    format: AmountFormat,
}

impl<S: RateSource> RateService<S> {
    /// Creates a service with the given source and freshness window.
    pub fn new(source: S, ttl: Duration) -> Self {
        Self {
            source,
            cache: RateCache::new(ttl),
            format: AmountFormat::default(),
        }
    }

    /// Overrides the display separators.
    pub fn with_format(mut self, format: AmountFormat) -> Self {
        self.format = format;
        self
    }

    /// Returns a reference to the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the separator configuration in use.
    pub fn format(&self) -> &AmountFormat {
        &self.format
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Rate Lookup
    // ─────────────────────────────────────────────────────────────────────────────

    /// Returns the current rate, fetching from upstream only when the cached
    /// value has aged past the freshness window (or is a parsed zero).
    ///
    /// On a fetch failure the previous entry is left untouched and the error
    /// is returned; a stale value is never substituted for a failed fetch.
    pub async fn current_rate(&self) -> Result<CachedRate, AppError> {
        let mut slot = self.cache.entry.lock().await;

        if let Some(cached) = *slot {
            let age = Utc::now().signed_duration_since(cached.fetched_at);
            if age < self.cache.ttl && cached.rate != 0.0 {
                tracing::debug!(rate = cached.rate, "serving cached rate");
                return Ok(cached);
            }
        }

        tracing::info!("rate cache expired or empty, fetching from upstream");
        let rate = self.source.fetch_rate().await.inspect_err(|err| {
            tracing::warn!(%err, "upstream fetch failed, keeping previous cache state");
        })?;

        let fresh = CachedRate {
            rate,
            fetched_at: Utc::now(),
        };
        *slot = Some(fresh);
        tracing::info!(rate, "fetched new rate");
        Ok(fresh)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────────────────────────

    /// Parses the free-text amount, resolves the rate, and converts.
    pub async fn convert(&self, req: ConvertRequest) -> Result<ConvertResponse, AppError> {
        let amount = self.format.parse_amount(&req.amount)?;
        if amount < 0.0 {
            return Err(DomainError::NegativeAmount.into());
        }

        let cached = self.current_rate().await?;
        let outcome = convert(cached.rate, amount, req.direction, &self.format);

        Ok(ConvertResponse {
            rate: cached.rate,
            formatted_rate: outcome.formatted_rate,
            input: amount,
            formatted_input: outcome.formatted_input,
            direction: req.direction,
            converted: outcome.converted,
            formatted_converted: outcome.formatted_converted,
            error_message: outcome.error_message,
            fetched_at: cached.fetched_at.to_rfc3339(),
        })
    }
}
