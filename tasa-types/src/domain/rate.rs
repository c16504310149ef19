//! The cached upstream rate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A rate observed from the upstream source, stamped with its fetch time.
///
/// Mutated only by the cache that owns it; everyone else gets a copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CachedRate {
    /// Bolivars per US dollar
    pub rate: f64,
    /// When the rate was read from the source
    pub fetched_at: DateTime<Utc>,
}
