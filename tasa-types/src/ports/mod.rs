//! Port traits that adapters must implement.

mod source;

pub use source::RateSource;
