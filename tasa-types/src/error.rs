//! Error types for the exchange-rate service.

/// Failures raised by the upstream rate source.
///
/// Each variant is a distinct failure reason the boundary maps to a
/// user-facing message. None of them are retried anywhere in the core;
/// the next incoming request triggers the next attempt.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("upstream request failed: {0}")]
    Network(String),

    #[error("upstream responded with status {0}")]
    UpstreamStatus(u16),

    #[error("could not process the upstream document: {0}")]
    Parse(String),

    #[error("rate not found in the upstream document")]
    NotFound,

    #[error("rate text '{0}' is not a number")]
    NumericFormat(String),
}

/// Boundary-level input errors.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),

    #[error("Amount cannot be negative")]
    NegativeAmount,
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<SourceError> for AppError {
    fn from(err: SourceError) -> Self {
        // Every fetch failure surfaces the same way; the specific reason
        // stays in the logs.
        AppError::Unavailable(err.to_string())
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_errors_map_to_unavailable() {
        let cases = [
            SourceError::Network("connection refused".into()),
            SourceError::UpstreamStatus(502),
            SourceError::Parse("bad document".into()),
            SourceError::NotFound,
            SourceError::NumericFormat("N/A".into()),
        ];
        for err in cases {
            assert!(matches!(AppError::from(err), AppError::Unavailable(_)));
        }
    }

    #[test]
    fn test_domain_errors_map_to_bad_request() {
        let err = AppError::from(DomainError::InvalidAmount("abc".into()));
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
