//! # Rate Provider Errors
//!
//! Failures here are expected and non-fatal: the provider keeps serving the
//! previous rate and surfaces the message as a display flag. Nothing in this
//! crate escalates to a crash.

use thiserror::Error;

/// Errors from fetching or parsing the exchange-rate endpoint.
#[derive(Debug, Error)]
pub enum RateError {
    /// The HTTP request itself failed (DNS, connect, TLS, timeout).
    #[error("Rate request failed: {0}")]
    Request(String),

    /// The endpoint answered with a non-success status.
    #[error("Rate endpoint returned HTTP {0}")]
    Status(u16),

    /// The response body was not the expected JSON shape.
    #[error("Malformed rate response: {0}")]
    MalformedResponse(String),

    /// The response parsed, but the requested currency was absent.
    #[error("Rate for {0} missing from response")]
    MissingRate(String),

    /// The fetched rate was zero, negative, or not finite.
    ///
    /// A held rate must always be positive and finite, so such values are
    /// rejected as malformed rather than published.
    #[error("Rejected non-positive rate for {currency}: {value}")]
    InvalidRate { currency: String, value: f64 },
}

/// Convenience type alias for Results with RateError.
pub type RateResult<T> = Result<T, RateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RateError::MissingRate("BRL".to_string());
        assert_eq!(err.to_string(), "Rate for BRL missing from response");

        let err = RateError::InvalidRate {
            currency: "BRL".to_string(),
            value: -1.0,
        };
        assert_eq!(err.to_string(), "Rejected non-positive rate for BRL: -1");
    }
}
