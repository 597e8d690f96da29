//! # HTTP Rate Source
//!
//! Production [`RateSource`]: one GET against a public exchange-rate
//! endpoint returning JSON with a nested `rates` object keyed by currency
//! code. The provider reads exactly one key from that object.
//!
//! ## Response Shape
//! ```json
//! {
//!   "base": "USD",
//!   "rates": { "BRL": 5.43, "EUR": 0.92, ... }
//! }
//! ```
//!
//! No authentication, no retries here - retry policy belongs to the
//! refresher timer and the user's manual refresh button.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use hyper::client::HttpConnector;
use hyper::{Body, Client, Uri};
use hyper_tls::HttpsConnector;
use serde::Deserialize;
use tracing::debug;

use crate::error::{RateError, RateResult};
use crate::source::RateSource;

/// Default public endpoint (free tier, no API key).
pub const DEFAULT_ENDPOINT: &str = "https://api.exchangerate-api.com/v4/latest/USD";

/// How long a single fetch may take before it counts as failed.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

// =============================================================================
// Response Types
// =============================================================================

/// The slice of the endpoint response we actually read.
#[derive(Debug, Deserialize)]
struct RatesResponse {
    rates: HashMap<String, f64>,
}

/// Parses the endpoint body and extracts one currency's rate.
///
/// Rejects missing currencies and non-positive/non-finite values; a held
/// rate must always be positive and finite.
fn parse_rate(body: &[u8], currency_code: &str) -> RateResult<f64> {
    let parsed: RatesResponse =
        serde_json::from_slice(body).map_err(|e| RateError::MalformedResponse(e.to_string()))?;

    let rate = parsed
        .rates
        .get(currency_code)
        .copied()
        .ok_or_else(|| RateError::MissingRate(currency_code.to_string()))?;

    if !rate.is_finite() || rate <= 0.0 {
        return Err(RateError::InvalidRate {
            currency: currency_code.to_string(),
            value: rate,
        });
    }

    Ok(rate)
}

// =============================================================================
// HTTP Source
// =============================================================================

/// [`RateSource`] over HTTPS.
#[derive(Debug, Clone)]
pub struct HttpRateSource {
    client: Client<HttpsConnector<HttpConnector>, Body>,
    endpoint: String,
}

impl HttpRateSource {
    /// Creates a source against the default public endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Creates a source against a custom endpoint (tests, mirrors).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        let https = HttpsConnector::new();
        HttpRateSource {
            client: Client::builder().build::<_, Body>(https),
            endpoint: endpoint.into(),
        }
    }

    async fn fetch_body(&self) -> RateResult<Vec<u8>> {
        let uri: Uri = self
            .endpoint
            .parse()
            .map_err(|e| RateError::Request(format!("invalid endpoint: {}", e)))?;

        let response = tokio::time::timeout(FETCH_TIMEOUT, self.client.get(uri))
            .await
            .map_err(|_| RateError::Request("request timed out".to_string()))?
            .map_err(|e| RateError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateError::Status(status.as_u16()));
        }

        let bytes = hyper::body::to_bytes(response.into_body())
            .await
            .map_err(|e| RateError::Request(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}

impl Default for HttpRateSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateSource for HttpRateSource {
    async fn fetch_usd_rate(&self, currency_code: &str) -> RateResult<f64> {
        let body = self.fetch_body().await?;
        let rate = parse_rate(&body, currency_code)?;

        debug!(currency = %currency_code, rate = %rate, "fetched exchange rate");
        Ok(rate)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Network-free: the HTTP layer is hyper's problem; ours is the parse.

    #[test]
    fn test_parses_target_currency() {
        let body = br#"{"base":"USD","rates":{"BRL":5.43,"EUR":0.92}}"#;
        let rate = parse_rate(body, "BRL").unwrap();
        assert!((rate - 5.43).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ignores_other_currencies() {
        let body = br#"{"rates":{"BRL":5.43,"EUR":0.92,"BTC":0.000015}}"#;
        let rate = parse_rate(body, "EUR").unwrap();
        assert!((rate - 0.92).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_currency_is_an_error() {
        let body = br#"{"base":"USD","rates":{"EUR":0.92}}"#;
        assert!(matches!(
            parse_rate(body, "BRL"),
            Err(RateError::MissingRate(_))
        ));
    }

    #[test]
    fn test_malformed_body_is_an_error() {
        assert!(matches!(
            parse_rate(b"not json", "BRL"),
            Err(RateError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_rate(br#"{"rates": "oops"}"#, "BRL"),
            Err(RateError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_rate(br#"{}"#, "BRL"),
            Err(RateError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_non_positive_rate_rejected() {
        assert!(matches!(
            parse_rate(br#"{"rates":{"BRL":0.0}}"#, "BRL"),
            Err(RateError::InvalidRate { .. })
        ));
        assert!(matches!(
            parse_rate(br#"{"rates":{"BRL":-2.5}}"#, "BRL"),
            Err(RateError::InvalidRate { .. })
        ));
    }
}
