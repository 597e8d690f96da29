//! # Rate Source Port
//!
//! The provider never talks HTTP directly; it goes through the [`RateSource`]
//! port. Production wires in [`crate::http::HttpRateSource`]; tests inject
//! doubles with scripted behavior.

use async_trait::async_trait;

use crate::error::{RateError, RateResult};

// =============================================================================
// Port Trait
// =============================================================================

/// Port trait for exchange-rate sources.
///
/// Returns how many units of `currency_code` one USD buys.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Fetches the current USD → `currency_code` rate.
    async fn fetch_usd_rate(&self, currency_code: &str) -> RateResult<f64>;
}

// =============================================================================
// Test Doubles
// =============================================================================

/// A source that always returns the same rate. Useful in tests and offline
/// demos.
#[derive(Debug, Clone)]
pub struct FixedRateSource {
    rate: f64,
}

impl FixedRateSource {
    /// Creates a source pinned to `rate`.
    pub fn new(rate: f64) -> Self {
        FixedRateSource { rate }
    }
}

#[async_trait]
impl RateSource for FixedRateSource {
    async fn fetch_usd_rate(&self, _currency_code: &str) -> RateResult<f64> {
        Ok(self.rate)
    }
}

/// A source that always fails, for exercising the degradation path.
#[derive(Debug, Clone, Default)]
pub struct UnreachableSource;

#[async_trait]
impl RateSource for UnreachableSource {
    async fn fetch_usd_rate(&self, _currency_code: &str) -> RateResult<f64> {
        Err(RateError::Request("simulated network failure".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_source_returns_pinned_rate() {
        let source = FixedRateSource::new(5.43);
        let rate = source.fetch_usd_rate("BRL").await.unwrap();
        assert!((rate - 5.43).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_unreachable_source_always_fails() {
        let source = UnreachableSource;
        assert!(source.fetch_usd_rate("BRL").await.is_err());
    }
}
