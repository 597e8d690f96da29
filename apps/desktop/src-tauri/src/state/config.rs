//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ARTSPACE_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};

use artspace_currency::{DEFAULT_CURRENCY_CODE, FALLBACK_RATE_BRL_PER_USD};

/// Application configuration.
///
/// Catalog prices are authored in the base currency (USD); the local
/// currency is what buyers see alongside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (window title, receipts).
    pub store_name: String,

    /// Base currency code (ISO 4217) - prices are authored in this.
    pub base_currency_code: String,

    /// Local display currency code (ISO 4217).
    pub local_currency_code: String,

    /// Local currency symbol for display ("R$").
    pub local_currency_symbol: String,

    /// Exchange-rate endpoint URL.
    pub rate_endpoint: String,

    /// Fallback rate before the first successful fetch.
    pub fallback_rate: f64,

    /// Scheduled rate-refresh cadence in seconds.
    pub rate_refresh_secs: u64,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "ArtSpace"
    /// - Base currency: USD, local display: BRL (R$)
    /// - Rate refresh: every 5 minutes, fallback 5.50
    fn default() -> Self {
        ConfigState {
            store_name: "ArtSpace".to_string(),
            base_currency_code: "USD".to_string(),
            local_currency_code: DEFAULT_CURRENCY_CODE.to_string(),
            local_currency_symbol: "R$".to_string(),
            rate_endpoint: artspace_currency::http::DEFAULT_ENDPOINT.to_string(),
            fallback_rate: FALLBACK_RATE_BRL_PER_USD,
            rate_refresh_secs: 5 * 60,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `ARTSPACE_STORE_NAME`: Override store name
    /// - `ARTSPACE_LOCAL_CURRENCY`: Override local currency code
    /// - `ARTSPACE_LOCAL_CURRENCY_SYMBOL`: Override display symbol
    /// - `ARTSPACE_RATE_ENDPOINT`: Override rate endpoint URL
    /// - `ARTSPACE_RATE_REFRESH_SECS`: Override refresh cadence
    /// - `ARTSPACE_FALLBACK_RATE`: Override fallback rate
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(store_name) = std::env::var("ARTSPACE_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(code) = std::env::var("ARTSPACE_LOCAL_CURRENCY") {
            config.local_currency_code = code;
        }

        if let Ok(symbol) = std::env::var("ARTSPACE_LOCAL_CURRENCY_SYMBOL") {
            config.local_currency_symbol = symbol;
        }

        if let Ok(endpoint) = std::env::var("ARTSPACE_RATE_ENDPOINT") {
            config.rate_endpoint = endpoint;
        }

        if let Ok(secs) = std::env::var("ARTSPACE_RATE_REFRESH_SECS") {
            if let Ok(secs) = secs.parse::<u64>() {
                config.rate_refresh_secs = secs;
            }
        }

        if let Ok(rate) = std::env::var("ARTSPACE_FALLBACK_RATE") {
            if let Ok(rate) = rate.parse::<f64>() {
                if rate.is_finite() && rate > 0.0 {
                    config.fallback_rate = rate;
                }
            }
        }

        config
    }

    /// Formats a base-currency cent amount as a display string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_usd(1234), "US$ 12.34");
    /// ```
    pub fn format_usd(&self, cents: i64) -> String {
        let sign = if cents < 0 { "-" } else { "" };
        format!("{}US$ {}.{:02}", sign, (cents / 100).abs(), (cents % 100).abs())
    }

    /// Formats a local-currency cent amount as a display string ("R$ 97.74").
    pub fn format_local(&self, cents: i64) -> String {
        let sign = if cents < 0 { "-" } else { "" };
        format!(
            "{}{} {}.{:02}",
            sign,
            self.local_currency_symbol,
            (cents / 100).abs(),
            (cents % 100).abs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.base_currency_code, "USD");
        assert_eq!(config.local_currency_code, "BRL");
        assert!((config.fallback_rate - 5.50).abs() < f64::EPSILON);
        assert_eq!(config.rate_refresh_secs, 300);
    }

    #[test]
    fn test_format_usd() {
        let config = ConfigState::default();
        assert_eq!(config.format_usd(1234), "US$ 12.34");
        assert_eq!(config.format_usd(0), "US$ 0.00");
        assert_eq!(config.format_usd(-550), "-US$ 5.50");
    }

    #[test]
    fn test_format_local() {
        let config = ConfigState::default();
        assert_eq!(config.format_local(9774), "R$ 97.74");
        assert_eq!(config.format_local(5), "R$ 0.05");
    }
}
