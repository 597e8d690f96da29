//! # Currency Commands
//!
//! Exchange-rate reads for the header display and the user-triggered retry
//! button. A failed fetch is never a command error - it shows up as the
//! `error` field on the snapshot, next to the retained previous rate.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tauri::State;
use tracing::debug;

use artspace_currency::RateSnapshot;

use crate::state::CurrencyState;

// =============================================================================
// Response Types
// =============================================================================

/// The rate snapshot as the frontend consumes it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateStatusResponse {
    /// Local currency units per 1 USD (possibly the stale/fallback value).
    pub rate: f64,

    /// ISO 4217 code of the local currency.
    pub currency_code: String,

    /// When the rate was last fetched successfully.
    pub last_updated: Option<DateTime<Utc>>,

    /// Whether a fetch is in flight (spinner state).
    pub is_loading: bool,

    /// Message from the most recent failed fetch, if any.
    pub error: Option<String>,
}

impl RateStatusResponse {
    fn from_snapshot(snapshot: RateSnapshot, currency_code: &str) -> Self {
        RateStatusResponse {
            rate: snapshot.rate,
            currency_code: currency_code.to_string(),
            last_updated: snapshot.last_updated,
            is_loading: snapshot.is_loading,
            error: snapshot.error,
        }
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Gets the current exchange-rate snapshot. Synchronous read.
#[tauri::command]
pub fn get_exchange_rate(currency: State<'_, CurrencyState>) -> RateStatusResponse {
    debug!("get_exchange_rate command");

    let provider = currency.provider();
    RateStatusResponse::from_snapshot(provider.snapshot(), provider.currency_code())
}

/// Re-fetches the rate immediately, independent of the timer (the header's
/// retry button). Returns the snapshot after the fetch settles.
#[tauri::command]
pub async fn refresh_exchange_rate(
    currency: State<'_, CurrencyState>,
) -> RateStatusResponse {
    debug!("refresh_exchange_rate command");

    let provider = currency.provider().clone();
    provider.refresh().await;
    RateStatusResponse::from_snapshot(provider.snapshot(), provider.currency_code())
}
