//! # Currency State
//!
//! Owns the exchange-rate provider and its background refresher for the
//! lifetime of the app session.
//!
//! ## Lifecycle
//! ```text
//! setup()            ──► CurrencyState::start()   (acquire: spawn timer)
//! commands           ──► provider().snapshot()/refresh()
//! RunEvent::Exit     ──► shutdown()               (release: stop timer)
//! ```
//!
//! The refresher is tied to this state's scope rather than living as an
//! ambient global, so tests and page transitions cannot leak timers.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use artspace_currency::{
    HttpRateSource, RateConfig, RateProvider, RateRefresher, RateRefresherHandle, RateSource,
};

use super::ConfigState;

/// Tauri-managed currency state.
pub struct CurrencyState {
    provider: RateProvider,
    refresher: Mutex<Option<RateRefresherHandle>>,
}

impl CurrencyState {
    /// Builds the provider from app config and starts the scheduled
    /// refresher. Must be called within the Tauri async runtime.
    pub fn start(config: &ConfigState) -> Self {
        let source: Arc<dyn RateSource> =
            Arc::new(HttpRateSource::with_endpoint(&config.rate_endpoint));
        Self::start_with_source(config, source)
    }

    /// Same as [`CurrencyState::start`] with an injected source (tests).
    pub fn start_with_source(config: &ConfigState, source: Arc<dyn RateSource>) -> Self {
        let provider = RateProvider::new(
            source,
            RateConfig {
                currency_code: config.local_currency_code.clone(),
                fallback_rate: config.fallback_rate,
                refresh_interval: Duration::from_secs(config.rate_refresh_secs),
            },
        );

        let refresher = RateRefresher::spawn(provider.clone());

        CurrencyState {
            provider,
            refresher: Mutex::new(Some(refresher)),
        }
    }

    /// The shared rate provider.
    #[inline]
    pub fn provider(&self) -> &RateProvider {
        &self.provider
    }

    /// Stops the scheduled refresher. Idempotent; used at app exit where
    /// awaiting is not possible.
    pub fn shutdown(&self) {
        let handle = self
            .refresher
            .lock()
            .expect("refresher mutex poisoned")
            .take();
        if let Some(handle) = handle {
            handle.shutdown_blocking();
        }
    }
}

impl std::fmt::Debug for CurrencyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrencyState")
            .field("provider", &self.provider)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artspace_currency::FixedRateSource;

    #[tokio::test]
    async fn test_start_and_shutdown() {
        let config = ConfigState::default();
        let state =
            CurrencyState::start_with_source(&config, Arc::new(FixedRateSource::new(5.43)));

        // Give the immediate first tick a moment to land
        tokio::time::sleep(Duration::from_millis(50)).await;
        let snap = state.provider().snapshot();
        assert!((snap.rate - 5.43).abs() < f64::EPSILON);

        state.shutdown();
        // Second shutdown is a no-op
        state.shutdown();
    }
}
