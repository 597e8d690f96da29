//! # Rate Provider
//!
//! Maintains the single current USD → local rate the rest of the storefront
//! reads synchronously, refreshed in the background and degrading gracefully
//! when the endpoint is unreachable.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Rate Provider Lifecycle                              │
//! │                                                                         │
//! │  {Uninitialized}                                                        │
//! │        │  new()                                                         │
//! │        ▼                                                                │
//! │  {Loading, rate = fallback 5.50}                                        │
//! │        │                                                                │
//! │        ├── fetch ok ───► {Ready, rate = fetched, error = none}          │
//! │        │                                                                │
//! │        └── fetch fail ─► {Ready, rate = previous, error = set}          │
//! │                              │                                          │
//! │                              │ every tick / manual refresh              │
//! │                              ▼                                          │
//! │                     brief {Loading} sub-state, back to {Ready}          │
//! │                                                                         │
//! │  Teardown: RateRefresherHandle::shutdown() - no dangling timers,        │
//! │  no state updates after the owning session ends.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Overlap Guard
//! The interval design keeps fetches sequential, but a manual refresh can
//! race a scheduled one. Each fetch takes a monotonic sequence number and
//! only publishes if nothing newer has published since it started, so a
//! slow stale response can never overwrite a fresher rate.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use artspace_core::money::Money;

use crate::source::RateSource;

/// Hardcoded fallback: BRL per USD before the first successful fetch.
///
/// Must be a plausible positive value so conversions remain sane offline.
pub const FALLBACK_RATE_BRL_PER_USD: f64 = 5.50;

/// The local currency the storefront displays.
pub const DEFAULT_CURRENCY_CODE: &str = "BRL";

/// Scheduled refresh cadence (5 minutes).
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

// =============================================================================
// Configuration
// =============================================================================

/// Provider configuration.
#[derive(Debug, Clone)]
pub struct RateConfig {
    /// ISO 4217 code of the local currency read from the endpoint response.
    pub currency_code: String,

    /// Rate held before the first successful fetch (and forever, if the
    /// endpoint never answers).
    pub fallback_rate: f64,

    /// Cadence of the scheduled refresh.
    pub refresh_interval: Duration,
}

impl Default for RateConfig {
    fn default() -> Self {
        RateConfig {
            currency_code: DEFAULT_CURRENCY_CODE.to_string(),
            fallback_rate: FALLBACK_RATE_BRL_PER_USD,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// Point-in-time view of the provider, cheap to clone and safe to read from
/// anywhere on the UI thread.
///
/// ## Invariant
/// `rate` is always positive and finite: it starts at the fallback and is
/// only ever replaced by validated fetched values.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateSnapshot {
    /// Local currency units per 1 USD.
    pub rate: f64,

    /// When the rate was last fetched successfully. `None` while still on
    /// the fallback.
    pub last_updated: Option<DateTime<Utc>>,

    /// Whether a fetch is currently in flight.
    pub is_loading: bool,

    /// Message from the most recent failed fetch, cleared by the next
    /// success.
    pub error: Option<String>,
}

impl RateSnapshot {
    /// Converts a fractional USD amount to local currency.
    #[inline]
    pub fn convert_to_local(&self, usd: f64) -> f64 {
        usd * self.rate
    }

    /// Converts a fractional local-currency amount to USD.
    ///
    /// Division by the held rate, which is positive by invariant.
    #[inline]
    pub fn convert_to_usd(&self, local: f64) -> f64 {
        local / self.rate
    }

    /// Converts a USD Money amount to local currency, rounded to the cent.
    #[inline]
    pub fn to_local_money(&self, usd: Money) -> Money {
        Money::from_usd_f64(self.convert_to_local(usd.as_usd_f64()))
    }
}

// =============================================================================
// Provider
// =============================================================================

struct RateState {
    snapshot: RateSnapshot,
    /// Sequence number handed to the next fetch.
    next_fetch_seq: u64,
    /// Sequence number of the newest fetch that has published a rate.
    last_published_seq: u64,
}

/// The exchange-rate provider.
///
/// Cheap to clone; all clones share one state. Reads are synchronous
/// ([`RateProvider::snapshot`]); only [`RateProvider::refresh`] suspends.
#[derive(Clone)]
pub struct RateProvider {
    state: Arc<Mutex<RateState>>,
    source: Arc<dyn RateSource>,
    config: Arc<RateConfig>,
}

impl RateProvider {
    /// Creates a provider holding the fallback rate, flagged as loading
    /// until the first fetch completes.
    pub fn new(source: Arc<dyn RateSource>, config: RateConfig) -> Self {
        let snapshot = RateSnapshot {
            rate: config.fallback_rate,
            last_updated: None,
            is_loading: true,
            error: None,
        };

        RateProvider {
            state: Arc::new(Mutex::new(RateState {
                snapshot,
                next_fetch_seq: 0,
                last_published_seq: 0,
            })),
            source,
            config: Arc::new(config),
        }
    }

    /// The local currency this provider serves.
    pub fn currency_code(&self) -> &str {
        &self.config.currency_code
    }

    /// Returns the current snapshot. Synchronous and lock-short.
    pub fn snapshot(&self) -> RateSnapshot {
        self.lock_state().snapshot.clone()
    }

    /// Converts a USD Money amount to local currency at the current rate.
    pub fn to_local_money(&self, usd: Money) -> Money {
        self.snapshot().to_local_money(usd)
    }

    /// Fetches the rate once and publishes the outcome.
    ///
    /// Never returns an error: failures are recorded on the snapshot
    /// (previous rate kept, error message set) and retried on the next tick
    /// or manual refresh. The loading flag is cleared on every path.
    pub async fn refresh(&self) {
        let seq = {
            let mut state = self.lock_state();
            state.next_fetch_seq += 1;
            state.snapshot.is_loading = true;
            state.next_fetch_seq
        };

        let result = self.source.fetch_usd_rate(&self.config.currency_code).await;

        let mut state = self.lock_state();
        state.snapshot.is_loading = false;

        match result {
            Ok(rate) => {
                if seq > state.last_published_seq {
                    state.last_published_seq = seq;
                    state.snapshot.rate = rate;
                    state.snapshot.last_updated = Some(Utc::now());
                    state.snapshot.error = None;
                    debug!(rate = %rate, seq, "published exchange rate");
                } else {
                    // A newer fetch already published; drop the stale value.
                    debug!(rate = %rate, seq, "discarded stale exchange rate");
                }
            }
            Err(err) => {
                // Keep the previous rate: stale is better than broken.
                if seq > state.last_published_seq {
                    state.snapshot.error = Some(err.to_string());
                }
                warn!(error = %err, seq, "exchange-rate fetch failed");
            }
        }
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, RateState> {
        self.state.lock().expect("rate state mutex poisoned")
    }
}

impl std::fmt::Debug for RateProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateProvider")
            .field("config", &self.config)
            .field("snapshot", &self.snapshot())
            .finish()
    }
}

// =============================================================================
// Refresher
// =============================================================================

/// Background task re-fetching the rate on a fixed interval.
///
/// Owned by the session: [`RateRefresher::spawn`] acquires the timer,
/// [`RateRefresherHandle::shutdown`] releases it. The first tick fires
/// immediately, which doubles as the initial fetch.
pub struct RateRefresher;

impl RateRefresher {
    /// Spawns the refresh loop for `provider`.
    pub fn spawn(provider: RateProvider) -> RateRefresherHandle {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
        let interval = provider.config.refresh_interval;

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            info!(
                currency = %provider.currency_code(),
                interval_secs = interval.as_secs(),
                "rate refresher started"
            );

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        provider.refresh().await;
                    }
                    _ = shutdown_rx.recv() => {
                        break;
                    }
                }
            }

            info!("rate refresher stopped");
        });

        RateRefresherHandle { shutdown_tx, task }
    }
}

/// Handle for stopping a running refresher.
pub struct RateRefresherHandle {
    shutdown_tx: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

impl RateRefresherHandle {
    /// Signals the refresher to stop and waits for the task to finish, so
    /// no state update can land after teardown.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(()).await;
        let _ = self.task.await;
    }

    /// Fire-and-forget stop, for teardown sites that cannot await.
    pub fn shutdown_blocking(self) {
        let _ = self.shutdown_tx.try_send(());
        self.task.abort();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{RateError, RateResult};
    use crate::source::{FixedRateSource, UnreachableSource};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted source: each call pops (delay, result) off the front.
    struct ScriptedSource {
        script: Mutex<VecDeque<(Duration, RateResult<f64>)>>,
        calls: AtomicUsize,
    }

    impl ScriptedSource {
        fn new(script: Vec<(Duration, RateResult<f64>)>) -> Self {
            ScriptedSource {
                script: Mutex::new(script.into()),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RateSource for ScriptedSource {
        async fn fetch_usd_rate(&self, _currency_code: &str) -> RateResult<f64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let step = self
                .script
                .lock()
                .expect("script mutex poisoned")
                .pop_front();
            match step {
                Some((delay, result)) => {
                    tokio::time::sleep(delay).await;
                    result
                }
                None => Ok(5.50),
            }
        }
    }

    fn provider_with(source: Arc<dyn RateSource>) -> RateProvider {
        RateProvider::new(source, RateConfig::default())
    }

    #[test]
    fn test_initial_state_is_fallback_and_loading() {
        let provider = provider_with(Arc::new(FixedRateSource::new(5.43)));
        let snap = provider.snapshot();

        assert!((snap.rate - FALLBACK_RATE_BRL_PER_USD).abs() < f64::EPSILON);
        assert!(snap.is_loading);
        assert!(snap.error.is_none());
        assert!(snap.last_updated.is_none());
    }

    #[tokio::test]
    async fn test_successful_fetch_publishes_rate() {
        let provider = provider_with(Arc::new(FixedRateSource::new(5.43)));
        provider.refresh().await;

        let snap = provider.snapshot();
        assert!((snap.rate - 5.43).abs() < f64::EPSILON);
        assert!(!snap.is_loading);
        assert!(snap.error.is_none());
        assert!(snap.last_updated.is_some());
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_fallback_and_flags_error() {
        let provider = provider_with(Arc::new(UnreachableSource));
        provider.refresh().await;

        let snap = provider.snapshot();
        // Rate unchanged, error surfaced, loading cleared
        assert!((snap.rate - 5.50).abs() < f64::EPSILON);
        assert!(!snap.is_loading);
        assert!(snap.error.is_some());
        assert!(snap.last_updated.is_none());
    }

    #[tokio::test]
    async fn test_failure_after_success_keeps_previous_rate() {
        let source = Arc::new(ScriptedSource::new(vec![
            (Duration::ZERO, Ok(5.43)),
            (
                Duration::ZERO,
                Err(RateError::Request("connection refused".to_string())),
            ),
        ]));
        let provider = provider_with(source);

        provider.refresh().await;
        provider.refresh().await;

        let snap = provider.snapshot();
        assert!((snap.rate - 5.43).abs() < f64::EPSILON);
        assert!(snap.error.is_some());
        assert!(!snap.is_loading);
    }

    #[tokio::test]
    async fn test_next_success_clears_error() {
        let source = Arc::new(ScriptedSource::new(vec![
            (
                Duration::ZERO,
                Err(RateError::Request("timeout".to_string())),
            ),
            (Duration::ZERO, Ok(5.61)),
        ]));
        let provider = provider_with(source);

        provider.refresh().await;
        assert!(provider.snapshot().error.is_some());

        provider.refresh().await;
        let snap = provider.snapshot();
        assert!(snap.error.is_none());
        assert!((snap.rate - 5.61).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_stale_fetch_cannot_overwrite_newer_rate() {
        // First fetch is slow and answers 6.00; second is fast and answers
        // 5.43. The slow one completes last but must not publish.
        let source = Arc::new(ScriptedSource::new(vec![
            (Duration::from_millis(100), Ok(6.00)),
            (Duration::from_millis(5), Ok(5.43)),
        ]));
        let provider = provider_with(source);

        let slow = provider.clone();
        let fast = provider.clone();
        tokio::join!(slow.refresh(), fast.refresh());

        let snap = provider.snapshot();
        assert!((snap.rate - 5.43).abs() < f64::EPSILON);
        assert!(!snap.is_loading);
    }

    #[tokio::test]
    async fn test_conversion_round_trip() {
        let provider = provider_with(Arc::new(FixedRateSource::new(5.43)));
        provider.refresh().await;
        let snap = provider.snapshot();

        for usd in [0.01, 1.0, 18.0, 7000.0, 123_456.78] {
            let round_trip = snap.convert_to_usd(snap.convert_to_local(usd));
            assert!(
                (round_trip - usd).abs() < 1e-9 * usd.max(1.0),
                "round trip drifted: {} → {}",
                usd,
                round_trip
            );
        }
    }

    #[tokio::test]
    async fn test_money_conversion_rounds_to_cent() {
        let provider = provider_with(Arc::new(FixedRateSource::new(5.43)));
        provider.refresh().await;

        // $18.00 × 5.43 = R$ 97.74
        let local = provider.to_local_money(Money::from_cents(1800));
        assert_eq!(local.cents(), 9774);
    }

    #[tokio::test]
    async fn test_refresher_polls_and_stops_cleanly() {
        let source = Arc::new(ScriptedSource::new(Vec::new()));
        let provider = RateProvider::new(
            source.clone(),
            RateConfig {
                refresh_interval: Duration::from_millis(10),
                ..RateConfig::default()
            },
        );

        let handle = RateRefresher::spawn(provider.clone());

        // First tick fires immediately; give it a few more
        tokio::time::sleep(Duration::from_millis(60)).await;
        let while_running = source.call_count();
        assert!(while_running >= 2, "expected polling, saw {}", while_running);

        handle.shutdown().await;
        let after_shutdown = source.call_count();

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(
            source.call_count(),
            after_shutdown,
            "refresher kept polling after shutdown"
        );
    }
}
