//! # artspace-currency: Exchange-Rate Provider
//!
//! Maintains a single current USD → local-currency rate usable synchronously
//! by the rest of the storefront, refreshed periodically from a public
//! endpoint and degrading gracefully on failure.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      artspace-currency                                  │
//! │                                                                         │
//! │  ┌────────────────┐      ┌────────────────┐      ┌─────────────────┐   │
//! │  │  RateSource    │◄─────│  RateProvider  │◄─────│  RateRefresher  │   │
//! │  │  (port trait)  │      │                │      │                 │   │
//! │  │                │      │  snapshot():   │      │  interval tick  │   │
//! │  │  HttpRateSource│      │   rate, flags  │      │  → refresh()    │   │
//! │  │  FixedRate...  │      │  refresh()     │      │  shutdown via   │   │
//! │  │  (test double) │      │  conversions   │      │  handle         │   │
//! │  └────────────────┘      └────────────────┘      └─────────────────┘   │
//! │                                                                         │
//! │  Failure policy: previous rate kept, error flagged for display,        │
//! │  retried on next tick or manual refresh. Never panics, never blocks    │
//! │  the UI thread.                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod http;
pub mod provider;
pub mod source;

pub use error::{RateError, RateResult};
pub use http::HttpRateSource;
pub use provider::{
    RateConfig, RateProvider, RateRefresher, RateRefresherHandle, RateSnapshot,
    DEFAULT_CURRENCY_CODE, DEFAULT_REFRESH_INTERVAL, FALLBACK_RATE_BRL_PER_USD,
};
pub use source::{FixedRateSource, RateSource, UnreachableSource};
