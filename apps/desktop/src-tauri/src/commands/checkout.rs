//! # Checkout Command
//!
//! SIMULATED checkout: no payment gateway exists in scope. The command
//! validates the session and cart, issues a receipt snapshot, and clears
//! the cart - exactly what the real flow will do around a gateway call.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  invoke('checkout')                                                     │
//! │        │                                                                │
//! │        ├── not logged in ──────► AUTH_REQUIRED                          │
//! │        ├── cart empty ─────────► CART_ERROR                             │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  Receipt { id, lines, totals (USD + local @ current rate), time }      │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  cart cleared → drawer badge back to 0                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use tauri::State;
use tracing::{debug, info};
use uuid::Uuid;

use artspace_core::cart::CartLine;

use crate::error::ApiError;
use crate::state::{CartState, ConfigState, CurrencyState, SessionState};

// =============================================================================
// Response Types
// =============================================================================

/// The simulated receipt returned on successful checkout.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptResponse {
    /// Receipt identifier (UUID v4).
    pub receipt_id: String,

    /// Buyer email from the session.
    pub buyer_email: String,

    /// Line snapshots at checkout time.
    pub lines: Vec<CartLine>,

    /// Sum of line quantities.
    pub total_items: i64,

    /// Total in USD cents, exact.
    pub total_usd_cents: i64,

    /// Total in local cents at the rate used.
    pub total_local_cents: i64,

    /// Formatted totals for the receipt view ("US$ 36.00", "R$ 198.00").
    pub total_usd_display: String,
    pub total_local_display: String,

    /// The USD → local rate applied to this receipt.
    pub rate_used: f64,

    /// When the checkout completed.
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Command
// =============================================================================

/// Finalizes the simulated purchase.
///
/// ## Requirements
/// - A logged-in session (`AUTH_REQUIRED` otherwise)
/// - A non-empty cart (`CART_ERROR` otherwise)
///
/// On success the cart is cleared and the receipt carries the totals as
/// they stood, including the exchange rate that produced the local figure.
#[tauri::command]
pub fn checkout(
    cart: State<'_, CartState>,
    session: State<'_, SessionState>,
    currency: State<'_, CurrencyState>,
    config: State<'_, ConfigState>,
) -> Result<ReceiptResponse, ApiError> {
    debug!("checkout command");

    let current_session = session.current();
    let user = current_session.user().ok_or_else(ApiError::auth_required)?;

    let rate = currency.provider().snapshot();

    let receipt = cart.with_cart_mut(|c| {
        if c.is_empty() {
            return Err(ApiError::from(artspace_core::CoreError::EmptyCart));
        }

        let total_usd = c.total_price_usd();
        let total_local = rate.to_local_money(total_usd);
        let receipt = ReceiptResponse {
            receipt_id: Uuid::new_v4().to_string(),
            buyer_email: user.email.clone(),
            lines: c.lines.clone(),
            total_items: c.total_items(),
            total_usd_cents: total_usd.cents(),
            total_local_cents: total_local.cents(),
            total_usd_display: config.format_usd(total_usd.cents()),
            total_local_display: config.format_local(total_local.cents()),
            rate_used: rate.rate,
            created_at: Utc::now(),
        };

        c.clear();
        Ok(receipt)
    })?;

    info!(
        receipt_id = %receipt.receipt_id,
        total_usd_cents = receipt.total_usd_cents,
        "simulated checkout complete"
    );

    Ok(receipt)
}
