//! # Cart Commands
//!
//! Tauri commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│ Receipt  │       │
//! │  │  Cart    │     │          │     │  Summary │     │ (simulated)      │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart       checkout                            │
//! │                   update_cart_item  (checkout.rs)                       │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                    │
//! │                                                      (back to empty)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Prices are resolved against the catalog at add time and frozen on the
//! line. Totals come back in both USD cents (exact) and local cents
//! (converted at the current rate, for display).

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::debug;

use artspace_core::cart::{Cart, CartLine, LineKey};
use artspace_core::validation::validate_quantity;
use artspace_core::ProductVariant;
use artspace_currency::RateSnapshot;

use crate::error::ApiError;
use crate::state::{CartState, CatalogState, CurrencyState};

// =============================================================================
// Response Types
// =============================================================================

/// Derived cart totals for badges and the drawer footer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Distinct lines in the cart.
    pub line_count: usize,

    /// Sum of all line quantities (the badge number).
    pub total_items: i64,

    /// Cart total in USD cents, exact.
    pub total_price_usd_cents: i64,

    /// Cart total converted to local currency cents at the current rate.
    pub total_price_local_cents: i64,
}

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

/// Builds the response DTO from the cart and the current rate snapshot.
pub(crate) fn cart_response(cart: &Cart, rate: &RateSnapshot) -> CartResponse {
    let total_usd = cart.total_price_usd();
    CartResponse {
        lines: cart.lines.clone(),
        totals: CartTotals {
            line_count: cart.line_count(),
            total_items: cart.total_items(),
            total_price_usd_cents: total_usd.cents(),
            total_price_local_cents: rate.to_local_money(total_usd).cents(),
        },
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Gets the current cart contents with derived totals.
#[tauri::command]
pub fn get_cart(
    cart: State<'_, CartState>,
    currency: State<'_, CurrencyState>,
) -> CartResponse {
    debug!("get_cart command");

    let rate = currency.provider().snapshot();
    cart.with_cart(|c| cart_response(c, &rate))
}

/// Adds an artwork variant to the cart.
///
/// ## Behavior
/// - Same (artwork, variant) already in cart: quantity increases
/// - Otherwise: appended as a new line with the catalog price frozen
/// - `Custom` is rejected here - commissions go through
///   `add_commission_to_cart`, which carries the quoted price
///
/// ## Arguments
/// * `artwork_id` - Artwork to add
/// * `variant` - Sellable variant ("original", "print", "mug", "pen")
/// * `quantity` - Quantity to add (default: 1)
#[tauri::command]
pub fn add_to_cart(
    catalog: State<'_, CatalogState>,
    cart: State<'_, CartState>,
    currency: State<'_, CurrencyState>,
    artwork_id: String,
    variant: ProductVariant,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(artwork_id = %artwork_id, variant = %variant, quantity, "add_to_cart command");

    if variant == ProductVariant::Custom {
        return Err(ApiError::validation(
            "Custom commissions are quoted first; use add_commission_to_cart",
        ));
    }

    validate_quantity(quantity)?;

    let catalog = catalog.catalog();
    let unit_price = catalog.resolve_price(&artwork_id, variant)?;
    let artwork = catalog
        .artwork(&artwork_id)
        .ok_or_else(|| ApiError::not_found("Artwork", &artwork_id))?;
    let artist = catalog
        .artist(&artwork.artist_id)
        .ok_or_else(|| ApiError::not_found("Artist", &artwork.artist_id))?;

    let line = CartLine::new(
        LineKey::new(artwork_id, variant),
        artwork.title.clone(),
        artist.name.clone(),
        artwork.image_url.clone(),
        unit_price,
        quantity,
    );

    let rate = currency.provider().snapshot();
    cart.with_cart_mut(|c| {
        c.add_line(line)?;
        Ok(cart_response(c, &rate))
    })
}

/// Sets the quantity of a cart line.
///
/// ## Behavior
/// - Quantity ≥ 1: line set to that quantity
/// - Quantity ≤ 0: line removed
/// - Unknown line: no-op (the refreshed cart is returned either way)
#[tauri::command]
pub fn update_cart_item(
    cart: State<'_, CartState>,
    currency: State<'_, CurrencyState>,
    artwork_id: String,
    variant: ProductVariant,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(artwork_id = %artwork_id, variant = %variant, quantity, "update_cart_item command");

    let key = LineKey::new(artwork_id, variant);
    let rate = currency.provider().snapshot();

    cart.with_cart_mut(|c| {
        c.update_quantity(&key, quantity)?;
        Ok(cart_response(c, &rate))
    })
}

/// Removes a line from the cart. Unknown lines are a no-op.
#[tauri::command]
pub fn remove_from_cart(
    cart: State<'_, CartState>,
    currency: State<'_, CurrencyState>,
    artwork_id: String,
    variant: ProductVariant,
) -> CartResponse {
    debug!(artwork_id = %artwork_id, variant = %variant, "remove_from_cart command");

    let key = LineKey::new(artwork_id, variant);
    let rate = currency.provider().snapshot();

    cart.with_cart_mut(|c| {
        c.remove_line(&key);
        cart_response(c, &rate)
    })
}

/// Clears all lines from the cart.
///
/// ## When Used
/// - User empties the drawer
/// - After checkout is finalized (checkout.rs clears internally)
#[tauri::command]
pub fn clear_cart(
    cart: State<'_, CartState>,
    currency: State<'_, CurrencyState>,
) -> CartResponse {
    debug!("clear_cart command");

    let rate = currency.provider().snapshot();
    cart.with_cart_mut(|c| {
        c.clear();
        cart_response(c, &rate)
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use artspace_core::Money;

    fn snapshot(rate: f64) -> RateSnapshot {
        RateSnapshot {
            rate,
            last_updated: None,
            is_loading: false,
            error: None,
        }
    }

    #[test]
    fn test_cart_response_totals() {
        let mut cart = Cart::new();
        cart.add_line(CartLine::new(
            LineKey::new("1", ProductVariant::Print),
            "Cidade Neon",
            "A Fase",
            "https://example.com/1.jpg",
            Money::from_cents(1800),
            2,
        ))
        .unwrap();

        let response = cart_response(&cart, &snapshot(5.50));
        assert_eq!(response.totals.line_count, 1);
        assert_eq!(response.totals.total_items, 2);
        assert_eq!(response.totals.total_price_usd_cents, 3600);
        // $36.00 × 5.50 = R$ 198.00
        assert_eq!(response.totals.total_price_local_cents, 19800);
    }

    #[test]
    fn test_cart_response_serialization_shape() {
        let cart = Cart::new();
        let json = serde_json::to_value(cart_response(&cart, &snapshot(5.50))).unwrap();
        assert_eq!(json["totals"]["totalItems"], 0);
        assert_eq!(json["totals"]["totalPriceUsdCents"], 0);
        assert!(json["lines"].as_array().unwrap().is_empty());
    }
}
