//! # Cart Aggregate
//!
//! The pure shopping-cart aggregate: an insertion-ordered collection of
//! lines, unique per (artwork, variant) key, with derived totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Frontend Action          Command                 Cart Change           │
//! │  ───────────────          ─────────────           ─────────────────     │
//! │                                                                         │
//! │  Click "Add to Cart" ────► add_to_cart() ───────► merge or append line  │
//! │                                                                         │
//! │  Quantity stepper ───────► update_cart_item() ──► qty = n (n ≤ 0 ⇒     │
//! │                                                    line removed)        │
//! │                                                                         │
//! │  Click trash icon ───────► remove_from_cart() ──► line removed          │
//! │                                                                         │
//! │  Checkout complete ──────► clear_cart() ────────► lines.clear()         │
//! │                                                                         │
//! │  Badge / drawer ─────────► get_cart() ──────────► (read only totals)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per composite key; adding a present key merges quantity
//! - Every line has quantity ≥ 1; dropping to 0 or below removes the line
//! - Unknown keys on update/remove are silent no-ops, never errors
//! - Totals are derived sums in integer cents, exact and recomputable

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::catalog::ProductVariant;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::{MAX_CART_LINES, MAX_LINE_QUANTITY};

// =============================================================================
// Line Key
// =============================================================================

/// Composite key identifying a purchasable unit: artwork + variant.
///
/// Two prints of the same piece share a line; a print and a mug of the same
/// piece do not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineKey {
    /// Artwork identifier.
    pub artwork_id: String,

    /// Sellable variant of the artwork.
    pub variant: ProductVariant,
}

impl LineKey {
    /// Creates a new composite key.
    pub fn new(artwork_id: impl Into<String>, variant: ProductVariant) -> Self {
        LineKey {
            artwork_id: artwork_id.into(),
            variant,
        }
    }
}

/// Renders as the frontend's composite id: `"1-print"`.
impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.artwork_id, self.variant)
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One purchasable entry in the cart.
///
/// ## Price Freezing
/// Display fields and the unit price are captured when the line is added.
/// If catalog data changes afterwards, the cart keeps showing what the
/// buyer put in it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Composite key (artwork + variant).
    pub key: LineKey,

    /// Artwork title at time of adding (frozen).
    pub title: String,

    /// Artist display name at time of adding (frozen).
    pub artist_name: String,

    /// Image URL for the cart drawer (frozen).
    pub image_url: String,

    /// Unit price in USD cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Quantity in cart. Always ≥ 1 while the line exists.
    pub quantity: i64,

    /// When this line was first added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new cart line with the given quantity.
    pub fn new(
        key: LineKey,
        title: impl Into<String>,
        artist_name: impl Into<String>,
        image_url: impl Into<String>,
        unit_price: Money,
        quantity: i64,
    ) -> Self {
        CartLine {
            key,
            title: title.into(),
            artist_name: artist_name.into(),
            image_url: image_url.into(),
            unit_price_cents: unit_price.cents(),
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by composite key (adding the same key merges quantity)
/// - Quantity must be ≥ 1 (an update to 0 or below removes the line)
/// - Maximum lines: 100, maximum quantity per line: 999 (crate constants)
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in the cart, insertion-ordered.
    pub lines: Vec<CartLine>,

    /// When the cart was created/last cleared.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a line to the cart, merging with an existing line of the same
    /// composite key.
    ///
    /// ## Behavior
    /// - Key already present: quantity is incremented by `line.quantity`
    /// - Key not present: the line is appended at the end
    ///
    /// ## Errors
    /// - `QuantityTooLarge` if the merged quantity would exceed the ceiling
    /// - `CartTooLarge` if a new line would exceed the line ceiling
    pub fn add_line(&mut self, line: CartLine) -> CoreResult<()> {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.key == line.key) {
            let new_qty = existing.quantity + line.quantity;
            if new_qty > MAX_LINE_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_LINE_QUANTITY,
                });
            }
            existing.quantity = new_qty;
            return Ok(());
        }

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_LINES,
            });
        }

        if line.quantity > MAX_LINE_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: line.quantity,
                max: MAX_LINE_QUANTITY,
            });
        }

        self.lines.push(line);
        Ok(())
    }

    /// Sets the quantity of the line with the given key.
    ///
    /// ## Behavior
    /// - `quantity ≥ 1`: the line's quantity becomes exactly `quantity`
    /// - `quantity ≤ 0`: the line is removed (same as [`Cart::remove_line`])
    /// - Unknown key: silent no-op
    ///
    /// ## Errors
    /// - `QuantityTooLarge` if `quantity` exceeds the per-line ceiling
    pub fn update_quantity(&mut self, key: &LineKey, quantity: i64) -> CoreResult<()> {
        if quantity <= 0 {
            self.remove_line(key);
            return Ok(());
        }

        if quantity > MAX_LINE_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_LINE_QUANTITY,
            });
        }

        if let Some(line) = self.lines.iter_mut().find(|l| &l.key == key) {
            line.quantity = quantity;
        }
        Ok(())
    }

    /// Removes the line with the given key. Returns whether a line was
    /// actually removed; an unknown key is a silent no-op.
    pub fn remove_line(&mut self, key: &LineKey) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|l| &l.key != key);
        self.lines.len() != initial_len
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Looks up a line by key.
    pub fn line(&self, key: &LineKey) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.key == key)
    }

    /// Returns the number of distinct lines in the cart.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total item count (sum of all line quantities).
    pub fn total_items(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Calculates the cart total in USD.
    ///
    /// Derived on every call from current lines; exact in integer cents.
    pub fn total_price_usd(&self) -> Money {
        self.lines
            .iter()
            .map(|l| l.line_total())
            .fold(Money::zero(), |acc, t| acc + t)
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn print_line(artwork_id: &str, price_cents: i64, qty: i64) -> CartLine {
        CartLine::new(
            LineKey::new(artwork_id, ProductVariant::Print),
            format!("Artwork {}", artwork_id),
            "A Fase",
            format!("https://example.com/{}.jpg", artwork_id),
            Money::from_cents(price_cents),
            qty,
        )
    }

    #[test]
    fn test_add_line() {
        let mut cart = Cart::new();
        cart.add_line(print_line("1", 1800, 1)).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_price_usd().cents(), 1800);
    }

    #[test]
    fn test_add_same_key_merges_quantity() {
        let mut cart = Cart::new();
        cart.add_line(print_line("1", 1800, 1)).unwrap();
        cart.add_line(print_line("1", 1800, 1)).unwrap();

        // Still one line, doubled totals
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price_usd().cents(), 3600);
    }

    #[test]
    fn test_distinct_variants_are_distinct_lines() {
        let mut cart = Cart::new();
        cart.add_line(print_line("1", 1800, 1)).unwrap();

        let mug = CartLine::new(
            LineKey::new("1", ProductVariant::Mug),
            "Artwork 1",
            "A Fase",
            "https://example.com/1.jpg",
            Money::from_cents(2400),
            1,
        );
        cart.add_line(mug).unwrap();

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price_usd().cents(), 4200);
    }

    #[test]
    fn test_update_quantity_sets_exact_value() {
        let mut cart = Cart::new();
        cart.add_line(print_line("1", 1800, 2)).unwrap();

        let key = LineKey::new("1", ProductVariant::Print);
        cart.update_quantity(&key, 5).unwrap();

        assert_eq!(cart.line(&key).unwrap().quantity, 5);
        assert_eq!(cart.total_items(), 5);
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add_line(print_line("1", 1800, 2)).unwrap();

        let key = LineKey::new("1", ProductVariant::Print);
        cart.update_quantity(&key, 0).unwrap();

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn test_update_quantity_negative_removes_line() {
        let mut cart = Cart::new();
        cart.add_line(print_line("1", 1800, 3)).unwrap();

        let key = LineKey::new("1", ProductVariant::Print);
        cart.update_quantity(&key, -4).unwrap();

        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_and_remove_unknown_key_are_noops() {
        let mut cart = Cart::new();
        cart.add_line(print_line("1", 1800, 1)).unwrap();

        let missing = LineKey::new("99", ProductVariant::Mug);
        cart.update_quantity(&missing, 7).unwrap();
        assert!(!cart.remove_line(&missing));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_remove_then_re_add_starts_fresh() {
        let mut cart = Cart::new();
        cart.add_line(print_line("1", 1800, 5)).unwrap();

        let key = LineKey::new("1", ProductVariant::Print);
        assert!(cart.remove_line(&key));

        // No residual quantity carry-over
        cart.add_line(print_line("1", 1800, 2)).unwrap();
        assert_eq!(cart.line(&key).unwrap().quantity, 2);
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn test_totals_recompute_from_current_lines() {
        let mut cart = Cart::new();
        cart.add_line(print_line("1", 1800, 2)).unwrap();
        cart.add_line(print_line("2", 5900, 1)).unwrap();

        // 2 × $18.00 + 1 × $59.00
        assert_eq!(cart.total_price_usd().cents(), 9500);

        // Derived totals are idempotent reads
        assert_eq!(cart.total_price_usd(), cart.total_price_usd());

        cart.update_quantity(&LineKey::new("2", ProductVariant::Print), 3)
            .unwrap();
        assert_eq!(cart.total_price_usd().cents(), 2 * 1800 + 3 * 5900);
    }

    #[test]
    fn test_quantity_ceiling() {
        let mut cart = Cart::new();
        cart.add_line(print_line("1", 1800, MAX_LINE_QUANTITY))
            .unwrap();

        let err = cart.add_line(print_line("1", 1800, 1)).unwrap_err();
        assert!(matches!(err, CoreError::QuantityTooLarge { .. }));

        // The failed merge left the existing line untouched
        let key = LineKey::new("1", ProductVariant::Print);
        assert_eq!(cart.line(&key).unwrap().quantity, MAX_LINE_QUANTITY);
    }

    #[test]
    fn test_line_ceiling() {
        let mut cart = Cart::new();
        for i in 0..MAX_CART_LINES {
            cart.add_line(print_line(&i.to_string(), 100, 1)).unwrap();
        }

        let err = cart
            .add_line(print_line("overflow", 100, 1))
            .unwrap_err();
        assert!(matches!(err, CoreError::CartTooLarge { .. }));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_line(print_line("1", 1800, 2)).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert!(cart.total_price_usd().is_zero());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add_line(print_line("3", 100, 1)).unwrap();
        cart.add_line(print_line("1", 100, 1)).unwrap();
        cart.add_line(print_line("2", 100, 1)).unwrap();

        // Merging must not reorder
        cart.add_line(print_line("1", 100, 1)).unwrap();

        let ids: Vec<&str> = cart.lines.iter().map(|l| l.key.artwork_id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_line_key_display() {
        let key = LineKey::new("1", ProductVariant::Print);
        assert_eq!(key.to_string(), "1-print");
    }
}
