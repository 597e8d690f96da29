//! # Custom-Commission Quotes
//!
//! Pure price calculator for custom-sized commissioned paintings.
//!
//! ## Quote Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User fills the commission form                                         │
//! │                                                                         │
//! │  Artist: Cadumen (rate $1,200.00 / m²)                                  │
//! │  Width:  "350" cm      Height: "250" cm                                 │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  quote(rate, "350", "250")  ← THIS MODULE                               │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  area  = 3.5 m × 2.5 m = 8.75 m²                                        │
//! │  total = 8.75 × rate                                                    │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  Some(CommissionQuote) → shown + addable to cart                        │
//! │                                                                         │
//! │  Any missing/non-numeric/≤ 0 dimension ──► None (price withheld,        │
//! │  never zero or negative)                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Quotes are ephemeral: computed on every keystroke, never stored. The
//! function is pure - identical inputs always produce identical output.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// Centimeters per meter, for dimension conversion.
const CM_PER_M: f64 = 100.0;

// =============================================================================
// Commission Quote
// =============================================================================

/// An ephemeral price quote for a custom commissioned painting.
///
/// Derived, never persisted. The local-currency figure is attached at the
/// app layer using the current exchange rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CommissionQuote {
    /// Painted area in square meters.
    pub area_m2: f64,

    /// Artist rate in USD cents per square meter.
    pub rate_per_m2_cents: i64,

    /// Total price in USD cents (area × rate, rounded to the cent).
    pub total_usd_cents: i64,
}

impl CommissionQuote {
    /// Returns the total as Money.
    #[inline]
    pub fn total_usd(&self) -> Money {
        Money::from_cents(self.total_usd_cents)
    }
}

// =============================================================================
// Quote Calculation
// =============================================================================

/// Computes a commission quote from user-entered dimensions.
///
/// ## Contract
/// - `width_cm` and `height_cm` are raw form input, in centimeters
/// - Either dimension missing, empty, non-numeric, non-finite, or ≤ 0
///   yields `None` - the caller must withhold the price, not show zero
/// - A non-positive rate also yields `None` (nothing sensible to show)
/// - Pure and deterministic: no side effects, no stored state
///
/// ## Example
/// ```rust
/// use artspace_core::commission::quote;
/// use artspace_core::money::Money;
///
/// let rate = Money::from_cents(80_000); // $800.00 / m²
///
/// let q = quote(rate, "350", "250").unwrap();
/// assert!((q.area_m2 - 8.75).abs() < 1e-9);
/// assert_eq!(q.total_usd_cents, 700_000); // $7,000.00
///
/// assert!(quote(rate, "", "250").is_none());
/// assert!(quote(rate, "350", "-2").is_none());
/// ```
pub fn quote(rate_per_m2: Money, width_cm: &str, height_cm: &str) -> Option<CommissionQuote> {
    if !rate_per_m2.is_positive() {
        return None;
    }

    let width_m = parse_dimension_cm(width_cm)? / CM_PER_M;
    let height_m = parse_dimension_cm(height_cm)? / CM_PER_M;

    let area_m2 = width_m * height_m;
    let total = Money::from_usd_f64(area_m2 * rate_per_m2.as_usd_f64());

    Some(CommissionQuote {
        area_m2,
        rate_per_m2_cents: rate_per_m2.cents(),
        total_usd_cents: total.cents(),
    })
}

/// Parses a user-entered dimension in centimeters.
///
/// Returns `None` for anything that is not a finite positive number.
pub fn parse_dimension_cm(input: &str) -> Option<f64> {
    let value: f64 = input.trim().parse().ok()?;
    if value.is_finite() && value > 0.0 {
        Some(value)
    } else {
        None
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(cents: i64) -> Money {
        Money::from_cents(cents)
    }

    #[test]
    fn test_quote_wall_sized_commission() {
        // 3.5 m × 2.5 m at $800/m² = $7,000
        let q = quote(rate(80_000), "350", "250").unwrap();
        assert!((q.area_m2 - 8.75).abs() < 1e-9);
        assert_eq!(q.total_usd_cents, 700_000);
        assert_eq!(q.total_usd().to_string(), "$7000.00");
    }

    #[test]
    fn test_quote_fractional_dimensions() {
        // 120.5 cm × 80 cm at $95/m²... rounds to the nearest cent
        let q = quote(rate(9_500), "120.5", "80").unwrap();
        assert!((q.area_m2 - 0.964).abs() < 1e-9);
        assert_eq!(q.total_usd_cents, 9_158); // 0.964 × $95 = $91.58
    }

    #[test]
    fn test_quote_is_deterministic() {
        let a = quote(rate(80_000), "350", "250").unwrap();
        let b = quote(rate(80_000), "350", "250").unwrap();
        assert_eq!(a, b);
        assert!(a.area_m2.to_bits() == b.area_m2.to_bits());
    }

    #[test]
    fn test_missing_or_empty_dimension_withholds_quote() {
        assert!(quote(rate(80_000), "", "250").is_none());
        assert!(quote(rate(80_000), "350", "").is_none());
        assert!(quote(rate(80_000), "   ", "250").is_none());
    }

    #[test]
    fn test_non_numeric_dimension_withholds_quote() {
        assert!(quote(rate(80_000), "abc", "250").is_none());
        assert!(quote(rate(80_000), "350", "2,5").is_none());
        assert!(quote(rate(80_000), "3.5m", "250").is_none());
    }

    #[test]
    fn test_zero_or_negative_dimension_withholds_quote() {
        // Never a zero or negative price - the quote is suppressed entirely
        assert!(quote(rate(80_000), "0", "250").is_none());
        assert!(quote(rate(80_000), "350", "0").is_none());
        assert!(quote(rate(80_000), "-350", "250").is_none());
        assert!(quote(rate(80_000), "350", "-0.5").is_none());
    }

    #[test]
    fn test_non_finite_dimension_withholds_quote() {
        assert!(quote(rate(80_000), "inf", "250").is_none());
        assert!(quote(rate(80_000), "NaN", "250").is_none());
    }

    #[test]
    fn test_non_positive_rate_withholds_quote() {
        assert!(quote(rate(0), "350", "250").is_none());
        assert!(quote(rate(-100), "350", "250").is_none());
    }

    #[test]
    fn test_parse_dimension_cm() {
        assert_eq!(parse_dimension_cm(" 350 "), Some(350.0));
        assert_eq!(parse_dimension_cm("0.5"), Some(0.5));
        assert_eq!(parse_dimension_cm("0"), None);
        assert_eq!(parse_dimension_cm("-1"), None);
        assert_eq!(parse_dimension_cm("wall"), None);
    }
}
