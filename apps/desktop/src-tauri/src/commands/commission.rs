//! # Commission Commands
//!
//! Quote-and-add flow for custom commissioned paintings.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User opens "Solicite em seu Muro/Ambiente" on an artwork               │
//! │                    │                                                    │
//! │                    ▼  (on every keystroke)                              │
//! │  invoke('quote_commission', { artworkId, widthCm, heightCm })           │
//! │                    │                                                    │
//! │          ┌─────────┴──────────┐                                         │
//! │          ▼                    ▼                                         │
//! │   dimensions valid      dimensions incomplete                           │
//! │   → Some(quote)         → null  (price withheld, add disabled)          │
//! │          │                                                              │
//! │          ▼  (user confirms)                                             │
//! │  invoke('add_commission_to_cart', { ... })                              │
//! │   → cart line keyed (artwork, custom), quoted price frozen              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::debug;

use artspace_core::cart::{CartLine, LineKey};
use artspace_core::commission::{quote, CommissionQuote};
use artspace_core::error::CoreError;
use artspace_core::{Artist, Artwork, Money, ProductVariant};

use crate::commands::cart::{cart_response, CartResponse};
use crate::error::ApiError;
use crate::state::{CartState, CatalogState, CurrencyState};

// =============================================================================
// Response Types
// =============================================================================

/// A commission quote with the local-currency figure attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub artwork_id: String,
    pub artist_id: String,

    /// Painted area in square meters.
    pub area_m2: f64,

    /// Artist rate in USD cents per square meter.
    pub rate_per_m2_cents: i64,

    /// Quote total in USD cents.
    pub total_usd_cents: i64,

    /// Quote total converted to local cents at the current rate.
    pub total_local_cents: i64,
}

// =============================================================================
// Helpers
// =============================================================================

/// Resolves the artwork, its artist and the commission rate, with typed
/// errors for every way this can be unavailable.
fn resolve_commission<'a>(
    catalog: &'a artspace_core::Catalog,
    artwork_id: &str,
) -> Result<(&'a Artwork, &'a Artist, Money), ApiError> {
    let artwork = catalog
        .artwork(artwork_id)
        .ok_or_else(|| ApiError::not_found("Artwork", artwork_id))?;

    if !artwork.has_custom_service {
        return Err(CoreError::VariantNotSold {
            artwork_id: artwork_id.to_string(),
            variant: ProductVariant::Custom,
        }
        .into());
    }

    let artist = catalog
        .artist(&artwork.artist_id)
        .ok_or_else(|| ApiError::not_found("Artist", &artwork.artist_id))?;

    let rate = artist
        .commission_rate()
        .ok_or_else(|| ApiError::from(CoreError::CommissionsNotOffered(artist.id.clone())))?;

    Ok((artwork, artist, rate))
}

// =============================================================================
// Commands
// =============================================================================

/// Quotes a custom commission for user-entered dimensions.
///
/// Returns `null` (not an error) while the dimensions are missing,
/// non-numeric or ≤ 0 - incomplete input is not a failure, the price is
/// simply withheld.
#[tauri::command]
pub fn quote_commission(
    catalog: State<'_, CatalogState>,
    currency: State<'_, CurrencyState>,
    artwork_id: String,
    width_cm: String,
    height_cm: String,
) -> Result<Option<QuoteResponse>, ApiError> {
    debug!(artwork_id = %artwork_id, width_cm = %width_cm, height_cm = %height_cm, "quote_commission command");

    let catalog = catalog.catalog();
    let (artwork, artist, rate) = resolve_commission(catalog, &artwork_id)?;

    let Some(commission) = quote(rate, &width_cm, &height_cm) else {
        return Ok(None);
    };

    Ok(Some(to_response(
        &artwork.id,
        &artist.id,
        commission,
        &currency,
    )))
}

/// Adds a quoted commission to the cart as a (artwork, custom) line.
///
/// The dimensions are re-quoted server-side; incomplete dimensions are a
/// validation error here (the UI should have withheld the button).
#[tauri::command]
pub fn add_commission_to_cart(
    catalog: State<'_, CatalogState>,
    cart: State<'_, CartState>,
    currency: State<'_, CurrencyState>,
    artwork_id: String,
    width_cm: String,
    height_cm: String,
) -> Result<CartResponse, ApiError> {
    debug!(artwork_id = %artwork_id, width_cm = %width_cm, height_cm = %height_cm, "add_commission_to_cart command");

    let catalog = catalog.catalog();
    let (artwork, artist, rate) = resolve_commission(catalog, &artwork_id)?;

    let commission = quote(rate, &width_cm, &height_cm).ok_or_else(|| {
        ApiError::validation("Commission dimensions are incomplete or invalid")
    })?;

    let line = CartLine::new(
        LineKey::new(artwork.id.clone(), ProductVariant::Custom),
        artwork.title.clone(),
        artist.name.clone(),
        artwork.image_url.clone(),
        commission.total_usd(),
        1,
    );

    let rate_snapshot = currency.provider().snapshot();
    cart.with_cart_mut(|c| {
        c.add_line(line)?;
        Ok(cart_response(c, &rate_snapshot))
    })
}

fn to_response(
    artwork_id: &str,
    artist_id: &str,
    commission: CommissionQuote,
    currency: &State<'_, CurrencyState>,
) -> QuoteResponse {
    let snapshot = currency.provider().snapshot();
    QuoteResponse {
        artwork_id: artwork_id.to_string(),
        artist_id: artist_id.to_string(),
        area_m2: commission.area_m2,
        rate_per_m2_cents: commission.rate_per_m2_cents,
        total_usd_cents: commission.total_usd_cents,
        total_local_cents: snapshot.to_local_money(commission.total_usd()).cents(),
    }
}
