//! # Catalog Types
//!
//! Core domain types for the ArtSpace catalog: artists and the artworks
//! they sell, in several sellable variants.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog Types                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Artist      │   │     Artwork     │   │ ProductVariant  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──┤  artist_id      │   │  Original       │       │
//! │  │  name, handle   │   │  title, image   │   │  Print          │       │
//! │  │  theme          │   │  price_*_cents  │   │  Mug            │       │
//! │  │  commission     │   │  has_custom_    │   │  Pen            │       │
//! │  │  rate (per m²)  │   │    service      │   │  Custom         │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  An Artwork exposes the subset of variants it actually sells;          │
//! │  Custom has no fixed price - it is quoted per commission.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pricing Model
//! Catalog prices are authored in USD cents (base currency). Display in the
//! local currency happens at the UI edge via the exchange-rate provider.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::theme::ArtistTheme;

// =============================================================================
// Product Variant
// =============================================================================

/// The sellable form of an artwork.
///
/// `Custom` is a commissioned painting sized to the buyer's wall; it has no
/// fixed catalog price and is quoted via [`crate::commission`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ProductVariant {
    /// The one-of-a-kind original piece.
    Original,
    /// A numbered print.
    Print,
    /// Merchandise: mug.
    Mug,
    /// Merchandise: pen.
    Pen,
    /// Custom commissioned painting (quoted, never fixed-price).
    Custom,
}

impl ProductVariant {
    /// Stable lowercase slug, used in composite cart keys ("1-print").
    pub const fn slug(&self) -> &'static str {
        match self {
            ProductVariant::Original => "original",
            ProductVariant::Print => "print",
            ProductVariant::Mug => "mug",
            ProductVariant::Pen => "pen",
            ProductVariant::Custom => "custom",
        }
    }
}

impl fmt::Display for ProductVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ProductVariant {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "original" => Ok(ProductVariant::Original),
            "print" => Ok(ProductVariant::Print),
            "mug" => Ok(ProductVariant::Mug),
            "pen" => Ok(ProductVariant::Pen),
            "custom" => Ok(ProductVariant::Custom),
            other => Err(CoreError::Validation(
                crate::error::ValidationError::InvalidFormat {
                    field: "variant".to_string(),
                    reason: format!(
                        "'{}' is not one of original, print, mug, pen, custom",
                        other
                    ),
                },
            )),
        }
    }
}

// =============================================================================
// Artist
// =============================================================================

/// An artist on the marketplace.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    /// Unique identifier.
    pub id: String,

    /// Display name shown across the storefront.
    pub name: String,

    /// Social handle ("@afasesantos").
    pub handle: String,

    /// Instagram profile URL.
    pub instagram: String,

    /// Portrait photo URL.
    pub photo_url: String,

    /// Visual theme applied when browsing this artist.
    pub theme: ArtistTheme,

    /// Short biography.
    pub bio: String,

    /// Specialty label ("Muralismo", "Pop Art", ...).
    pub specialty: String,

    /// Commission rate in USD cents per square meter.
    /// `None` means the artist does not take custom commissions.
    pub commission_rate_cents: Option<i64>,
}

impl Artist {
    /// Returns the commission rate as Money, if the artist takes commissions.
    #[inline]
    pub fn commission_rate(&self) -> Option<Money> {
        self.commission_rate_cents.map(Money::from_cents)
    }

    /// Checks whether the artist takes custom commissions.
    #[inline]
    pub fn takes_commissions(&self) -> bool {
        self.commission_rate_cents.is_some()
    }
}

// =============================================================================
// Artwork
// =============================================================================

/// An artwork listed in the catalog.
///
/// Prices are frozen catalog data in USD cents; a variant priced `None` is
/// not sold for that artwork. `Custom` availability is a flag, not a price.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    /// Unique identifier.
    pub id: String,

    /// Artist who created the piece.
    pub artist_id: String,

    /// Display title.
    pub title: String,

    /// Image URL for cards and the cart drawer.
    pub image_url: String,

    /// Price of the unique original, in USD cents.
    pub price_original_cents: i64,

    /// Price per print, in USD cents.
    pub price_print_cents: i64,

    /// Price per mug, if sold.
    pub price_mug_cents: Option<i64>,

    /// Price per pen, if sold.
    pub price_pen_cents: Option<i64>,

    /// Whether the artist offers this piece as a custom wall commission.
    pub has_custom_service: bool,
}

impl Artwork {
    /// Resolves the fixed catalog price for a variant.
    ///
    /// Returns `None` for variants this artwork does not sell, and always
    /// `None` for `Custom` (commissions are quoted, never fixed-price).
    ///
    /// ## Example
    /// ```rust
    /// use artspace_core::catalog::{Artwork, ProductVariant};
    ///
    /// let artwork = Artwork {
    ///     id: "1".into(),
    ///     artist_id: "1".into(),
    ///     title: "Cidade Neon".into(),
    ///     image_url: "https://example.com/cidade-neon.jpg".into(),
    ///     price_original_cents: 450_000,
    ///     price_print_cents: 8_900,
    ///     price_mug_cents: Some(2_400),
    ///     price_pen_cents: None,
    ///     has_custom_service: true,
    /// };
    ///
    /// assert_eq!(artwork.price(ProductVariant::Print).unwrap().cents(), 8_900);
    /// assert!(artwork.price(ProductVariant::Pen).is_none());
    /// assert!(artwork.price(ProductVariant::Custom).is_none());
    /// ```
    pub fn price(&self, variant: ProductVariant) -> Option<Money> {
        match variant {
            ProductVariant::Original => Some(Money::from_cents(self.price_original_cents)),
            ProductVariant::Print => Some(Money::from_cents(self.price_print_cents)),
            ProductVariant::Mug => self.price_mug_cents.map(Money::from_cents),
            ProductVariant::Pen => self.price_pen_cents.map(Money::from_cents),
            ProductVariant::Custom => None,
        }
    }

    /// Checks whether the artwork is sold in the given variant.
    pub fn sells(&self, variant: ProductVariant) -> bool {
        match variant {
            ProductVariant::Custom => self.has_custom_service,
            other => self.price(other).is_some(),
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The seeded, in-memory catalog.
///
/// The storefront has no backend: the catalog is fixed data loaded at
/// startup and read-only for the lifetime of the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub artists: Vec<Artist>,
    pub artworks: Vec<Artwork>,
}

impl Catalog {
    /// Looks up an artist by id.
    pub fn artist(&self, id: &str) -> Option<&Artist> {
        self.artists.iter().find(|a| a.id == id)
    }

    /// Looks up an artwork by id.
    pub fn artwork(&self, id: &str) -> Option<&Artwork> {
        self.artworks.iter().find(|a| a.id == id)
    }

    /// Lists artworks by a given artist, in catalog order.
    pub fn artworks_by_artist(&self, artist_id: &str) -> Vec<&Artwork> {
        self.artworks
            .iter()
            .filter(|a| a.artist_id == artist_id)
            .collect()
    }

    /// Resolves the fixed price of (artwork, variant), with typed errors for
    /// unknown artworks and unsold variants.
    pub fn resolve_price(&self, artwork_id: &str, variant: ProductVariant) -> CoreResult<Money> {
        let artwork = self
            .artwork(artwork_id)
            .ok_or_else(|| CoreError::ArtworkNotFound(artwork_id.to_string()))?;

        artwork.price(variant).ok_or(CoreError::VariantNotSold {
            artwork_id: artwork_id.to_string(),
            variant,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_variant_slug_round_trip() {
        for variant in [
            ProductVariant::Original,
            ProductVariant::Print,
            ProductVariant::Mug,
            ProductVariant::Pen,
            ProductVariant::Custom,
        ] {
            let parsed: ProductVariant = variant.slug().parse().unwrap();
            assert_eq!(parsed, variant);
        }
        assert!("poster".parse::<ProductVariant>().is_err());
    }

    #[test]
    fn test_seeded_catalog_lookups() {
        let catalog = seed::default_catalog();
        assert!(!catalog.artists.is_empty());
        assert!(!catalog.artworks.is_empty());

        let artwork = catalog.artwork("1").expect("seed artwork 1");
        let artist = catalog.artist(&artwork.artist_id).expect("seed artist");
        assert!(!artist.name.is_empty());
    }

    #[test]
    fn test_resolve_price_unknown_artwork() {
        let catalog = seed::default_catalog();
        let err = catalog
            .resolve_price("no-such-artwork", ProductVariant::Print)
            .unwrap_err();
        assert!(matches!(err, CoreError::ArtworkNotFound(_)));
    }

    #[test]
    fn test_resolve_price_custom_is_never_fixed() {
        let catalog = seed::default_catalog();
        let custom = catalog
            .artworks
            .iter()
            .find(|a| a.has_custom_service)
            .expect("seed has a custom-service artwork");

        let err = catalog
            .resolve_price(&custom.id, ProductVariant::Custom)
            .unwrap_err();
        assert!(matches!(err, CoreError::VariantNotSold { .. }));
    }
}
