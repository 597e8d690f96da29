//! # artspace-core: Pure Business Logic for the ArtSpace Storefront
//!
//! This crate is the **heart** of the ArtSpace marketplace storefront. It
//! contains all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       ArtSpace Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (React)                             │   │
//! │  │   Portfolio ──► Cart Drawer ──► Commission Form ──► Checkout   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Tauri Commands                               │   │
//! │  │   list_artworks, add_to_cart, quote_commission, checkout, ...   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ artspace-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   money   │  │   cart    │  │commission │  │   │
//! │  │   │  Artist   │  │   Money   │  │   Cart    │  │   quote   │  │   │
//! │  │   │  Artwork  │  │  (cents)  │  │ CartLine  │  │ (area×rate)│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              artspace-currency (Rate Provider)                  │   │
//! │  │        USD → local conversion, endpoint polling, fallback       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Artists, artworks and sellable variants
//! - [`cart`] - The cart aggregate with derived totals
//! - [`commission`] - Custom-commission quote calculator
//! - [`money`] - Money type with integer-cents arithmetic
//! - [`language`] - UI language allow-list
//! - [`theme`] - Artist theme descriptors
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//! - [`seed`] - Fixed catalog data (no backend in scope)
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system and timer access is FORBIDDEN here
//! 3. **Integer Money**: Catalog and cart math is in USD cents (i64); f64
//!    appears only at the explicit conversion boundary
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod commission;
pub mod error;
pub mod language;
pub mod money;
pub mod seed;
pub mod theme;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use artspace_core::Money` instead of
// `use artspace_core::money::Money`

pub use cart::{Cart, CartLine, LineKey};
pub use catalog::{Artist, Artwork, Catalog, ProductVariant};
pub use commission::CommissionQuote;
pub use error::{CoreError, CoreResult, ValidationError};
pub use language::Language;
pub use money::Money;
pub use theme::{ArtistTheme, ThemeDescriptor};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines allowed in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts and keeps the drawer renderable.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single line in the cart.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 999;
