//! # Commands Module
//!
//! Tauri IPC commands, grouped by storefront concern.
//!
//! ```text
//! commands/
//! ├── catalog.rs     ◄─── artist roster + artwork portfolio reads
//! ├── cart.rs        ◄─── cart mutations + derived totals
//! ├── commission.rs  ◄─── custom-commission quotes
//! ├── currency.rs    ◄─── exchange-rate snapshot + manual refresh
//! ├── auth.rs        ◄─── simulated login/register/logout
//! ├── language.rs    ◄─── UI language selection (persisted)
//! ├── theme.rs       ◄─── artist theme descriptor (single writer)
//! └── checkout.rs    ◄─── simulated checkout → receipt
//! ```
//!
//! Every command is a thin shell: deserialize → delegate to core/state →
//! serialize. Business rules live in `artspace-core`.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod commission;
pub mod currency;
pub mod language;
pub mod theme;
