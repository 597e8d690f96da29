//! # State Module
//!
//! Manages application state for the Tauri desktop app.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can mock/inject individual states
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//! 4. **Reduced Contention**: Independent states don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Tauri Runtime                              │   │
//! │  │  app.manage(catalog); app.manage(cart); app.manage(currency);   │   │
//! │  │  app.manage(language); app.manage(session); app.manage(theme);  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  ┌────────────┐ ┌────────────┐ ┌──────────────┐ ┌─────────────────┐    │
//! │  │CatalogState│ │ CartState  │ │CurrencyState │ │ LanguageState   │    │
//! │  │ (read-only │ │ Arc<Mutex< │ │ provider +   │ │ Mutex<Language> │    │
//! │  │   seed)    │ │   Cart>>   │ │ refresher    │ │ + persisted file│    │
//! │  └────────────┘ └────────────┘ └──────────────┘ └─────────────────┘    │
//! │                                                                         │
//! │  ┌────────────┐ ┌────────────┐ ┌──────────────┐                        │
//! │  │SessionState│ │ ThemeState │ │ ConfigState  │                        │
//! │  │Mutex<      │ │ single-    │ │ (read-only   │                        │
//! │  │ Session>   │ │ writer     │ │  after init) │                        │
//! │  └────────────┘ └────────────┘ └──────────────┘                        │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CatalogState/ConfigState: read-only after initialization            │
//! │  • CartState/SessionState/ThemeState/LanguageState: Mutex-protected    │
//! │  • CurrencyState: internal lock in the provider, shutdown handle here  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;
mod currency;
mod language;
mod session;
mod theme;

pub use cart::CartState;
pub use catalog::CatalogState;
pub use config::ConfigState;
pub use currency::CurrencyState;
pub use language::LanguageState;
pub use session::{Badge, BadgeTier, Friend, Session, SessionState, UserProfile};
pub use theme::ThemeState;
