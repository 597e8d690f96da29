//! # ArtSpace Desktop Library
//!
//! Core library for the ArtSpace desktop storefront.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! artspace_desktop_lib/
//! ├── lib.rs          ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Seeded catalog (read-only)
//! │   ├── cart.rs     ◄─── Cart state management
//! │   ├── currency.rs ◄─── Rate provider + refresher lifecycle
//! │   ├── language.rs ◄─── Persisted UI language
//! │   ├── session.rs  ◄─── Simulated auth session
//! │   ├── theme.rs    ◄─── Artist theme descriptor
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── catalog.rs  ◄─── Roster/portfolio reads
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── commission.rs ◄─ Quote + add commissions
//! │   ├── currency.rs ◄─── Rate snapshot + manual refresh
//! │   ├── auth.rs     ◄─── Simulated login/register
//! │   ├── language.rs ◄─── Language selection
//! │   ├── theme.rs    ◄─── Theme switching
//! │   └── checkout.rs ◄─── Simulated checkout
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Startup & Teardown
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Lifecycle                             │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Load Configuration ───────────────────────────────────────────────► │
//! │     • Defaults + ARTSPACE_* environment overrides                       │
//! │                                                                         │
//! │  3. Initialize State Objects ─────────────────────────────────────────► │
//! │     • CatalogState: seeded roster + portfolio                           │
//! │     • CartState: empty cart behind a Mutex                              │
//! │     • CurrencyState: rate provider + refresher (first fetch fires now)  │
//! │     • LanguageState: persisted code, validated, fallback pt-BR          │
//! │     • SessionState / ThemeState: logged out, neutral skin               │
//! │                                                                         │
//! │  4. Build & Run Tauri App ────────────────────────────────────────────► │
//! │     • Register all commands, manage state, launch window                │
//! │                                                                         │
//! │  5. On Exit ──────────────────────────────────────────────────────────► │
//! │     • CurrencyState::shutdown() stops the refresh timer                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tauri::Manager;
use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{
    CartState, CatalogState, ConfigState, CurrencyState, LanguageState, SessionState, ThemeState,
};

/// Runs the Tauri application.
pub fn run() {
    // Initialize tracing (logging)
    init_tracing();

    info!("Starting ArtSpace storefront");

    let app = tauri::Builder::default()
        // Setup hook runs before the app starts
        .setup(|app| {
            let config_state = ConfigState::from_env();
            info!(store = %config_state.store_name, "configuration loaded");

            let catalog_state = CatalogState::seeded();
            let cart_state = CartState::new();
            let session_state = SessionState::new();
            let theme_state = ThemeState::new();
            let language_state = LanguageState::load();

            // The refresher spawns onto the async runtime; entering it via
            // block_on keeps setup synchronous like the rest of the hook.
            let currency_state = tauri::async_runtime::block_on(async {
                CurrencyState::start(&config_state)
            });

            // Register state with Tauri
            app.manage(catalog_state);
            app.manage(cart_state);
            app.manage(currency_state);
            app.manage(language_state);
            app.manage(session_state);
            app.manage(theme_state);
            app.manage(config_state);

            info!("State initialized");
            Ok(())
        })
        // Register all commands
        .invoke_handler(tauri::generate_handler![
            // Catalog commands
            commands::catalog::list_artists,
            commands::catalog::get_artist,
            commands::catalog::list_artworks,
            commands::catalog::get_artwork,
            // Cart commands
            commands::cart::get_cart,
            commands::cart::add_to_cart,
            commands::cart::update_cart_item,
            commands::cart::remove_from_cart,
            commands::cart::clear_cart,
            // Commission commands
            commands::commission::quote_commission,
            commands::commission::add_commission_to_cart,
            // Currency commands
            commands::currency::get_exchange_rate,
            commands::currency::refresh_exchange_rate,
            // Auth commands
            commands::auth::get_session,
            commands::auth::login,
            commands::auth::login_with_google,
            commands::auth::register,
            commands::auth::logout,
            commands::auth::toggle_privacy,
            // Language commands
            commands::language::list_languages,
            commands::language::get_language,
            commands::language::set_language,
            // Theme commands
            commands::theme::get_theme,
            commands::theme::set_current_artist,
            commands::theme::reset_theme,
            // Checkout command
            commands::checkout::checkout,
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|app_handle, event| {
        if let tauri::RunEvent::Exit = event {
            // Stop the rate refresher so no timer outlives the session
            if let Some(currency) = app_handle.try_state::<CurrencyState>() {
                currency.shutdown();
            }
            info!("ArtSpace storefront stopped");
        }
    });
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=artspace=trace` - Show trace for artspace crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,artspace=debug,hyper=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
