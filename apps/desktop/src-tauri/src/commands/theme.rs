//! # Theme Commands
//!
//! The artist theme as an explicit descriptor value: `set_current_artist`
//! is the single writer, everything else reads. The frontend applies the
//! descriptor's `css_class` at its root.

use tauri::State;
use tracing::debug;

use artspace_core::ThemeDescriptor;

use crate::error::ApiError;
use crate::state::{CatalogState, ThemeState};

/// Gets the current theme descriptor.
#[tauri::command]
pub fn get_theme(theme: State<'_, ThemeState>) -> ThemeDescriptor {
    debug!("get_theme command");
    theme.current()
}

/// Switches the storefront to an artist's theme.
#[tauri::command]
pub fn set_current_artist(
    catalog: State<'_, CatalogState>,
    theme: State<'_, ThemeState>,
    artist_id: String,
) -> Result<ThemeDescriptor, ApiError> {
    debug!(artist_id = %artist_id, "set_current_artist command");

    let catalog = catalog.catalog();
    let artist = catalog
        .artist(&artist_id)
        .ok_or_else(|| ApiError::not_found("Artist", &artist_id))?;

    Ok(theme.set_artist(artist))
}

/// Resets to the neutral storefront skin.
#[tauri::command]
pub fn reset_theme(theme: State<'_, ThemeState>) -> ThemeDescriptor {
    debug!("reset_theme command");
    theme.reset()
}
