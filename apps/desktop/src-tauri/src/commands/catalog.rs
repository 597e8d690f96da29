//! # Catalog Commands
//!
//! Read-only queries over the seeded catalog: the artist roster and the
//! artwork portfolio. There is no backend; these never mutate anything.

use tauri::State;
use tracing::debug;

use artspace_core::{Artist, Artwork};

use crate::error::ApiError;
use crate::state::CatalogState;

/// Lists the artist roster, in catalog order.
#[tauri::command]
pub fn list_artists(catalog: State<'_, CatalogState>) -> Vec<Artist> {
    debug!("list_artists command");
    catalog.catalog().artists.clone()
}

/// Gets one artist by id.
#[tauri::command]
pub fn get_artist(catalog: State<'_, CatalogState>, artist_id: String) -> Result<Artist, ApiError> {
    debug!(artist_id = %artist_id, "get_artist command");

    catalog
        .catalog()
        .artist(&artist_id)
        .cloned()
        .ok_or_else(|| ApiError::not_found("Artist", &artist_id))
}

/// Lists artworks, optionally filtered to one artist's portfolio.
#[tauri::command]
pub fn list_artworks(
    catalog: State<'_, CatalogState>,
    artist_id: Option<String>,
) -> Vec<Artwork> {
    debug!(artist_id = ?artist_id, "list_artworks command");

    match artist_id {
        Some(id) => catalog
            .catalog()
            .artworks_by_artist(&id)
            .into_iter()
            .cloned()
            .collect(),
        None => catalog.catalog().artworks.clone(),
    }
}

/// Gets one artwork by id.
#[tauri::command]
pub fn get_artwork(
    catalog: State<'_, CatalogState>,
    artwork_id: String,
) -> Result<Artwork, ApiError> {
    debug!(artwork_id = %artwork_id, "get_artwork command");

    catalog
        .catalog()
        .artwork(&artwork_id)
        .cloned()
        .ok_or_else(|| ApiError::not_found("Artwork", &artwork_id))
}
