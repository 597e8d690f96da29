//! # Catalog State
//!
//! The seeded marketplace catalog, read-only after initialization (no mutex
//! needed). There is no backend in scope; a future catalog service replaces
//! [`CatalogState::seeded`] without touching commands.

use artspace_core::{seed, Catalog};

/// Tauri-managed catalog state.
#[derive(Debug)]
pub struct CatalogState {
    catalog: Catalog,
}

impl CatalogState {
    /// Creates the state from the seeded catalog.
    pub fn seeded() -> Self {
        CatalogState {
            catalog: seed::default_catalog(),
        }
    }

    /// Creates the state from an explicit catalog (tests).
    pub fn with_catalog(catalog: Catalog) -> Self {
        CatalogState { catalog }
    }

    /// Read access to the catalog.
    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_state_is_populated() {
        let state = CatalogState::seeded();
        assert!(!state.catalog().artists.is_empty());
        assert!(!state.catalog().artworks.is_empty());
    }
}
