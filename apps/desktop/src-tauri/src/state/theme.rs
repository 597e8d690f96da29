//! # Theme State
//!
//! Owns the current artist-theme descriptor. Exactly one writer - the
//! `set_current_artist` command - mutates it; everything else reads the
//! descriptor value. The frontend applies `css_class` at its root instead
//! of anything mutating the document globally.

use std::sync::Mutex;

use artspace_core::{Artist, ThemeDescriptor};

/// Tauri-managed theme state.
#[derive(Debug)]
pub struct ThemeState {
    descriptor: Mutex<ThemeDescriptor>,
}

impl ThemeState {
    /// Starts on the neutral storefront skin.
    pub fn new() -> Self {
        ThemeState {
            descriptor: Mutex::new(ThemeDescriptor::neutral()),
        }
    }

    /// The current descriptor.
    pub fn current(&self) -> ThemeDescriptor {
        self.lock().clone()
    }

    /// Switches the theme to the given artist's. The single write path.
    pub fn set_artist(&self, artist: &Artist) -> ThemeDescriptor {
        let descriptor = ThemeDescriptor::for_artist(artist.id.clone(), artist.theme);
        *self.lock() = descriptor.clone();
        descriptor
    }

    /// Back to the neutral skin.
    pub fn reset(&self) -> ThemeDescriptor {
        let descriptor = ThemeDescriptor::neutral();
        *self.lock() = descriptor.clone();
        descriptor
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ThemeDescriptor> {
        self.descriptor.lock().expect("Theme mutex poisoned")
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artspace_core::seed;

    #[test]
    fn test_starts_neutral() {
        let state = ThemeState::new();
        let desc = state.current();
        assert!(desc.artist_id.is_none());
        assert!(desc.css_class.is_none());
    }

    #[test]
    fn test_set_artist_then_reset() {
        let catalog = seed::default_catalog();
        let artist = catalog.artist("1").unwrap();

        let state = ThemeState::new();
        let desc = state.set_artist(artist);
        assert_eq!(desc.artist_id.as_deref(), Some("1"));
        assert_eq!(desc.css_class.as_deref(), Some("theme-street"));
        assert_eq!(state.current(), desc);

        let desc = state.reset();
        assert!(desc.artist_id.is_none());
    }
}
