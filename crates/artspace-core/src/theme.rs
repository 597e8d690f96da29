//! # Artist Themes
//!
//! Each artist carries a visual theme; browsing an artist re-skins the
//! storefront. The theme is modelled as an explicit descriptor value owned
//! by a single writer in the app layer and threaded to consumers - never a
//! global document mutation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Artist Theme
// =============================================================================

/// Visual theme associated with an artist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ArtistTheme {
    /// Neutral storefront skin (no artist-specific styling).
    Default,
    Street,
    Classic,
    Pop,
    Minimal,
    Neon,
    Abstract,
    Raw,
    Realism,
    Mural,
}

impl ArtistTheme {
    /// CSS class the frontend applies at the root, `None` for the neutral
    /// default skin.
    pub fn css_class(&self) -> Option<String> {
        match self {
            ArtistTheme::Default => None,
            ArtistTheme::Street => Some("theme-street".to_string()),
            ArtistTheme::Classic => Some("theme-classic".to_string()),
            ArtistTheme::Pop => Some("theme-pop".to_string()),
            ArtistTheme::Minimal => Some("theme-minimal".to_string()),
            ArtistTheme::Neon => Some("theme-neon".to_string()),
            ArtistTheme::Abstract => Some("theme-abstract".to_string()),
            ArtistTheme::Raw => Some("theme-raw".to_string()),
            ArtistTheme::Realism => Some("theme-realism".to_string()),
            ArtistTheme::Mural => Some("theme-mural".to_string()),
        }
    }
}

impl Default for ArtistTheme {
    fn default() -> Self {
        ArtistTheme::Default
    }
}

// =============================================================================
// Theme Descriptor
// =============================================================================

/// The current storefront theme as a value.
///
/// Exactly one writer (the app's theme state) produces these; render-side
/// consumers only read them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDescriptor {
    /// Artist whose theme is active, if any.
    pub artist_id: Option<String>,

    /// The active theme.
    pub theme: ArtistTheme,

    /// Root CSS class for the frontend, `None` for the default skin.
    pub css_class: Option<String>,
}

impl ThemeDescriptor {
    /// Descriptor for an artist's theme.
    pub fn for_artist(artist_id: impl Into<String>, theme: ArtistTheme) -> Self {
        ThemeDescriptor {
            artist_id: Some(artist_id.into()),
            css_class: theme.css_class(),
            theme,
        }
    }

    /// The neutral storefront skin.
    pub fn neutral() -> Self {
        ThemeDescriptor {
            artist_id: None,
            theme: ArtistTheme::Default,
            css_class: None,
        }
    }
}

impl Default for ThemeDescriptor {
    fn default() -> Self {
        ThemeDescriptor::neutral()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_has_no_css_class() {
        assert_eq!(ArtistTheme::Default.css_class(), None);
        assert_eq!(ThemeDescriptor::neutral().css_class, None);
    }

    #[test]
    fn test_artist_descriptor_carries_css_class() {
        let desc = ThemeDescriptor::for_artist("1", ArtistTheme::Street);
        assert_eq!(desc.artist_id.as_deref(), Some("1"));
        assert_eq!(desc.css_class.as_deref(), Some("theme-street"));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ArtistTheme::Neon).unwrap();
        assert_eq!(json, "\"neon\"");
    }
}
