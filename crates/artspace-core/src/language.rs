//! # UI Languages
//!
//! The fixed allow-list of storefront languages. Translation string tables
//! live in the frontend; the backend only owns which language is selected
//! and validates persisted codes against this list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Language
// =============================================================================

/// A supported UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Language {
    /// Brazilian Portuguese (storefront default).
    #[serde(rename = "pt-BR")]
    PtBr,
    /// US English.
    #[serde(rename = "en-US")]
    EnUs,
    /// Spanish.
    #[serde(rename = "es-ES")]
    EsEs,
}

impl Language {
    /// All supported languages, in selector order.
    pub const ALL: [Language; 3] = [Language::PtBr, Language::EnUs, Language::EsEs];

    /// BCP 47 code, the persisted representation.
    pub const fn code(&self) -> &'static str {
        match self {
            Language::PtBr => "pt-BR",
            Language::EnUs => "en-US",
            Language::EsEs => "es-ES",
        }
    }

    /// Native-language label for the selector.
    pub const fn label(&self) -> &'static str {
        match self {
            Language::PtBr => "Português",
            Language::EnUs => "English",
            Language::EsEs => "Español",
        }
    }

    /// Two-letter label for compact display.
    pub const fn short_label(&self) -> &'static str {
        match self {
            Language::PtBr => "PT",
            Language::EnUs => "EN",
            Language::EsEs => "ES",
        }
    }

    /// Flag emoji for the selector.
    pub const fn flag(&self) -> &'static str {
        match self {
            Language::PtBr => "🇧🇷",
            Language::EnUs => "🇺🇸",
            Language::EsEs => "🇪🇸",
        }
    }
}

/// The storefront defaults to Brazilian Portuguese.
impl Default for Language {
    fn default() -> Self {
        Language::PtBr
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Parses a persisted language code, rejecting anything outside the
/// allow-list. Callers fall back to [`Language::default`] on error.
impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .iter()
            .copied()
            .find(|l| l.code() == s)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "language".to_string(),
                allowed: Language::ALL.iter().map(|l| l.code().to_string()).collect(),
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert!("fr-FR".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
        assert!("pt-br".parse::<Language>().is_err()); // case-sensitive
    }

    #[test]
    fn test_default_is_portuguese() {
        assert_eq!(Language::default(), Language::PtBr);
    }

    #[test]
    fn test_serde_uses_bcp47_codes() {
        let json = serde_json::to_string(&Language::PtBr).unwrap();
        assert_eq!(json, "\"pt-BR\"");

        let back: Language = serde_json::from_str("\"en-US\"").unwrap();
        assert_eq!(back, Language::EnUs);
    }
}
