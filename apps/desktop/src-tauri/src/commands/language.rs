//! # Language Commands
//!
//! UI language selection. The selected code is the only persisted state in
//! the storefront; translation tables live in the frontend.

use serde::Serialize;
use tauri::State;
use tracing::debug;

use artspace_core::Language;

use crate::state::LanguageState;

// =============================================================================
// Response Types
// =============================================================================

/// One selector entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageOption {
    pub code: Language,
    pub label: &'static str,
    pub short_label: &'static str,
    pub flag: &'static str,
}

impl From<Language> for LanguageOption {
    fn from(language: Language) -> Self {
        LanguageOption {
            code: language,
            label: language.label(),
            short_label: language.short_label(),
            flag: language.flag(),
        }
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Lists the supported languages, in selector order.
#[tauri::command]
pub fn list_languages() -> Vec<LanguageOption> {
    debug!("list_languages command");
    Language::ALL.into_iter().map(LanguageOption::from).collect()
}

/// Gets the selected language.
#[tauri::command]
pub fn get_language(language: State<'_, LanguageState>) -> Language {
    debug!("get_language command");
    language.current()
}

/// Selects and persists a language.
///
/// Codes outside the allow-list never reach here: deserializing the
/// `selected` argument already rejects them.
#[tauri::command]
pub fn set_language(language: State<'_, LanguageState>, selected: Language) -> Language {
    debug!(selected = %selected, "set_language command");
    language.set(selected);
    language.current()
}
