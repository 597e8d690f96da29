//! # Language State
//!
//! The selected UI language - the only piece of state the storefront
//! persists. Stored as a plain code string in a single file under the
//! platform data dir, validated against the allow-list on read; invalid or
//! absent values fall back to the default language.
//!
//! ## Persisted File
//! - **macOS**: `~/Library/Application Support/br.com.artspace.storefront/language`
//! - **Windows**: `%APPDATA%\artspace\storefront\data\language`
//! - **Linux**: `~/.local/share/artspace-storefront/language`
//!
//! ## Development Override
//! Set `ARTSPACE_LANGUAGE_FILE` to use a custom path (tests use tempdirs).

use std::path::PathBuf;
use std::sync::Mutex;

use directories::ProjectDirs;
use tracing::{debug, warn};

use artspace_core::Language;

/// Tauri-managed language state.
#[derive(Debug)]
pub struct LanguageState {
    file_path: Option<PathBuf>,
    current: Mutex<Language>,
}

impl LanguageState {
    /// Loads the persisted language, falling back to the default for a
    /// missing file, unreadable contents, or a code outside the allow-list.
    pub fn load() -> Self {
        let file_path = language_file_path();
        let current = file_path
            .as_deref()
            .and_then(|path| std::fs::read_to_string(path).ok())
            .and_then(|raw| match raw.trim().parse::<Language>() {
                Ok(lang) => Some(lang),
                Err(_) => {
                    warn!(raw = %raw.trim(), "ignoring persisted language outside allow-list");
                    None
                }
            })
            .unwrap_or_default();

        debug!(language = %current, "language state loaded");

        LanguageState {
            file_path,
            current: Mutex::new(current),
        }
    }

    /// In-memory state with no persistence (tests).
    pub fn ephemeral(language: Language) -> Self {
        LanguageState {
            file_path: None,
            current: Mutex::new(language),
        }
    }

    /// The currently selected language.
    pub fn current(&self) -> Language {
        *self.current.lock().expect("language mutex poisoned")
    }

    /// Selects a language and persists its code.
    ///
    /// Persistence failure is logged, not fatal: the in-memory selection
    /// still applies for the rest of the session.
    pub fn set(&self, language: Language) {
        *self.current.lock().expect("language mutex poisoned") = language;

        if let Some(path) = &self.file_path {
            if let Some(parent) = path.parent() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    warn!(error = %e, "could not create language data dir");
                    return;
                }
            }
            if let Err(e) = std::fs::write(path, language.code()) {
                warn!(error = %e, "could not persist language selection");
            }
        }
    }
}

/// Determines where the language code is persisted.
fn language_file_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("ARTSPACE_LANGUAGE_FILE") {
        return Some(PathBuf::from(path));
    }

    let proj_dirs = ProjectDirs::from("br.com", "artspace", "storefront")?;
    Some(proj_dirs.data_dir().join("language"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_file(path: PathBuf) -> LanguageState {
        LanguageState {
            file_path: Some(path),
            current: Mutex::new(Language::default()),
        }
    }

    #[test]
    fn test_default_when_nothing_persisted() {
        let state = LanguageState::ephemeral(Language::default());
        assert_eq!(state.current(), Language::PtBr);
    }

    #[test]
    fn test_set_and_reload_round_trip() {
        let dir = std::env::temp_dir().join(format!("artspace-lang-{}", std::process::id()));
        let file = dir.join("language");

        let state = state_with_file(file.clone());
        state.set(Language::EnUs);
        assert_eq!(state.current(), Language::EnUs);

        // Reload from disk the way LanguageState::load does
        let raw = std::fs::read_to_string(&file).unwrap();
        assert_eq!(raw, "en-US");
        assert_eq!(raw.trim().parse::<Language>().unwrap(), Language::EnUs);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_invalid_persisted_code_falls_back() {
        // Codes outside the allow-list never parse, so load() lands on the
        // default instead of trusting stale storage.
        assert!("xx-XX".parse::<Language>().is_err());
        assert_eq!(
            "xx-XX".parse::<Language>().unwrap_or_default(),
            Language::PtBr
        );
    }
}
