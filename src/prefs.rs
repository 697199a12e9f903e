//! Persisted preferences.
//!
//! A flat key-value record: language, sound effects, CRT mode, whether the
//! boot sequence already played, and whether the live feed was dismissed.
//! There is no schema versioning; missing or malformed files fall back to
//! defaults, missing fields fill in individually.

use crate::i18n::Language;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prefs {
    pub language: Language,
    pub sound_effects: bool,
    pub crt_mode: bool,
    pub boot_played: bool,
    pub live_feed_dismissed: bool,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            language: Language::Fr,
            sound_effects: true,
            crt_mode: false,
            boot_played: false,
            live_feed_dismissed: false,
        }
    }
}

impl Prefs {
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(prefs) => prefs,
                Err(e) => {
                    tracing::warn!("Malformed prefs file {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!("Failed to read prefs file {:?}: {}", path, e);
                }
                Self::default()
            }
        }
    }

    /// Best-effort write; failures are logged and otherwise invisible.
    pub fn save(&self, path: &Path) {
        let json = match serde_json::to_string_pretty(self) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize prefs: {}", e);
                return;
            }
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = std::fs::write(path, json) {
            tracing::warn!("Failed to persist prefs to {:?}: {}", path, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let prefs = Prefs::load(Path::new("/nonexistent/prefs.json"));
        assert_eq!(prefs, Prefs::default());
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(Prefs::load(&path), Prefs::default());
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"language":"en"}"#).unwrap();
        let prefs = Prefs::load(&path);
        assert_eq!(prefs.language, Language::En);
        assert!(prefs.sound_effects);
        assert!(!prefs.boot_played);
    }

    #[test]
    fn round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let prefs = Prefs {
            language: Language::En,
            sound_effects: false,
            crt_mode: true,
            boot_played: true,
            live_feed_dismissed: true,
        };
        prefs.save(&path);
        assert_eq!(Prefs::load(&path), prefs);
    }
}
