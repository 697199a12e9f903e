//! Bilingual string table for the UI chrome.
//!
//! Mirrors the portfolio's FR/EN translations: a flat key map per language
//! with the key itself as fallback. Terminal command output is content, not
//! chrome, and stays in its original mixed French/English.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Fr,
    En,
}

impl Default for Language {
    fn default() -> Self {
        Language::Fr
    }
}

impl Language {
    pub fn toggle(self) -> Self {
        match self {
            Language::Fr => Language::En,
            Language::En => Language::Fr,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fr" => Ok(Language::Fr),
            "en" => Ok(Language::En),
            other => Err(format!("unknown language: {other} (expected fr or en)")),
        }
    }
}

static FR: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "status.hint",
            "Tab: autocomplétion · ↑↓: historique · Ctrl+L: effacer · Ctrl+Q: quitter",
        ),
        ("status.streaming", "exécution en cours..."),
        ("toast.unlocked", "Succès débloqué"),
        ("lang.switched", "Langue : français. Tapez 'lang' pour basculer."),
        ("boot.skip", "Passer ▸ Échap"),
        ("godmode.active", "GOD MODE"),
        ("feed.dismiss", "[^X] masquer"),
    ])
});

static EN: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "status.hint",
            "Tab: autocomplete · ↑↓: history · Ctrl+L: clear · Ctrl+Q: quit",
        ),
        ("status.streaming", "command running..."),
        ("toast.unlocked", "Achievement unlocked"),
        ("lang.switched", "Language: English. Type 'lang' to switch back."),
        ("boot.skip", "Skip ▸ Esc"),
        ("godmode.active", "GOD MODE"),
        ("feed.dismiss", "[^X] dismiss"),
    ])
});

/// Look up a UI string, falling back to the key when missing.
pub fn t(lang: Language, key: &str) -> &str {
    let table = match lang {
        Language::Fr => &FR,
        Language::En => &EN,
    };
    table.get(key).copied().unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_returns_translation() {
        assert_eq!(t(Language::En, "toast.unlocked"), "Achievement unlocked");
        assert_eq!(t(Language::Fr, "toast.unlocked"), "Succès débloqué");
    }

    #[test]
    fn missing_key_falls_back_to_key() {
        assert_eq!(t(Language::En, "no.such.key"), "no.such.key");
    }

    #[test]
    fn toggle_flips_language() {
        assert_eq!(Language::Fr.toggle(), Language::En);
        assert_eq!(Language::En.toggle(), Language::Fr);
    }

    #[test]
    fn every_fr_key_has_an_en_counterpart() {
        for key in FR.keys() {
            assert!(EN.contains_key(key), "missing EN translation for {key}");
        }
        for key in EN.keys() {
            assert!(FR.contains_key(key), "missing FR translation for {key}");
        }
    }
}
