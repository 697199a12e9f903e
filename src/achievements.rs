//! Achievement tracking: a small persisted set of milestone flags.
//!
//! `unlock` is idempotent: the first call flips the flag, timestamps it,
//! persists the whole set, and notifies subscribers; later calls are no-ops.
//! Subscribers are plain mpsc channels consumed by the toast UI.

use crate::services::clock::Clock;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub unlocked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<i64>,
}

struct AchievementDef {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

const DEFS: &[AchievementDef] = &[
    AchievementDef {
        id: "first-visit",
        title: "Bienvenue",
        description: "Première visite sur le portfolio",
        icon: "🎯",
    },
    AchievementDef {
        id: "terminal-user",
        title: "Hacker",
        description: "Utiliser le terminal interactif",
        icon: "💻",
    },
    AchievementDef {
        id: "secret-finder",
        title: "Secret Hunter",
        description: "Trouver un flag CTF",
        icon: "🚩",
    },
    AchievementDef {
        id: "konami-code",
        title: "God Mode",
        description: "Activer le Konami Code",
        icon: "🎮",
    },
    AchievementDef {
        id: "matrix-entered",
        title: "Neo",
        description: "Entrer dans la Matrix",
        icon: "🟢",
    },
    AchievementDef {
        id: "hire-me",
        title: "Recruté",
        description: "Exécuter sudo hire-me",
        icon: "🏆",
    },
];

pub struct AchievementSet {
    entries: Vec<Achievement>,
    path: Option<PathBuf>,
    subscribers: Vec<Sender<Achievement>>,
}

impl AchievementSet {
    fn defaults() -> Vec<Achievement> {
        DEFS.iter()
            .map(|def| Achievement {
                id: def.id.to_string(),
                title: def.title.to_string(),
                description: def.description.to_string(),
                icon: def.icon.to_string(),
                unlocked: false,
                unlocked_at: None,
            })
            .collect()
    }

    /// Load the persisted set, merged over the built-in definitions so new
    /// achievements appear and stale ones disappear. Missing or malformed
    /// files fall back to defaults.
    pub fn load(path: Option<PathBuf>) -> Self {
        let mut entries = Self::defaults();

        if let Some(path) = path.as_deref() {
            match std::fs::read_to_string(path) {
                Ok(content) => match serde_json::from_str::<Vec<Achievement>>(&content) {
                    Ok(saved) => {
                        for entry in &mut entries {
                            if let Some(prev) = saved.iter().find(|a| a.id == entry.id) {
                                entry.unlocked = prev.unlocked;
                                entry.unlocked_at = prev.unlocked_at;
                            }
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Malformed achievements file {:?}: {}", path, e);
                    }
                },
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::warn!("Failed to read achievements file {:?}: {}", path, e);
                }
            }
        }

        Self {
            entries,
            path,
            subscribers: Vec::new(),
        }
    }

    /// An in-memory set that never touches disk.
    pub fn ephemeral() -> Self {
        Self::load(None)
    }

    /// Subscribe to unlock notifications.
    pub fn subscribe(&mut self) -> Receiver<Achievement> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Unlock an achievement. Returns true only on the first unlock.
    pub fn unlock(&mut self, id: &str, clock: &dyn Clock) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|a| a.id == id) else {
            tracing::warn!("Unknown achievement id: {}", id);
            return false;
        };
        if entry.unlocked {
            return false;
        }

        entry.unlocked = true;
        entry.unlocked_at = Some(clock.timestamp_millis());
        let unlocked = entry.clone();
        tracing::info!("Achievement unlocked: {}", id);

        self.save();
        self.subscribers
            .retain(|tx| tx.send(unlocked.clone()).is_ok());
        true
    }

    fn save(&self) {
        let Some(path) = self.path.as_deref() else {
            return;
        };
        let json = match serde_json::to_string_pretty(&self.entries) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize achievements: {}", e);
                return;
            }
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = std::fs::write(path, json) {
            tracing::warn!("Failed to persist achievements to {:?}: {}", path, e);
        }
    }

    pub fn get(&self, id: &str) -> Option<&Achievement> {
        self.entries.iter().find(|a| a.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Achievement> {
        self.entries.iter()
    }

    pub fn unlocked_count(&self) -> usize {
        self.entries.iter().filter(|a| a.unlocked).count()
    }

    pub fn total_count(&self) -> usize {
        self.entries.len()
    }

    /// Render the achievement panel for the `achievements` command. Each
    /// entry leads with a color tag the colorizer strips, leaving a visible
    /// `[OK]✓` or `[ ]✗` status cell.
    pub fn format_panel(&self) -> String {
        let mut lines = vec![
            "╔════════════════════════════════════════════════════════════════╗".to_string(),
            "║                     🏆 ACHIEVEMENTS 🏆                         ║".to_string(),
            "╠════════════════════════════════════════════════════════════════╣".to_string(),
        ];

        for entry in &self.entries {
            let (color, status) = if entry.unlocked {
                ("[OK]", "[OK]✓")
            } else {
                ("[RED]", "[ ]✗")
            };
            lines.push(format!(
                "{}{} {} {:<20} — {}",
                color, status, entry.icon, entry.title, entry.description
            ));
        }

        let unlocked = self.unlocked_count();
        let total = self.total_count();
        let pad = 42usize
            .saturating_sub(unlocked.to_string().len() + total.to_string().len());
        lines.push("╠════════════════════════════════════════════════════════════════╣".to_string());
        lines.push(format!(
            "║ Progress: {}/{} unlocked{}║",
            unlocked,
            total,
            " ".repeat(pad)
        ));
        lines.push("╚════════════════════════════════════════════════════════════════╝".to_string());
        lines.join("\n")
    }
}
