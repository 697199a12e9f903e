//! State directory management.
//!
//! All persisted state (preferences, achievements, logs) lives under the XDG
//! state directory, typically `~/.local/state/hakos/`. Falls back to the
//! system temp directory when no home can be resolved.

use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

static STATE_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Base state directory for the shell, created on first access.
pub fn state_dir() -> &'static PathBuf {
    STATE_DIR.get_or_init(|| {
        let dir = dirs::state_dir()
            .or_else(dirs::data_local_dir)
            .map(|d| d.join("hakos"))
            .unwrap_or_else(|| std::env::temp_dir().join("hakos"));

        if let Err(e) = fs::create_dir_all(&dir) {
            tracing::warn!("Failed to create state directory {:?}: {}", dir, e);
            return std::env::temp_dir().join("hakos");
        }

        dir
    })
}

/// Path to the persisted preferences file.
pub fn prefs_path() -> PathBuf {
    state_dir().join("prefs.json")
}

/// Path to the persisted achievement set.
pub fn achievements_path() -> PathBuf {
    state_dir().join("achievements.json")
}

/// Per-process log file, so concurrent runs do not clobber each other.
pub fn log_path() -> PathBuf {
    state_dir().join(format!("hakos-{}.log", std::process::id()))
}
