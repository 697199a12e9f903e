//! Command dispatch: raw input to a `(command, args)` pair.
//!
//! Matching priority: exact full-string match (multi-word names included),
//! then multi-word-name prefix with the remainder split into arguments, then
//! first-token match against single-word names. Anything else is "not found".

use crate::commands::{Command, CATALOG};

pub struct Match {
    pub command: &'static Command,
    pub args: Vec<String>,
}

pub fn find_command(input: &str) -> Option<Match> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(exact) = CATALOG.iter().find(|c| c.name == trimmed) {
        return Some(Match {
            command: exact,
            args: Vec::new(),
        });
    }

    // Multi-word command names match as a prefix of the input; the rest
    // becomes arguments.
    if let Some(multi) = CATALOG
        .iter()
        .find(|c| c.name.contains(' ') && trimmed.starts_with(c.name))
    {
        let args = trimmed[multi.name.len()..]
            .split_whitespace()
            .map(str::to_string)
            .collect();
        return Some(Match {
            command: multi,
            args,
        });
    }

    let mut parts = trimmed.split_whitespace();
    let first = parts.next()?;
    if let Some(single) = CATALOG
        .iter()
        .find(|c| !c.name.contains(' ') && c.name == first)
    {
        return Some(Match {
            command: single,
            args: parts.map(str::to_string).collect(),
        });
    }

    None
}

pub fn not_found_message(input: &str) -> String {
    format!(
        "command not found: {}. Type 'help' for available commands.",
        input.trim()
    )
}

/// Ordered command names starting with the (lower-cased) partial input.
pub fn autocomplete(partial: &str) -> Vec<&'static str> {
    let needle = partial.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    CATALOG
        .iter()
        .filter(|c| c.name.to_lowercase().starts_with(&needle))
        .map(|c| c.name)
        .collect()
}
