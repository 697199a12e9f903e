//! Konami code detector.
//!
//! Watches the raw key stream for Up Up Down Down Left Right Left Right B A.
//! Fires at most once per session; any wrong key resets the sequence.

use crossterm::event::KeyCode;

const SEQUENCE: &[KeyCode] = &[
    KeyCode::Up,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Char('b'),
    KeyCode::Char('a'),
];

#[derive(Debug, Default)]
pub struct KonamiDetector {
    index: usize,
    triggered: bool,
}

impl KonamiDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key. Returns true exactly when the sequence completes.
    pub fn feed(&mut self, code: KeyCode) -> bool {
        if self.triggered {
            return false;
        }

        let expected = SEQUENCE[self.index];
        let matches = match (expected, code) {
            (KeyCode::Char(e), KeyCode::Char(c)) => c.eq_ignore_ascii_case(&e),
            (e, c) => e == c,
        };

        if matches {
            self.index += 1;
            if self.index == SEQUENCE.len() {
                self.triggered = true;
                self.index = 0;
                return true;
            }
        } else {
            self.index = 0;
        }
        false
    }

    pub fn has_triggered(&self) -> bool {
        self.triggered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_full(detector: &mut KonamiDetector) -> bool {
        let mut fired = false;
        for &code in SEQUENCE {
            fired = detector.feed(code);
        }
        fired
    }

    #[test]
    fn full_sequence_triggers_once() {
        let mut detector = KonamiDetector::new();
        assert!(feed_full(&mut detector));
        assert!(detector.has_triggered());
        assert!(!feed_full(&mut detector));
    }

    #[test]
    fn wrong_key_resets_progress() {
        let mut detector = KonamiDetector::new();
        assert!(!detector.feed(KeyCode::Up));
        assert!(!detector.feed(KeyCode::Up));
        assert!(!detector.feed(KeyCode::Enter));
        // Starting over still works.
        assert!(feed_full(&mut detector));
    }

    #[test]
    fn letters_are_case_insensitive() {
        let mut detector = KonamiDetector::new();
        for &code in &SEQUENCE[..8] {
            detector.feed(code);
        }
        detector.feed(KeyCode::Char('B'));
        assert!(detector.feed(KeyCode::Char('A')));
    }
}
