//! Boot sequence: the fake-OS startup log shown before the shell.
//!
//! Phases: lines reveal on a fixed cadence, the welcome line follows, then a
//! short glitch (the log splits into horizontally displaced bands), a fade,
//! and done. Skipping jumps straight to the glitch.

use rand::Rng;
use std::time::{Duration, Instant};

pub struct BootLine {
    pub tag: &'static str,
    pub text: &'static str,
}

pub static BOOT_LINES: &[BootLine] = &[
    BootLine {
        tag: "[BIOS]",
        text: "Initializing HakickOS v1.0...",
    },
    BootLine {
        tag: "[OK]",
        text: "Loading kernel modules",
    },
    BootLine {
        tag: "[OK]",
        text: "Mounting secure filesystem",
    },
    BootLine {
        tag: "[OK]",
        text: "Starting network interfaces",
    },
    BootLine {
        tag: "[SCAN]",
        text: "Running port scan... 443/tcp open",
    },
    BootLine {
        tag: "[OK]",
        text: "Firewall rules applied",
    },
    BootLine {
        tag: "[OK]",
        text: "Loading AI models...",
    },
    BootLine {
        tag: "[OK]",
        text: "Neural network initialized",
    },
    BootLine {
        tag: "[READY]",
        text: "System boot complete.",
    },
];

pub const WELCOME_LINE: &str = "> Welcome, visitor. Initializing portfolio...";

pub const LINE_DELAY: Duration = Duration::from_millis(200);
pub const PAUSE_BEFORE_GLITCH: Duration = Duration::from_millis(500);
pub const GLITCH_DURATION: Duration = Duration::from_millis(300);
pub const FADE_DURATION: Duration = Duration::from_millis(200);
pub const GLITCH_BAND_COUNT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    Typing,
    Glitching,
    Fading,
    Done,
}

pub struct BootSequence {
    pub phase: BootPhase,
    pub visible_lines: usize,
    pub show_welcome: bool,
    /// Horizontal displacement per band during the glitch phase.
    pub band_offsets: Vec<i16>,
    deadline: Instant,
}

impl BootSequence {
    pub fn new(now: Instant) -> Self {
        Self {
            phase: BootPhase::Typing,
            visible_lines: 0,
            show_welcome: false,
            band_offsets: Vec::new(),
            deadline: now + LINE_DELAY,
        }
    }

    pub fn tick(&mut self, now: Instant) {
        match self.phase {
            BootPhase::Typing => {
                while self.phase == BootPhase::Typing && now >= self.deadline {
                    if self.visible_lines < BOOT_LINES.len() {
                        self.visible_lines += 1;
                        self.deadline += LINE_DELAY;
                        if self.visible_lines == BOOT_LINES.len() {
                            // The welcome line lands after a double beat.
                            self.deadline += LINE_DELAY;
                        }
                    } else if !self.show_welcome {
                        self.show_welcome = true;
                        self.deadline += PAUSE_BEFORE_GLITCH;
                    } else {
                        self.start_glitch(now);
                    }
                }
            }
            BootPhase::Glitching => {
                if now >= self.deadline {
                    self.phase = BootPhase::Fading;
                    self.deadline = now + FADE_DURATION;
                }
            }
            BootPhase::Fading => {
                if now >= self.deadline {
                    self.phase = BootPhase::Done;
                }
            }
            BootPhase::Done => {}
        }
    }

    /// Skip straight to the glitch-out, showing everything.
    pub fn skip(&mut self, now: Instant) {
        if matches!(self.phase, BootPhase::Typing) {
            self.visible_lines = BOOT_LINES.len();
            self.show_welcome = true;
            self.start_glitch(now);
        }
    }

    fn start_glitch(&mut self, now: Instant) {
        let mut rng = rand::thread_rng();
        self.band_offsets = (0..GLITCH_BAND_COUNT)
            .map(|_| rng.gen_range(-20..=20))
            .collect();
        self.phase = BootPhase::Glitching;
        self.deadline = now + GLITCH_DURATION;
    }

    pub fn is_done(&self) -> bool {
        self.phase == BootPhase::Done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_reveal_on_cadence() {
        let start = Instant::now();
        let mut boot = BootSequence::new(start);

        boot.tick(start);
        assert_eq!(boot.visible_lines, 0);

        boot.tick(start + LINE_DELAY);
        assert_eq!(boot.visible_lines, 1);

        boot.tick(start + 3 * LINE_DELAY);
        assert_eq!(boot.visible_lines, 3);
    }

    #[test]
    fn full_run_reaches_done() {
        let start = Instant::now();
        let mut boot = BootSequence::new(start);

        let mut t = start;
        for _ in 0..100 {
            t += Duration::from_millis(100);
            boot.tick(t);
            if boot.is_done() {
                break;
            }
        }
        assert!(boot.is_done());
        assert_eq!(boot.visible_lines, BOOT_LINES.len());
        assert!(boot.show_welcome);
    }

    #[test]
    fn skip_jumps_to_glitch_with_everything_shown() {
        let start = Instant::now();
        let mut boot = BootSequence::new(start);
        boot.skip(start);

        assert_eq!(boot.phase, BootPhase::Glitching);
        assert_eq!(boot.visible_lines, BOOT_LINES.len());
        assert_eq!(boot.band_offsets.len(), GLITCH_BAND_COUNT);

        boot.tick(start + GLITCH_DURATION);
        assert_eq!(boot.phase, BootPhase::Fading);
        boot.tick(start + GLITCH_DURATION + FADE_DURATION);
        assert!(boot.is_done());
    }

    #[test]
    fn skip_after_glitch_is_a_no_op() {
        let start = Instant::now();
        let mut boot = BootSequence::new(start);
        boot.skip(start);
        let offsets = boot.band_offsets.clone();
        boot.skip(start + Duration::from_millis(10));
        assert_eq!(boot.band_offsets, offsets);
    }
}
