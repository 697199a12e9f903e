//! Streamed output: timed line-by-line reveal of a command's result.
//!
//! Outputs whose first line is tagged `[SCAN]` or `[RED]` are revealed one
//! line per cadence instead of all at once. This is a state machine advanced
//! by the app tick from the shared clock; there are no timer handles to leak
//! and at most one reveal runs at a time.

use std::time::{Duration, Instant};

/// Cadence between revealed lines.
pub const LINE_CADENCE: Duration = Duration::from_millis(500);

/// Whether an output should stream instead of landing whole.
pub fn is_streaming_output(output: &str) -> bool {
    let first_line = output.lines().next().unwrap_or("");
    first_line.starts_with("[SCAN]") || first_line.starts_with("[RED]")
}

#[derive(Debug)]
pub struct StreamReveal {
    lines: Vec<String>,
    next: usize,
    due: Instant,
}

impl StreamReveal {
    pub fn new(output: &str, now: Instant) -> Self {
        Self {
            lines: output.lines().map(str::to_string).collect(),
            next: 0,
            due: now + LINE_CADENCE,
        }
    }

    /// Lines that have come due since the last tick, in order.
    pub fn tick(&mut self, now: Instant) -> Vec<String> {
        let mut revealed = Vec::new();
        while self.next < self.lines.len() && now >= self.due {
            revealed.push(self.lines[self.next].clone());
            self.next += 1;
            self.due += LINE_CADENCE;
        }
        revealed
    }

    pub fn is_done(&self) -> bool {
        self.next >= self.lines.len()
    }
}
