//! Matrix rain overlay, launched by the `matrix` command.
//!
//! Columns of glyphs fall at the frame cadence; the overlay auto-closes after
//! five seconds or on any key. Advanced from the app tick like every other
//! animation.

use crate::view::theme::Theme;
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use std::time::{Duration, Instant};

pub const AUTO_CLOSE: Duration = Duration::from_secs(5);
pub const FRAME_DELAY: Duration = Duration::from_millis(60);
const TRAIL_LEN: u16 = 6;

static CHARSET: Lazy<Vec<char>> = Lazy::new(|| {
    "アイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワヲンABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789"
        .chars()
        .collect()
});

pub struct MatrixRain {
    /// Head row per column; may run past the bottom before resetting.
    drops: Vec<i32>,
    height: u16,
    frame: u64,
    rng: StdRng,
    opened_at: Instant,
    next_frame: Instant,
}

impl MatrixRain {
    pub fn new(now: Instant) -> Self {
        Self {
            drops: Vec::new(),
            height: 0,
            frame: 0,
            rng: StdRng::seed_from_u64(0x6d61_7472_6978),
            opened_at: now,
            next_frame: now + FRAME_DELAY,
        }
    }

    /// Returns false once the overlay has expired.
    pub fn tick(&mut self, now: Instant) -> bool {
        while now >= self.next_frame {
            self.frame += 1;
            self.next_frame += FRAME_DELAY;
            let height = self.height as i32;
            for drop in &mut self.drops {
                *drop += 1;
                if *drop > height + TRAIL_LEN as i32 {
                    *drop = -self.rng.gen_range(0..height.max(1));
                }
            }
        }
        now.duration_since(self.opened_at) < AUTO_CLOSE
    }

    fn ensure_size(&mut self, width: u16, height: u16) {
        self.height = height;
        if self.drops.len() != width as usize {
            let h = height.max(1) as i32;
            self.drops = (0..width).map(|_| -self.rng.gen_range(0..h * 2)).collect();
        }
    }

    /// Render the full-screen rain for the given area size.
    pub fn render(&mut self, width: u16, height: u16, theme: &Theme) -> Text<'static> {
        self.ensure_size(width, height);

        let glyph = |col: u16, row: u16| -> char {
            let index =
                (row as u64)
                    .wrapping_mul(31)
                    .wrapping_add((col as u64).wrapping_mul(7))
                    .wrapping_add(self.frame) as usize;
            CHARSET[index % CHARSET.len()]
        };

        let mut rows = Vec::with_capacity(height as usize);
        for row in 0..height {
            let mut spans = Vec::with_capacity(width as usize);
            for col in 0..width {
                let head = self.drops[col as usize];
                let distance = head - row as i32;
                let style = if distance == 0 {
                    Style::default().fg(theme.fg).add_modifier(Modifier::BOLD)
                } else if distance > 0 && distance <= TRAIL_LEN as i32 {
                    if distance <= 2 {
                        Style::default().fg(theme.green)
                    } else {
                        Style::default().fg(theme.dim)
                    }
                } else {
                    spans.push(Span::raw(" "));
                    continue;
                };
                spans.push(Span::styled(glyph(col, row).to_string(), style));
            }
            rows.push(Line::from(spans));
        }
        Text::from(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_auto_close() {
        let start = Instant::now();
        let mut rain = MatrixRain::new(start);
        assert!(rain.tick(start + Duration::from_secs(1)));
        assert!(!rain.tick(start + AUTO_CLOSE));
    }

    #[test]
    fn frames_advance_on_cadence() {
        let start = Instant::now();
        let mut rain = MatrixRain::new(start);
        rain.ensure_size(10, 10);
        rain.tick(start + 3 * FRAME_DELAY);
        assert_eq!(rain.frame, 3);
    }

    #[test]
    fn render_covers_the_area() {
        let start = Instant::now();
        let mut rain = MatrixRain::new(start);
        let text = rain.render(20, 10, &Theme::cyber());
        assert_eq!(text.lines.len(), 10);
    }
}
