//! Live feed: the rotating telemetry ticker in the status bar.

use std::time::{Duration, Instant};

pub const ROTATE_INTERVAL: Duration = Duration::from_secs(4);

pub static FEED_MESSAGES: &[&str] = &[
    "Threat level: LOW — All systems nominal",
    "Neural network: ACTIVE — 60 nodes online",
    "Portfolio uptime: 99.97%",
    "Last scan: 0 vulnerabilities detected",
    "Firewall: 12,847 requests blocked today",
    "Encryption: AES-256 active",
    "Active sessions: 1 (you)",
    "CPU: Neural v3 — 0.2% usage",
    "Location: France — 48.8566°N 2.3522°E",
    "Next cert: AWS AI Practitioner — 73% ready",
];

#[derive(Debug)]
pub struct LiveFeed {
    index: usize,
    next_rotate: Instant,
    pub dismissed: bool,
}

impl LiveFeed {
    pub fn new(now: Instant, dismissed: bool) -> Self {
        Self {
            index: 0,
            next_rotate: now + ROTATE_INTERVAL,
            dismissed,
        }
    }

    pub fn tick(&mut self, now: Instant) {
        while now >= self.next_rotate {
            self.index = (self.index + 1) % FEED_MESSAGES.len();
            self.next_rotate += ROTATE_INTERVAL;
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        if self.dismissed {
            None
        } else {
            Some(FEED_MESSAGES[self.index])
        }
    }

    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_rotate_on_interval() {
        let start = Instant::now();
        let mut feed = LiveFeed::new(start, false);
        assert_eq!(feed.message(), Some(FEED_MESSAGES[0]));

        feed.tick(start + ROTATE_INTERVAL);
        assert_eq!(feed.message(), Some(FEED_MESSAGES[1]));

        feed.tick(start + 3 * ROTATE_INTERVAL);
        assert_eq!(feed.message(), Some(FEED_MESSAGES[3]));
    }

    #[test]
    fn rotation_wraps_around() {
        let start = Instant::now();
        let mut feed = LiveFeed::new(start, false);
        feed.tick(start + FEED_MESSAGES.len() as u32 * ROTATE_INTERVAL);
        assert_eq!(feed.message(), Some(FEED_MESSAGES[0]));
    }

    #[test]
    fn dismissed_feed_is_silent() {
        let start = Instant::now();
        let mut feed = LiveFeed::new(start, false);
        feed.dismiss();
        assert_eq!(feed.message(), None);
    }
}
