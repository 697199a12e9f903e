//! Transient unlock notifications.
//!
//! One toast shows at a time for a few seconds; further unlocks queue behind
//! it. Expiry is driven by the app tick.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub icon: String,
    pub title: String,
}

#[derive(Debug, Default)]
pub struct ToastQueue {
    active: Option<(Toast, Instant)>,
    pending: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        self.pending.push_back(toast);
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some((_, shown_at)) = self.active {
            if now.duration_since(shown_at) >= TOAST_DURATION {
                self.active = None;
            }
        }
        if self.active.is_none() {
            if let Some(next) = self.pending.pop_front() {
                self.active = Some((next, now));
            }
        }
    }

    pub fn active(&self) -> Option<&Toast> {
        self.active.as_ref().map(|(toast, _)| toast)
    }
}
