//! Clock abstraction for testability.
//!
//! Every animation in the shell (boot log, streamed output, matrix rain,
//! toasts) is a state machine advanced from a single tick, so production code
//! reads real time while tests drive a controllable logical clock.

use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Abstraction over the ambient clock.
pub trait Clock: Send + Sync + fmt::Debug {
    /// Current instant, for measuring elapsed time and animation deadlines.
    fn now(&self) -> Instant;

    /// Milliseconds since the Unix epoch, used to timestamp unlocks.
    fn timestamp_millis(&self) -> i64;

    /// Human-readable local date and time, used by the `date` command.
    fn datetime_string(&self) -> String;
}

/// Type alias for a shared clock.
pub type SharedClock = Arc<dyn Clock>;

/// Production implementation backed by the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn shared() -> SharedClock {
        Arc::new(Self)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn datetime_string(&self) -> String {
        Local::now().format("%a %b %e %H:%M:%S %Y").to_string()
    }
}

/// Test implementation with manually advanced logical time.
///
/// `now()` returns a fixed base instant plus the logical elapsed time, and the
/// calendar starts at a fixed epoch so `date`-style output is deterministic.
#[derive(Debug)]
pub struct TestClock {
    logical_nanos: AtomicU64,
    base_instant: Instant,
    base_epoch_millis: i64,
}

impl Default for TestClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClock {
    /// Fixed calendar origin for deterministic output.
    const BASE_EPOCH_MILLIS: i64 = 1_756_684_800_000; // 2025-09-01 00:00:00 UTC

    pub fn new() -> Self {
        Self {
            logical_nanos: AtomicU64::new(0),
            base_instant: Instant::now(),
            base_epoch_millis: Self::BASE_EPOCH_MILLIS,
        }
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Advance logical time. This is how tests simulate the passage of time.
    pub fn advance(&self, duration: Duration) {
        self.logical_nanos
            .fetch_add(duration.as_nanos() as u64, Ordering::SeqCst);
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.logical_nanos.load(Ordering::SeqCst))
    }
}

impl Clock for TestClock {
    fn now(&self) -> Instant {
        self.base_instant + self.elapsed()
    }

    fn timestamp_millis(&self) -> i64 {
        self.base_epoch_millis + self.elapsed().as_millis() as i64
    }

    fn datetime_string(&self) -> String {
        let millis = self.timestamp_millis();
        let datetime: DateTime<Utc> = Utc
            .timestamp_millis_opt(millis)
            .single()
            .unwrap_or_default();
        datetime.format("%a %b %e %H:%M:%S %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_starts_at_zero() {
        let clock = TestClock::new();
        assert_eq!(clock.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_clock_advance_moves_now() {
        let clock = TestClock::new();
        let start = clock.now();
        clock.advance(Duration::from_secs(5));
        assert_eq!(clock.now().duration_since(start), Duration::from_secs(5));
    }

    #[test]
    fn test_clock_timestamp_tracks_logical_time() {
        let clock = TestClock::new();
        let before = clock.timestamp_millis();
        clock.advance(Duration::from_millis(1500));
        assert_eq!(clock.timestamp_millis(), before + 1500);
    }

    #[test]
    fn system_clock_now_advances() {
        let clock = SystemClock;
        let t1 = clock.now();
        std::thread::sleep(Duration::from_millis(1));
        assert!(clock.now() > t1);
    }
}
