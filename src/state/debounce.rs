//! Trailing-edge debounce timer.
//!
//! Pure: callers pass the current `Instant`, so tests drive time explicitly.

use std::time::{Duration, Instant};

/// Holds the latest value until it has been stable for `delay`.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    /// Create an idle debouncer.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace the pending value and restart the timer from `now`.
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Drop the pending value without firing.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether a value is waiting for its deadline.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value fires.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    /// Take the pending value once its deadline has been reached.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.pending.take() {
            Some((value, deadline)) if now >= deadline => Some(value),
            other => {
                self.pending = other;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    #[test]
    fn deadline_is_delay_after_last_schedule() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        assert_eq!(debouncer.delay(), DELAY);

        debouncer.schedule("a", start);
        debouncer.schedule("ab", start + Duration::from_millis(100));

        assert_eq!(
            debouncer.deadline(),
            Some(start + Duration::from_millis(100) + debouncer.delay())
        );
    }

    #[test]
    fn idle_debouncer_never_fires() {
        let mut debouncer: Debouncer<&str> = Debouncer::new(DELAY);
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(Instant::now() + DELAY * 10), None);
    }

    #[test]
    fn fires_once_after_delay() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.schedule("batman", start);

        assert_eq!(debouncer.poll(start + Duration::from_millis(499)), None);
        assert_eq!(debouncer.poll(start + DELAY), Some("batman"));
        assert_eq!(debouncer.poll(start + DELAY * 2), None);
    }

    #[test]
    fn reschedule_restarts_timer_with_latest_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.schedule("b", start);
        debouncer.schedule("ba", start + Duration::from_millis(300));

        // Original deadline passed, but the timer was restarted
        assert_eq!(debouncer.poll(start + Duration::from_millis(600)), None);
        assert_eq!(
            debouncer.deadline(),
            Some(start + Duration::from_millis(800))
        );
        assert_eq!(debouncer.poll(start + Duration::from_millis(800)), Some("ba"));
    }

    #[test]
    fn cancel_discards_pending_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.schedule(1, start);
        debouncer.cancel();
        assert_eq!(debouncer.poll(start + DELAY), None);
        assert_eq!(debouncer.deadline(), None);
    }

    #[test]
    fn zero_delay_fires_immediately() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::ZERO);
        debouncer.schedule('x', start);
        assert_eq!(debouncer.poll(start), Some('x'));
    }
}
