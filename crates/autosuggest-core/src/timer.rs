//! Single-shot deferred hide for focus loss.
//!
//! Clicking an overlay entry blurs the text surface before the click lands,
//! so the hide is deferred long enough for the click handler to run its own
//! hide first. Scheduling again while a hide is pending moves the deadline
//! (the last blur wins); nothing but an explicit hide cancels it.

use std::time::Duration;

use web_time::Instant;

/// Deadline-based hide timer owned by one text box.
#[derive(Clone, Debug)]
pub struct HideTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl HideTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule a hide `delay` after `now`, replacing any pending one.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true exactly once when the pending deadline has passed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fires_once_after_delay() {
        let t0 = Instant::now();
        let mut timer = HideTimer::new(ms(150));
        assert_eq!(timer.delay(), ms(150));
        assert_eq!(timer.deadline(), None);
        timer.schedule(t0);
        assert_eq!(timer.deadline(), Some(t0 + ms(150)));
        assert!(!timer.fire_if_due(t0 + ms(149)));
        assert!(timer.fire_if_due(t0 + ms(150)));
        assert!(!timer.fire_if_due(t0 + ms(400)));
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_reschedule_truncates() {
        let t0 = Instant::now();
        let mut timer = HideTimer::new(ms(150));
        timer.schedule(t0);
        timer.schedule(t0 + ms(100));
        assert_eq!(timer.deadline(), Some(t0 + ms(250)));

        let fired: Vec<u64> = (0..=400)
            .step_by(10)
            .filter(|&t| timer.fire_if_due(t0 + ms(t)))
            .collect();
        assert_eq!(fired, vec![250]);
    }

    #[test]
    fn test_cancel() {
        let t0 = Instant::now();
        let mut timer = HideTimer::new(ms(150));
        timer.schedule(t0);
        timer.cancel();
        assert!(!timer.fire_if_due(t0 + ms(500)));
    }
}
