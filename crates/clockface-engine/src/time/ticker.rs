use std::time::{Duration, Instant};

/// Cancellable fixed-interval timer driven by the event loop.
///
/// The ticker does not own a thread. The application arms it with [`start`],
/// exposes the [`deadline`] to the runtime (which sleeps until it via
/// `ControlFlow::WaitUntil`), and calls [`poll`] each frame. `poll` re-arms
/// the next deadline *before* reporting that the interval elapsed, so the
/// cadence is not skewed by however long the caller's tick work takes.
///
/// [`start`]: Ticker::start
/// [`deadline`]: Ticker::deadline
/// [`poll`]: Ticker::poll
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// A ticker firing once per second.
    pub fn every_second() -> Self {
        Self::new(Duration::from_secs(1))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Arms the ticker. No-op when already running, so the pending deadline
    /// is never pushed back by repeated calls.
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    fn start_at(&mut self, now: Instant) {
        if self.deadline.is_none() {
            self.deadline = Some(now + self.interval);
        }
    }

    /// Disarms the ticker. Safe to call when not running.
    pub fn stop(&mut self) {
        self.deadline = None;
    }

    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// Next wake-up time, if armed.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns `true` when the interval has elapsed at `now`.
    ///
    /// On firing, the next deadline is set to `now + interval` before
    /// returning, so a slow caller delays subsequent ticks rather than
    /// bunching them up.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn armed_at(t0: Instant) -> Ticker {
        let mut ticker = Ticker::every_second();
        ticker.start_at(t0);
        ticker
    }

    #[test]
    fn fires_after_interval() {
        let t0 = Instant::now();
        let mut ticker = armed_at(t0);

        assert!(!ticker.poll(t0 + Duration::from_millis(999)));
        assert!(ticker.poll(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn rearms_relative_to_poll_time() {
        let t0 = Instant::now();
        let mut ticker = armed_at(t0);

        let late = t0 + Duration::from_millis(1300);
        assert!(ticker.poll(late));
        assert_eq!(ticker.deadline(), Some(late + Duration::from_secs(1)));
    }

    #[test]
    fn start_is_idempotent() {
        let t0 = Instant::now();
        let mut ticker = armed_at(t0);
        let first_deadline = ticker.deadline();

        // A second start must not push the pending deadline back.
        ticker.start_at(t0 + Duration::from_millis(500));
        assert_eq!(ticker.deadline(), first_deadline);
    }

    #[test]
    fn stop_disarms_and_is_idempotent() {
        let t0 = Instant::now();
        let mut ticker = armed_at(t0);

        ticker.stop();
        assert!(!ticker.is_running());
        assert!(!ticker.poll(t0 + Duration::from_secs(5)));

        ticker.stop();
        assert!(!ticker.is_running());
    }

    #[test]
    fn restart_after_stop_schedules_fresh_deadline() {
        let t0 = Instant::now();
        let mut ticker = armed_at(t0);
        ticker.stop();

        let t1 = t0 + Duration::from_secs(10);
        ticker.start_at(t1);
        assert_eq!(ticker.deadline(), Some(t1 + Duration::from_secs(1)));
    }
}
