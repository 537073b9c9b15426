use std::time::Instant;

use clockface_engine::time::Ticker;

/// Construction-time hand positions.
///
/// Any integer is accepted; values are normalized onto the dial before use
/// and never rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockConfig {
    pub minute_hand_starts_at: i32,
    pub second_hand_starts_at: i32,
}

/// Normalizes a configured position onto the 60-unit dial.
///
/// Negatives are clamped to 0 first, then the value is reduced modulo 60.
/// `-5` therefore lands on `0`, not `55`.
pub fn normalize_position(value: i32) -> u8 {
    (value.max(0) % 60) as u8
}

/// Hand positions on the dial. Position 0 is 12 o'clock; both hands wrap
/// modulo 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockState {
    pub second: u8,
    pub minute: u8,
}

impl ClockState {
    pub fn from_config(config: ClockConfig) -> Self {
        Self {
            second: normalize_position(config.second_hand_starts_at),
            minute: normalize_position(config.minute_hand_starts_at),
        }
    }

    /// Advances one second.
    ///
    /// The minute hand moves when the second hand lands back on 0, checked
    /// against the post-increment value: exactly once per full revolution,
    /// at the moment the second hand returns to the top.
    pub fn tick(&mut self) {
        self.second = (self.second + 1) % 60;
        if self.second == 0 {
            self.minute = (self.minute + 1) % 60;
        }
    }
}

impl Default for ClockState {
    fn default() -> Self {
        Self::from_config(ClockConfig::default())
    }
}

/// A running clock: hand state plus its once-per-second ticker.
///
/// The owning screen starts the ticker when it becomes visible, stops it
/// when hidden, and calls [`update`] each frame with the frame timestamp.
///
/// [`update`]: ClockModel::update
#[derive(Debug, Clone)]
pub struct ClockModel {
    state: ClockState,
    ticker: Ticker,
}

impl ClockModel {
    pub fn new(config: ClockConfig) -> Self {
        Self {
            state: ClockState::from_config(config),
            ticker: Ticker::every_second(),
        }
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    /// Arms the ticker. No-op while already running.
    pub fn start(&mut self) {
        self.ticker.start();
    }

    /// Disarms the ticker. Idempotent; the hands keep their positions.
    pub fn stop(&mut self) {
        self.ticker.stop();
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// Next wake-up the event loop should schedule, if running.
    pub fn deadline(&self) -> Option<Instant> {
        self.ticker.deadline()
    }

    /// Advances the hands when the interval has elapsed at `now`.
    ///
    /// Returns `true` when a tick fired (the display changed).
    pub fn update(&mut self, now: Instant) -> bool {
        if self.ticker.poll(now) {
            self.state.tick();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    // ── normalize_position ────────────────────────────────────────────────

    #[test]
    fn negative_positions_clamp_to_zero_before_wrapping() {
        // Clamp happens first, so -5 becomes 0, not 55.
        assert_eq!(normalize_position(-5), 0);
        assert_eq!(normalize_position(-120), 0);
    }

    #[test]
    fn large_positions_wrap_onto_the_dial() {
        assert_eq!(normalize_position(60), 0);
        assert_eq!(normalize_position(65), 5);
        assert_eq!(normalize_position(59), 59);
        assert_eq!(normalize_position(0), 0);
    }

    // ── ClockState::tick ──────────────────────────────────────────────────

    #[test]
    fn second_hand_advances_and_wraps() {
        let mut state = ClockState { second: 0, minute: 0 };
        for n in 1..=59 {
            state.tick();
            assert_eq!(state.second, n);
        }
        state.tick();
        assert_eq!(state.second, 0);
    }

    #[test]
    fn minute_advances_when_second_wraps_to_zero() {
        // Post-increment check: at second 59 the next tick wraps to 0 and
        // carries into the minute hand in the same tick.
        let mut state = ClockState { second: 59, minute: 7 };
        state.tick();
        assert_eq!(state.second, 0);
        assert_eq!(state.minute, 8);
    }

    #[test]
    fn minute_advances_exactly_once_per_sixty_ticks() {
        for start_second in [0u8, 17, 59] {
            let mut state = ClockState { second: start_second, minute: 30 };
            for _ in 0..60 {
                state.tick();
            }
            assert_eq!(state.second, start_second);
            assert_eq!(state.minute, 31, "start_second={start_second}");
        }
    }

    #[test]
    fn minute_hand_wraps() {
        let mut state = ClockState { second: 59, minute: 59 };
        state.tick();
        assert_eq!(state.minute, 0);
    }

    #[test]
    fn repeated_ticks_match_modular_arithmetic() {
        let mut state = ClockState { second: 13, minute: 0 };
        let n = 1000;
        for _ in 0..n {
            state.tick();
        }
        assert_eq!(state.second, ((13 + n) % 60) as u8);
    }

    // ── ClockModel ────────────────────────────────────────────────────────

    #[test]
    fn model_does_not_advance_while_stopped() {
        let mut model = ClockModel::new(ClockConfig::default());
        assert!(!model.is_running());
        assert!(!model.update(Instant::now() + Duration::from_secs(10)));
        assert_eq!(model.state().second, 0);
    }

    #[test]
    fn stop_is_idempotent_and_keeps_positions() {
        let mut model = ClockModel::new(ClockConfig {
            second_hand_starts_at: 42,
            ..ClockConfig::default()
        });
        model.start();
        model.stop();
        model.stop();
        assert!(!model.is_running());
        assert_eq!(model.state().second, 42);
    }

    #[test]
    fn model_ticks_once_when_deadline_elapses() {
        let mut model = ClockModel::new(ClockConfig::default());
        model.start();

        let deadline = model.deadline().unwrap();
        assert!(!model.update(deadline - Duration::from_millis(1)));
        assert!(model.update(deadline));
        assert_eq!(model.state().second, 1);
    }
}
