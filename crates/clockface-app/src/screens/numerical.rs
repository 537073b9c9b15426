use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use clockface_ui::prelude::*;

use super::ScreenKind;
use crate::clock::{ClockConfig, ClockModel};

fn readout_color() -> Color {
    Color::from_premul(1.0, 1.0, 1.0, 1.0)
}

fn label_color() -> Color {
    Color::from_srgb_u8(0x9a, 0x9a, 0x9a, 0xff)
}

/// The digital clock screen: the same ticking model as the analog screen,
/// rendered as an MM:SS readout.
pub struct NumericalScreen {
    clock: ClockModel,
}

impl NumericalScreen {
    pub fn new(config: ClockConfig) -> Self {
        Self {
            clock: ClockModel::new(config),
        }
    }

    pub fn enter(&mut self) {
        self.clock.start();
    }

    pub fn leave(&mut self) {
        self.clock.stop();
    }

    pub fn update(&mut self, now: Instant) -> bool {
        self.clock.update(now)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.clock.deadline()
    }

    fn readout(&self) -> String {
        let state = self.clock.state();
        format!("{:02}:{:02}", state.minute, state.second)
    }

    pub fn build(&self, font: FontId, nav: &Rc<Cell<Option<ScreenKind>>>) -> Element {
        let content = Column::new()
            .main_align(Align::Center)
            .cross_align(Align::Center)
            .spacing(10.0)
            .child(Text::new(self.readout(), font, 96.0, readout_color()))
            .child(Text::new("minutes : seconds", font, 16.0, label_color()));

        super::with_back_button(content.into(), font, nav)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readout_is_zero_padded() {
        let screen = NumericalScreen::new(ClockConfig {
            minute_hand_starts_at: 7,
            second_hand_starts_at: 3,
        });
        assert_eq!(screen.readout(), "07:03");
    }

    #[test]
    fn readout_starts_at_zero_by_default() {
        let screen = NumericalScreen::new(ClockConfig::default());
        assert_eq!(screen.readout(), "00:00");
    }
}
