use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use clockface_ui::prelude::*;

use super::ScreenKind;
use crate::clock::{ClockConfig, ClockFace, ClockModel};

/// The analog clock screen. Owns its own clock; the ticker runs only while
/// the screen is visible.
pub struct GraphicalScreen {
    clock: ClockModel,
}

impl GraphicalScreen {
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

    /// Returns `true` when the hands moved this frame.
    pub fn update(&mut self, now: Instant) -> bool {
        self.clock.update(now)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.clock.deadline()
    }

    pub fn build(&self, font: FontId, nav: &Rc<Cell<Option<ScreenKind>>>) -> Element {
        super::with_back_button(
            ClockFace::new(self.clock.state(), font).into(),
            font,
            nav,
        )
    }
}
