use clockface_engine::coords::{Rect, Vec2};
use clockface_engine::paint::Color;
use clockface_engine::text::FontId;

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::widget::Widget;

/// Single- or multi-line text label.
pub struct Text {
    text: String,
    font: FontId,
    size: f32,
    color: Color,
    wrap: bool,
}

impl Text {
    pub fn new(text: impl Into<String>, font: FontId, size: f32, color: Color) -> Self {
        Self {
            text: text.into(),
            font,
            size,
            color,
            wrap: false,
        }
    }

    /// Wrap at the width offered by the parent instead of staying on one line.
    pub fn wrap(mut self) -> Self {
        self.wrap = true;
        self
    }

    fn max_width(&self, available: f32) -> Option<f32> {
        self.wrap.then_some(available)
    }
}

impl Widget for Text {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let natural = ctx.fonts.measure_text(
            &self.text,
            self.font,
            self.size,
            self.max_width(constraints.max.x),
        );
        constraints.constrain(natural)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        painter.text(
            self.text.clone(),
            self.font,
            self.size,
            self.color,
            rect.origin,
            self.max_width(rect.size.x),
        );
    }
}
