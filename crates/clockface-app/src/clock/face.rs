use clockface_ui::prelude::*;

use super::geometry::{hand_angle, FaceGeometry, STROKE_WIDTH, TEXT_SIZE};
use super::state::ClockState;

const FACE_COLOR: Color = Color::from_premul(1.0, 1.0, 1.0, 1.0);

fn minute_hand_color() -> Color {
    Color::from_srgb_u8(0xc0, 0xc0, 0xc0, 0xff)
}

fn second_hand_color() -> Color {
    Color::from_srgb_u8(0xff, 0xc0, 0xcb, 0xff)
}

/// Analog dial: compass ring, hub, four cardinal numerals, and two hands.
///
/// Fills the rect it is given and centers the dial inside it. The widget is
/// a pure view over a [`ClockState`] snapshot; ticking lives in the model.
pub struct ClockFace {
    state: ClockState,
    font: FontId,
}

impl ClockFace {
    pub fn new(state: ClockState, font: FontId) -> Self {
        Self { state, font }
    }

    fn hand_tip(center: Vec2, position: u8, length: f32) -> Vec2 {
        let angle = hand_angle(position);
        Vec2::new(
            center.x + angle.cos() * length,
            center.y + angle.sin() * length,
        )
    }

    fn draw_numeral(&self, painter: &mut Painter, label: &str, anchor: Vec2) {
        let size = painter.measure_text(label, self.font, TEXT_SIZE, None);
        painter.text(
            label,
            self.font,
            TEXT_SIZE,
            FACE_COLOR,
            anchor - size * 0.5,
            None,
        );
    }
}

impl Widget for ClockFace {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        constraints.max
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let geo = FaceGeometry::for_surface(rect.size.x, rect.size.y, STROKE_WIDTH);
        if geo.radius <= 0.0 {
            return;
        }

        // Center the dial's square box inside the rect; within the box the
        // center sits at radius + stroke on both axes.
        let side = geo.side(STROKE_WIDTH);
        let box_origin = rect.origin + (rect.size - Vec2::new(side, side)) * 0.5;
        let c = STROKE_WIDTH + geo.radius;
        let center = box_origin + Vec2::new(c, c);

        // Compass ring and hub.
        painter.stroke_circle(center, geo.radius, Border::new(STROKE_WIDTH, FACE_COLOR));
        painter.fill_circle(center, STROKE_WIDTH * 0.5, FACE_COLOR);

        // Numerals sit just inside the ring at the four cardinal points.
        let inner = geo.radius - STROKE_WIDTH - TEXT_SIZE * 0.5;
        if inner > 0.0 {
            self.draw_numeral(painter, "12", center - Vec2::new(0.0, inner));
            self.draw_numeral(painter, "3", center + Vec2::new(inner, 0.0));
            self.draw_numeral(painter, "6", center + Vec2::new(0.0, inner));
            self.draw_numeral(painter, "9", center - Vec2::new(inner, 0.0));
        }

        // Minute under second so the thinner hand stays visible on overlap.
        painter.line(
            center,
            Self::hand_tip(center, self.state.minute, geo.minute_hand_len),
            STROKE_WIDTH * 1.2,
            minute_hand_color(),
        );
        painter.line(
            center,
            Self::hand_tip(center, self.state.second, geo.second_hand_len),
            STROKE_WIDTH * 0.8,
            second_hand_color(),
        );
    }
}
