use clockface_engine::coords::{Rect, Vec2};
use clockface_engine::paint::{Color, Paint};
use clockface_engine::scene::{Border, DrawList, ZIndex};
use clockface_engine::text::{FontId, FontSystem};

use crate::constraints::LayoutCtx;

/// Recording surface handed to [`Widget::paint`].
///
/// Wraps the engine [`DrawList`] with a monotonically increasing z-counter so
/// widgets painted later appear on top, and exposes the per-frame pointer
/// state for hover/press styling.
///
/// [`Widget::paint`]: crate::widget::Widget::paint
pub struct Painter<'a> {
    list: &'a mut DrawList,
    pub(crate) font_system: &'a FontSystem,
    z: i32,

    mouse_pos: Option<Vec2>,
    mouse_pressed: bool,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(
        list: &'a mut DrawList,
        font_system: &'a FontSystem,
        mouse_pos: Option<Vec2>,
        mouse_pressed: bool,
    ) -> Self {
        Self {
            list,
            font_system,
            z: 0,
            mouse_pos,
            mouse_pressed,
        }
    }

    /// Allocates the next z layer. Each primitive drawn through the painter
    /// gets its own layer, so draw order within a frame is paint-call order.
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }

    // ── primitives ────────────────────────────────────────────────────────

    pub fn fill_rect(&mut self, rect: Rect, paint: impl Into<Paint>) {
        let z = self.next_z();
        self.list.push_rect(z, rect, paint);
    }

    pub fn fill_rounded_rect(
        &mut self,
        rect: Rect,
        corner_radius: f32,
        paint: impl Into<Paint>,
        border: Option<Border>,
    ) {
        let z = self.next_z();
        self.list.push_rounded_rect(z, rect, corner_radius, paint, border);
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, paint: impl Into<Paint>) {
        let z = self.next_z();
        self.list.push_circle(z, center, radius, paint, None);
    }

    /// Draws only the outline of a circle.
    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, border: Border) {
        let z = self.next_z();
        self.list
            .push_circle(z, center, radius, Color::transparent(), Some(border));
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        let z = self.next_z();
        self.list.push_line(z, from, to, width, color);
    }

    pub fn text(
        &mut self,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
        max_width: Option<f32>,
    ) {
        let z = self.next_z();
        self.list.push_text(z, text, font, size, color, origin, max_width);
    }

    // ── queries ───────────────────────────────────────────────────────────

    /// Measures text the same way the text renderer will lay it out.
    #[must_use]
    pub fn measure_text(&self, text: &str, font: FontId, size: f32, max_width: Option<f32>) -> Vec2 {
        self.font_system.measure_text(text, font, size, max_width)
    }

    /// Layout context for widgets that re-measure children during paint.
    #[must_use]
    pub fn layout_ctx(&self) -> LayoutCtx<'a> {
        LayoutCtx { fonts: self.font_system }
    }

    /// True while the pointer is inside `rect`.
    #[must_use]
    pub fn is_hovered(&self, rect: Rect) -> bool {
        self.mouse_pos.is_some_and(|p| rect.contains(p))
    }

    /// True while the pointer is inside `rect` with the primary button held.
    #[must_use]
    pub fn is_pressed(&self, rect: Rect) -> bool {
        self.mouse_pressed && self.is_hovered(rect)
    }
}
