use clockface_engine::coords::{Rect, Vec2};
use clockface_engine::paint::Paint;
use clockface_engine::scene::Border;

use crate::constraints::{inset_rect, Constraints, Edges, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// Decorated box: optional background, border, padding and fixed size around
/// a single child. The child fills the padded interior.
pub struct Container {
    child: Option<Element>,
    padding: Edges,
    background: Option<Paint>,
    corner_radius: f32,
    border: Option<Border>,
    width: Option<f32>,
    height: Option<f32>,
}

impl Container {
    pub fn new() -> Self {
        Self {
            child: None,
            padding: Edges::default(),
            background: None,
            corner_radius: 0.0,
            border: None,
            width: None,
            height: None,
        }
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.child = Some(child.into());
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn background(mut self, paint: impl Into<Paint>) -> Self {
        self.background = Some(paint.into());
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Container {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let natural = match &self.child {
            Some(child) => {
                let inner = child.measure(constraints.shrink(self.padding), ctx);
                Vec2::new(inner.x + self.padding.h(), inner.y + self.padding.v())
            }
            None => Vec2::new(self.padding.h(), self.padding.v()),
        };

        constraints.constrain(Vec2::new(
            self.width.unwrap_or(natural.x),
            self.height.unwrap_or(natural.y),
        ))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        if let Some(bg) = &self.background {
            painter.fill_rounded_rect(rect, self.corner_radius, bg.clone(), self.border);
        } else if let Some(border) = self.border {
            painter.fill_rounded_rect(
                rect,
                self.corner_radius,
                clockface_engine::paint::Color::transparent(),
                Some(border),
            );
        }

        if let Some(child) = &self.child {
            child.paint(painter, inset_rect(rect, self.padding));
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        match &mut self.child {
            Some(child) => child.on_event(event, inset_rect(rect, self.padding), ctx),
            None => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec2);

    impl Widget for Fixed {
        fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
            constraints.constrain(self.0)
        }
        fn paint(&self, _painter: &mut Painter, _rect: Rect) {}
    }

    #[test]
    fn measure_adds_padding_around_child() {
        let fonts = clockface_engine::text::FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts };

        let c = Container::new()
            .padding(Edges::all(10.0))
            .child(Fixed(Vec2::new(30.0, 20.0)));

        let size = c.measure(Constraints::loose(Vec2::new(200.0, 200.0)), &ctx);
        assert_eq!(size, Vec2::new(50.0, 40.0));
    }

    #[test]
    fn fixed_size_overrides_natural_size() {
        let fonts = clockface_engine::text::FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts };

        let c = Container::new()
            .width(120.0)
            .height(80.0)
            .child(Fixed(Vec2::new(30.0, 20.0)));

        let size = c.measure(Constraints::loose(Vec2::new(200.0, 200.0)), &ctx);
        assert_eq!(size, Vec2::new(120.0, 80.0));
    }
}
