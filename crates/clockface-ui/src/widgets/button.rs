use clockface_engine::coords::{Rect, Vec2};
use clockface_engine::paint::{Color, Paint};
use clockface_engine::scene::Border;

use crate::constraints::{inset_rect, Constraints, Edges, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// Clickable surface around a child widget.
///
/// Visual state (hover/pressed) is derived from the painter's pointer
/// snapshot; the click handler fires on primary-button release inside the
/// button rect.
pub struct Button {
    child: Element,
    padding: Edges,
    corner_radius: f32,

    background: Paint,
    hover_background: Paint,
    pressed_background: Paint,
    border: Option<Border>,

    on_click: Option<Box<dyn FnMut()>>,
}

impl Button {
    pub fn new(child: impl Into<Element>) -> Self {
        Self {
            child: child.into(),
            padding: Edges::symmetric(8.0, 16.0),
            corner_radius: 6.0,
            background: Color::from_srgb_u8(0x3a, 0x3a, 0x3a, 0xff).into(),
            hover_background: Color::from_srgb_u8(0x4a, 0x4a, 0x4a, 0xff).into(),
            pressed_background: Color::from_srgb_u8(0x2a, 0x2a, 0x2a, 0xff).into(),
            border: None,
            on_click: None,
        }
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn background(mut self, paint: impl Into<Paint>) -> Self {
        self.background = paint.into();
        self
    }

    pub fn hover_background(mut self, paint: impl Into<Paint>) -> Self {
        self.hover_background = paint.into();
        self
    }

    pub fn pressed_background(mut self, paint: impl Into<Paint>) -> Self {
        self.pressed_background = paint.into();
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }
}

impl Widget for Button {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let child = self
            .child
            .measure(constraints.shrink(self.padding), ctx);
        constraints.constrain(Vec2::new(
            child.x + self.padding.h(),
            child.y + self.padding.v(),
        ))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let bg = if painter.is_pressed(rect) {
            self.pressed_background.clone()
        } else if painter.is_hovered(rect) {
            self.hover_background.clone()
        } else {
            self.background.clone()
        };

        painter.fill_rounded_rect(rect, self.corner_radius, bg, self.border);
        self.child.paint(painter, inset_rect(rect, self.padding));
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        let inner = inset_rect(rect, self.padding);
        if self.child.on_event(event, inner, ctx).is_consumed() {
            return EventResult::Consumed;
        }

        match event {
            UiEvent::Click { pos } if rect.contains(*pos) => {
                if let Some(handler) = &mut self.on_click {
                    handler();
                }
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}
