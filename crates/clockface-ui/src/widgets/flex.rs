use clockface_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// Alignment along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

impl Align {
    fn offset(self, available: f32, used: f32) -> f32 {
        match self {
            Align::Start => 0.0,
            Align::Center => ((available - used) * 0.5).max(0.0),
            Align::End => (available - used).max(0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    fn main(self, v: Vec2) -> f32 {
        match self {
            Axis::Vertical => v.y,
            Axis::Horizontal => v.x,
        }
    }

    fn cross(self, v: Vec2) -> f32 {
        match self {
            Axis::Vertical => v.x,
            Axis::Horizontal => v.y,
        }
    }

    fn pack(self, main: f32, cross: f32) -> Vec2 {
        match self {
            Axis::Vertical => Vec2::new(cross, main),
            Axis::Horizontal => Vec2::new(main, cross),
        }
    }
}

/// Shared layout core for [`Column`] and [`Row`].
struct Flex {
    axis: Axis,
    children: Vec<Element>,
    spacing: f32,
    main_align: Align,
    cross_align: Align,
}

impl Flex {
    fn new(axis: Axis) -> Self {
        Self {
            axis,
            children: Vec::new(),
            spacing: 0.0,
            main_align: Align::Start,
            cross_align: Align::Start,
        }
    }

    fn content_size(&self, constraints: Constraints, ctx: &LayoutCtx) -> (Vec2, Vec<Vec2>) {
        let child_constraints = Constraints::loose(constraints.max);

        let sizes: Vec<Vec2> = self
            .children
            .iter()
            .map(|c| c.measure(child_constraints, ctx))
            .collect();

        let main: f32 = sizes.iter().map(|&s| self.axis.main(s)).sum::<f32>()
            + self.spacing * self.children.len().saturating_sub(1) as f32;
        let cross = sizes
            .iter()
            .map(|&s| self.axis.cross(s))
            .fold(0.0f32, f32::max);

        (self.axis.pack(main, cross), sizes)
    }

    /// Positions children inside `rect`. Same result for paint and events.
    fn layout(&self, rect: Rect, ctx: &LayoutCtx) -> Vec<Rect> {
        let (content, sizes) = self.content_size(Constraints::loose(rect.size), ctx);

        let mut main = self.axis.main(rect.origin)
            + self
                .main_align
                .offset(self.axis.main(rect.size), self.axis.main(content));

        sizes
            .iter()
            .map(|&size| {
                let cross = self.axis.cross(rect.origin)
                    + self
                        .cross_align
                        .offset(self.axis.cross(rect.size), self.axis.cross(size));

                let origin = self.axis.pack(main, cross);
                main += self.axis.main(size) + self.spacing;

                Rect::from_origin_size(origin, size)
            })
            .collect()
    }
}

impl Widget for Flex {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let (content, _) = self.content_size(constraints, ctx);
        constraints.constrain(content)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        // Copy the fonts reference out so the layout borrow does not overlap
        // the mutable painter borrow.
        let fonts = painter.font_system;
        let rects = self.layout(rect, &LayoutCtx { fonts });

        for (child, child_rect) in self.children.iter().zip(rects) {
            child.paint(painter, child_rect);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        let rects = self.layout(rect, ctx);

        for (child, child_rect) in self.children.iter_mut().zip(rects) {
            if child.on_event(event, child_rect, ctx).is_consumed() {
                return EventResult::Consumed;
            }
        }

        EventResult::Ignored
    }
}

/// Vertical stack of children.
pub struct Column(Flex);

impl Column {
    pub fn new() -> Self {
        Self(Flex::new(Axis::Vertical))
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.0.children.push(child.into());
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.0.spacing = spacing;
        self
    }

    /// Vertical placement of the stack inside its rect.
    pub fn main_align(mut self, align: Align) -> Self {
        self.0.main_align = align;
        self
    }

    /// Horizontal placement of each child.
    pub fn cross_align(mut self, align: Align) -> Self {
        self.0.cross_align = align;
        self
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Column {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        self.0.measure(constraints, ctx)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.0.paint(painter, rect)
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        self.0.on_event(event, rect, ctx)
    }
}

/// Horizontal stack of children.
pub struct Row(Flex);

impl Row {
    pub fn new() -> Self {
        Self(Flex::new(Axis::Horizontal))
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.0.children.push(child.into());
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.0.spacing = spacing;
        self
    }

    /// Horizontal placement of the stack inside its rect.
    pub fn main_align(mut self, align: Align) -> Self {
        self.0.main_align = align;
        self
    }

    /// Vertical placement of each child.
    pub fn cross_align(mut self, align: Align) -> Self {
        self.0.cross_align = align;
        self
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Row {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        self.0.measure(constraints, ctx)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.0.paint(painter, rect)
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        self.0.on_event(event, rect, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed-size leaf for layout assertions.
    struct Fixed(Vec2);

    impl Widget for Fixed {
        fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
            constraints.constrain(self.0)
        }
        fn paint(&self, _painter: &mut Painter, _rect: Rect) {}
    }

    fn ctx_fonts() -> clockface_engine::text::FontSystem {
        clockface_engine::text::FontSystem::new()
    }

    #[test]
    fn column_stacks_children_with_spacing() {
        let fonts = ctx_fonts();
        let ctx = LayoutCtx { fonts: &fonts };

        let mut col = Flex::new(Axis::Vertical);
        col.spacing = 10.0;
        col.children.push(Fixed(Vec2::new(30.0, 20.0)).into());
        col.children.push(Fixed(Vec2::new(50.0, 40.0)).into());

        let rects = col.layout(Rect::new(0.0, 0.0, 100.0, 200.0), &ctx);
        assert_eq!(rects[0].origin.y, 0.0);
        assert_eq!(rects[1].origin.y, 30.0); // 20 + 10 spacing
        assert_eq!(rects[1].size, Vec2::new(50.0, 40.0));
    }

    #[test]
    fn column_measure_sums_heights_and_maxes_widths() {
        let fonts = ctx_fonts();
        let ctx = LayoutCtx { fonts: &fonts };

        let col = Column::new()
            .spacing(5.0)
            .child(Fixed(Vec2::new(30.0, 20.0)))
            .child(Fixed(Vec2::new(50.0, 40.0)));

        let size = col.measure(Constraints::loose(Vec2::new(200.0, 200.0)), &ctx);
        assert_eq!(size, Vec2::new(50.0, 65.0)); // 20 + 5 + 40
    }

    #[test]
    fn centered_column_offsets_both_axes() {
        let fonts = ctx_fonts();
        let ctx = LayoutCtx { fonts: &fonts };

        let mut col = Flex::new(Axis::Vertical);
        col.main_align = Align::Center;
        col.cross_align = Align::Center;
        col.children.push(Fixed(Vec2::new(40.0, 20.0)).into());

        let rects = col.layout(Rect::new(0.0, 0.0, 100.0, 100.0), &ctx);
        assert_eq!(rects[0].origin, Vec2::new(30.0, 40.0));
    }

    #[test]
    fn row_places_children_left_to_right() {
        let fonts = ctx_fonts();
        let ctx = LayoutCtx { fonts: &fonts };

        let mut row = Flex::new(Axis::Horizontal);
        row.spacing = 4.0;
        row.children.push(Fixed(Vec2::new(10.0, 10.0)).into());
        row.children.push(Fixed(Vec2::new(10.0, 10.0)).into());
        row.children.push(Fixed(Vec2::new(10.0, 10.0)).into());

        let rects = row.layout(Rect::new(0.0, 0.0, 100.0, 20.0), &ctx);
        assert_eq!(rects[0].origin.x, 0.0);
        assert_eq!(rects[1].origin.x, 14.0);
        assert_eq!(rects[2].origin.x, 28.0);
    }

    #[test]
    fn end_alignment_pushes_content_to_far_edge() {
        let fonts = ctx_fonts();
        let ctx = LayoutCtx { fonts: &fonts };

        let mut col = Flex::new(Axis::Vertical);
        col.main_align = Align::End;
        col.children.push(Fixed(Vec2::new(10.0, 30.0)).into());

        let rects = col.layout(Rect::new(0.0, 0.0, 50.0, 100.0), &ctx);
        assert_eq!(rects[0].origin.y, 70.0);
    }

    #[test]
    fn event_routing_stops_at_consuming_child() {
        use std::cell::Cell;
        use std::rc::Rc;

        struct CountingTarget {
            hits: Rc<Cell<u32>>,
        }

        impl Widget for CountingTarget {
            fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
                constraints.constrain(Vec2::new(50.0, 50.0))
            }
            fn paint(&self, _painter: &mut Painter, _rect: Rect) {}
            fn on_event(&mut self, event: &UiEvent, rect: Rect, _ctx: &LayoutCtx) -> EventResult {
                if let UiEvent::Click { pos } = event {
                    if rect.contains(*pos) {
                        self.hits.set(self.hits.get() + 1);
                        return EventResult::Consumed;
                    }
                }
                EventResult::Ignored
            }
        }

        let fonts = ctx_fonts();
        let ctx = LayoutCtx { fonts: &fonts };

        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        let mut col = Column::new()
            .child(CountingTarget { hits: first.clone() })
            .child(CountingTarget { hits: second.clone() });

        // Click in the first child's rect (0..50 vertically).
        let result = col.on_event(
            &UiEvent::Click { pos: Vec2::new(10.0, 10.0) },
            Rect::new(0.0, 0.0, 100.0, 200.0),
            &ctx,
        );

        assert!(result.is_consumed());
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 0);
    }
}
