use clockface_engine::coords::{Rect, Vec2};
use clockface_engine::input::Key;
use clockface_engine::scene::DrawList;
use clockface_engine::text::{FontId, FontLoadError, FontSystem};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::UiEvent;
use crate::painter::Painter;
use crate::widget::Element;

/// Per-frame input snapshot in UI coordinates (logical pixels).
///
/// The application assembles this from the engine's `InputState` /
/// `InputFrame` each frame.
#[derive(Debug, Clone, Default)]
pub struct UiInput {
    /// Pointer position, `None` while the pointer is outside the window.
    pub mouse_pos: Option<Vec2>,
    /// Primary button currently held.
    pub mouse_pressed: bool,
    /// Primary button released this frame (click delivery edge).
    pub mouse_clicked: bool,
    /// Named keys that went down this frame.
    pub keys_pressed: Vec<Key>,
}

/// Owns the font system and the draw list, and runs one UI frame:
/// measure the tree, paint it, then route this frame's events.
pub struct UiScene {
    font_system: FontSystem,
    draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
            draw_list: DrawList::new(),
        }
    }

    /// Loads a font for use in `Text` widgets and direct `Painter::text` calls.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        self.font_system.load_font(bytes)
    }

    pub fn fonts(&self) -> &FontSystem {
        &self.font_system
    }

    /// Draw list and fonts together, for handing to the engine renderers
    /// (the text renderer needs both at once).
    pub fn draw_parts(&mut self) -> (&mut DrawList, &FontSystem) {
        (&mut self.draw_list, &self.font_system)
    }

    /// Runs one frame of the widget tree.
    ///
    /// The returned draw list is valid until the next `frame` call; hand it
    /// to the engine shape renderers. The root is laid out to fill the whole
    /// `viewport`.
    pub fn frame(&mut self, mut root: Element, viewport: Vec2, input: &UiInput) -> &mut DrawList {
        let ctx = LayoutCtx { fonts: &self.font_system };

        root.measure(Constraints::tight(viewport), &ctx);
        let rect = Rect::from_origin_size(Vec2::zero(), viewport);

        self.draw_list.clear();
        let mut painter = Painter::new(
            &mut self.draw_list,
            &self.font_system,
            input.mouse_pos,
            input.mouse_pressed,
        );
        root.paint(&mut painter, rect);

        // Events after paint: handlers mutate application state that the
        // *next* frame renders, so event order within a frame is not visible.
        if let Some(pos) = input.mouse_pos {
            root.on_event(&UiEvent::Hover { pos }, rect, &ctx);
            if input.mouse_clicked {
                root.on_event(&UiEvent::Click { pos }, rect, &ctx);
            }
        }
        for &key in &input.keys_pressed {
            root.on_event(&UiEvent::KeyPress { key }, rect, &ctx);
        }

        &mut self.draw_list
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::event::EventResult;
    use crate::widget::Widget;

    /// Records which events reached it; consumes clicks inside its rect.
    struct Probe {
        clicks: Rc<Cell<u32>>,
        hovers: Rc<Cell<u32>>,
        keys: Rc<Cell<u32>>,
    }

    impl Widget for Probe {
        fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
            constraints.max
        }

        fn paint(&self, _painter: &mut Painter, _rect: Rect) {}

        fn on_event(&mut self, event: &UiEvent, rect: Rect, _ctx: &LayoutCtx) -> EventResult {
            match event {
                UiEvent::Click { pos } if rect.contains(*pos) => {
                    self.clicks.set(self.clicks.get() + 1);
                    EventResult::Consumed
                }
                UiEvent::Hover { .. } => {
                    self.hovers.set(self.hovers.get() + 1);
                    EventResult::Ignored
                }
                UiEvent::KeyPress { .. } => {
                    self.keys.set(self.keys.get() + 1);
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            }
        }
    }

    fn probe() -> (Rc<Cell<u32>>, Rc<Cell<u32>>, Rc<Cell<u32>>, Probe) {
        let clicks = Rc::new(Cell::new(0));
        let hovers = Rc::new(Cell::new(0));
        let keys = Rc::new(Cell::new(0));
        let w = Probe {
            clicks: clicks.clone(),
            hovers: hovers.clone(),
            keys: keys.clone(),
        };
        (clicks, hovers, keys, w)
    }

    #[test]
    fn click_inside_viewport_is_delivered() {
        let mut scene = UiScene::new();
        let (clicks, _, _, w) = probe();

        let input = UiInput {
            mouse_pos: Some(Vec2::new(10.0, 10.0)),
            mouse_clicked: true,
            ..UiInput::default()
        };
        scene.frame(w.into(), Vec2::new(100.0, 100.0), &input);

        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn no_pointer_means_no_click_or_hover() {
        let mut scene = UiScene::new();
        let (clicks, hovers, _, w) = probe();

        let input = UiInput {
            mouse_pos: None,
            mouse_clicked: true,
            ..UiInput::default()
        };
        scene.frame(w.into(), Vec2::new(100.0, 100.0), &input);

        assert_eq!(clicks.get(), 0);
        assert_eq!(hovers.get(), 0);
    }

    #[test]
    fn hover_fires_without_click() {
        let mut scene = UiScene::new();
        let (clicks, hovers, _, w) = probe();

        let input = UiInput {
            mouse_pos: Some(Vec2::new(50.0, 50.0)),
            ..UiInput::default()
        };
        scene.frame(w.into(), Vec2::new(100.0, 100.0), &input);

        assert_eq!(hovers.get(), 1);
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn each_pressed_key_is_routed() {
        let mut scene = UiScene::new();
        let (_, _, keys, w) = probe();

        let input = UiInput {
            keys_pressed: vec![Key::Escape, Key::Enter],
            ..UiInput::default()
        };
        scene.frame(w.into(), Vec2::new(100.0, 100.0), &input);

        assert_eq!(keys.get(), 2);
    }

    #[test]
    fn draw_list_is_cleared_between_frames() {
        struct OneRect;
        impl Widget for OneRect {
            fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
                constraints.max
            }
            fn paint(&self, painter: &mut Painter, rect: Rect) {
                painter.fill_rect(rect, clockface_engine::paint::Color::from_straight(1.0, 0.0, 0.0, 1.0));
            }
        }

        let mut scene = UiScene::new();
        let input = UiInput::default();

        let n1 = scene.frame(OneRect.into(), Vec2::new(10.0, 10.0), &input).items().len();
        let n2 = scene.frame(OneRect.into(), Vec2::new(10.0, 10.0), &input).items().len();
        assert_eq!(n1, 1);
        assert_eq!(n2, 1);
    }
}
