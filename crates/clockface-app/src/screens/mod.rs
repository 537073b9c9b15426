//! The three screens of the application and navigation between them.

pub mod graphical;
pub mod home;
pub mod numerical;

pub use graphical::GraphicalScreen;
pub use home::home_screen;
pub use numerical::NumericalScreen;

use std::cell::Cell;
use std::rc::Rc;

use clockface_ui::prelude::*;

/// Which screen is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Home,
    Graphical,
    Numerical,
}

const BACK_MARGIN: f32 = 16.0;

/// Full-screen content with a back button pinned to the top-left corner.
struct ScreenChrome {
    content: Element,
    back: Element,
}

impl ScreenChrome {
    fn back_rect(&self, rect: Rect, ctx: &LayoutCtx) -> Rect {
        let size = self.back.measure(Constraints::loose(rect.size), ctx);
        Rect::from_origin_size(rect.origin + Vec2::new(BACK_MARGIN, BACK_MARGIN), size)
    }
}

impl Widget for ScreenChrome {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        self.content.measure(constraints, ctx);
        constraints.max
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.content.paint(painter, rect);
        let back_rect = self.back_rect(rect, &painter.layout_ctx());
        self.back.paint(painter, back_rect);
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        let back_rect = self.back_rect(rect, ctx);
        if self.back.on_event(event, back_rect, ctx).is_consumed() {
            return EventResult::Consumed;
        }
        self.content.on_event(event, rect, ctx)
    }
}

/// Wraps clock-screen content with a "Back" button that navigates home.
pub(crate) fn with_back_button(
    content: Element,
    font: FontId,
    nav: &Rc<Cell<Option<ScreenKind>>>,
) -> Element {
    let nav = nav.clone();
    let back = Button::new(Text::new(
        "Back",
        font,
        16.0,
        Color::from_premul(1.0, 1.0, 1.0, 1.0),
    ))
    .padding(Edges::symmetric(8.0, 18.0))
    .corner_radius(6.0)
    .on_click(move || nav.set(Some(ScreenKind::Home)));

    ScreenChrome {
        content,
        back: back.into(),
    }
    .into()
}
