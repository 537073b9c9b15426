use std::cell::Cell;
use std::rc::Rc;

use clockface_ui::prelude::*;

use super::ScreenKind;

fn title_color() -> Color {
    Color::from_premul(1.0, 1.0, 1.0, 1.0)
}

fn hint_color() -> Color {
    Color::from_srgb_u8(0x9a, 0x9a, 0x9a, 0xff)
}

/// Full-viewport vertical gradient behind the home content.
struct GradientBackdrop {
    child: Element,
}

impl Widget for GradientBackdrop {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        self.child.measure(constraints, ctx);
        constraints.max
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let top = Color::from_srgb_u8(0x16, 0x1c, 0x26, 0xff);
        let bottom = Color::from_srgb_u8(0x0c, 0x0f, 0x14, 0xff);
        painter.fill_rect(
            rect,
            LinearGradient::two_stop(
                rect.min(),
                Vec2::new(rect.origin.x, rect.max().y),
                top,
                bottom,
            ),
        );
        self.child.paint(painter, rect);
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        self.child.on_event(event, rect, ctx)
    }
}

fn nav_button(
    label: &str,
    font: FontId,
    target: ScreenKind,
    nav: &Rc<Cell<Option<ScreenKind>>>,
) -> Button {
    let nav = nav.clone();
    Button::new(Text::new(label, font, 22.0, title_color()))
        .padding(Edges::symmetric(12.0, 28.0))
        .corner_radius(8.0)
        .on_click(move || nav.set(Some(target)))
}

/// Landing screen: a title and one button per clock screen.
pub fn home_screen(font: FontId, nav: &Rc<Cell<Option<ScreenKind>>>) -> Element {
    let content = Column::new()
        .main_align(Align::Center)
        .cross_align(Align::Center)
        .spacing(18.0)
        .child(Text::new("Clockface", font, 42.0, title_color()))
        .child(nav_button("Graphical clock", font, ScreenKind::Graphical, nav))
        .child(nav_button("Numerical clock", font, ScreenKind::Numerical, nav))
        .child(Text::new(
            "Esc returns to this screen",
            font,
            14.0,
            hint_color(),
        ));

    GradientBackdrop {
        child: content.into(),
    }
    .into()
}
