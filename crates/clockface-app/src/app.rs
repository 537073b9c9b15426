use std::cell::Cell;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use clockface_engine::coords::Vec2;
use clockface_engine::core::{App, AppControl, FrameCtx};
use clockface_engine::input::{Key, MouseButton};
use clockface_engine::paint::Color;
use clockface_engine::render::shapes::circle::CircleRenderer;
use clockface_engine::render::shapes::line::LineRenderer;
use clockface_engine::render::shapes::rect::RectRenderer;
use clockface_engine::render::shapes::text::TextRenderer;
use clockface_engine::text::FontId;
use clockface_ui::scene::{UiInput, UiScene};
use clockface_ui::widget::Element;

use crate::clock::ClockConfig;
use crate::screens::{home_screen, GraphicalScreen, NumericalScreen, ScreenKind};

fn background() -> Color {
    Color::from_srgb_u8(0x10, 0x14, 0x18, 0xff)
}

/// Top-level application: screen switching plus the render loop.
///
/// Each clock screen owns its model and ticker; entering a screen starts its
/// ticker and leaving stops it, so nothing ticks while the home screen is up.
pub struct ClockShell {
    ui: UiScene,
    font: FontId,

    screen: ScreenKind,
    graphical: GraphicalScreen,
    numerical: NumericalScreen,

    /// Navigation requests from button handlers, drained once per frame.
    nav: Rc<Cell<Option<ScreenKind>>>,

    rects: RectRenderer,
    circles: CircleRenderer,
    lines: LineRenderer,
    texts: TextRenderer,
}

impl ClockShell {
    pub fn new(font_bytes: &[u8]) -> Result<Self> {
        let mut ui = UiScene::new();
        let font = ui.load_font(font_bytes).map_err(|e| anyhow!(e))?;

        Ok(Self {
            ui,
            font,
            screen: ScreenKind::Home,
            graphical: GraphicalScreen::new(ClockConfig::default()),
            numerical: NumericalScreen::new(ClockConfig::default()),
            nav: Rc::new(Cell::new(None)),
            rects: RectRenderer::new(),
            circles: CircleRenderer::new(),
            lines: LineRenderer::new(),
            texts: TextRenderer::new(),
        })
    }

    fn navigate(&mut self, target: ScreenKind) {
        if target == self.screen {
            return;
        }

        match self.screen {
            ScreenKind::Graphical => self.graphical.leave(),
            ScreenKind::Numerical => self.numerical.leave(),
            ScreenKind::Home => {}
        }
        match target {
            ScreenKind::Graphical => self.graphical.enter(),
            ScreenKind::Numerical => self.numerical.enter(),
            ScreenKind::Home => {}
        }

        log::debug!("navigating {:?} -> {:?}", self.screen, target);
        self.screen = target;
    }

    fn build_input(ctx: &FrameCtx<'_, '_>) -> UiInput {
        UiInput {
            mouse_pos: ctx.input.pointer_pos.map(|(x, y)| Vec2::new(x, y)),
            mouse_pressed: ctx.input.button_down(MouseButton::Left),
            mouse_clicked: ctx.input_frame.buttons_released.contains(&MouseButton::Left),
            keys_pressed: ctx.input_frame.keys_pressed.iter().copied().collect(),
        }
    }

    fn build_root(&self) -> Element {
        match self.screen {
            ScreenKind::Home => home_screen(self.font, &self.nav),
            ScreenKind::Graphical => self.graphical.build(self.font, &self.nav),
            ScreenKind::Numerical => self.numerical.build(self.font, &self.nav),
        }
    }
}

impl App for ClockShell {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (w, h) = ctx.window.logical_size();
        let input = Self::build_input(ctx);

        // Escape backs out of either clock screen.
        if self.screen != ScreenKind::Home && input.keys_pressed.contains(&Key::Escape) {
            self.navigate(ScreenKind::Home);
        }

        match self.screen {
            ScreenKind::Graphical => {
                self.graphical.update(ctx.time.now);
            }
            ScreenKind::Numerical => {
                self.numerical.update(ctx.time.now);
            }
            ScreenKind::Home => {}
        }

        let root = self.build_root();
        self.ui.frame(root, Vec2::new(w, h), &input);

        // Button handlers ran inside frame(); switch screens for the next one.
        if let Some(target) = self.nav.take() {
            self.navigate(target);
            ctx.runtime.request_redraw();
        }

        let deadline = match self.screen {
            ScreenKind::Graphical => self.graphical.deadline(),
            ScreenKind::Numerical => self.numerical.deadline(),
            ScreenKind::Home => None,
        };
        if let Some(deadline) = deadline {
            ctx.runtime.wake_at(deadline);
        }

        let (draw_list, fonts) = self.ui.draw_parts();
        let rects = &mut self.rects;
        let circles = &mut self.circles;
        let lines = &mut self.lines;
        let texts = &mut self.texts;

        ctx.render(background(), |rctx, target| {
            rects.render(rctx, target, draw_list);
            circles.render(rctx, target, draw_list);
            lines.render(rctx, target, draw_list);
            texts.render(rctx, target, draw_list, fonts);
        })
    }
}
