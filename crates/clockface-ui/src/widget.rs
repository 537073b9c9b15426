use clockface_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;

/// A node in the per-frame widget tree.
///
/// The tree is rebuilt every frame; widgets hold only what they need to
/// measure, paint, and react to this frame's events. Persistent state lives
/// in the application and is captured by value or via `Rc`/closures.
pub trait Widget {
    /// Computes the widget's desired size under `constraints`.
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2;

    /// Records draw commands for the widget laid out at `rect`.
    fn paint(&self, painter: &mut Painter, rect: Rect);

    /// Reacts to an input event. `rect` is the same rect `paint` received.
    ///
    /// Default: ignore everything.
    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        let _ = (event, rect, ctx);
        EventResult::Ignored
    }
}

/// A boxed widget, the unit of tree composition.
///
/// Container widgets store children as `Element`s; `From<W>` lets call sites
/// pass concrete widgets directly.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new(widget: impl Widget + 'static) -> Self {
        Self(Box::new(widget))
    }
}

impl<W: Widget + 'static> From<W> for Element {
    fn from(widget: W) -> Self {
        Element::new(widget)
    }
}

impl std::ops::Deref for Element {
    type Target = dyn Widget;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl std::ops::DerefMut for Element {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.0
    }
}
