//! Clockface UI — immediate-mode widget tree on top of `clockface-engine`.
//!
//! The tree is rebuilt each frame: construct a root widget, hand it to
//! [`UiScene::frame`] together with the frame's [`UiInput`], then pass the
//! returned draw list to the engine renderers.
//!
//! ```rust,ignore
//! use clockface_ui::prelude::*;
//!
//! let mut scene = UiScene::new();
//! let font = scene.load_font(include_bytes!("my_font.ttf")).unwrap();
//!
//! // In your frame callback:
//! let input = UiInput { mouse_pos, mouse_pressed, mouse_clicked, ..Default::default() };
//! let draw_list = scene.frame(
//!     Column::new()
//!         .child(Text::new("Hello!", font, 18.0, Color::from_straight(1.0, 1.0, 1.0, 1.0)))
//!         .child(Button::new(Text::new("Click me", font, 14.0, Color::from_straight(0.0, 0.0, 0.0, 1.0)))
//!             .on_click(|| println!("clicked!")))
//!         .into(),
//!     viewport,
//!     &input,
//! );
//! // Pass draw_list to your renderers.
//! ```
//!
//! [`UiScene::frame`]: scene::UiScene::frame
//! [`UiInput`]: scene::UiInput

pub mod constraints;
pub mod event;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything you need to build and extend UI — import this in your component files.
pub mod prelude {
    pub use crate::constraints::{Constraints, Edges, LayoutCtx};
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::painter::Painter;
    pub use crate::scene::{UiInput, UiScene};
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        button::Button,
        container::Container,
        flex::{Align, Column, Row},
        text::Text,
    };

    // Re-export the engine primitives everyone needs.
    pub use clockface_engine::coords::{Rect, Vec2};
    pub use clockface_engine::input::Key;
    pub use clockface_engine::paint::{Color, ColorStop, LinearGradient, Paint};
    pub use clockface_engine::scene::Border;
    pub use clockface_engine::text::FontId;
}
