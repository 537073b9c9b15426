use crate::coords::Vec2;
use crate::paint::Paint;
use crate::scene::shapes::Border;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled circle, optionally bordered.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub paint: Paint,
    pub border: Option<Border>,
}

impl DrawList {
    pub fn push_circle(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        paint: impl Into<Paint>,
        border: Option<Border>,
    ) {
        self.push(
            z,
            DrawCmd::Circle(CircleCmd {
                center,
                radius,
                paint: paint.into(),
                border,
            }),
        );
    }
}
