use crate::coords::Rect;
use crate::paint::Paint;
use crate::scene::shapes::Border;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled rectangle, optionally rounded and bordered.
///
/// `corner_radius` of 0.0 yields sharp corners. The radius is clamped by the
/// renderer to half the shorter side.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub corner_radius: f32,
    pub paint: Paint,
    pub border: Option<Border>,
}

impl DrawList {
    pub fn push_rect(&mut self, z: ZIndex, rect: Rect, paint: impl Into<Paint>) {
        self.push(
            z,
            DrawCmd::Rect(RectCmd {
                rect,
                corner_radius: 0.0,
                paint: paint.into(),
                border: None,
            }),
        );
    }

    pub fn push_rounded_rect(
        &mut self,
        z: ZIndex,
        rect: Rect,
        corner_radius: f32,
        paint: impl Into<Paint>,
        border: Option<Border>,
    ) {
        self.push(
            z,
            DrawCmd::Rect(RectCmd {
                rect,
                corner_radius,
                paint: paint.into(),
                border,
            }),
        );
    }
}
