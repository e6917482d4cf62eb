use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// End cap style for line segments.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LineCap {
    /// Semicircular caps of radius `width / 2`. Consecutive round-capped
    /// segments sharing an endpoint also produce a round join.
    Round,
}

/// Single line segment draw payload.
///
/// `width` is the full stroke width in logical pixels. A zero-length segment
/// with round caps covers a disc of diameter `width`.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub color: Color,
    pub cap: LineCap,
}

impl LineCmd {
    #[inline]
    pub fn new(from: Vec2, to: Vec2, width: f32, color: Color, cap: LineCap) -> Self {
        Self { from, to, width, color, cap }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.from == self.to
    }
}

impl DrawList {
    /// Records a round-capped line segment.
    #[inline]
    pub fn push_round_line(&mut self, z: ZIndex, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.push(z, DrawCmd::Line(LineCmd::new(from, to, width, color, LineCap::Round)));
    }
}
