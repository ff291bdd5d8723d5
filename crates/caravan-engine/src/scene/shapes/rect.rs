use crate::coords::Rect;
use crate::paint::{Color, Paint};
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub paint: Paint,
    pub border: Option<Border>,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, paint: Paint, border: Option<Border>) -> Self {
        Self { rect, paint, border }
    }

    /// Rects with a NaN corner or no area draw nothing.
    #[inline]
    pub fn is_drawable(&self) -> bool {
        self.rect.is_finite() && !self.rect.normalized().is_empty()
    }
}

impl DrawList {
    /// Records a rectangle draw command.
    #[inline]
    pub fn push_rect(&mut self, z: ZIndex, rect: Rect, paint: Paint, border: Option<Border>) {
        self.push(z, DrawCmd::Rect(RectCmd::new(rect, paint, border)));
    }

    /// Records a solid rectangle without outline.
    #[inline]
    pub fn push_solid_rect(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.push_rect(z, rect, Paint::Solid(color), None);
    }
}
