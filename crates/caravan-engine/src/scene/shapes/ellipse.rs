use crate::coords::Vec2;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Axis-aligned ellipse draw payload.
///
/// `size` holds the full width and height, not the radii.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseCmd {
    pub center: Vec2,
    pub size: Vec2,
    pub paint: Paint,
    pub border: Option<Border>,
}

impl EllipseCmd {
    #[inline]
    pub fn new(center: Vec2, size: Vec2, paint: Paint, border: Option<Border>) -> Self {
        Self { center, size, paint, border }
    }

    #[inline]
    pub fn radii(&self) -> Vec2 {
        self.size * 0.5
    }

    #[inline]
    pub fn is_drawable(&self) -> bool {
        self.center.is_finite() && self.size.is_finite() && self.size.x > 0.0 && self.size.y > 0.0
    }
}

impl DrawList {
    /// Records an ellipse draw command.
    #[inline]
    pub fn push_ellipse(
        &mut self,
        z: ZIndex,
        center: Vec2,
        size: Vec2,
        paint: Paint,
        border: Option<Border>,
    ) {
        self.push(z, DrawCmd::Ellipse(EllipseCmd::new(center, size, paint, border)));
    }
}
