pub(crate) mod circle;
pub(crate) mod ellipse;
pub(crate) mod polygon;
pub(crate) mod rect;

use crate::paint::Color;

/// Stroke centred on the outline of a shape.
///
/// `width` is in points (1/72 inch), so strokes keep their visual weight at
/// any output resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    /// Default stroke weight for outlined shapes.
    pub const DEFAULT_WIDTH: f32 = 1.0;

    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }

    /// A stroke with the default weight.
    #[inline]
    pub fn hairline(color: Color) -> Self {
        Self::new(Self::DEFAULT_WIDTH, color)
    }
}
