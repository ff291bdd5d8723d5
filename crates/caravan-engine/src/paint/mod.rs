//! Paint model shared between the scene stream and the rasterizer.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//! - paint sources (solid, gradients)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{ColorStop, LinearGradient};

/// Paint source for filling geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Paint {
    /// Anti-aliased tiny-skia paint. `None` for an unusable gradient.
    pub fn to_skia(&self) -> Option<tiny_skia::Paint<'static>> {
        let mut paint = tiny_skia::Paint::default();
        match self {
            Paint::Solid(c) => paint.set_color(c.to_skia()),
            Paint::LinearGradient(g) => paint.shader = g.to_shader()?,
        }
        paint.anti_alias = true;
        Some(paint)
    }
}

impl From<Color> for Paint {
    #[inline]
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

impl From<LinearGradient> for Paint {
    #[inline]
    fn from(g: LinearGradient) -> Self {
        Paint::LinearGradient(g)
    }
}
