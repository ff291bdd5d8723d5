//! Coordinate and geometry types shared by the scene stream and the rasterizer.
//!
//! World (plot) space:
//! - Scene units, isotropic
//! - Origin bottom-left
//! - +X right, +Y up
//!
//! The rasterizer maps world space to pixel space (origin top-left, +Y down)
//! through a [`Figure`](crate::figure::Figure) layout.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
