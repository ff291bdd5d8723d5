//! CPU rendering subsystem, built on tiny-skia.
//!
//! The scene renderer consumes a `scene` draw stream and rasterizes it into a
//! [`Pixmap`]. Each shape module under `render::shapes` turns one `DrawCmd`
//! variant into tiny-skia paths.
//!
//! Convention:
//! - draw commands are in world units (bottom-left origin, +Y up)
//! - pixmaps are in device pixels (top-left origin, +Y down)
//! - [`RenderCtx::transform`] maps the first onto the second, and
//!   [`RenderCtx::clip`] keeps plot content inside the axes box

mod ctx;
mod pixmap;
mod scene_renderer;
pub mod shapes;

pub use ctx::RenderCtx;
pub use pixmap::{PixelBounds, PixmapExt};
pub use scene_renderer::SceneRenderer;
pub use tiny_skia::Pixmap;
