//! Caravan engine crate.
//!
//! A small plot-space canvas: record shapes into a [`scene::DrawList`], frame
//! them with a [`figure::Figure`], rasterize with [`render::SceneRenderer`]
//! and write the result with [`export::save_png`]. [`window::show`] puts the
//! same pixmap on screen when a display is available.

pub mod coords;
pub mod export;
pub mod figure;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
pub mod window;
