//! On-screen preview of a rendered figure.
//!
//! Owns the `winit` event loop and window for the lifetime of one preview and
//! blits the pixmap to the window surface through wgpu. Headless machines
//! skip the preview entirely.

mod blit;
mod preview;

pub use preview::{PreviewConfig, display_available, fit_to_screen, letterbox, show};
