use std::sync::Arc;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::render::{Pixmap, PixmapExt};

use super::blit::{Blit, FrameOutcome};

/// Preview window configuration.
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    pub title: String,
    /// Largest initial window size; bigger images are scaled down to fit.
    pub max_size: LogicalSize<f64>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            title: "caravan".to_string(),
            max_size: LogicalSize::new(1280.0, 800.0),
        }
    }
}

/// True when a window server is reachable.
///
/// On X11/Wayland desktops this needs `DISPLAY` or `WAYLAND_DISPLAY`; other
/// platforms always have one.
pub fn display_available() -> bool {
    if cfg!(all(unix, not(any(target_os = "macos", target_os = "ios", target_os = "android")))) {
        ["DISPLAY", "WAYLAND_DISPLAY"]
            .iter()
            .any(|var| std::env::var_os(var).is_some_and(|v| !v.is_empty()))
    } else {
        true
    }
}

/// Initial window size for an image: its own size, scaled down to `max`
/// with the aspect ratio kept. Never scales up.
pub fn fit_to_screen(image: (u32, u32), max: LogicalSize<f64>) -> LogicalSize<f64> {
    let (w, h) = (f64::from(image.0.max(1)), f64::from(image.1.max(1)));
    let scale = (max.width / w).min(max.height / h).min(1.0);
    LogicalSize::new((w * scale).max(1.0), (h * scale).max(1.0))
}

/// Viewport `(x, y, width, height)` that shows `image` as large as possible
/// inside `surface`, centred, with the aspect ratio kept.
pub fn letterbox(image: (u32, u32), surface: (u32, u32)) -> (f32, f32, f32, f32) {
    let (iw, ih) = (image.0.max(1) as f32, image.1.max(1) as f32);
    let (sw, sh) = (surface.0 as f32, surface.1 as f32);
    let scale = (sw / iw).min(sh / ih);
    let (w, h) = (iw * scale, ih * scale);
    ((sw - w) * 0.5, (sh - h) * 0.5, w, h)
}

/// Shows `pixmap` in a window until it is closed or Escape is pressed.
///
/// Returns `Ok(false)` without opening anything when no display is
/// available.
pub fn show(pixmap: &Pixmap, config: PreviewConfig) -> Result<bool> {
    if !display_available() {
        log::info!("no display available; skipping preview");
        return Ok(false);
    }
    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(err) => {
            log::info!("cannot open a window ({err}); skipping preview");
            return Ok(false);
        }
    };

    let mut app = PreviewApp {
        config,
        rgba: pixmap.to_rgba8(),
        image_size: (pixmap.width(), pixmap.height()),
        window: None,
        blit: None,
        error: None,
    };
    event_loop
        .run_app(&mut app)
        .context("winit event loop terminated with error")?;

    match app.error {
        Some(err) => Err(err),
        None => Ok(true),
    }
}

struct PreviewApp {
    config: PreviewConfig,
    rgba: Vec<u8>,
    image_size: (u32, u32),
    window: Option<Arc<Window>>,
    blit: Option<Blit>,
    error: Option<anyhow::Error>,
}

impl PreviewApp {
    fn open(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(fit_to_screen(self.image_size, self.config.max_size));
        let window = Arc::new(event_loop.create_window(attrs).context("failed to create window")?);

        let (w, h) = self.image_size;
        let blit = pollster::block_on(Blit::new(Arc::clone(&window), &self.rgba, w, h))
            .context("GPU initialization failed for preview window")?;

        window.request_redraw();
        self.window = Some(window);
        self.blit = Some(blit);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("preview failed: {err:#}");
        self.error = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for PreviewApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.open(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Static image: redraw only when the system asks for it.
        event_loop.set_control_flow(ControlFlow::Wait);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape) =>
            {
                event_loop.exit()
            }

            WindowEvent::Resized(size) => {
                if let Some(blit) = self.blit.as_mut() {
                    blit.resize(size);
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                let Some(blit) = self.blit.as_mut() else { return };
                match blit.draw() {
                    FrameOutcome::Presented | FrameOutcome::Skipped => {}
                    FrameOutcome::Retry => {
                        if let Some(window) = &self.window {
                            window.request_redraw();
                        }
                    }
                    FrameOutcome::Fatal => {
                        self.fail(event_loop, anyhow::anyhow!("GPU out of memory while presenting"));
                    }
                }
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_images_open_at_native_size() {
        let size = fit_to_screen((400, 240), LogicalSize::new(1280.0, 800.0));
        assert_eq!((size.width, size.height), (400.0, 240.0));
    }

    #[test]
    fn large_images_shrink_to_fit_keeping_aspect() {
        // 16 in at 300 dpi: the default render.
        let size = fit_to_screen((4802, 2882), LogicalSize::new(1280.0, 800.0));
        assert!((size.width - 1280.0).abs() < 1e-6, "{size:?}");
        assert!((size.width / size.height - 4802.0 / 2882.0).abs() < 1e-6);
    }

    #[test]
    fn letterbox_centres_a_wide_image() {
        let (x, y, w, h) = letterbox((200, 100), (400, 400));
        assert_eq!((x, y, w, h), (0.0, 100.0, 400.0, 200.0));
    }

    #[test]
    fn letterbox_centres_a_tall_image() {
        let (x, y, w, h) = letterbox((100, 200), (400, 200));
        assert_eq!((x, y, w, h), (150.0, 0.0, 100.0, 200.0));
    }

    #[test]
    fn headless_preview_is_a_no_op() {
        if display_available() {
            // A desktop session would open a real window here.
            return;
        }
        let pixmap = Pixmap::new(4, 4).unwrap();
        assert!(!show(&pixmap, PreviewConfig::default()).unwrap());
    }
}
