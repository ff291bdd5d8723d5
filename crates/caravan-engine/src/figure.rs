//! Figure description: world bounds, output resolution and frame decorations.
//!
//! A [`Figure`] says *where* the draw list lands on the output image; the
//! [`FrameLayout`] derived from it is the world → pixel mapping the renderer uses.

use crate::coords::{Rect, Vec2, Viewport};
use crate::paint::Color;
use crate::text::FontId;

/// Points per inch; stroke widths and font sizes are expressed in points.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Figure title drawn centred above the axes box.
#[derive(Debug, Clone, PartialEq)]
pub struct Title {
    pub text: String,
    pub font: FontId,
    /// Font size in points.
    pub size: f32,
    /// Gap between the top of the axes box and the title baseline, in points.
    pub pad: f32,
    pub color: Color,
}

impl Title {
    pub fn new(text: impl Into<String>, font: FontId) -> Self {
        Self {
            text: text.into(),
            font,
            size: 12.0,
            pad: 6.0,
            color: Color::black(),
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn pad(mut self, pad: f32) -> Self {
        self.pad = pad;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Output frame for a draw list.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// World rectangle mapped onto the axes box.
    pub bounds: Rect,
    pub dpi: f32,
    /// Width of the axes box in inches. Height follows from the bounds' aspect.
    pub width_in: f32,
    pub title: Option<Title>,
    /// Draws a thin frame around the axes box when set.
    pub axes_visible: bool,
    pub background: Color,
    /// Crop the output to its content plus `tight_pad_in`.
    pub tight: bool,
    pub tight_pad_in: f32,
}

impl Default for Figure {
    fn default() -> Self {
        Self {
            bounds: Rect::new(0.0, 0.0, 1.0, 1.0),
            dpi: 100.0,
            width_in: 6.4,
            title: None,
            axes_visible: true,
            background: Color::white(),
            tight: false,
            tight_pad_in: 0.1,
        }
    }
}

impl Figure {
    pub fn new(bounds: Rect) -> Self {
        Self { bounds, ..Self::default() }
    }

    pub fn dpi(mut self, dpi: f32) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn width_in(mut self, width_in: f32) -> Self {
        self.width_in = width_in;
        self
    }

    pub fn title(mut self, title: Title) -> Self {
        self.title = Some(title);
        self
    }

    /// Hides the axes frame.
    pub fn axis_off(mut self) -> Self {
        self.axes_visible = false;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Enables tight cropping with the given pad in inches.
    pub fn tight(mut self, pad_in: f32) -> Self {
        self.tight = true;
        self.tight_pad_in = pad_in;
        self
    }

    /// Returns true when the figure can produce a non-empty image.
    pub fn is_valid(&self) -> bool {
        self.bounds.is_finite()
            && !self.bounds.is_empty()
            && self.dpi.is_finite()
            && self.dpi > 0.0
            && self.width_in.is_finite()
            && self.width_in > 0.0
    }

    /// Device pixels per world unit.
    #[inline]
    pub fn pixels_per_unit(&self) -> f32 {
        self.width_in * self.dpi / self.bounds.width()
    }

    /// Converts a length in points to device pixels.
    #[inline]
    pub fn pt_to_px(&self, pt: f32) -> f32 {
        pt * self.dpi / POINTS_PER_INCH
    }

    /// Computes the pixel layout of the frame.
    pub fn layout(&self) -> FrameLayout {
        let ppu = self.pixels_per_unit();
        let axes_w = (self.bounds.width() * ppu).ceil().max(1.0);
        let axes_h = (self.bounds.height() * ppu).ceil().max(1.0);

        // One extra pixel so a pad-wide crop never has to clamp at the border.
        let margin = (self.tight_pad_in * self.dpi).ceil().max(0.0) + 1.0;

        let title_band = match &self.title {
            Some(t) => (self.pt_to_px(t.size) * 1.2 + self.pt_to_px(t.pad)).ceil(),
            None => 0.0,
        };

        let axes = Rect::new(margin, margin + title_band, axes_w, axes_h);
        let viewport = Viewport::new(
            (axes_w + 2.0 * margin) as u32,
            (axes_h + title_band + 2.0 * margin) as u32,
        );

        FrameLayout { bounds: self.bounds, ppu, axes, viewport, pt_scale: self.dpi / POINTS_PER_INCH }
    }
}

/// Pixel layout of a figure: where the axes box sits and how world maps to it.
///
/// Pixel space has its origin at the top-left with +Y down.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameLayout {
    pub bounds: Rect,
    /// Device pixels per world unit.
    pub ppu: f32,
    /// Axes box in pixel space (`origin` is its top-left corner).
    pub axes: Rect,
    pub viewport: Viewport,
    /// Device pixels per point.
    pub pt_scale: f32,
}

impl FrameLayout {
    /// World → pixel.
    #[inline]
    pub fn to_px(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.axes.origin.x + (p.x - self.bounds.origin.x) * self.ppu,
            self.axes.origin.y + (self.bounds.max().y - p.y) * self.ppu,
        )
    }

    #[inline]
    pub fn pt_to_px(&self, pt: f32) -> f32 {
        pt * self.pt_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene_figure() -> Figure {
        Figure::new(Rect::new(0.0, 0.0, 100.0, 60.0)).dpi(10.0).width_in(10.0)
    }

    #[test]
    fn scale_follows_width_and_dpi() {
        assert_eq!(scene_figure().pixels_per_unit(), 1.0);
        assert_eq!(scene_figure().dpi(300.0).width_in(16.0).pixels_per_unit(), 48.0);
    }

    #[test]
    fn world_origin_maps_to_axes_bottom_left() {
        let layout = scene_figure().layout();
        let p = layout.to_px(Vec2::new(0.0, 0.0));
        assert_eq!(p.x, layout.axes.origin.x);
        assert_eq!(p.y, layout.axes.max().y);
    }

    #[test]
    fn title_adds_a_band_above_the_axes() {
        let plain = scene_figure().layout();
        let titled = scene_figure().title(Title::new("t", FontId::PRIMARY).size(20.0)).layout();
        assert!(titled.axes.origin.y > plain.axes.origin.y);
        assert!(titled.viewport.height > plain.viewport.height);
        assert_eq!(titled.viewport.width, plain.viewport.width);
    }

    #[test]
    fn invalid_figures_are_detected() {
        assert!(scene_figure().is_valid());
        assert!(!scene_figure().dpi(0.0).is_valid());
        assert!(!Figure::new(Rect::new(0.0, 0.0, 0.0, 10.0)).is_valid());
    }
}
