use std::collections::HashMap;

use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle};
use tiny_skia::{ColorU8, Pixmap, PixmapPaint, Transform};

use crate::coords::Vec2;
use crate::paint::Color;
use crate::text::{FontId, FontSystem};

/// A single line of text positioned in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun<'a> {
    pub text: &'a str,
    pub font: FontId,
    /// Font size in device pixels.
    pub px_size: f32,
    pub color: Color,
    /// Baseline anchor in pixel space; the run is centred on it horizontally.
    pub anchor: Vec2,
}

/// Coverage bitmap of one rasterized glyph.
struct CachedGlyph {
    width: usize,
    height: usize,
    coverage: Vec<u8>,
}

impl CachedGlyph {
    /// Glyph tile in `color`, with coverage folded into alpha.
    fn tinted(&self, color: Color) -> Option<Pixmap> {
        let mut tile = Pixmap::new(self.width as u32, self.height as u32)?;
        let [r, g, b, a] = color.to_srgba8();
        for (px, &cov) in tile.pixels_mut().iter_mut().zip(&self.coverage) {
            let alpha = (u16::from(a) * u16::from(cov) / 255) as u8;
            *px = ColorU8::from_rgba(r, g, b, alpha).premultiply();
        }
        Some(tile)
    }
}

/// Rasterizer for figure titles.
///
/// Glyphs are rasterized on first use via fontdue and cached for the
/// renderer's lifetime. The cache key is `GlyphRasterConfig`, which encodes
/// font identity, glyph index and pixel size.
pub struct TextRenderer {
    layout: Layout<()>,
    glyph_cache: HashMap<GlyphRasterConfig, CachedGlyph>,
    warned_missing_font: bool,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self {
            layout: Layout::new(CoordinateSystem::PositiveYDown),
            glyph_cache: HashMap::new(),
            warned_missing_font: false,
        }
    }

    /// Draws a pixel-space text run. Missing fonts skip the run with a warning.
    pub fn draw_run(&mut self, fonts: &FontSystem, target: &mut Pixmap, run: &TextRun<'_>) {
        let Some(font) = fonts.get(run.font) else {
            if !self.warned_missing_font {
                log::warn!("no font loaded for {:?}; text will not be drawn", run.font);
                self.warned_missing_font = true;
            }
            return;
        };
        if run.text.is_empty() || !run.anchor.is_finite() || !run.px_size.is_finite() || run.px_size <= 0.0 {
            return;
        }

        let width = fonts.measure_text(run.text, run.font, run.px_size).x;
        let ascent = font
            .horizontal_line_metrics(run.px_size)
            .map_or(run.px_size * 0.8, |m| m.ascent);

        self.layout.reset(&LayoutSettings {
            x: run.anchor.x - width * 0.5,
            y: run.anchor.y - ascent,
            ..LayoutSettings::default()
        });
        self.layout.append(&[font], &TextStyle::new(run.text, run.px_size, 0));

        // Snapshot positions so the borrow on `self.layout` ends before the
        // cache is mutated.
        let glyphs: Vec<(GlyphRasterConfig, f32, f32)> = self
            .layout
            .glyphs()
            .iter()
            .filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0)
            .map(|g| (g.key, g.x, g.y))
            .collect();

        for (key, gx, gy) in glyphs {
            let glyph = self.glyph_cache.entry(key).or_insert_with(|| {
                let (metrics, coverage) = font.rasterize_config(key);
                CachedGlyph { width: metrics.width, height: metrics.height, coverage }
            });
            let Some(tile) = glyph.tinted(run.color) else { continue };
            target.draw_pixmap(
                gx.round() as i32,
                gy.round() as i32,
                tile.as_ref(),
                &PixmapPaint::default(),
                Transform::identity(),
                None,
            );
        }
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}
