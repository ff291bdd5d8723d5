use tiny_skia::{IntRect, Pixmap};

use crate::paint::Color;

/// Half-open pixel rectangle `[x0, x1) × [y0, y1)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PixelBounds {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl PixelBounds {
    #[inline]
    pub fn width(self) -> u32 {
        self.x1.saturating_sub(self.x0)
    }

    #[inline]
    pub fn height(self) -> u32 {
        self.y1.saturating_sub(self.y0)
    }

    /// Grows by `pad` on every side, clamped to `0..width` / `0..height`.
    pub fn padded(self, pad: u32, width: u32, height: u32) -> Self {
        Self {
            x0: self.x0.saturating_sub(pad),
            y0: self.y0.saturating_sub(pad),
            x1: self.x1.saturating_add(pad).min(width),
            y1: self.y1.saturating_add(pad).min(height),
        }
    }
}

/// Figure-level queries on a rendered pixmap.
pub trait PixmapExt {
    /// Smallest pixel rectangle containing every pixel that differs from
    /// `background`. `None` if nothing was drawn.
    fn tight_bbox(&self, background: Color) -> Option<PixelBounds>;

    /// Copies out the pixels inside `bounds`. `None` if `bounds` misses the
    /// pixmap or has no area.
    fn crop(&self, bounds: PixelBounds) -> Option<Pixmap>;

    /// Straight-alpha sRGBA8 bytes, row-major.
    fn to_rgba8(&self) -> Vec<u8>;
}

impl PixmapExt for Pixmap {
    fn tight_bbox(&self, background: Color) -> Option<PixelBounds> {
        let bg = background.to_skia().premultiply().to_color_u8();
        let width = self.width() as usize;
        let mut bounds: Option<PixelBounds> = None;

        for (y, row) in self.pixels().chunks_exact(width.max(1)).enumerate() {
            let Some(first) = row.iter().position(|&p| p != bg) else { continue };
            // `first` exists, so a last differing pixel exists too.
            let last = row.iter().rposition(|&p| p != bg).unwrap_or(first);

            let (x0, x1, y) = (first as u32, last as u32 + 1, y as u32);
            bounds = Some(match bounds {
                None => PixelBounds { x0, y0: y, x1, y1: y + 1 },
                Some(b) => PixelBounds { x0: b.x0.min(x0), y0: b.y0, x1: b.x1.max(x1), y1: y + 1 },
            });
        }

        bounds
    }

    fn crop(&self, bounds: PixelBounds) -> Option<Pixmap> {
        let rect = IntRect::from_xywh(
            i32::try_from(bounds.x0).ok()?,
            i32::try_from(bounds.y0).ok()?,
            bounds.width(),
            bounds.height(),
        )?;
        self.clone_rect(rect)
    }

    fn to_rgba8(&self) -> Vec<u8> {
        self.pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect()
    }
}

/// Straight sRGBA8 of the pixel under `(x, y)`, if inside the pixmap.
#[cfg(test)]
pub(crate) fn rgba_at(pixmap: &Pixmap, x: f32, y: f32) -> Option<[u8; 4]> {
    if x < 0.0 || y < 0.0 {
        return None;
    }
    let c = pixmap.pixel(x as u32, y as u32)?.demultiply();
    Some([c.red(), c.green(), c.blue(), c.alpha()])
}
