//! Fill and stroke helpers shared by all shape renderers.

use tiny_skia::{FillRule, Path, Pixmap, Stroke};

use crate::paint::Paint;
use crate::render::RenderCtx;
use crate::scene::Border;

/// Stroke for `border` in world units, so it survives the world transform
/// at its point width.
pub(crate) fn world_stroke(ctx: &RenderCtx, border: &Border) -> Option<Stroke> {
    let width = ctx.layout.pt_to_px(border.width) / ctx.layout.ppu;
    if !width.is_finite() || width <= 0.0 {
        return None;
    }
    Some(Stroke { width, ..Stroke::default() })
}

/// Strokes `path` (world units) with `border`, clipped to the axes box.
pub(super) fn stroke_border(ctx: &RenderCtx, target: &mut Pixmap, path: &Path, border: &Border) {
    let Some(stroke) = world_stroke(ctx, border) else {
        log::debug!("skipping border of width {}", border.width);
        return;
    };
    let Some(paint) = Paint::Solid(border.color).to_skia() else { return };
    target.stroke_path(path, &paint, &stroke, ctx.transform, ctx.clip.as_ref());
}

/// Fills `path` (world units) with the non-zero rule, then strokes its border.
pub(super) fn fill_and_stroke(
    ctx: &RenderCtx,
    target: &mut Pixmap,
    path: &Path,
    paint: &Paint,
    border: Option<&Border>,
) {
    match paint.to_skia() {
        Some(fill) => {
            target.fill_path(path, &fill, FillRule::Winding, ctx.transform, ctx.clip.as_ref())
        }
        None => log::debug!("skipping fill with unusable paint {paint:?}"),
    }
    if let Some(border) = border {
        stroke_border(ctx, target, path, border);
    }
}
