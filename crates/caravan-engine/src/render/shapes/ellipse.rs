use tiny_skia::{PathBuilder, Pixmap};

use crate::render::RenderCtx;
use crate::scene::EllipseCmd;

use super::common::fill_and_stroke;

/// Rasterizes a `DrawCmd::Ellipse` from its bounding box.
pub fn draw_ellipse(ctx: &RenderCtx, target: &mut Pixmap, cmd: &EllipseCmd) {
    if !cmd.is_drawable() {
        log::debug!("skipping degenerate ellipse at {:?} size={:?}", cmd.center, cmd.size);
        return;
    }
    let radii = cmd.radii();
    let oval = tiny_skia::Rect::from_xywh(
        cmd.center.x - radii.x,
        cmd.center.y - radii.y,
        cmd.size.x,
        cmd.size.y,
    );
    let Some(path) = oval.and_then(PathBuilder::from_oval) else { return };
    fill_and_stroke(ctx, target, &path, &cmd.paint, cmd.border.as_ref());
}
