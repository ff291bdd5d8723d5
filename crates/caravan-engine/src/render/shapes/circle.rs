use tiny_skia::{PathBuilder, Pixmap};

use crate::render::RenderCtx;
use crate::scene::CircleCmd;

use super::common::fill_and_stroke;

/// Rasterizes a `DrawCmd::Circle`; the border is centred on the circumference.
pub fn draw_circle(ctx: &RenderCtx, target: &mut Pixmap, cmd: &CircleCmd) {
    if !cmd.is_drawable() {
        log::debug!("skipping degenerate circle at {:?} r={}", cmd.center, cmd.radius);
        return;
    }
    let Some(path) = PathBuilder::from_circle(cmd.center.x, cmd.center.y, cmd.radius) else {
        return;
    };
    fill_and_stroke(ctx, target, &path, &cmd.paint, cmd.border.as_ref());
}
