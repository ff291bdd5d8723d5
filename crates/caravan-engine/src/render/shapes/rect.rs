use tiny_skia::{PathBuilder, Pixmap};

use crate::render::RenderCtx;
use crate::scene::RectCmd;

use super::common::stroke_border;

/// Rasterizes a `DrawCmd::Rect`: the fill, then the centred border.
pub fn draw_rect(ctx: &RenderCtx, target: &mut Pixmap, cmd: &RectCmd) {
    if !cmd.is_drawable() {
        log::debug!("skipping degenerate rect {:?}", cmd.rect);
        return;
    }

    let r = cmd.rect.normalized();
    let Some(rect) = tiny_skia::Rect::from_xywh(r.origin.x, r.origin.y, r.width(), r.height()) else {
        return;
    };

    match cmd.paint.to_skia() {
        Some(paint) => target.fill_rect(rect, &paint, ctx.transform, ctx.clip.as_ref()),
        None => log::debug!("skipping rect fill with unusable paint"),
    }

    if let Some(border) = &cmd.border {
        stroke_border(ctx, target, &PathBuilder::from_rect(rect), border);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::figure::Figure;
    use crate::paint::{Color, LinearGradient, Paint};
    use crate::render::pixmap::{rgba_at, PixmapExt};
    use crate::scene::Border;

    fn ctx() -> RenderCtx {
        // 1 px per world unit, no title.
        let layout = Figure::new(Rect::new(0.0, 0.0, 20.0, 10.0)).dpi(10.0).width_in(2.0).layout();
        RenderCtx::new(layout)
    }

    fn canvas(ctx: &RenderCtx) -> Pixmap {
        let mut pm = Pixmap::new(ctx.layout.viewport.width, ctx.layout.viewport.height).unwrap();
        pm.fill(tiny_skia::Color::WHITE);
        pm
    }

    fn at(ctx: &RenderCtx, pm: &Pixmap, x: f32, y: f32) -> [u8; 4] {
        let p = ctx.layout.to_px(Vec2::new(x, y));
        rgba_at(pm, p.x, p.y).unwrap()
    }

    #[test]
    fn filled_rect_paints_its_interior() {
        let ctx = ctx();
        let mut target = canvas(&ctx);
        let cmd = RectCmd::new(Rect::new(2.0, 2.0, 4.0, 4.0), Paint::Solid(Color::black()), None);
        draw_rect(&ctx, &mut target, &cmd);

        assert_eq!(at(&ctx, &target, 4.0, 4.0), [0, 0, 0, 255]);
        assert_eq!(at(&ctx, &target, 10.0, 8.0), [255, 255, 255, 255]);
    }

    #[test]
    fn border_is_drawn_on_the_outline() {
        let ctx = ctx();
        let mut target = canvas(&ctx);
        let red = Color::named("red").unwrap();
        let cmd = RectCmd::new(
            Rect::new(2.0, 2.0, 6.0, 6.0),
            Paint::Solid(Color::transparent()),
            Some(Border::new(7.2, red)),
        );
        draw_rect(&ctx, &mut target, &cmd);

        // 7.2 pt at 10 dpi is one pixel wide; the left edge sits at world x = 2.
        let edge = at(&ctx, &target, 2.0, 5.0);
        assert!(edge[1] < 255, "edge pixel should be tinted red: {edge:?}");
        assert_eq!(at(&ctx, &target, 5.0, 5.0), [255, 255, 255, 255]);
    }

    #[test]
    fn gradient_fill_runs_bottom_to_top() {
        let ctx = ctx();
        let mut target = canvas(&ctx);
        let ramp = LinearGradient::two_stop(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 10.0),
            Color::black(),
            Color::named("blue").unwrap(),
        )
        .stepped(2);
        let cmd = RectCmd::new(Rect::new(0.0, 0.0, 20.0, 10.0), ramp.into(), None);
        draw_rect(&ctx, &mut target, &cmd);

        assert_eq!(at(&ctx, &target, 10.0, 2.0), [0, 0, 0, 255]);
        let top = at(&ctx, &target, 10.0, 8.0);
        assert!(top[2] > 100 && top[2] < 160, "upper band is half blue: {top:?}");
    }

    #[test]
    fn zero_width_rect_draws_nothing() {
        let ctx = ctx();
        let mut target = canvas(&ctx);
        let cmd = RectCmd::new(Rect::new(2.0, 2.0, 0.0, 4.0), Paint::Solid(Color::black()), None);
        draw_rect(&ctx, &mut target, &cmd);
        assert_eq!(target.tight_bbox(Color::white()), None);
    }

    #[test]
    fn fill_outside_the_bounds_is_clipped() {
        let ctx = ctx();
        let mut target = canvas(&ctx);
        // Hangs 3 units off the left edge of the plot.
        let cmd = RectCmd::new(Rect::new(-3.0, 2.0, 6.0, 4.0), Paint::Solid(Color::black()), None);
        draw_rect(&ctx, &mut target, &cmd);

        assert_eq!(at(&ctx, &target, 1.0, 4.0), [0, 0, 0, 255]);
        let margin = ctx.layout.to_px(Vec2::new(-1.0, 4.0));
        assert_eq!(rgba_at(&target, margin.x, margin.y), Some([255, 255, 255, 255]));
    }
}
