use tiny_skia::{Path, PathBuilder, Pixmap};

use crate::coords::Vec2;
use crate::render::RenderCtx;
use crate::scene::PolygonCmd;

use super::common::fill_and_stroke;

/// Closed path through `points`, in the order given.
fn closed_path(points: &[Vec2]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    pb.close();
    pb.finish()
}

/// Rasterizes a `DrawCmd::Polygon` with the non-zero winding rule.
pub fn draw_polygon(ctx: &RenderCtx, target: &mut Pixmap, cmd: &PolygonCmd) {
    if !cmd.is_drawable() {
        log::debug!("skipping polygon with {} vertices", cmd.points.len());
        return;
    }
    let Some(path) = closed_path(&cmd.points) else { return };
    fill_and_stroke(ctx, target, &path, &cmd.paint, cmd.border.as_ref());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::figure::Figure;
    use crate::paint::{Color, Paint};
    use crate::render::pixmap::rgba_at;

    fn render(points: Vec<Vec2>) -> (Pixmap, crate::figure::FrameLayout) {
        let layout = Figure::new(Rect::new(0.0, 0.0, 20.0, 20.0)).dpi(10.0).width_in(2.0).layout();
        let ctx = RenderCtx::new(layout);
        let mut target = Pixmap::new(layout.viewport.width, layout.viewport.height).unwrap();
        target.fill(tiny_skia::Color::WHITE);
        draw_polygon(&ctx, &mut target, &PolygonCmd::new(points, Paint::Solid(Color::black()), None));
        (target, layout)
    }

    fn at(pm: &Pixmap, layout: &crate::figure::FrameLayout, x: f32, y: f32) -> [u8; 4] {
        let p = layout.to_px(Vec2::new(x, y));
        rgba_at(pm, p.x, p.y).unwrap()
    }

    #[test]
    fn path_spans_every_vertex() {
        let tri = [Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), Vec2::new(2.0, 3.0)];
        let b = closed_path(&tri).unwrap().bounds();
        assert_eq!((b.left(), b.top(), b.width(), b.height()), (0.0, 0.0, 4.0, 3.0));
        assert!(closed_path(&[]).is_none());
    }

    #[test]
    fn concave_ridge_leaves_the_valley_open() {
        // Two peaks with a valley between them, like a mountain range.
        let ridge = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 16.0),
            Vec2::new(10.0, 4.0),
            Vec2::new(16.0, 16.0),
            Vec2::new(20.0, 0.0),
        ];
        let (pm, layout) = render(ridge);
        assert_eq!(at(&pm, &layout, 4.0, 12.0), [0, 0, 0, 255]);
        assert_eq!(at(&pm, &layout, 16.0, 12.0), [0, 0, 0, 255]);
        assert_eq!(at(&pm, &layout, 10.0, 12.0), [255, 255, 255, 255]);
        assert_eq!(at(&pm, &layout, 10.0, 2.0), [0, 0, 0, 255]);
    }

    #[test]
    fn self_overlap_is_filled_once() {
        // Square traced twice in the same direction: winding 2 is still inside.
        let sq = [(2.0, 2.0), (8.0, 2.0), (8.0, 8.0), (2.0, 8.0)];
        let twice: Vec<_> = sq.iter().chain(sq.iter()).map(|&(x, y)| Vec2::new(x, y)).collect();
        let (pm, layout) = render(twice);
        assert_eq!(at(&pm, &layout, 5.0, 5.0), [0, 0, 0, 255]);
    }
}
