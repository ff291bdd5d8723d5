use tiny_skia::{PathBuilder, Pixmap};

use crate::coords::Vec2;
use crate::figure::Figure;
use crate::paint::{Color, Paint};
use crate::scene::{Border, DrawCmd, DrawList};
use crate::text::FontSystem;

use super::shapes::circle::draw_circle;
use super::shapes::ellipse::draw_ellipse;
use super::shapes::polygon::draw_polygon;
use super::shapes::rect::draw_rect;
use super::shapes::text::{TextRenderer, TextRun};
use super::shapes::world_stroke;
use super::{PixmapExt, RenderCtx};

/// Stroke weight of the axes frame, in points.
const AXES_FRAME_WIDTH: f32 = 1.0;

/// Rasterizes a whole figure: background, draw list, axes chrome, title, crop.
#[derive(Default)]
pub struct SceneRenderer {
    text: TextRenderer,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `draw_list` into a new pixmap framed by `figure`.
    ///
    /// Returns `None` for a figure that cannot produce pixels (non-positive
    /// dpi, empty bounds, or a frame too large to allocate).
    pub fn render(&mut self, figure: &Figure, draw_list: &mut DrawList, fonts: &FontSystem) -> Option<Pixmap> {
        if !figure.is_valid() {
            log::warn!("figure is not renderable: {figure:?}");
            return None;
        }

        let layout = figure.layout();
        let Some(mut target) = Pixmap::new(layout.viewport.width, layout.viewport.height) else {
            log::warn!("cannot allocate a {:?} pixmap", layout.viewport);
            return None;
        };
        target.fill(figure.background.to_skia());

        let ctx = RenderCtx::new(layout);
        log::debug!(
            "rendering {} draw items into {}x{} px ({} px/unit)",
            draw_list.len(),
            layout.viewport.width,
            layout.viewport.height,
            layout.ppu
        );

        for item in draw_list.iter_in_paint_order() {
            match &item.cmd {
                DrawCmd::Rect(cmd) => draw_rect(&ctx, &mut target, cmd),
                DrawCmd::Circle(cmd) => draw_circle(&ctx, &mut target, cmd),
                DrawCmd::Ellipse(cmd) => draw_ellipse(&ctx, &mut target, cmd),
                DrawCmd::Polygon(cmd) => draw_polygon(&ctx, &mut target, cmd),
            }
        }

        if figure.axes_visible {
            draw_axes_frame(&ctx, &mut target);
        }

        if let Some(title) = &figure.title {
            let anchor = Vec2::new(
                layout.axes.center().x,
                layout.axes.origin.y - layout.pt_to_px(title.pad),
            );
            self.text.draw_run(fonts, &mut target, &TextRun {
                text: &title.text,
                font: title.font,
                px_size: layout.pt_to_px(title.size),
                color: title.color,
                anchor,
            });
        }

        if figure.tight {
            target = tight_crop(figure, target);
        }

        Some(target)
    }
}

/// Frame around the axes box. It sits on the clip edge, so it is drawn unclipped.
fn draw_axes_frame(ctx: &RenderCtx, target: &mut Pixmap) {
    let b = ctx.layout.bounds;
    let Some(rect) = tiny_skia::Rect::from_xywh(b.origin.x, b.origin.y, b.width(), b.height()) else {
        return;
    };
    let border = Border::new(AXES_FRAME_WIDTH, Color::black());
    let (Some(stroke), Some(paint)) =
        (world_stroke(ctx, &border), Paint::Solid(border.color).to_skia())
    else {
        return;
    };
    target.stroke_path(&PathBuilder::from_rect(rect), &paint, &stroke, ctx.transform, None);
}

/// Ink bounding box plus `tight_pad_in`, or the full frame when nothing was drawn.
fn tight_crop(figure: &Figure, target: Pixmap) -> Pixmap {
    let Some(ink) = target.tight_bbox(figure.background) else {
        log::debug!("nothing drawn; skipping tight crop");
        return target;
    };
    let pad = (figure.tight_pad_in * figure.dpi).round().max(0.0) as u32;
    let bounds = ink.padded(pad, target.width(), target.height());
    log::debug!("tight crop to {bounds:?}");
    target.crop(bounds).unwrap_or(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::figure::Title;
    use crate::render::pixmap::rgba_at;
    use crate::scene::ZIndex;
    use crate::text::FontId;

    fn figure() -> Figure {
        Figure::new(Rect::new(0.0, 0.0, 100.0, 60.0)).dpi(10.0).width_in(10.0)
    }

    fn at(pm: &Pixmap, fig: &Figure, x: f32, y: f32) -> [u8; 4] {
        let p = fig.layout().to_px(Vec2::new(x, y));
        rgba_at(pm, p.x, p.y).unwrap()
    }

    #[test]
    fn later_items_occlude_earlier_ones() {
        let mut list = DrawList::new();
        let red = Color::named("red").unwrap();
        let blue = Color::named("blue").unwrap();
        list.push_solid_rect(ZIndex(0), Rect::new(10.0, 10.0, 20.0, 20.0), red);
        list.push_solid_rect(ZIndex(0), Rect::new(15.0, 15.0, 10.0, 10.0), blue);

        let fonts = FontSystem::new();
        let fig = figure().axis_off();
        let pm = SceneRenderer::new().render(&fig, &mut list, &fonts).unwrap();

        assert_eq!(at(&pm, &fig, 20.0, 20.0), [0, 0, 255, 255]);
        assert_eq!(at(&pm, &fig, 12.0, 12.0), [255, 0, 0, 255]);
    }

    #[test]
    fn higher_z_wins_regardless_of_push_order() {
        let mut list = DrawList::new();
        let red = Color::named("red").unwrap();
        let blue = Color::named("blue").unwrap();
        list.push_solid_rect(ZIndex(5), Rect::new(10.0, 10.0, 20.0, 20.0), red);
        list.push_solid_rect(ZIndex(1), Rect::new(10.0, 10.0, 20.0, 20.0), blue);

        let fonts = FontSystem::new();
        let fig = figure().axis_off();
        let pm = SceneRenderer::new().render(&fig, &mut list, &fonts).unwrap();
        assert_eq!(at(&pm, &fig, 20.0, 20.0), [255, 0, 0, 255]);
    }

    #[test]
    fn axes_frame_is_only_drawn_when_visible() {
        let fonts = FontSystem::new();
        let with_axes = SceneRenderer::new().render(&figure(), &mut DrawList::new(), &fonts).unwrap();
        assert!(with_axes.tight_bbox(Color::white()).is_some());

        let without = SceneRenderer::new()
            .render(&figure().axis_off(), &mut DrawList::new(), &fonts)
            .unwrap();
        assert!(without.tight_bbox(Color::white()).is_none());
    }

    #[test]
    fn tight_crop_keeps_content_plus_pad() {
        let mut list = DrawList::new();
        list.push_rect(
            ZIndex(0),
            Rect::new(0.0, 0.0, 100.0, 60.0),
            Paint::Solid(Color::named("sandybrown").unwrap()),
            None,
        );
        let fonts = FontSystem::new();
        let fig = figure().axis_off().tight(0.1);
        let pm = SceneRenderer::new().render(&fig, &mut list, &fonts).unwrap();
        // 100 × 60 units at 1 px/unit, plus a 1 px pad on each side.
        assert_eq!((pm.width(), pm.height()), (102, 62));
    }

    #[test]
    fn shapes_past_the_bounds_leave_the_margin_blank() {
        // 1 px per unit with a 6 px margin, no title, no crop.
        let fig = Figure::new(Rect::new(0.0, 0.0, 100.0, 60.0)).dpi(50.0).width_in(2.0).axis_off();
        let layout = fig.layout();
        assert_eq!(layout.axes.origin.x, 6.0);

        let green = Color::from_srgb_u8(64, 146, 64, 255);
        let mut list = DrawList::new();
        // A cactus arm hanging three units left of the plot.
        list.push_solid_rect(ZIndex(0), Rect::new(-3.0, 25.0, 5.0, 3.0), green);
        list.push_circle(ZIndex(0), Vec2::new(100.0, 30.0), 4.0, green, None);

        let fonts = FontSystem::new();
        let pm = SceneRenderer::new().render(&fig, &mut list, &fonts).unwrap();

        assert_eq!(at(&pm, &fig, 1.0, 26.0), [64, 146, 64, 255]);
        assert_eq!(at(&pm, &fig, -3.0, 26.0), [255, 255, 255, 255]);
        assert_eq!(at(&pm, &fig, 102.0, 30.0), [255, 255, 255, 255]);

        let axes = layout.axes;
        for (i, px) in pm.pixels().iter().enumerate() {
            let (x, y) = ((i as u32 % pm.width()) as f32, (i as u32 / pm.width()) as f32);
            if x < axes.origin.x || x >= axes.max().x || y < axes.origin.y || y >= axes.max().y {
                assert_eq!(px.alpha(), 255);
                assert_eq!((px.red(), px.green(), px.blue()), (255, 255, 255), "ink at ({x}, {y})");
            }
        }
    }

    #[test]
    fn title_without_font_still_renders_the_scene() {
        let mut list = DrawList::new();
        list.push_circle(ZIndex(0), Vec2::new(50.0, 30.0), 5.0, Color::black(), None);
        let fonts = FontSystem::new();
        let fig = figure().axis_off().title(Title::new("Desert Truck Caravan", FontId::PRIMARY).size(20.0));
        let pm = SceneRenderer::new().render(&fig, &mut list, &fonts).unwrap();
        assert!(pm.tight_bbox(Color::white()).is_some());
    }

    #[test]
    fn title_with_a_font_inks_the_band_above_the_axes() {
        let mut fonts = FontSystem::new();
        let Some(font) = fonts.load_system_font() else {
            // No fonts installed on this machine; nothing to check.
            return;
        };
        // About 14 px glyphs over a 100 px wide axes box.
        let fig = figure().axis_off().title(Title::new("Caravan", font).size(100.0).pad(12.0));
        let layout = fig.layout();
        let pm = SceneRenderer::new().render(&fig, &mut DrawList::new(), &fonts).unwrap();

        let ink = pm.tight_bbox(Color::white()).expect("title glyphs were drawn");
        assert!((ink.y0 as f32) < layout.axes.origin.y);
        // One pixel of slack for glyph edges rounding onto the baseline row.
        assert!((ink.y1 as f32) <= layout.axes.origin.y + 1.0, "title ink {ink:?} overlaps the axes");
        let mid = layout.axes.center().x as u32;
        assert!(ink.x0 < mid && ink.x1 > mid, "title is centred over the axes");
    }

    #[test]
    fn invalid_figure_yields_no_pixmap() {
        let fonts = FontSystem::new();
        assert!(SceneRenderer::new().render(&figure().dpi(0.0), &mut DrawList::new(), &fonts).is_none());
    }
}
