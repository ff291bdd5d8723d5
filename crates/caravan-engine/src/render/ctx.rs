use tiny_skia::{FillRule, Mask, PathBuilder, Transform};

use crate::figure::FrameLayout;

/// Renderer-facing context: frame layout, world transform and plot clip.
pub struct RenderCtx {
    pub layout: FrameLayout,
    /// World → pixel, with the Y flip.
    pub transform: Transform,
    /// Axes box coverage. Draw commands never paint outside it.
    pub clip: Option<Mask>,
}

impl RenderCtx {
    pub fn new(layout: FrameLayout) -> Self {
        Self { layout, transform: world_transform(&layout), clip: axes_clip(&layout) }
    }
}

/// Affine form of [`FrameLayout::to_px`].
pub(crate) fn world_transform(layout: &FrameLayout) -> Transform {
    let ppu = layout.ppu;
    Transform::from_row(
        ppu,
        0.0,
        0.0,
        -ppu,
        layout.axes.origin.x - layout.bounds.origin.x * ppu,
        layout.axes.origin.y + layout.bounds.max().y * ppu,
    )
}

fn axes_clip(layout: &FrameLayout) -> Option<Mask> {
    let mut mask = Mask::new(layout.viewport.width, layout.viewport.height)?;
    let axes = layout.axes;
    let rect = tiny_skia::Rect::from_xywh(axes.origin.x, axes.origin.y, axes.width(), axes.height())?;
    mask.fill_path(&PathBuilder::from_rect(rect), FillRule::Winding, false, Transform::identity());
    Some(mask)
}
