use caravan_engine::coords::{Rect, Vec2};
use caravan_engine::paint::Paint;
use caravan_engine::scene::{Border, DrawList};

use crate::palette::{self, MOUNTAIN, MOUNTAIN_EDGE, SAND};
use crate::scene::layer;

use super::{HORIZON, PLOT_WIDTH};

/// Ridge line, left to right. Both ends sit on the horizon.
pub const MOUNTAIN_PEAKS: [(f32, f32); 9] = [
    (0.0, 25.0),
    (15.0, 45.0),
    (25.0, 35.0),
    (35.0, 50.0),
    (50.0, 40.0),
    (65.0, 48.0),
    (80.0, 35.0),
    (90.0, 42.0),
    (100.0, 25.0),
];

const SAND_ALPHA: f32 = 0.9;
const MOUNTAIN_ALPHA: f32 = 0.7;

/// Desert floor from the bottom edge up to the horizon.
pub fn draw_ground(list: &mut DrawList) {
    list.push_solid_rect(
        layer::GROUND,
        Rect::new(0.0, 0.0, PLOT_WIDTH, HORIZON),
        palette::rgba(SAND, SAND_ALPHA),
    );
}

/// Records the mountain range and returns its outline.
pub fn draw_mountains(list: &mut DrawList) -> Vec<Vec2> {
    let outline: Vec<Vec2> = MOUNTAIN_PEAKS.iter().copied().map(Vec2::from).collect();
    list.push_polygon(
        layer::MOUNTAINS,
        outline.iter().copied(),
        Paint::Solid(palette::rgba(MOUNTAIN, MOUNTAIN_ALPHA)),
        Some(Border::hairline(palette::rgba(MOUNTAIN_EDGE, MOUNTAIN_ALPHA))),
    );
    log::debug!("mountains: {} vertices", outline.len());
    outline
}
