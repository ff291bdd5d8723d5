use caravan_engine::coords::Vec2;
use caravan_engine::paint::Paint;
use caravan_engine::scene::{Border, DrawList};

use crate::palette::{self, ORANGE, WHITE, YELLOW};
use crate::scene::layer;

pub const SUN_CENTER: Vec2 = Vec2::new(85.0, 50.0);
pub const SUN_RADIUS: f32 = 4.0;
/// Sun outline weight, in points.
const SUN_RIM_WIDTH: f32 = 2.0;

/// Cloud centres and full extents.
pub const CLOUDS: [(Vec2, Vec2); 2] = [
    (Vec2::new(20.0, 52.0), Vec2::new(8.0, 3.0)),
    (Vec2::new(60.0, 48.0), Vec2::new(6.0, 2.5)),
];

pub fn draw_sun(list: &mut DrawList) {
    list.push_circle(
        layer::ORNAMENTS,
        SUN_CENTER,
        SUN_RADIUS,
        Paint::Solid(palette::rgb(YELLOW)),
        Some(Border::new(SUN_RIM_WIDTH, palette::rgb(ORANGE))),
    );
}

pub fn draw_clouds(list: &mut DrawList) {
    let puff = Paint::Solid(palette::rgba(WHITE, 0.8));
    for (center, size) in CLOUDS {
        list.push_ellipse(layer::ORNAMENTS, center, size, puff.clone(), None);
    }
}
