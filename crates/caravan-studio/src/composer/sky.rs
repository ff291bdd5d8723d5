use caravan_engine::coords::{Rect, Vec2};
use caravan_engine::paint::{Color, LinearGradient};
use caravan_engine::scene::DrawList;

use crate::scene::layer;

use super::PLOT_WIDTH;

pub const SKY_BOTTOM: i32 = 40;
pub const SKY_TOP: i32 = 60;
const SKY_ALPHA: f32 = 0.8;

/// Horizon-to-zenith colour ramp over the sky band.
pub fn gradient() -> LinearGradient {
    LinearGradient::two_stop(
        Vec2::new(0.0, SKY_BOTTOM as f32),
        Vec2::new(0.0, SKY_TOP as f32),
        Color::from_straight(0.5, 0.7, 1.0, 1.0),
        Color::from_straight(0.8, 0.9, 1.0, 1.0),
    )
}

/// Twenty flat bands, one per plot unit, painted as a single rect.
pub fn draw(list: &mut DrawList) {
    let bands = (SKY_TOP - SKY_BOTTOM) as usize;
    let fill = gradient().stepped(bands).with_alpha(SKY_ALPHA);
    let height = (SKY_TOP - SKY_BOTTOM) as f32;
    list.push_rect(layer::SKY, Rect::new(0.0, SKY_BOTTOM as f32, PLOT_WIDTH, height), fill.into(), None);
    log::debug!("sky: {bands} bands");
}
