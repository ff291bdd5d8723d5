use caravan_engine::coords::Rect;
use caravan_engine::scene::DrawList;

use crate::palette::{self, ASPHALT, WHITE};
use crate::scene::layer;

use super::PLOT_WIDTH;

pub const HIGHWAY_Y: f32 = 15.0;
pub const HIGHWAY_WIDTH: f32 = 8.0;

const LANE_MARK_LEN: f32 = 4.0;
const LANE_MARK_SPACING: usize = 10;

pub fn draw_highway(list: &mut DrawList) {
    list.push_solid_rect(
        layer::ROAD,
        Rect::new(0.0, HIGHWAY_Y, PLOT_WIDTH, HIGHWAY_WIDTH),
        palette::rgba(ASPHALT, 0.8),
    );
}

/// Dashed centre line: one-unit-high marks every ten units from x = 5.
pub fn draw_lane_marks(list: &mut DrawList) {
    let y = HIGHWAY_Y + HIGHWAY_WIDTH / 2.0 - 0.5;
    let color = palette::rgba(WHITE, 0.9);
    let mut marks = 0;
    for x in (5..PLOT_WIDTH as i32).step_by(LANE_MARK_SPACING) {
        list.push_solid_rect(layer::LANES, Rect::new(x as f32, y, LANE_MARK_LEN, 1.0), color);
        marks += 1;
    }
    log::debug!("road: {marks} lane marks");
}

#[cfg(test)]
mod tests {
    use super::*;
    use caravan_engine::scene::DrawCmd;

    #[test]
    fn lane_marks_sit_on_the_centre_line() {
        let mut list = DrawList::new();
        draw_lane_marks(&mut list);
        let xs: Vec<f32> = list
            .layer(layer::LANES)
            .map(|cmd| match cmd {
                DrawCmd::Rect(r) => {
                    assert_eq!(r.rect.origin.y, 18.5);
                    r.rect.origin.x
                }
                other => panic!("unexpected {}", other.kind()),
            })
            .collect();
        assert_eq!(xs, [5.0, 15.0, 25.0, 35.0, 45.0, 55.0, 65.0, 75.0, 85.0, 95.0]);
    }
}
