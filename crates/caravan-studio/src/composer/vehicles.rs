use caravan_engine::coords::{Rect, Vec2};
use caravan_engine::paint::{Color, Paint};
use caravan_engine::scene::{Border, DrawList, ZIndex};

use crate::palette::{self, BLACK, BLUE, GRAY, GREEN, LIGHT_BLUE, ORANGE, PURPLE, RED, YELLOW};
use crate::scene::layer;

use super::road::HIGHWAY_Y;

/// Left edge of each cab, in convoy order.
pub const CONVOY_POSITIONS: [f32; 6] = [10.0, 25.0, 40.0, 55.0, 70.0, 85.0];
/// Body colours, paired with [`CONVOY_POSITIONS`] by index.
pub const CONVOY_COLORS: [u32; 6] = [RED, BLUE, GREEN, ORANGE, PURPLE, YELLOW];
pub const CONVOY_SCALE: f32 = 0.8;

const TRAILER_ALPHA: f32 = 0.8;
const WINDOW_ALPHA: f32 = 0.7;

/// A cab-and-trailer truck facing left.
///
/// `origin` is the bottom-left corner of the cab. All other parts are laid
/// out in multiples of `scale` from there.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Truck {
    pub origin: Vec2,
    pub color: Color,
    pub scale: f32,
}

impl Truck {
    pub fn new(origin: Vec2, color: Color, scale: f32) -> Self {
        Self { origin, color, scale }
    }

    pub fn cab(&self) -> Rect {
        let s = self.scale;
        Rect::from_origin_size(self.origin, Vec2::new(4.0 * s, 3.0 * s))
    }

    pub fn trailer(&self) -> Rect {
        let s = self.scale;
        let cab = self.cab();
        Rect::new(cab.max().x, self.origin.y - 0.5 * s, 8.0 * s, 4.0 * s)
    }

    /// Wheel centres: one under the cab, two under the trailer.
    pub fn wheel_centers(&self) -> [Vec2; 3] {
        let s = self.scale;
        let axle_y = self.origin.y - 0.5 * s;
        let trailer_x = self.cab().max().x;
        [
            Vec2::new(self.origin.x + 1.5 * s, axle_y),
            Vec2::new(trailer_x + 2.0 * s, axle_y),
            Vec2::new(trailer_x + 6.0 * s, axle_y),
        ]
    }

    pub fn wheel_radius(&self) -> f32 {
        0.8 * self.scale
    }

    pub fn window(&self) -> Rect {
        let s = self.scale;
        Rect::new(self.origin.x + 0.5 * s, self.origin.y + 1.5 * s, 2.0 * s, s)
    }

    /// Records the truck as six shapes: cab, trailer, three wheels, window.
    pub fn draw(&self, list: &mut DrawList, z: ZIndex) {
        let outline = palette::rgb(BLACK);

        list.push_rect(z, self.cab(), Paint::Solid(self.color), Some(Border::hairline(outline)));
        list.push_rect(
            z,
            self.trailer(),
            Paint::Solid(self.color.with_alpha(TRAILER_ALPHA)),
            Some(Border::hairline(outline.with_alpha(TRAILER_ALPHA))),
        );

        let tyre = Paint::Solid(palette::rgb(BLACK));
        let rim = Border::hairline(palette::rgb(GRAY));
        for center in self.wheel_centers() {
            list.push_circle(z, center, self.wheel_radius(), tyre.clone(), Some(rim.clone()));
        }

        list.push_rect(
            z,
            self.window(),
            Paint::Solid(palette::rgba(LIGHT_BLUE, WINDOW_ALPHA)),
            Some(Border::hairline(outline.with_alpha(WINDOW_ALPHA))),
        );
    }
}

/// The six-truck convoy driving along the near lane.
pub fn convoy() -> Vec<Truck> {
    let y = HIGHWAY_Y + 1.0;
    CONVOY_POSITIONS
        .iter()
        .zip(CONVOY_COLORS)
        .map(|(&x, color)| Truck::new(Vec2::new(x, y), palette::rgb(color), CONVOY_SCALE))
        .collect()
}

/// Records the convoy and returns the trucks drawn.
pub fn draw_convoy(list: &mut DrawList) -> Vec<Truck> {
    let trucks = convoy();
    for truck in &trucks {
        truck.draw(list, layer::VEHICLES);
    }
    log::debug!("vehicles: {} trucks", trucks.len());
    trucks
}

#[cfg(test)]
mod tests {
    use super::*;
    use caravan_engine::scene::DrawCmd;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5
    }

    #[test]
    fn parts_are_laid_out_from_the_cab() {
        let t = Truck::new(Vec2::new(10.0, 16.0), palette::rgb(RED), 0.8);
        assert!(approx(t.cab().size, Vec2::new(3.2, 2.4)));
        assert!(approx(t.trailer().origin, Vec2::new(13.2, 15.6)));
        assert!(approx(t.trailer().size, Vec2::new(6.4, 3.2)));

        let [front, mid, rear] = t.wheel_centers();
        assert!(approx(front, Vec2::new(11.2, 15.6)));
        assert!(approx(mid, Vec2::new(14.8, 15.6)));
        assert!(approx(rear, Vec2::new(18.0, 15.6)));
        assert!((t.wheel_radius() - 0.64).abs() < 1e-6);
        assert!(approx(t.window().origin, Vec2::new(10.4, 17.2)));
    }

    #[test]
    fn truck_records_six_shapes_in_order() {
        let mut list = DrawList::new();
        Truck::new(Vec2::new(0.0, 0.0), palette::rgb(BLUE), 1.0).draw(&mut list, layer::VEHICLES);
        let kinds: Vec<_> = list.items().iter().map(|it| it.cmd.kind()).collect();
        assert_eq!(kinds, ["rect", "rect", "circle", "circle", "circle", "rect"]);

        let DrawCmd::Rect(trailer) = &list.items()[1].cmd else { unreachable!() };
        let Paint::Solid(fill) = trailer.paint else { panic!("trailers are flat colour") };
        assert!((fill.a - 0.8).abs() < 1e-6);
    }
}
