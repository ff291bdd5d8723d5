use caravan_engine::coords::{Rect, Vec2};
use caravan_engine::paint::Paint;
use caravan_engine::scene::{Border, DrawList, ZIndex};
use rand::Rng;

use crate::palette::{self, DARK_GREEN, GREEN, LEAF, STEM};
use crate::scene::layer;

use super::HORIZON;

// ── Cacti ─────────────────────────────────────────────────────────────────

/// Nominal cactus positions; each base is shifted [`CACTUS_SHIFT`] to the left.
pub const CACTUS_POSITIONS: [f32; 7] = [5.0, 15.0, 30.0, 45.0, 60.0, 75.0, 90.0];
pub const CACTUS_SHIFT: f32 = 8.0;
pub const CACTUS_HEIGHT_RANGE: core::ops::Range<f32> = 6.0..12.0;
/// Cacti taller than this grow arms.
pub const ARM_MIN_HEIGHT: f32 = 5.0;

/// A saguaro: a trunk centred on `base.x` and, when tall enough, two arms.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cactus {
    pub base: Vec2,
    pub height: f32,
}

impl Cactus {
    pub fn new(base: Vec2, height: f32) -> Self {
        Self { base, height }
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.height > ARM_MIN_HEIGHT
    }

    pub fn trunk(&self) -> Rect {
        Rect::new(self.base.x - 0.5, self.base.y, 1.0, self.height)
    }

    /// Left elbow, left upright, right elbow, right upright.
    pub fn arms(&self) -> Option<[Rect; 4]> {
        if !self.is_armed() {
            return None;
        }
        let Vec2 { x, y } = self.base;
        let h = self.height;
        Some([
            Rect::new(x - 3.0, y + 0.6 * h, 2.5, 0.8),
            Rect::new(x - 3.0, y + 0.6 * h, 0.8, 0.3 * h),
            Rect::new(x + 0.5, y + 0.7 * h, 2.5, 0.8),
            Rect::new(x + 2.2, y + 0.7 * h, 0.8, 0.25 * h),
        ])
    }

    pub fn draw(&self, list: &mut DrawList, z: ZIndex) {
        let fill = Paint::Solid(palette::rgb(GREEN));
        let edge = Border::hairline(palette::rgb(DARK_GREEN));
        list.push_rect(z, self.trunk(), fill.clone(), Some(edge.clone()));
        for arm in self.arms().into_iter().flatten() {
            list.push_rect(z, arm, fill.clone(), Some(edge.clone()));
        }
    }
}

/// Records the cacti along the horizon and returns them.
pub fn draw_cacti(list: &mut DrawList, rng: &mut impl Rng) -> Vec<Cactus> {
    let cacti: Vec<Cactus> = CACTUS_POSITIONS
        .iter()
        .map(|&p| {
            let height = rng.random_range(CACTUS_HEIGHT_RANGE);
            Cactus::new(Vec2::new(p - CACTUS_SHIFT, HORIZON), height)
        })
        .collect();
    for cactus in &cacti {
        cactus.draw(list, layer::CACTI);
    }
    log::debug!("cacti: {}", cacti.len());
    cacti
}

// ── Plant field ───────────────────────────────────────────────────────────

pub const FIELD_START: i32 = 25;
pub const FIELD_END: i32 = 95;
const ROW_STEP: usize = 3;
const ROW_OFFSETS: [f32; 3] = [0.0, 1.0, 2.0];
const JITTER: f32 = 0.5;
const PLANT_HEIGHT_RANGE: core::ops::Range<f32> = 3.0..6.0;

const LEAF_SIZE: Vec2 = Vec2::new(1.3, 0.3);

/// A stem with three pairs of leaves.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plant {
    pub x: f32,
    pub base: f32,
    pub height: f32,
}

impl Plant {
    pub fn draw(&self, list: &mut DrawList, z: ZIndex) {
        list.push_solid_rect(
            z,
            Rect::new(self.x - 0.2, self.base, 0.4, self.height),
            palette::rgba(STEM, 0.8),
        );

        let leaf = palette::rgba(LEAF, 0.7);
        for i in 0..3 {
            let ly = self.base + self.height * (0.3 + i as f32 * 0.2);
            for lx in [self.x - 1.5, self.x + 0.2] {
                list.push_solid_rect(z, Rect::from_origin_size(Vec2::new(lx, ly), LEAF_SIZE), leaf);
            }
        }
    }
}

/// Rows of three jittered plants every third unit in `[start, end)`.
/// Returns the number of plants recorded.
pub fn draw_plant_field(
    list: &mut DrawList,
    rng: &mut impl Rng,
    start: i32,
    end: i32,
    base: f32,
) -> usize {
    let mut count = 0;
    for x in (start..end).step_by(ROW_STEP) {
        for offset in ROW_OFFSETS {
            let plant = Plant {
                x: x as f32 + offset + rng.random_range(-JITTER..JITTER),
                base,
                height: rng.random_range(PLANT_HEIGHT_RANGE),
            };
            plant.draw(list, layer::PLANTS);
            count += 1;
        }
    }
    log::debug!("plant field: {count} plants");
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn arms_only_above_threshold() {
        let mut short = DrawList::new();
        Cactus::new(Vec2::new(10.0, 25.0), 4.0).draw(&mut short, layer::CACTI);
        assert_eq!(short.len(), 1);

        let mut tall = DrawList::new();
        Cactus::new(Vec2::new(10.0, 25.0), 8.0).draw(&mut tall, layer::CACTI);
        assert_eq!(tall.len(), 5);

        assert!(!Cactus::new(Vec2::zero(), 5.0).is_armed());
    }

    #[test]
    fn arm_geometry_scales_with_height() {
        let arms = Cactus::new(Vec2::new(0.0, 25.0), 10.0).arms().unwrap();
        let expected = [
            Rect::new(-3.0, 31.0, 2.5, 0.8),
            Rect::new(-3.0, 31.0, 0.8, 3.0),
            Rect::new(0.5, 32.0, 2.5, 0.8),
            Rect::new(2.2, 32.0, 0.8, 2.5),
        ];
        for (got, want) in arms.iter().zip(expected) {
            let close = |a: Vec2, b: Vec2| (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5;
            assert!(close(got.origin, want.origin) && close(got.size, want.size), "{got:?} != {want:?}");
        }
    }

    #[test]
    fn cacti_heights_are_in_range() {
        let mut list = DrawList::new();
        let cacti = draw_cacti(&mut list, &mut StdRng::seed_from_u64(1));
        assert_eq!(cacti.len(), 7);
        for c in &cacti {
            assert!(CACTUS_HEIGHT_RANGE.contains(&c.height));
            assert!(c.is_armed());
        }
        assert_eq!(list.len(), 7 * 5);
    }

    #[test]
    fn plant_field_layout() {
        let mut list = DrawList::new();
        let n = draw_plant_field(&mut list, &mut StdRng::seed_from_u64(3), 25, 95, 25.0);
        // 24 rows (25, 28, ..., 94) of three plants, seven shapes each.
        assert_eq!(n, 72);
        assert_eq!(list.len(), 72 * 7);
    }
}
