use crate::coords::Vec2;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Closed polygon draw payload. The last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Vec2>,
    pub paint: Paint,
    pub border: Option<Border>,
}

impl PolygonCmd {
    #[inline]
    pub fn new(points: Vec<Vec2>, paint: Paint, border: Option<Border>) -> Self {
        Self { points, paint, border }
    }

    /// Polygons with fewer than three vertices enclose no area.
    #[inline]
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 3 && self.points.iter().all(|p| p.is_finite())
    }
}

impl DrawList {
    /// Records a polygon draw command.
    pub fn push_polygon(
        &mut self,
        z: ZIndex,
        points: impl IntoIterator<Item = Vec2>,
        paint: Paint,
        border: Option<Border>,
    ) {
        let points = points.into_iter().collect();
        self.push(z, DrawCmd::Polygon(PolygonCmd::new(points, paint, border)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    fn triangle() -> PolygonCmd {
        PolygonCmd::new(
            vec![Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), Vec2::new(2.0, 3.0)],
            Paint::Solid(Color::black()),
            None,
        )
    }

    #[test]
    fn two_points_are_not_drawable() {
        let mut line = triangle();
        line.points.pop();
        assert!(!line.is_drawable());
        assert!(triangle().is_drawable());
    }
}
