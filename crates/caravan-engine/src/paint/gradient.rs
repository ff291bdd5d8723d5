use crate::coords::Vec2;

use super::Color;

/// A single gradient stop.
///
/// `t` is expected in [0, 1]; stops are assumed sorted by `t`. Two stops
/// sharing a `t` form a hard edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient definition in world space.
///
/// Semantics:
/// - `start` and `end` are positions in the same coordinate space as geometry.
/// - Stops hold premultiplied colors; interpolation is done on straight alpha.
/// - Outside `start → end` the edge stops extend (pad).
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    pub fn two_stop(start: Vec2, end: Vec2, from: Color, to: Color) -> Self {
        Self::new(start, end, vec![ColorStop::new(0.0, from), ColorStop::new(1.0, to)])
    }

    /// Quantizes the ramp into `steps` flat bands of equal length.
    ///
    /// Each band holds the colour the smooth ramp has at the band's start.
    pub fn stepped(&self, steps: usize) -> Self {
        let n = steps.max(1);
        let stops = (0..n)
            .flat_map(|i| {
                let (t0, t1) = (i as f32 / n as f32, (i + 1) as f32 / n as f32);
                let color = self.sample(t0);
                [ColorStop::new(t0, color), ColorStop::new(t1, color)]
            })
            .collect();
        Self::new(self.start, self.end, stops)
    }

    /// Replaces the straight alpha of every stop.
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        for stop in &mut self.stops {
            stop.color = stop.color.with_alpha(alpha);
        }
        self
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.len() >= 2
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }

    /// Color at gradient parameter `t`, clamped to the edge stops.
    pub fn sample(&self, t: f32) -> Color {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => return Color::transparent(),
        };
        let t = t.clamp(0.0, 1.0);
        if t <= first.t {
            return first.color;
        }
        if t >= last.t {
            return last.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t >= a.t && t < b.t {
                let span = b.t - a.t;
                let local = if span > 0.0 { (t - a.t) / span } else { 0.0 };
                return a.color.lerp(b.color, local);
            }
        }
        last.color
    }

    /// tiny-skia shader for this gradient, in the same space as `start`/`end`.
    ///
    /// `None` when the definition is unusable.
    pub fn to_shader(&self) -> Option<tiny_skia::Shader<'static>> {
        if !self.is_valid() {
            return None;
        }
        let stops = self
            .stops
            .iter()
            .map(|s| tiny_skia::GradientStop::new(s.t, s.color.to_skia()))
            .collect();
        tiny_skia::LinearGradient::new(
            tiny_skia::Point::from_xy(self.start.x, self.start.y),
            tiny_skia::Point::from_xy(self.end.x, self.end.y),
            stops,
            tiny_skia::SpreadMode::Pad,
            tiny_skia::Transform::identity(),
        )
    }
}
