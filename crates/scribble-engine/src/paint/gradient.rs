use crate::coords::Vec2;

use super::Color;

/// Gradient spread behavior outside the [0, 1] range.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SpreadMode {
    /// Clamp to edge stops.
    Pad,
    /// Repeat the gradient pattern.
    Repeat,
    /// Mirror-repeat the gradient pattern.
    Reflect,
}

/// A single gradient stop.
///
/// `t` is expected in [0, 1] in typical usage, but is not strictly enforced.
/// Renderers may clamp/sort stops at build time.
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

/// Radial gradient definition in logical pixel space.
///
/// `t = distance(p, center) / radius`; stops are premultiplied linear colors.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub radius: f32,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl RadialGradient {
    pub fn new(center: Vec2, radius: f32, stops: Vec<ColorStop>, spread: SpreadMode) -> Self {
        Self {
            center,
            radius,
            stops,
            spread,
        }
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.center.is_finite()
            && self.radius.is_finite()
            && self.radius > 0.0
            && self.stops.len() >= 2
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
    }

    /// First and last stop colors; the GPU path only interpolates between these.
    pub fn end_colors(&self) -> Option<(Color, Color)> {
        Some((self.stops.first()?.color, self.stops.last()?.color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops() -> Vec<ColorStop> {
        vec![
            ColorStop::new(0.0, Color::from_premul(1.0, 1.0, 1.0, 1.0)),
            ColorStop::new(1.0, Color::from_premul(0.0, 0.0, 0.0, 1.0)),
        ]
    }

    #[test]
    fn valid_gradient() {
        let g = RadialGradient::new(Vec2::new(50.0, 50.0), 10.0, stops(), SpreadMode::Pad);
        assert!(g.is_valid());
    }

    #[test]
    fn zero_radius_is_invalid() {
        let g = RadialGradient::new(Vec2::new(50.0, 50.0), 0.0, stops(), SpreadMode::Pad);
        assert!(!g.is_valid());
    }

    #[test]
    fn single_stop_is_invalid() {
        let mut s = stops();
        s.pop();
        let g = RadialGradient::new(Vec2::zero(), 10.0, s, SpreadMode::Pad);
        assert!(!g.is_valid());
    }
}
