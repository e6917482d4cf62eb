//! Pressure-tagged points and the strokes built from them.

use scribble_engine::coords::Vec2;

/// Pressure used when the device reports none.
pub const DEFAULT_PRESSURE: f32 = 1.0;

/// Normalizes a device pressure reading into `[0, 1]`.
///
/// Missing or non-finite readings become [`DEFAULT_PRESSURE`].
pub fn normalize_pressure(pressure: Option<f32>) -> f32 {
    match pressure {
        Some(p) if p.is_finite() => p.clamp(0.0, 1.0),
        _ => DEFAULT_PRESSURE,
    }
}

/// One sampled pointer position with its pressure.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StrokePoint {
    pub pos: Vec2,
    pub pressure: f32,
}

impl StrokePoint {
    /// Point with a raw device reading; see [`normalize_pressure`].
    pub fn new(pos: Vec2, pressure: Option<f32>) -> Self {
        Self {
            pos,
            pressure: normalize_pressure(pressure),
        }
    }

    /// Point with full pressure.
    pub fn at(x: f32, y: f32) -> Self {
        Self::new(Vec2::new(x, y), None)
    }

    /// Whether the point is storable: finite position, pressure in `[0, 1]`.
    pub fn is_valid(&self) -> bool {
        self.pos.is_finite() && (0.0..=1.0).contains(&self.pressure)
    }
}

/// A continuous ink gesture. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<StrokePoint>,
}

impl Stroke {
    /// Starts a stroke at its first point.
    pub fn begin(first: StrokePoint) -> Self {
        Self {
            points: vec![first],
        }
    }

    /// Builds a stroke from recorded points; `None` if `points` is empty.
    pub fn from_points(points: Vec<StrokePoint>) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(Self { points })
        }
    }

    pub(crate) fn push(&mut self, point: StrokePoint) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[StrokePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed stroke.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> StrokePoint {
        self.points[0]
    }

    pub fn last(&self) -> StrokePoint {
        self.points[self.points.len() - 1]
    }

    /// A tap: rendered as a disc rather than segments.
    pub fn is_single_point(&self) -> bool {
        self.points.len() == 1
    }

    /// Consecutive point pairs `(p1, p2)` in drawing order.
    pub fn segments(&self) -> impl Iterator<Item = (StrokePoint, StrokePoint)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}
