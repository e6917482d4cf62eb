//! Radial-gradient backdrop painted under every stroke.

use scribble_engine::coords::{Rect, Vec2};
use scribble_engine::paint::{ColorStop, Paint, RadialGradient, SpreadMode};
use scribble_engine::scene::{DrawList, ZIndex};

use crate::color::{PALETTE, Rgba8};

/// Vertical shift of the gradient center, as a fraction of the window diagonal.
/// Negative moves the highlight above the window center.
pub const CENTER_OFFSET_FACTOR: f32 = -0.25;

/// Gradient radius as a fraction of the window diagonal.
pub const GRAD_STRENGTH_FACTOR: f32 = 0.7;

/// Layer of the backdrop fill.
pub const BACKDROP_Z: ZIndex = ZIndex::new(0);

/// Builds the backdrop gradient for a window of `size` logical pixels.
///
/// The inner stop is `base`; the outer stop is `base` darkened three times.
/// Pixels past the radius take the outer stop.
pub fn backdrop_gradient(size: Vec2, base: Rgba8) -> RadialGradient {
    let diagonal = size.length();
    let center = size.half() + Vec2::new(0.0, CENTER_OFFSET_FACTOR * diagonal);
    let outer = base.darken().darken().darken();

    RadialGradient::new(
        center,
        GRAD_STRENGTH_FACTOR * diagonal,
        vec![
            ColorStop::new(0.0, base.to_color()),
            ColorStop::new(1.0, outer.to_color()),
        ],
        SpreadMode::Pad,
    )
}

/// Owns the background palette and paints the selected entry.
///
/// Holds no selection of its own; callers pass the document's `bg_index`.
#[derive(Debug, Clone)]
pub struct Backdrop {
    palette: &'static [Rgba8],
}

impl Default for Backdrop {
    fn default() -> Self {
        Self { palette: &PALETTE }
    }
}

impl Backdrop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn palette(&self) -> &'static [Rgba8] {
        self.palette
    }

    /// Palette entry for `index`, wrapping past the end.
    pub fn color(&self, index: usize) -> Rgba8 {
        self.palette[index % self.palette.len()]
    }

    /// Index following `index`, wrapping to 0.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.palette.len()
    }

    /// Records a full-window rect filled with the gradient for `palette[index]`.
    ///
    /// Nothing is recorded for an empty window (e.g. minimized).
    pub fn paint(&self, list: &mut DrawList, size: Vec2, index: usize) {
        let rect = Rect::from_size(size);
        if rect.is_empty() || !rect.is_finite() {
            return;
        }

        let gradient = backdrop_gradient(size, self.color(index));
        list.push_rect(BACKDROP_Z, rect, Paint::RadialGradient(gradient));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribble_engine::scene::DrawCmd;

    use crate::color::{BLUE, DARK_GRAY};

    #[test]
    fn gradient_geometry_follows_diagonal() {
        // 300x400 has a diagonal of exactly 500.
        let g = backdrop_gradient(Vec2::new(300.0, 400.0), BLUE);
        assert!((g.center.x - 150.0).abs() < 1e-4);
        assert!((g.center.y - 75.0).abs() < 1e-4);
        assert!((g.radius - 350.0).abs() < 1e-4);
        assert_eq!(g.spread, SpreadMode::Pad);
    }

    #[test]
    fn gradient_stops_run_from_base_to_triple_darkened() {
        let g = backdrop_gradient(Vec2::new(100.0, 100.0), DARK_GRAY);
        assert_eq!(g.stops.len(), 2);
        assert_eq!(g.stops[0].t, 0.0);
        assert_eq!(g.stops[0].color, DARK_GRAY.to_color());
        assert_eq!(g.stops[1].t, 1.0);
        assert_eq!(g.stops[1].color, Rgba8::rgb(10, 10, 10).to_color());
    }

    #[test]
    fn index_wraps_around_palette() {
        let b = Backdrop::new();
        assert_eq!(b.color(0), BLUE);
        assert_eq!(b.color(1), DARK_GRAY);
        assert_eq!(b.color(2), BLUE);
        assert_eq!(b.next_index(1), 0);
    }

    #[test]
    fn paints_one_full_window_rect() {
        let mut list = DrawList::new();
        Backdrop::new().paint(&mut list, Vec2::new(640.0, 480.0), 1);

        assert_eq!(list.len(), 1);
        let item = &list.items()[0];
        assert_eq!(item.key.z, BACKDROP_Z);
        let DrawCmd::Rect(cmd) = &item.cmd else {
            panic!("expected a rect, got {:?}", item.cmd);
        };
        assert_eq!(cmd.rect, Rect::new(0.0, 0.0, 640.0, 480.0));
        assert!(matches!(cmd.paint, Paint::RadialGradient(_)));
    }

    #[test]
    fn empty_window_records_nothing() {
        let mut list = DrawList::new();
        Backdrop::new().paint(&mut list, Vec2::new(0.0, 480.0), 0);
        assert!(list.is_empty());
    }
}
