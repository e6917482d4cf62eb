//! The editable drawing state and the commands that mutate it.

use crate::color::PALETTE;
use crate::stroke::Stroke;

/// Ink width of a fresh document, in logical pixels at full pressure.
pub const DEFAULT_THICKNESS: u32 = 3;

/// Complete state of a drawing session.
///
/// Invariants: every stroke has at least one point, `thickness >= 1`,
/// `bg_index < PALETTE.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    strokes: Vec<Stroke>,
    thickness: u32,
    show_shadows: bool,
    bg_index: usize,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            strokes: Vec::new(),
            thickness: DEFAULT_THICKNESS,
            show_shadows: true,
            bg_index: 0,
        }
    }
}

impl Document {
    /// Builds a document, forcing `thickness` to at least 1 and wrapping
    /// `bg_index` into the palette.
    pub fn new(strokes: Vec<Stroke>, thickness: u32, show_shadows: bool, bg_index: usize) -> Self {
        Self {
            strokes,
            thickness: thickness.max(1),
            show_shadows,
            bg_index: bg_index % PALETTE.len(),
        }
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn thickness(&self) -> u32 {
        self.thickness
    }

    pub fn show_shadows(&self) -> bool {
        self.show_shadows
    }

    pub fn bg_index(&self) -> usize {
        self.bg_index
    }

    pub(crate) fn push_stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    pub(crate) fn last_stroke_mut(&mut self) -> Option<&mut Stroke> {
        self.strokes.last_mut()
    }

    /// Removes every stroke. Returns whether anything was removed.
    pub fn clear(&mut self) -> bool {
        let changed = !self.strokes.is_empty();
        self.strokes.clear();
        changed
    }

    /// Removes and returns the most recent stroke; `None` when empty.
    pub fn undo(&mut self) -> Option<Stroke> {
        self.strokes.pop()
    }

    pub fn toggle_shadows(&mut self) {
        self.show_shadows = !self.show_shadows;
    }

    /// Advances `bg_index` to the next palette entry, wrapping to 0.
    pub fn cycle_background(&mut self) {
        self.bg_index = (self.bg_index + 1) % PALETTE.len();
    }

    /// Adjusts thickness by `delta`, never below 1. Returns the new value.
    pub fn set_thickness(&mut self, delta: i32) -> u32 {
        self.thickness = self.thickness.saturating_add_signed(delta).max(1);
        self.thickness
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::StrokePoint;

    fn dot(x: f32) -> Stroke {
        Stroke::begin(StrokePoint::at(x, 0.0))
    }

    #[test]
    fn defaults() {
        let d = Document::default();
        assert!(d.strokes().is_empty());
        assert_eq!(d.thickness(), 3);
        assert!(d.show_shadows());
        assert_eq!(d.bg_index(), 0);
    }

    #[test]
    fn undo_removes_most_recent_then_stays_empty() {
        let mut d = Document::default();
        d.push_stroke(dot(1.0));
        d.push_stroke(dot(2.0));

        assert_eq!(d.undo(), Some(dot(2.0)));
        assert_eq!(d.strokes(), &[dot(1.0)]);
        assert_eq!(d.undo(), Some(dot(1.0)));
        assert_eq!(d.undo(), None);
        assert_eq!(d.undo(), None);
        assert!(d.strokes().is_empty());
    }

    #[test]
    fn clear_reports_change() {
        let mut d = Document::default();
        assert!(!d.clear());
        d.push_stroke(dot(1.0));
        assert!(d.clear());
        assert!(d.strokes().is_empty());
    }

    #[test]
    fn thickness_never_drops_below_one() {
        let mut d = Document::default();
        assert_eq!(d.set_thickness(-2), 1);
        assert_eq!(d.set_thickness(-100), 1);
        assert_eq!(d.set_thickness(i32::MIN), 1);
        assert_eq!(d.set_thickness(4), 5);
    }

    #[test]
    fn thickness_saturates_at_the_top() {
        let mut d = Document::new(Vec::new(), u32::MAX - 1, true, 0);
        assert_eq!(d.set_thickness(i32::MAX), u32::MAX);
    }

    #[test]
    fn cycle_background_returns_to_start() {
        let mut d = Document::default();
        for _ in 0..PALETTE.len() {
            d.cycle_background();
        }
        assert_eq!(d.bg_index(), 0);
    }

    #[test]
    fn toggle_shadows_flips() {
        let mut d = Document::default();
        d.toggle_shadows();
        assert!(!d.show_shadows());
        d.toggle_shadows();
        assert!(d.show_shadows());
    }

    #[test]
    fn constructor_normalizes_fields() {
        let d = Document::new(Vec::new(), 0, false, PALETTE.len() + 1);
        assert_eq!(d.thickness(), 1);
        assert_eq!(d.bg_index(), 1);
    }
}
