//! Pointer-to-stroke state machine.

use scribble_engine::coords::Vec2;

use crate::document::Document;
use crate::stroke::{Stroke, StrokePoint};

/// Device-independent pointer event.
///
/// Mouse (primary button), touch, and pen input all arrive through this one set.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointerEvent {
    Down { pos: Vec2, pressure: Option<f32> },
    Move { pos: Vec2, pressure: Option<f32> },
    Up { pos: Vec2, pressure: Option<f32> },
}

impl PointerEvent {
    pub fn point(&self) -> StrokePoint {
        match *self {
            PointerEvent::Down { pos, pressure }
            | PointerEvent::Move { pos, pressure }
            | PointerEvent::Up { pos, pressure } => StrokePoint::new(pos, pressure),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
enum CaptureState {
    #[default]
    Idle,
    /// The active stroke is the last stroke of the document.
    Drawing,
}

/// Turns pointer events into strokes appended to a [`Document`].
///
/// While drawing, the document's last stroke is the active one. Callers that
/// remove strokes from the document must [`seal`](Self::seal) first.
#[derive(Debug, Default)]
pub struct StrokeCapture {
    state: CaptureState,
}

impl StrokeCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_drawing(&self) -> bool {
        self.state == CaptureState::Drawing
    }

    /// Applies one pointer event. Returns whether it was accepted (and the
    /// document changed).
    pub fn handle(&mut self, doc: &mut Document, event: PointerEvent) -> bool {
        let point = event.point();

        match (self.state, event) {
            (CaptureState::Idle, PointerEvent::Down { .. }) => {
                self.begin(doc, point);
                true
            }

            (CaptureState::Drawing, PointerEvent::Down { .. }) => {
                // The matching up was lost; never merge two gestures.
                log::debug!("pointer down while drawing; sealing previous stroke");
                self.seal();
                self.begin(doc, point);
                true
            }

            (CaptureState::Drawing, PointerEvent::Move { .. }) => {
                let Some(active) = doc.last_stroke_mut() else {
                    self.state = CaptureState::Idle;
                    return false;
                };
                active.push(point);
                true
            }

            (CaptureState::Drawing, PointerEvent::Up { .. }) => {
                self.state = CaptureState::Idle;
                let Some(active) = doc.last_stroke_mut() else {
                    return false;
                };

                // A tap keeps its single down point.
                let is_tap = active.is_single_point() && active.first().pos == point.pos;
                if !is_tap {
                    active.push(point);
                }
                log::debug!("stroke ended with {} point(s)", active.len());
                true
            }

            (CaptureState::Idle, PointerEvent::Move { .. } | PointerEvent::Up { .. }) => false,
        }
    }

    /// Ends the active stroke without appending a point. Returns whether a
    /// stroke was active.
    pub fn seal(&mut self) -> bool {
        std::mem::take(&mut self.state) == CaptureState::Drawing
    }

    fn begin(&mut self, doc: &mut Document, point: StrokePoint) {
        log::debug!("stroke begin at ({}, {})", point.pos.x, point.pos.y);
        doc.push_stroke(Stroke::begin(point));
        self.state = CaptureState::Drawing;
    }
}
