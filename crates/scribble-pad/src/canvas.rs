//! Composition root of the drawing surface.
//!
//! A [`Canvas`] owns the backdrop, the document, and the stroke state machine.
//! It turns engine input events into document changes and reports what the
//! host has to do next (redraw, quit, surface a file outcome).

use std::path::{Path, PathBuf};

use scribble_engine::coords::Vec2;
use scribble_engine::input::{
    InputEvent, KeyState, MouseButton, MouseButtonState, MouseWheelDelta, PointerButtonEvent,
    PointerMoveEvent,
};
use scribble_engine::scene::DrawList;

use crate::backdrop::Backdrop;
use crate::capture::{PointerEvent, StrokeCapture};
use crate::codec::{self, DocumentError};
use crate::document::Document;
use crate::keymap::{Command, Keymap};
use crate::render;

/// Pixel scroll distance that counts as one wheel notch.
pub const PIXELS_PER_NOTCH: f32 = 40.0;

/// Result of a load or save command.
#[derive(Debug)]
pub enum Outcome {
    Loaded,
    Saved,
    /// No document path is configured.
    NoSelection,
    /// The document in memory is unchanged.
    Failed(DocumentError),
}

/// What the host should do after the canvas handled an event.
#[derive(Debug)]
pub enum Response {
    Ignored,
    Redraw,
    Quit,
    File(Outcome),
}

impl Response {
    pub fn needs_redraw(&self) -> bool {
        matches!(self, Response::Redraw | Response::File(Outcome::Loaded))
    }
}

/// Converts wheel deltas into whole thickness steps.
#[derive(Debug, Default)]
struct WheelAccumulator {
    notches: f32,
}

impl WheelAccumulator {
    fn feed(&mut self, delta: MouseWheelDelta) -> i32 {
        self.notches += match delta {
            MouseWheelDelta::Line { y, .. } => y,
            MouseWheelDelta::Pixel { y, .. } => y / PIXELS_PER_NOTCH,
        };
        if !self.notches.is_finite() {
            self.notches = 0.0;
            return 0;
        }

        let whole = self.notches.trunc();
        self.notches -= whole;
        whole as i32
    }
}

pub struct Canvas {
    backdrop: Backdrop,
    document: Document,
    capture: StrokeCapture,
    keymap: Keymap,
    wheel: WheelAccumulator,
    path: Option<PathBuf>,
    accepts_strokes: bool,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Empty document with the default keymap.
    pub fn new() -> Self {
        Self {
            backdrop: Backdrop::new(),
            document: Document::default(),
            capture: StrokeCapture::new(),
            keymap: Keymap::default(),
            wheel: WheelAccumulator::default(),
            path: None,
            accepts_strokes: true,
        }
    }

    /// Backdrop with no stroke capture. Only quit and background cycling are bound.
    pub fn backdrop_only() -> Self {
        Self {
            keymap: Keymap::backdrop_only(),
            accepts_strokes: false,
            ..Self::new()
        }
    }

    /// Sets the path used by [`load`](Self::load) and [`save`](Self::save).
    /// A path without an extension gets `.canvas`, so both commands agree on
    /// the file.
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(codec::with_canvas_extension(path.as_ref()));
        self
    }

    pub fn with_keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = keymap;
        self
    }

    pub fn with_document(mut self, document: Document) -> Self {
        self.capture.seal();
        self.document = document;
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_drawing(&self) -> bool {
        self.capture.is_drawing()
    }

    pub fn accepts_strokes(&self) -> bool {
        self.accepts_strokes
    }

    // ── Input ─────────────────────────────────────────────────────────────

    pub fn handle_input(&mut self, event: &InputEvent) -> Response {
        match event {
            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state,
                x,
                y,
                pressure,
                ..
            }) => {
                let pos = Vec2::new(*x, *y);
                let pressure = *pressure;
                let ev = match state {
                    MouseButtonState::Pressed => PointerEvent::Down { pos, pressure },
                    MouseButtonState::Released => PointerEvent::Up { pos, pressure },
                };
                redraw_if(self.pointer(ev))
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y, pressure }) => {
                redraw_if(self.pointer(PointerEvent::Move {
                    pos: Vec2::new(*x, *y),
                    pressure: *pressure,
                }))
            }

            InputEvent::PointerLeft | InputEvent::Focused(false) => {
                if self.capture.seal() {
                    log::debug!("pointer lost; stroke sealed");
                }
                Response::Ignored
            }

            InputEvent::MouseWheel { delta, .. } if self.accepts_strokes => {
                let steps = self.wheel.feed(*delta);
                if steps == 0 {
                    return Response::Ignored;
                }
                let before = self.document.thickness();
                redraw_if(self.set_thickness(steps) != before)
            }

            InputEvent::Key {
                key,
                state: KeyState::Pressed,
                repeat,
                ..
            } => match self.keymap.lookup(*key, *repeat) {
                Some(command) => self.execute(command),
                None => Response::Ignored,
            },

            _ => Response::Ignored,
        }
    }

    /// Feeds a device-independent pointer event to the stroke state machine.
    /// Returns whether the document changed.
    pub fn pointer(&mut self, event: PointerEvent) -> bool {
        if !self.accepts_strokes {
            return false;
        }
        self.capture.handle(&mut self.document, event)
    }

    // ── Commands ──────────────────────────────────────────────────────────

    pub fn execute(&mut self, command: Command) -> Response {
        log::debug!("command {command:?}");
        match command {
            Command::Quit => Response::Quit,
            Command::CycleBackground => {
                self.cycle_background();
                Response::Redraw
            }
            Command::ToggleShadows => {
                self.toggle_shadows();
                Response::Redraw
            }
            Command::Undo => redraw_if(self.undo()),
            Command::Clear => redraw_if(self.clear()),
            Command::Load => Response::File(self.load()),
            Command::Save => Response::File(self.save()),
        }
    }

    /// Removes every stroke, sealing an active one first.
    pub fn clear(&mut self) -> bool {
        self.capture.seal();
        self.document.clear()
    }

    /// Removes the most recent stroke. An active stroke is ended, then removed.
    pub fn undo(&mut self) -> bool {
        self.capture.seal();
        self.document.undo().is_some()
    }

    pub fn toggle_shadows(&mut self) {
        self.document.toggle_shadows();
    }

    pub fn cycle_background(&mut self) {
        self.document.cycle_background();
    }

    /// Adjusts ink thickness by `delta` steps (minimum 1). Returns the new value.
    pub fn set_thickness(&mut self, delta: i32) -> u32 {
        let thickness = self.document.set_thickness(delta);
        log::debug!("thickness {thickness}");
        thickness
    }

    // ── Files ─────────────────────────────────────────────────────────────

    /// Loads the configured path.
    pub fn load(&mut self) -> Outcome {
        match self.path.clone() {
            Some(path) => self.load_from(&path),
            None => no_selection("load"),
        }
    }

    /// Saves to the configured path.
    pub fn save(&self) -> Outcome {
        match self.path.as_deref() {
            Some(path) => self.save_to(path),
            None => no_selection("save"),
        }
    }

    /// Replaces the document with the one at `path` after a complete parse.
    /// On failure the current document is kept.
    pub fn load_from(&mut self, path: &Path) -> Outcome {
        match codec::load(path) {
            Ok(document) => {
                self.capture.seal();
                self.document = document;
                log::info!(
                    "loaded {} ({} strokes)",
                    path.display(),
                    self.document.strokes().len()
                );
                Outcome::Loaded
            }
            Err(e) => {
                log::warn!("load failed: {e}");
                Outcome::Failed(e)
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Outcome {
        match codec::save(path, &self.document) {
            Ok(()) => {
                log::info!(
                    "saved {} ({} strokes)",
                    path.display(),
                    self.document.strokes().len()
                );
                Outcome::Saved
            }
            Err(e) => {
                log::warn!("save failed: {e}");
                Outcome::Failed(e)
            }
        }
    }

    // ── Rendering ─────────────────────────────────────────────────────────

    /// Records the backdrop, then the strokes, for a window of `size`.
    pub fn paint(&self, list: &mut DrawList, size: Vec2) {
        render::render(list, &self.document, &self.backdrop, size);
    }
}

fn redraw_if(changed: bool) -> Response {
    if changed { Response::Redraw } else { Response::Ignored }
}

fn no_selection(action: &str) -> Outcome {
    log::info!("{action}: no document path configured");
    Outcome::NoSelection
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_lines_map_to_steps() {
        let mut w = WheelAccumulator::default();
        assert_eq!(w.feed(MouseWheelDelta::Line { x: 0.0, y: 1.0 }), 1);
        assert_eq!(w.feed(MouseWheelDelta::Line { x: 0.0, y: -2.0 }), -2);
    }

    #[test]
    fn wheel_pixels_accumulate() {
        let mut w = WheelAccumulator::default();
        assert_eq!(w.feed(MouseWheelDelta::Pixel { x: 0.0, y: 30.0 }), 0);
        assert_eq!(w.feed(MouseWheelDelta::Pixel { x: 0.0, y: 30.0 }), 1);
        assert_eq!(w.feed(MouseWheelDelta::Pixel { x: 0.0, y: 20.0 }), 1);
        assert_eq!(w.feed(MouseWheelDelta::Pixel { x: 0.0, y: -10.0 }), 0);
    }

    #[test]
    fn undo_while_drawing_removes_active_stroke() {
        let mut c = Canvas::new();
        c.pointer(PointerEvent::Down { pos: Vec2::new(1.0, 1.0), pressure: None });
        assert!(c.is_drawing());

        assert!(c.undo());
        assert!(!c.is_drawing());
        assert!(c.document().strokes().is_empty());

        // The lost up must not resurrect anything.
        assert!(!c.pointer(PointerEvent::Up { pos: Vec2::new(2.0, 1.0), pressure: None }));
        assert!(c.document().strokes().is_empty());
    }

    #[test]
    fn backdrop_only_ignores_pointer() {
        let mut c = Canvas::backdrop_only();
        assert!(!c.pointer(PointerEvent::Down { pos: Vec2::new(1.0, 1.0), pressure: None }));
        assert!(c.document().strokes().is_empty());
    }

    #[test]
    fn file_commands_without_path_are_no_selection() {
        let mut c = Canvas::new();
        assert!(matches!(c.execute(Command::Save), Response::File(Outcome::NoSelection)));
        assert!(matches!(c.execute(Command::Load), Response::File(Outcome::NoSelection)));
    }
}
