//! Scribble pad: a freehand drawing surface on top of `scribble-engine`.
//!
//! Pointer input becomes pressure-weighted strokes drawn over a radial-gradient
//! backdrop, with a drop-shadow pass under the ink. Documents persist as JSON
//! `.canvas` files.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use scribble_pad::Application;
//!
//! Application::new()
//!     .title("Canvas")
//!     .document_path("sketch.canvas")
//!     .run()?;
//! ```
//!
//! The drawing core is usable without a window:
//!
//! ```rust,ignore
//! use scribble_pad::prelude::*;
//!
//! let mut canvas = Canvas::new();
//! canvas.pointer(PointerEvent::Down { pos: Vec2::new(10.0, 10.0), pressure: Some(0.5) });
//! canvas.pointer(PointerEvent::Up { pos: Vec2::new(20.0, 10.0), pressure: None });
//!
//! let mut list = DrawList::new();
//! canvas.paint(&mut list, Vec2::new(1280.0, 720.0));
//! ```

pub mod app;
pub mod backdrop;
pub mod canvas;
pub mod capture;
pub mod codec;
pub mod color;
pub mod document;
pub mod keymap;
pub mod render;
pub mod stroke;

pub use app::Application;

/// Everything needed to drive a canvas headlessly.
pub mod prelude {
    pub use crate::backdrop::{Backdrop, backdrop_gradient};
    pub use crate::canvas::{Canvas, Outcome, Response};
    pub use crate::capture::{PointerEvent, StrokeCapture};
    pub use crate::codec::{DocumentError, FormatError};
    pub use crate::color::{PALETTE, Rgba8};
    pub use crate::document::Document;
    pub use crate::keymap::{Command, Keymap};
    pub use crate::stroke::{Stroke, StrokePoint};

    pub use scribble_engine::coords::Vec2;
    pub use scribble_engine::scene::DrawList;

    pub use crate::app::Application;
}
