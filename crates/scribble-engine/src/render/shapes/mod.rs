//! Shape renderers.
//!
//! `RectRenderer` fills `DrawCmd::Rect`; `StrokeRenderer` draws `DrawCmd::Circle`
//! and `DrawCmd::Line` together so discs and segments keep their relative paint order.

mod common;

pub mod rect;
pub mod stroke;
