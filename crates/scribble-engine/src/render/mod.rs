//! wgpu renderers for the canvas draw list.
//!
//! Two pipelines cover everything the canvas paints: `RectRenderer` for the
//! backdrop fill and `StrokeRenderer` for ink discs and round-capped segments.
//! Both take geometry in logical pixels with a top-left origin and map it to
//! clip space through a viewport uniform.

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
