//! Scribble engine crate.
//!
//! Owns the platform + GPU runtime pieces the drawing surface sits on:
//! window/event loop, input translation, a renderer-agnostic draw list,
//! and the wgpu renderers that rasterize it.

pub mod device;
pub mod window;
pub mod input;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
