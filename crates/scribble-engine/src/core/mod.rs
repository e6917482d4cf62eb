//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and higher
//! layers, without leaking runtime internals into application code.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
