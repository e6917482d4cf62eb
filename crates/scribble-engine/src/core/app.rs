use crate::input::InputEvent;

use super::ctx::{FrameCtx, WindowCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    /// Nothing visible changed.
    Continue,
    /// State changed; schedule a redraw.
    Redraw,
    /// Close the window and leave the event loop.
    Exit,
}

impl AppControl {
    /// Combines two directives, keeping the stronger one (`Exit` > `Redraw` > `Continue`).
    pub fn merge(self, other: AppControl) -> AppControl {
        match (self, other) {
            (AppControl::Exit, _) | (_, AppControl::Exit) => AppControl::Exit,
            (AppControl::Redraw, _) | (_, AppControl::Redraw) => AppControl::Redraw,
            _ => AppControl::Continue,
        }
    }
}

/// Application contract implemented by higher layers.
///
/// The runtime redraws only on request: an app that changes what it draws in
/// `on_input` must return [`AppControl::Redraw`].
pub trait App {
    /// Called for every translated input event, after the runtime's input state
    /// has been updated.
    fn on_input(&mut self, window: &WindowCtx<'_>, event: &InputEvent) -> AppControl {
        let _ = (window, event);
        AppControl::Continue
    }

    /// Called once per redraw.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
