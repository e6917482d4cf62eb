use std::collections::HashSet;

use super::types::{
    ContactPhase,
    InputEvent,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};

/// Current input state for the window.
///
/// Holds "is down" information and the last known pointer position. The
/// platform layer reads it to fill in fields winit does not report per event.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in logical pixels.
    pub pointer_pos: Option<(f32, f32)>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,

    /// Touch contact currently driving the pointer stream.
    pub active_touch: Option<u64>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Release events are not delivered while unfocused.
                    self.buttons_down.clear();
                    self.active_touch = None;
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y, .. }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key { modifiers, .. } | InputEvent::MouseWheel { modifiers, .. } => {
                self.modifiers = *modifiers;
            }

            InputEvent::PointerButton(PointerButtonEvent {
                button,
                state,
                x,
                y,
                modifiers,
                ..
            }) => {
                self.pointer_pos = Some((*x, *y));
                self.modifiers = *modifiers;
                match state {
                    MouseButtonState::Pressed => {
                        self.buttons_down.insert(*button);
                    }
                    MouseButtonState::Released => {
                        self.buttons_down.remove(button);
                    }
                }
            }
        }
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }

    /// True for a button release whose press was never seen, e.g. a press
    /// that started outside the window or before focus was lost.
    pub fn is_stray_release(&self, ev: &InputEvent) -> bool {
        matches!(
            ev,
            InputEvent::PointerButton(PointerButtonEvent {
                button,
                state: MouseButtonState::Released,
                ..
            }) if !self.button_down(*button)
        )
    }

    /// Decides whether an event from touch contact `id` belongs to the
    /// pointer stream, updating the active contact.
    ///
    /// The first contact to start while none is active owns the stream until
    /// it ends. Every other contact is ignored.
    pub fn claim_touch(&mut self, id: u64, phase: ContactPhase) -> bool {
        match phase {
            ContactPhase::Started => {
                if self.active_touch.is_some() {
                    return false;
                }
                self.active_touch = Some(id);
                true
            }
            ContactPhase::Moved => self.active_touch == Some(id),
            ContactPhase::Ended => {
                if self.active_touch != Some(id) {
                    return false;
                }
                self.active_touch = None;
                true
            }
        }
    }
}
