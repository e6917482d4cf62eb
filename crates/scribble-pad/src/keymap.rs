//! Key bindings for canvas commands.

use std::collections::HashMap;

use scribble_engine::input::Key;

/// Canvas-level action a key can trigger.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Command {
    Quit,
    CycleBackground,
    ToggleShadows,
    Load,
    Save,
    Undo,
    Clear,
}

impl Command {
    /// Whether holding the key should repeat the command.
    pub fn repeats(self) -> bool {
        matches!(self, Command::Undo)
    }
}

/// Logical key bindings.
///
/// ```text
/// Q, Escape        quit
/// Z                cycle background
/// H                toggle shadows
/// O                load document
/// S                save document
/// U, Backspace     undo last stroke
/// C, Delete        clear all strokes
/// ```
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<Key, Command>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::empty()
            .bind(Key::Q, Command::Quit)
            .bind(Key::Escape, Command::Quit)
            .bind(Key::Z, Command::CycleBackground)
            .bind(Key::H, Command::ToggleShadows)
            .bind(Key::O, Command::Load)
            .bind(Key::S, Command::Save)
            .bind(Key::U, Command::Undo)
            .bind(Key::Backspace, Command::Undo)
            .bind(Key::C, Command::Clear)
            .bind(Key::Delete, Command::Clear)
    }
}

impl Keymap {
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bindings for a window that only shows the backdrop: quit and cycle.
    pub fn backdrop_only() -> Self {
        Self::empty()
            .bind(Key::Q, Command::Quit)
            .bind(Key::Escape, Command::Quit)
            .bind(Key::Z, Command::CycleBackground)
    }

    /// Binds `key` to `command`, replacing any previous binding for `key`.
    pub fn bind(mut self, key: Key, command: Command) -> Self {
        self.bindings.insert(key, command);
        self
    }

    pub fn unbind(mut self, key: Key) -> Self {
        self.bindings.remove(&key);
        self
    }

    /// Command for a key press. Repeats only resolve for repeating commands.
    pub fn lookup(&self, key: Key, repeat: bool) -> Option<Command> {
        let command = *self.bindings.get(&key)?;
        if repeat && !command.repeats() {
            return None;
        }
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings() {
        let km = Keymap::default();
        assert_eq!(km.lookup(Key::Q, false), Some(Command::Quit));
        assert_eq!(km.lookup(Key::Escape, false), Some(Command::Quit));
        assert_eq!(km.lookup(Key::Z, false), Some(Command::CycleBackground));
        assert_eq!(km.lookup(Key::H, false), Some(Command::ToggleShadows));
        assert_eq!(km.lookup(Key::O, false), Some(Command::Load));
        assert_eq!(km.lookup(Key::S, false), Some(Command::Save));
        assert_eq!(km.lookup(Key::U, false), Some(Command::Undo));
        assert_eq!(km.lookup(Key::Backspace, false), Some(Command::Undo));
        assert_eq!(km.lookup(Key::C, false), Some(Command::Clear));
        assert_eq!(km.lookup(Key::Delete, false), Some(Command::Clear));
        assert_eq!(km.lookup(Key::X, false), None);
    }

    #[test]
    fn only_undo_repeats() {
        let km = Keymap::default();
        assert_eq!(km.lookup(Key::U, true), Some(Command::Undo));
        assert_eq!(km.lookup(Key::C, true), None);
        assert_eq!(km.lookup(Key::Z, true), None);
    }

    #[test]
    fn rebinding_replaces() {
        let km = Keymap::default().bind(Key::X, Command::Clear).unbind(Key::C);
        assert_eq!(km.lookup(Key::X, false), Some(Command::Clear));
        assert_eq!(km.lookup(Key::C, false), None);
    }

    #[test]
    fn backdrop_only_cannot_edit() {
        let km = Keymap::backdrop_only();
        assert_eq!(km.lookup(Key::Z, false), Some(Command::CycleBackground));
        assert_eq!(km.lookup(Key::U, false), None);
        assert_eq!(km.lookup(Key::S, false), None);
    }
}
