//=========================================================================
// Input Snapshot
//
// The per-frame view of player input that screens query.
//
// Tracks persistent state (keys and buttons currently held, cursor
// position) alongside per-frame deltas (pressed/released this frame).
// Screens use the deltas for one-shot actions like menu navigation and
// the held sets for anything continuous.
//
// Responsibilities:
// - Fold normalized `InputEvent`s into persistent and per-frame state
// - Clear the per-frame deltas at every frame boundary
// - Ignore OS key auto-repeat (a key already held produces no new
//   pressed edge)
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, Key, MouseButton};

//=== InputSnapshot =======================================================

/// Player input state for the current frame.
///
/// Owned by the [`GameContext`](crate::core::GameContext); the session
/// calls [`begin_frame`](Self::begin_frame) and [`apply`](Self::apply)
/// once per tick, and screens only read.
pub struct InputSnapshot {
    keys_held: HashSet<Key>,
    keys_pressed: HashSet<Key>,
    keys_released: HashSet<Key>,
    buttons_held: HashSet<MouseButton>,
    buttons_pressed: HashSet<MouseButton>,
    buttons_released: HashSet<MouseButton>,
    cursor: (f32, f32),
}

impl InputSnapshot {
    //--- Construction -----------------------------------------------------

    /// Creates an empty snapshot: nothing held, cursor at the origin.
    pub fn new() -> Self {
        Self {
            keys_held: HashSet::new(),
            keys_pressed: HashSet::new(),
            keys_released: HashSet::new(),
            buttons_held: HashSet::new(),
            buttons_pressed: HashSet::new(),
            buttons_released: HashSet::new(),
            cursor: (0.0, 0.0),
        }
    }

    //--- Frame Boundary ---------------------------------------------------

    /// Clears the per-frame deltas.
    ///
    /// Called by the session at the start of every tick, before the
    /// frame's events are applied. Held state and cursor position carry
    /// over.
    pub(crate) fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
    }

    /// Folds a batch of events into the snapshot.
    pub(crate) fn apply(&mut self, events: &[InputEvent]) {
        for event in events {
            match *event {
                InputEvent::KeyDown(key) => {
                    // insert() is false for auto-repeat of a held key
                    if self.keys_held.insert(key) {
                        self.keys_pressed.insert(key);
                    }
                }
                InputEvent::KeyUp(key) => {
                    if self.keys_held.remove(&key) {
                        self.keys_released.insert(key);
                    }
                }
                InputEvent::MouseDown(button) => {
                    if self.buttons_held.insert(button) {
                        self.buttons_pressed.insert(button);
                    }
                }
                InputEvent::MouseUp(button) => {
                    if self.buttons_held.remove(&button) {
                        self.buttons_released.insert(button);
                    }
                }
                InputEvent::CursorMoved { x, y } => {
                    self.cursor = (x, y);
                }
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Returns `true` if the key went down this frame.
    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Returns `true` if the key is currently held.
    pub fn is_key_held(&self, key: Key) -> bool {
        self.keys_held.contains(&key)
    }

    /// Returns `true` if the key came up this frame.
    pub fn is_key_released(&self, key: Key) -> bool {
        self.keys_released.contains(&key)
    }

    /// Like [`is_key_pressed`](Self::is_key_pressed) for mouse buttons.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    /// Like [`is_key_held`](Self::is_key_held) for mouse buttons.
    pub fn is_button_held(&self, button: MouseButton) -> bool {
        self.buttons_held.contains(&button)
    }

    /// Like [`is_key_released`](Self::is_key_released) for mouse buttons.
    pub fn is_button_released(&self, button: MouseButton) -> bool {
        self.buttons_released.contains(&button)
    }

    /// Current cursor position in window coordinates.
    pub fn cursor(&self) -> (f32, f32) {
        self.cursor
    }
}

impl Default for InputSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_press_sets_held_and_pressed() {
        let mut snapshot = InputSnapshot::new();
        snapshot.apply(&[InputEvent::KeyDown(Key::Enter)]);

        assert!(snapshot.is_key_held(Key::Enter));
        assert!(snapshot.is_key_pressed(Key::Enter));
        assert!(!snapshot.is_key_released(Key::Enter));
    }

    #[test]
    fn pressed_delta_clears_at_frame_boundary_but_held_persists() {
        let mut snapshot = InputSnapshot::new();
        snapshot.apply(&[InputEvent::KeyDown(Key::ArrowDown)]);

        snapshot.begin_frame();

        assert!(snapshot.is_key_held(Key::ArrowDown));
        assert!(!snapshot.is_key_pressed(Key::ArrowDown));
    }

    #[test]
    fn auto_repeat_does_not_produce_new_pressed_edge() {
        let mut snapshot = InputSnapshot::new();
        snapshot.apply(&[InputEvent::KeyDown(Key::Space)]);

        snapshot.begin_frame();
        snapshot.apply(&[InputEvent::KeyDown(Key::Space)]);

        assert!(snapshot.is_key_held(Key::Space));
        assert!(!snapshot.is_key_pressed(Key::Space));
    }

    #[test]
    fn release_requires_prior_press() {
        let mut snapshot = InputSnapshot::new();
        snapshot.apply(&[InputEvent::KeyUp(Key::KeyQ)]);

        assert!(!snapshot.is_key_released(Key::KeyQ));
    }

    #[test]
    fn release_clears_held_and_sets_released() {
        let mut snapshot = InputSnapshot::new();
        snapshot.apply(&[InputEvent::KeyDown(Key::KeyW)]);
        snapshot.begin_frame();
        snapshot.apply(&[InputEvent::KeyUp(Key::KeyW)]);

        assert!(!snapshot.is_key_held(Key::KeyW));
        assert!(snapshot.is_key_released(Key::KeyW));
    }

    #[test]
    fn mouse_buttons_track_edges() {
        let mut snapshot = InputSnapshot::new();
        snapshot.apply(&[InputEvent::MouseDown(MouseButton::Left)]);

        assert!(snapshot.is_button_pressed(MouseButton::Left));
        assert!(snapshot.is_button_held(MouseButton::Left));

        snapshot.begin_frame();
        snapshot.apply(&[InputEvent::MouseUp(MouseButton::Left)]);

        assert!(snapshot.is_button_released(MouseButton::Left));
        assert!(!snapshot.is_button_held(MouseButton::Left));
    }

    #[test]
    fn cursor_tracks_latest_position() {
        let mut snapshot = InputSnapshot::new();
        snapshot.apply(&[
            InputEvent::CursorMoved { x: 10.0, y: 20.0 },
            InputEvent::CursorMoved { x: 300.0, y: 150.0 },
        ]);

        assert_eq!(snapshot.cursor(), (300.0, 150.0));
    }

    #[test]
    fn press_and_release_within_one_frame_registers_both_deltas() {
        let mut snapshot = InputSnapshot::new();
        snapshot.apply(&[
            InputEvent::KeyDown(Key::Escape),
            InputEvent::KeyUp(Key::Escape),
        ]);

        assert!(snapshot.is_key_pressed(Key::Escape));
        assert!(snapshot.is_key_released(Key::Escape));
        assert!(!snapshot.is_key_held(Key::Escape));
    }
}
