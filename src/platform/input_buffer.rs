//=========================================================================
// Input Buffer
//
// Per-frame staging area for normalized input events.
//
// The window event loop delivers input at arbitrary points within a
// frame; the buffer holds everything until the frame boundary, where the
// platform flushes one batch to the session.
//
// Responsibilities:
// - Keep discrete events (key/button edges) in arrival order
// - Drop consecutive duplicate discrete events
// - Coalesce cursor movement down to the latest position
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== InputBuffer =========================================================

/// Transient event store for one frame of input.
///
/// Lives only between frame boundaries; `drain()` empties it and returns
/// the batch sent to the session.
pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    cursor: Option<(f32, f32)>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        const DISCRETE_BASE: usize = 64;
        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            cursor: None,
        }
    }

    //--- Collection -------------------------------------------------------

    /// Stages one normalized event.
    ///
    /// Cursor movement overwrites any earlier position this frame; only
    /// the last position matters to the game. Discrete events append in
    /// order, with consecutive duplicates ignored.
    pub fn push(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = Some((x, y));
            }
            _ => {
                if self.discrete.last() != Some(&event) {
                    self.discrete.push(event);
                }
            }
        }
    }

    //--- Drain ------------------------------------------------------------

    /// Takes this frame's batch, leaving the buffer empty.
    ///
    /// Returns `None` when nothing was collected so the platform can skip
    /// sending empty batches. The coalesced cursor position, if any, is
    /// appended after the discrete events.
    pub fn drain(&mut self) -> Option<Vec<InputEvent>> {
        if self.discrete.is_empty() && self.cursor.is_none() {
            return None;
        }

        let mut batch = std::mem::take(&mut self.discrete);
        if let Some((x, y)) = self.cursor.take() {
            batch.push(InputEvent::CursorMoved { x, y });
        }
        Some(batch)
    }

    //--- Utilities --------------------------------------------------------

    pub fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.cursor.is_none()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{Key, MouseButton};

    fn key_down(key: Key) -> InputEvent {
        InputEvent::KeyDown(key)
    }

    fn cursor(x: f32, y: f32) -> InputEvent {
        InputEvent::CursorMoved { x, y }
    }

    #[test]
    fn consecutive_duplicates_are_dropped() {
        let mut buffer = InputBuffer::new();
        buffer.push(key_down(Key::KeyA));
        buffer.push(key_down(Key::KeyA));
        buffer.push(key_down(Key::KeyB));

        let batch = buffer.drain().expect("batch expected");
        assert_eq!(batch, vec![key_down(Key::KeyA), key_down(Key::KeyB)]);
    }

    #[test]
    fn non_consecutive_duplicates_survive() {
        let mut buffer = InputBuffer::new();
        buffer.push(key_down(Key::KeyA));
        buffer.push(key_down(Key::KeyB));
        buffer.push(key_down(Key::KeyA));

        let batch = buffer.drain().expect("batch expected");
        assert_eq!(batch.len(), 3);
    }

    #[test]
    fn cursor_movement_coalesces_to_latest() {
        let mut buffer = InputBuffer::new();
        buffer.push(cursor(10.0, 10.0));
        buffer.push(cursor(20.0, 30.0));

        let batch = buffer.drain().expect("batch expected");
        assert_eq!(batch, vec![cursor(20.0, 30.0)]);
    }

    #[test]
    fn cursor_position_comes_after_discrete_events() {
        let mut buffer = InputBuffer::new();
        buffer.push(cursor(5.0, 5.0));
        buffer.push(InputEvent::MouseDown(MouseButton::Left));

        let batch = buffer.drain().expect("batch expected");
        assert_eq!(
            batch,
            vec![InputEvent::MouseDown(MouseButton::Left), cursor(5.0, 5.0)]
        );
    }

    #[test]
    fn empty_buffer_drains_to_none() {
        let mut buffer = InputBuffer::new();
        assert!(buffer.drain().is_none());
    }

    #[test]
    fn drain_leaves_the_buffer_empty() {
        let mut buffer = InputBuffer::new();
        buffer.push(key_down(Key::Space));
        buffer.push(cursor(1.0, 2.0));

        assert!(buffer.drain().is_some());
        assert!(buffer.is_empty());
        assert!(buffer.drain().is_none());
    }
}
