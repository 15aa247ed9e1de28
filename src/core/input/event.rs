//=========================================================================
// Input Event Types
//
// Portable representation of the player inputs the game consumes.
//
// The platform layer translates OS events (Winit) into these types so
// that screens and the input snapshot never touch windowing-library
// types directly.
//
// Responsibilities:
// - Represent keyboard and mouse inputs in a stable, portable way
// - Stay copy-cheap: no heap allocations anywhere in the event path
// - Provide equality and hashing for the keys/buttons the snapshot
//   stores in sets
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// The `Other` variant covers side buttons and anything else the game
/// has no use for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button.
    Other,
}

//=== Key =================================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced, so
/// bindings survive layout changes (QWERTY vs AZERTY).
///
/// Coverage is the set the game actually reads: letters, digits, arrows
/// and a few specials. Everything else maps to `Unidentified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    //--- Numeric Keys -----------------------------------------------------
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,

    //--- Fallback ---------------------------------------------------------

    /// Any key the game does not map.
    Unidentified,
}

//=== InputEvent ==========================================================

/// A single normalized input event delivered by the platform layer.
///
/// Discrete events (key and button edges) are order-significant and kept
/// individually; cursor movement is continuous and may be coalesced to
/// the latest position before it reaches the game loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A key went down.
    KeyDown(Key),

    /// A key came back up.
    KeyUp(Key),

    /// A mouse button went down.
    MouseDown(MouseButton),

    /// A mouse button came back up.
    MouseUp(MouseButton),

    /// The cursor moved to a new position in window coordinates.
    CursorMoved { x: f32, y: f32 },
}

impl InputEvent {
    /// Whether this event is a discrete (edge-triggered) input.
    ///
    /// Cursor movement is the only continuous event; everything else is
    /// discrete.
    pub fn is_discrete(&self) -> bool {
        !matches!(self, InputEvent::CursorMoved { .. })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
