//=========================================================================
// Platform Event Mapper
//
// Converts Winit input events into the game's portable `InputEvent`
// types, keeping OS-specific input out of the core.
//
// Responsibilities:
// - Translate keyboard and mouse events
// - Drop OS key auto-repeat before it reaches the buffer
// - Ignore window events the game has no use for
//
//=========================================================================

use winit::event::{ElementState, KeyEvent, MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::KeyCode as WinitKeyCode;
use winit::keyboard::PhysicalKey;

use crate::core::input::{InputEvent, Key, MouseButton};

//=== Key Conversion ======================================================
//
// Maps `WinitKeyCode` values to the game's `Key` enum. Only the subset
// the screens read is mapped; everything else becomes `Unidentified`.
//

impl From<WinitKeyCode> for Key {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Numeric keys -----------------------------------------------------
            Digit0 => Key::Digit0, Digit1 => Key::Digit1,
            Digit2 => Key::Digit2, Digit3 => Key::Digit3,
            Digit4 => Key::Digit4, Digit5 => Key::Digit5,
            Digit6 => Key::Digit6, Digit7 => Key::Digit7,
            Digit8 => Key::Digit8, Digit9 => Key::Digit9,

            //--- Alphabetic keys --------------------------------------------------
            KeyA => Key::KeyA, KeyB => Key::KeyB, KeyC => Key::KeyC,
            KeyD => Key::KeyD, KeyE => Key::KeyE, KeyF => Key::KeyF,
            KeyG => Key::KeyG, KeyH => Key::KeyH, KeyI => Key::KeyI,
            KeyJ => Key::KeyJ, KeyK => Key::KeyK, KeyL => Key::KeyL,
            KeyM => Key::KeyM, KeyN => Key::KeyN, KeyO => Key::KeyO,
            KeyP => Key::KeyP, KeyQ => Key::KeyQ, KeyR => Key::KeyR,
            KeyS => Key::KeyS, KeyT => Key::KeyT, KeyU => Key::KeyU,
            KeyV => Key::KeyV, KeyW => Key::KeyW, KeyX => Key::KeyX,
            KeyY => Key::KeyY, KeyZ => Key::KeyZ,

            //--- Arrow keys -------------------------------------------------------
            ArrowDown => Key::ArrowDown, ArrowLeft => Key::ArrowLeft,
            ArrowRight => Key::ArrowRight, ArrowUp => Key::ArrowUp,

            //--- Special keys -----------------------------------------------------
            Space => Key::Space,
            Enter => Key::Enter,
            Escape => Key::Escape,
            Tab => Key::Tab,
            Backspace => Key::Backspace,

            //--- Fallback ---------------------------------------------------------
            _ => Key::Unidentified,
        }
    }
}

//=== Mouse Conversion ====================================================

impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=== Window Event Conversion =============================================

/// Extracts the game-relevant input from a window event.
///
/// Returns `None` for auto-repeated key events and for window events the
/// game does not consume (resize, focus, redraw, ...).
pub(crate) fn map_window_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        //--- Keyboard Input ------------------------------------------
        WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    physical_key,
                    state,
                    repeat,
                    ..
                },
            ..
        } => {
            if *repeat {
                return None;
            }

            let key = match physical_key {
                PhysicalKey::Code(code) => Key::from(*code),
                _ => Key::Unidentified,
            };

            Some(match state {
                ElementState::Pressed => InputEvent::KeyDown(key),
                ElementState::Released => InputEvent::KeyUp(key),
            })
        }

        //--- Mouse Button Input --------------------------------------
        WindowEvent::MouseInput { state, button, .. } => {
            let button = MouseButton::from(*button);
            Some(match state {
                ElementState::Pressed => InputEvent::MouseDown(button),
                ElementState::Released => InputEvent::MouseUp(button),
            })
        }

        //--- Mouse Movement ------------------------------------------
        WindowEvent::CursorMoved { position, .. } => Some(InputEvent::CursorMoved {
            x: position.x as f32,
            y: position.y as f32,
        }),

        //--- Everything Else -----------------------------------------
        _ => None,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
