//=========================================================================
// Screen System
//=========================================================================
//
// Screens are the game's modes: menu, map, battle, character creation.
// Exactly one screen is current at any time; the director dispatches it
// once per tick and applies the transition it returns.
//
// Architecture:
//   ScreenDirector
//     ├─ screens: HashMap<ScreenType, Box<dyn Screen>>
//     └─ current: ScreenType
//
// Flow:
//   dispatch() → Screen::update() → ScreenTransition → apply()
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::context::GameContext;

//=== Module Declarations =================================================

mod director;

//=== Public API ==========================================================

pub use director::{NextScreen, ScreenDirector, ScreenTransition, ScreenType};

//=== Screen Trait ========================================================

/// A self-contained game mode with lifecycle hooks and per-tick logic.
///
/// Screens are registered with the [`ScreenDirector`] once and keep their
/// state between activations. Each tick the current screen's `update`
/// runs exactly once and tells the loop what happens next by returning a
/// [`ScreenTransition`].
///
/// # Minimal Implementation
///
/// Only `update()` is required; the lifecycle hooks default to no-ops:
///
/// ```rust
/// use land_of_limbs::core::{GameContext, Screen, ScreenTransition};
///
/// struct PauseScreen;
///
/// impl Screen for PauseScreen {
///     fn update(&mut self, _context: &mut GameContext) -> ScreenTransition {
///         ScreenTransition::Stay
///     }
/// }
/// ```
pub trait Screen {
    /// Called when the screen becomes current.
    ///
    /// `target` is the optional identifier the outgoing screen attached
    /// to its [`NextScreen`], such as the map region to load.
    /// Default implementation does nothing.
    fn on_enter(&mut self, _context: &mut GameContext, _target: Option<&str>) {}

    /// Called when the screen stops being current.
    ///
    /// Default implementation does nothing.
    fn on_exit(&mut self, _context: &mut GameContext) {}

    /// Runs one tick of this screen and reports where the loop goes next.
    fn update(&mut self, context: &mut GameContext) -> ScreenTransition;
}
