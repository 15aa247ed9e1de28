//=========================================================================
// Game Core
//
// All game-side systems and data: the session loop, the screen director,
// the shared context, and the input subsystem.
//
// Architecture:
//   GameSession (one tick per frame, main thread)
//     ├─ ScreenDirector: dispatches the current screen
//     └─ GameContext: input snapshot + RNG + party, lent to screens
//
// The platform layer feeds this module through a channel of
// `PlatformEvent`s and drives it by calling `GameSession::tick()`.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod context;
pub mod input;
pub mod screen;

pub(crate) mod session;

//=== Public API ==========================================================

pub use context::{GameContext, Party};
pub use screen::{NextScreen, Screen, ScreenDirector, ScreenTransition, ScreenType};
