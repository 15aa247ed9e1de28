//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use land_of_limbs::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Game facade
pub use crate::game::{Game, GameBuilder};

// Core context and screen system
pub use crate::core::{
    GameContext, NextScreen, Party, Screen, ScreenDirector, ScreenTransition, ScreenType,
};

// Input types
pub use crate::core::input::{InputEvent, InputSnapshot, Key, MouseButton};

// The game's screens
pub use crate::screens::{
    BattleScreen, CharacterCreationScreen, MapScreen, MenuScreen, STARTING_REGION,
};
