//=========================================================================
// Land of Limbs — Library Root
//
// A puzzle/adventure RPG shell: a desktop window, a screen-dispatching
// game loop, and the four screens the game runs on.
//
// Responsibilities:
// - Expose the game facade (`GameBuilder` / `Game`)
// - Expose the core types screens are built from (`Screen`,
//   `ScreenType`, `GameContext`, transitions)
// - Keep the windowing layer (`platform`) hidden from callers
//
// Typical usage:
// ```no_run
// use land_of_limbs::GameBuilder;
// use land_of_limbs::core::ScreenType;
// use land_of_limbs::screens::*;
//
// fn main() {
//     GameBuilder::new()
//         .build()
//         .init(|screens| {
//             screens.register(ScreenType::Menu, MenuScreen::new());
//             screens.register(ScreenType::Map, MapScreen::new());
//             screens.register(ScreenType::Battle, BattleScreen::new());
//             screens.register(ScreenType::CharacterCreation, CharacterCreationScreen::new());
//         })
//         .run();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the session loop, screen director, context, and input
// types. `screens` holds the game's four modes. Both are public so the
// binary (and tests) can register and extend screens.
//
pub mod core;
pub mod screens;

//--- Internal Modules ----------------------------------------------------
//
// `platform` wraps Winit (window, event pump, frame pacing) and is not
// part of the public API surface. `game` defines the facade, re-exported
// below.
//
mod game;
mod platform;

pub mod prelude;

//--- Public Exports ------------------------------------------------------

pub use game::{Game, GameBuilder};
