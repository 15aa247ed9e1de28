//=========================================================================
// Land of Limbs
//
// A puzzle/adventure RPG where you build a modular character from limbs.
//
// The binary is pure wiring: set up logging, configure the game, and
// register the four screens the loop dispatches between. Everything
// interesting happens in the library.
//
//=========================================================================

use log::info;

use land_of_limbs::core::ScreenType;
use land_of_limbs::screens::{
    BattleScreen, CharacterCreationScreen, MapScreen, MenuScreen,
};
use land_of_limbs::GameBuilder;

fn main() {
    // RUST_LOG controls verbosity, default to info
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Land of Limbs starting");

    GameBuilder::new()
        .with_title("Land of Limbs")
        .with_window_size(1280, 720)
        .build()
        .init(|screens| {
            screens.register(ScreenType::Menu, MenuScreen::new());
            screens.register(ScreenType::Map, MapScreen::new());
            screens.register(ScreenType::Battle, BattleScreen::new());
            screens.register(ScreenType::CharacterCreation, CharacterCreationScreen::new());
        })
        .run();

    info!("Land of Limbs exited");
}
