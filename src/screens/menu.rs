//=========================================================================
// Menu Screen
//=========================================================================
//
// The main menu: a vertical list of entries navigated with the arrow
// keys. Enter activates the highlighted entry, Escape quits.
//
// The cursor wraps at both ends and survives leaving and re-entering
// the menu.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::input::Key;
use crate::core::screen::{NextScreen, ScreenTransition, ScreenType};
use crate::core::{GameContext, Screen};

//=== MenuEntry ===========================================================

/// The selectable entries, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    /// Assemble a fresh character, then head out.
    NewGame,

    /// Return to the map with the current party.
    Continue,

    /// Jump straight into a practice battle.
    BattleDrill,

    /// Close the game.
    Quit,
}

impl MenuEntry {
    /// Label shown for this entry.
    pub fn label(&self) -> &'static str {
        match self {
            MenuEntry::NewGame => "New Game",
            MenuEntry::Continue => "Continue",
            MenuEntry::BattleDrill => "Battle Drill",
            MenuEntry::Quit => "Quit",
        }
    }
}

const ENTRIES: [MenuEntry; 4] = [
    MenuEntry::NewGame,
    MenuEntry::Continue,
    MenuEntry::BattleDrill,
    MenuEntry::Quit,
];

//=== MenuScreen ==========================================================

/// The main menu screen.
pub struct MenuScreen {
    cursor: usize,
}

impl MenuScreen {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    /// The currently highlighted entry.
    pub fn highlighted(&self) -> MenuEntry {
        ENTRIES[self.cursor]
    }

    //--- Internal Helpers -------------------------------------------------

    fn move_cursor(&mut self, delta: isize) {
        let len = ENTRIES.len() as isize;
        self.cursor = (self.cursor as isize + delta).rem_euclid(len) as usize;
        debug!("Menu cursor on {:?}", self.highlighted());
    }

    fn activate(&self, context: &GameContext) -> ScreenTransition {
        let entry = self.highlighted();
        info!("Menu entry activated: {}", entry.label());

        match entry {
            // Both paths lead through character creation when there is
            // no party to take along
            MenuEntry::NewGame => {
                ScreenTransition::Load(NextScreen::to(ScreenType::CharacterCreation))
            }
            MenuEntry::Continue => {
                if context.party.is_some() {
                    ScreenTransition::Load(NextScreen::to(ScreenType::Map))
                } else {
                    info!("No party assembled yet, heading to character creation");
                    ScreenTransition::Load(NextScreen::to(ScreenType::CharacterCreation))
                }
            }
            MenuEntry::BattleDrill => ScreenTransition::Load(NextScreen::to(ScreenType::Battle)),
            MenuEntry::Quit => ScreenTransition::Quit,
        }
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for MenuScreen {
    fn on_enter(&mut self, _context: &mut GameContext, _target: Option<&str>) {
        info!("Main menu ({} highlighted)", self.highlighted().label());
    }

    fn update(&mut self, context: &mut GameContext) -> ScreenTransition {
        if context.input.is_key_pressed(Key::ArrowDown) {
            self.move_cursor(1);
        }
        if context.input.is_key_pressed(Key::ArrowUp) {
            self.move_cursor(-1);
        }

        if context.input.is_key_pressed(Key::Enter) {
            return self.activate(context);
        }

        if context.input.is_key_pressed(Key::Escape) {
            return ScreenTransition::Quit;
        }

        ScreenTransition::Stay
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::InputEvent;
    use crate::core::Party;

    //--- Test Helpers -----------------------------------------------------

    fn context() -> GameContext {
        GameContext::with_seed(11)
    }

    fn press(context: &mut GameContext, key: Key) {
        context.input.begin_frame();
        context.input.apply(&[InputEvent::KeyDown(key), InputEvent::KeyUp(key)]);
    }

    //--- Tests ------------------------------------------------------------

    #[test]
    fn cursor_starts_on_new_game() {
        let menu = MenuScreen::new();
        assert_eq!(menu.highlighted(), MenuEntry::NewGame);
    }

    #[test]
    fn arrow_down_advances_and_wraps() {
        let mut menu = MenuScreen::new();
        let mut ctx = context();

        for expected in [
            MenuEntry::Continue,
            MenuEntry::BattleDrill,
            MenuEntry::Quit,
            MenuEntry::NewGame, // wrapped
        ] {
            press(&mut ctx, Key::ArrowDown);
            menu.update(&mut ctx);
            assert_eq!(menu.highlighted(), expected);
        }
    }

    #[test]
    fn arrow_up_wraps_to_the_bottom() {
        let mut menu = MenuScreen::new();
        let mut ctx = context();

        press(&mut ctx, Key::ArrowUp);
        menu.update(&mut ctx);

        assert_eq!(menu.highlighted(), MenuEntry::Quit);
    }

    #[test]
    fn new_game_leads_to_character_creation() {
        let mut menu = MenuScreen::new();
        let mut ctx = context();

        press(&mut ctx, Key::Enter);
        let transition = menu.update(&mut ctx);

        assert_eq!(
            transition,
            ScreenTransition::Load(NextScreen::to(ScreenType::CharacterCreation))
        );
    }

    #[test]
    fn continue_without_party_redirects_to_character_creation() {
        let mut menu = MenuScreen::new();
        let mut ctx = context();

        press(&mut ctx, Key::ArrowDown);
        menu.update(&mut ctx);
        press(&mut ctx, Key::Enter);
        let transition = menu.update(&mut ctx);

        assert_eq!(
            transition,
            ScreenTransition::Load(NextScreen::to(ScreenType::CharacterCreation))
        );
    }

    #[test]
    fn continue_with_party_heads_to_the_map() {
        let mut menu = MenuScreen::new();
        let mut ctx = context();
        ctx.party = Some(Party {
            loadout: "Balanced Wanderer",
            vitality: 20,
        });

        press(&mut ctx, Key::ArrowDown);
        menu.update(&mut ctx);
        press(&mut ctx, Key::Enter);
        let transition = menu.update(&mut ctx);

        assert_eq!(
            transition,
            ScreenTransition::Load(NextScreen::to(ScreenType::Map))
        );
    }

    #[test]
    fn quit_entry_quits() {
        let mut menu = MenuScreen::new();
        let mut ctx = context();

        press(&mut ctx, Key::ArrowUp);
        menu.update(&mut ctx);
        press(&mut ctx, Key::Enter);
        let transition = menu.update(&mut ctx);

        assert_eq!(transition, ScreenTransition::Quit);
    }

    #[test]
    fn escape_quits_from_anywhere_in_the_menu() {
        let mut menu = MenuScreen::new();
        let mut ctx = context();

        press(&mut ctx, Key::Escape);
        assert_eq!(menu.update(&mut ctx), ScreenTransition::Quit);
    }

    #[test]
    fn idle_frame_stays_on_the_menu() {
        let mut menu = MenuScreen::new();
        let mut ctx = context();

        ctx.input.begin_frame();
        assert_eq!(menu.update(&mut ctx), ScreenTransition::Stay);
    }
}
