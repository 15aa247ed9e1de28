//=========================================================================
// Character Creation Screen
//=========================================================================
//
// Assemble the party's character from a set of limb loadouts. The arrow
// keys cycle through the loadouts, Enter confirms and heads out to the
// starting region, Escape backs out to the menu without building
// anything.
//
// Confirming writes the party into the game context, where battles
// spend its vitality for the rest of the session.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::input::Key;
use crate::core::screen::{NextScreen, ScreenTransition, ScreenType};
use crate::core::{GameContext, Party, Screen};
use crate::screens::map::STARTING_REGION;

//=== Loadouts ============================================================

/// The limb loadouts on offer: name and the vitality the assembled
/// character starts with.
const LOADOUTS: [(&str, i32); 4] = [
    ("Balanced Wanderer", 20),
    ("Heavy Crusher", 26),
    ("Swift Scout", 16),
    ("Sturdy Bulwark", 30),
];

//=== CharacterCreationScreen =============================================

/// The character assembly screen.
pub struct CharacterCreationScreen {
    choice: usize,
}

impl CharacterCreationScreen {
    pub fn new() -> Self {
        Self { choice: 0 }
    }

    /// The loadout currently on display.
    pub fn selected(&self) -> (&'static str, i32) {
        LOADOUTS[self.choice]
    }

    //--- Internal Helpers -------------------------------------------------

    fn cycle(&mut self, delta: isize) {
        let len = LOADOUTS.len() as isize;
        self.choice = (self.choice as isize + delta).rem_euclid(len) as usize;
        debug!("Loadout on display: {}", self.selected().0);
    }

    fn confirm(&self, context: &mut GameContext) -> ScreenTransition {
        let (loadout, vitality) = self.selected();
        info!("Character assembled: {} ({} vitality)", loadout, vitality);

        context.party = Some(Party { loadout, vitality });

        ScreenTransition::Load(NextScreen::to_target(ScreenType::Map, STARTING_REGION))
    }
}

impl Default for CharacterCreationScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for CharacterCreationScreen {
    fn on_enter(&mut self, _context: &mut GameContext, _target: Option<&str>) {
        info!(
            "Character creation ({} loadouts, {} on display)",
            LOADOUTS.len(),
            self.selected().0
        );
    }

    fn update(&mut self, context: &mut GameContext) -> ScreenTransition {
        if context.input.is_key_pressed(Key::ArrowRight)
            || context.input.is_key_pressed(Key::ArrowDown)
        {
            self.cycle(1);
        }
        if context.input.is_key_pressed(Key::ArrowLeft)
            || context.input.is_key_pressed(Key::ArrowUp)
        {
            self.cycle(-1);
        }

        if context.input.is_key_pressed(Key::Enter) {
            return self.confirm(context);
        }

        if context.input.is_key_pressed(Key::Escape) {
            return ScreenTransition::Load(NextScreen::to(ScreenType::Menu));
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

    //--- Test Helpers -----------------------------------------------------

    fn context() -> GameContext {
        GameContext::with_seed(23)
    }

    fn press(context: &mut GameContext, key: Key) {
        context.input.begin_frame();
        context.input.apply(&[InputEvent::KeyDown(key), InputEvent::KeyUp(key)]);
    }

    //--- Tests ------------------------------------------------------------

    #[test]
    fn first_loadout_is_on_display_initially() {
        let screen = CharacterCreationScreen::new();
        assert_eq!(screen.selected().0, "Balanced Wanderer");
    }

    #[test]
    fn arrows_cycle_through_loadouts_with_wraparound() {
        let mut screen = CharacterCreationScreen::new();
        let mut ctx = context();

        press(&mut ctx, Key::ArrowRight);
        screen.update(&mut ctx);
        assert_eq!(screen.selected().0, "Heavy Crusher");

        press(&mut ctx, Key::ArrowLeft);
        screen.update(&mut ctx);
        press(&mut ctx, Key::ArrowLeft);
        screen.update(&mut ctx);
        assert_eq!(screen.selected().0, "Sturdy Bulwark");
    }

    #[test]
    fn confirming_builds_the_party_and_heads_to_the_starting_region() {
        let mut screen = CharacterCreationScreen::new();
        let mut ctx = context();

        press(&mut ctx, Key::ArrowRight);
        screen.update(&mut ctx);
        press(&mut ctx, Key::Enter);
        let transition = screen.update(&mut ctx);

        assert_eq!(
            transition,
            ScreenTransition::Load(NextScreen::to_target(ScreenType::Map, STARTING_REGION))
        );

        let party = ctx.party.expect("party should be assembled");
        assert_eq!(party.loadout, "Heavy Crusher");
        assert_eq!(party.vitality, 26);
    }

    #[test]
    fn confirming_again_replaces_the_party() {
        let mut screen = CharacterCreationScreen::new();
        let mut ctx = context();

        press(&mut ctx, Key::Enter);
        screen.update(&mut ctx);
        assert_eq!(ctx.party.as_ref().unwrap().loadout, "Balanced Wanderer");

        press(&mut ctx, Key::ArrowRight);
        screen.update(&mut ctx);
        press(&mut ctx, Key::Enter);
        screen.update(&mut ctx);
        assert_eq!(ctx.party.as_ref().unwrap().loadout, "Heavy Crusher");
    }

    #[test]
    fn escape_backs_out_without_building_a_party() {
        let mut screen = CharacterCreationScreen::new();
        let mut ctx = context();

        press(&mut ctx, Key::Escape);
        let transition = screen.update(&mut ctx);

        assert_eq!(
            transition,
            ScreenTransition::Load(NextScreen::to(ScreenType::Menu))
        );
        assert!(ctx.party.is_none());
    }

    #[test]
    fn idle_frame_stays_on_the_screen() {
        let mut screen = CharacterCreationScreen::new();
        let mut ctx = context();

        ctx.input.begin_frame();
        assert_eq!(screen.update(&mut ctx), ScreenTransition::Stay);
    }
}
