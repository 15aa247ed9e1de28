//=========================================================================
// Battle Screen
//=========================================================================
//
// Turn-based combat against a foe spawned from the region the party was
// ambushed in. One exchange per confirm press: the party strikes, then
// the foe strikes back if it still stands. Escape attempts to flee.
//
// Outcomes:
//   foe felled     → back to the map
//   fled           → back to the map
//   party collapse → party dissolves, back to the menu
//
// Without an assembled party (the menu's battle drill) the screen runs
// the same exchange against a fixed practice stamina pool.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, warn};
use rand::Rng;

//=== Internal Dependencies ===============================================

use crate::core::input::Key;
use crate::core::screen::{NextScreen, ScreenTransition, ScreenType};
use crate::core::{GameContext, Screen};

//=== Constants ===========================================================

const DEFAULT_REGION: &str = "wilds";

/// Stamina pool used when no party exists (battle drill).
const DRILL_STAMINA: i32 = 12;

/// Percent chance a flee attempt succeeds.
const FLEE_CHANCE: u32 = 50;

//=== BattleScreen ========================================================

/// The turn-based battle screen.
pub struct BattleScreen {
    region: String,
    foe_name: String,
    foe_vitality: i32,
    drill_stamina: i32,
}

impl BattleScreen {
    pub fn new() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            foe_name: String::new(),
            foe_vitality: 0,
            drill_stamina: DRILL_STAMINA,
        }
    }

    /// Remaining vitality of the current foe.
    pub fn foe_vitality(&self) -> i32 {
        self.foe_vitality
    }

    //--- Internal Helpers -------------------------------------------------

    /// One full exchange: the party strikes, then the foe answers.
    fn exchange(&mut self, context: &mut GameContext) -> ScreenTransition {
        let strike = context.rng.random_range(2..=6);
        self.foe_vitality -= strike;
        debug!(
            "Party strikes the {} for {} ({} left)",
            self.foe_name, strike, self.foe_vitality
        );

        if self.foe_vitality <= 0 {
            info!("The {} is felled", self.foe_name);
            return ScreenTransition::Load(NextScreen::to(ScreenType::Map));
        }

        self.foe_strikes(context)
    }

    /// The foe lands a hit on the party (or the drill stamina pool).
    fn foe_strikes(&mut self, context: &mut GameContext) -> ScreenTransition {
        let blow = context.rng.random_range(1..=4);

        match context.party.as_mut() {
            Some(party) => {
                party.vitality -= blow;
                debug!(
                    "The {} hits back for {} ({} vitality left)",
                    self.foe_name, blow, party.vitality
                );

                if party.vitality <= 0 {
                    warn!("The party collapses, limbs scattered");
                    context.party = None;
                    return ScreenTransition::Load(NextScreen::to(ScreenType::Menu));
                }
            }
            None => {
                self.drill_stamina -= blow;
                if self.drill_stamina <= 0 {
                    info!("Drill over, back to the menu");
                    return ScreenTransition::Load(NextScreen::to(ScreenType::Menu));
                }
            }
        }

        ScreenTransition::Stay
    }

    fn attempt_flee(&mut self, context: &mut GameContext) -> ScreenTransition {
        if context.rng.random_range(0..100) < FLEE_CHANCE {
            info!("Slipped away from the {}", self.foe_name);
            return ScreenTransition::Load(NextScreen::to(ScreenType::Map));
        }

        debug!("Failed to flee; the {} gets a free hit", self.foe_name);
        self.foe_strikes(context)
    }
}

impl Default for BattleScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for BattleScreen {
    fn on_enter(&mut self, context: &mut GameContext, target: Option<&str>) {
        self.region = target.unwrap_or(DEFAULT_REGION).to_string();
        self.foe_name = format!("{} prowler", self.region);
        self.foe_vitality = context.rng.random_range(8..=14);
        self.drill_stamina = DRILL_STAMINA;

        info!(
            "A {} blocks the way ({} vitality)",
            self.foe_name, self.foe_vitality
        );
    }

    fn update(&mut self, context: &mut GameContext) -> ScreenTransition {
        if context.input.is_key_pressed(Key::Enter)
            || context.input.is_key_pressed(Key::Space)
        {
            return self.exchange(context);
        }

        if context.input.is_key_pressed(Key::Escape) {
            return self.attempt_flee(context);
        }

        ScreenTransition::Stay
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
