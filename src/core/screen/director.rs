//=========================================================================
// Screen Director
//=========================================================================
//
// Owns the screen registry and the single current screen type, and
// performs the per-tick dispatch the game loop is built around.
//
// Screens are stored in a HashMap by type so they keep their state
// between activations. Dispatch runs the current screen exactly once,
// then applies the transition it returned at the tick boundary.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::Screen;
use crate::core::context::GameContext;

//=== ScreenType ==========================================================

/// Identifies which screen is current, or that the game is shutting down.
///
/// Exactly one value is current at any time. [`Closing`](Self::Closing)
/// is terminal: once the director reaches it, the session loop stops and
/// never dispatches again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenType {
    /// Main menu.
    Menu,

    /// Overworld map exploration.
    Map,

    /// Turn-based battle.
    Battle,

    /// Limb-by-limb character assembly.
    CharacterCreation,

    /// Terminal value: the loop exits.
    Closing,
}

impl ScreenType {
    /// Whether this value ends the session loop.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ScreenType::Closing)
    }
}

//=== NextScreen ==========================================================

/// Destination of a screen change.
///
/// Carries the screen to activate and an optional target identifier the
/// incoming screen receives through [`Screen::on_enter`]: the map region
/// to load (`"forest"`) or the encounter a battle should stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextScreen {
    /// The screen to activate.
    pub screen: ScreenType,

    /// Optional identifier for the incoming screen.
    pub target: Option<String>,
}

impl NextScreen {
    /// Destination without a target identifier.
    pub fn to(screen: ScreenType) -> Self {
        Self { screen, target: None }
    }

    /// Destination addressing a specific target within the screen.
    pub fn to_target(screen: ScreenType, target: impl Into<String>) -> Self {
        Self {
            screen,
            target: Some(target.into()),
        }
    }
}

//=== ScreenTransition ====================================================

/// What a screen's `update` tells the loop to do next.
///
/// This is the stable contract between screens and the session loop: the
/// current screen runs, returns one of these, and the director applies it
/// before the next tick begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Remain on the current screen.
    Stay,

    /// Hand control to another screen.
    Load(NextScreen),

    /// Close the application.
    Quit,
}

impl Default for ScreenTransition {
    fn default() -> Self {
        Self::Stay
    }
}

//=== ScreenDirector ======================================================

/// Registry of screens plus the single current screen type.
///
/// The director replaces the enumeration-plus-branch-chain dispatch with
/// a table lookup: each registered screen is keyed by its
/// [`ScreenType`], and each tick the current key selects the screen to
/// run. Screens are registered once during game setup and keep state
/// between activations.
pub struct ScreenDirector {
    screens: HashMap<ScreenType, Box<dyn Screen>>,
    current: ScreenType,
}

impl ScreenDirector {
    //--- Construction -----------------------------------------------------

    /// Creates a director with an empty registry, starting on the menu.
    pub fn new() -> Self {
        Self {
            screens: HashMap::new(),
            current: ScreenType::Menu,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a screen under the given type.
    ///
    /// The screen is boxed for storage. Registering the same type twice
    /// replaces the earlier screen.
    pub fn register<T>(&mut self, kind: ScreenType, screen: T)
    where
        T: Screen + 'static,
    {
        if self.screens.insert(kind, Box::new(screen)).is_some() {
            warn!("Screen {:?} was already registered and has been replaced", kind);
        }
    }

    //--- Queries ----------------------------------------------------------

    /// The currently active screen type.
    pub fn current(&self) -> ScreenType {
        self.current
    }

    /// Whether the director has reached the terminal screen type.
    pub fn is_closing(&self) -> bool {
        self.current.is_terminal()
    }

    //--- Lifecycle --------------------------------------------------------

    /// Enters the initial screen.
    ///
    /// Called once by the session before the first tick. If the starting
    /// screen was never registered there is nothing to run, so the
    /// director goes straight to [`ScreenType::Closing`].
    pub fn start(&mut self, context: &mut GameContext) {
        debug!("Starting on screen {:?}", self.current);
        match self.screens.get_mut(&self.current) {
            Some(screen) => screen.on_enter(context, None),
            None => {
                warn!("Initial screen {:?} is not registered, closing", self.current);
                self.current = ScreenType::Closing;
            }
        }
    }

    //--- Dispatch ---------------------------------------------------------

    /// Runs the current screen once and applies its transition.
    ///
    /// A current screen type with no registered screen object is treated
    /// as terminal: there is nothing to run, so the director closes
    /// rather than spin forever.
    pub fn dispatch(&mut self, context: &mut GameContext) {
        if self.current.is_terminal() {
            return;
        }

        let Some(screen) = self.screens.get_mut(&self.current) else {
            warn!("No screen registered for {:?}, closing", self.current);
            self.current = ScreenType::Closing;
            return;
        };

        let transition = screen.update(context);
        self.apply(transition, context);
    }

    //--- Internal Helpers -------------------------------------------------

    /// Applies a transition at the tick boundary.
    fn apply(&mut self, transition: ScreenTransition, context: &mut GameContext) {
        match transition {
            ScreenTransition::Stay => {}

            ScreenTransition::Quit => {
                info!("Screen {:?} requested quit", self.current);
                if let Some(screen) = self.screens.get_mut(&self.current) {
                    screen.on_exit(context);
                }
                self.current = ScreenType::Closing;
            }

            ScreenTransition::Load(next) => self.load(next, context),
        }
    }

    fn load(&mut self, next: NextScreen, context: &mut GameContext) {
        // Load(Closing) is just a quit spelled differently
        if next.screen.is_terminal() {
            self.apply(ScreenTransition::Quit, context);
            return;
        }

        if !self.screens.contains_key(&next.screen) {
            warn!(
                "Transition to unregistered screen {:?} ignored, staying on {:?}",
                next.screen, self.current
            );
            return;
        }

        debug!(
            "Switching screen {:?} -> {:?} (target: {:?})",
            self.current, next.screen, next.target
        );

        if let Some(screen) = self.screens.get_mut(&self.current) {
            screen.on_exit(context);
        }

        self.current = next.screen;

        if let Some(screen) = self.screens.get_mut(&next.screen) {
            screen.on_enter(context, next.target.as_deref());
        }
    }
}

impl Default for ScreenDirector {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
