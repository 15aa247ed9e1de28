//=========================================================================
// Game Session
//=========================================================================
//
// The core of the game loop: drains platform events, folds input into
// the context, dispatches the current screen, and decides whether the
// loop continues.
//
// Everything here runs synchronously on the main thread. The platform
// layer calls `tick()` once per frame from inside the window event loop;
// there is no logic thread and no locking. The crossbeam channel is the
// event queue between the two layers, drained non-blockingly each tick.
//
// Tick order:
//  1. Drain pending platform events (quit signal checked here)
//  2. Begin the input frame and apply the drained batches
//  3. Dispatch the current screen exactly once
//  4. Exit if the current screen type is terminal
//
// The terminal check deliberately happens in the same tick the
// transition was applied, never one iteration late.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::Receiver;
use log::{info, warn};

//=== Internal Dependencies ===============================================

use crate::core::context::GameContext;
use crate::core::input::InputEvent;
use crate::core::screen::ScreenDirector;
use crate::platform::PlatformEvent;

//=== TickControl =========================================================

/// Control flow for the session loop.
///
/// Each tick signals either to continue or to terminate the loop.
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== GameSession =========================================================

/// Owns the screen director and the game context, and runs one tick of
/// the game per frame.
///
/// Built by the game facade, driven by the platform layer.
pub(crate) struct GameSession {
    director: ScreenDirector,
    context: GameContext,
    events: Receiver<PlatformEvent>,
    input_batches: Vec<Vec<InputEvent>>,
}

impl GameSession {
    //--- Construction -----------------------------------------------------

    pub fn new(
        director: ScreenDirector,
        context: GameContext,
        events: Receiver<PlatformEvent>,
    ) -> Self {
        Self {
            director,
            context,
            events,
            input_batches: Vec::with_capacity(8),
        }
    }

    //--- Lifecycle --------------------------------------------------------

    /// Enters the initial screen.
    ///
    /// Called once by the platform after the window exists, before the
    /// first tick.
    pub fn start(&mut self) {
        self.director.start(&mut self.context);
    }

    //--- tick() -----------------------------------------------------------

    /// Runs one iteration of the game loop.
    ///
    /// Returns [`TickControl::Exit`] when the quit signal arrived or the
    /// current screen type became terminal; the platform then shuts the
    /// event loop down.
    pub fn tick(&mut self) -> TickControl {
        //--- Step 1: Pump platform events --------------------------------
        if let TickControl::Exit = self.drain_platform_events() {
            info!("Quit signal received, ending session");
            return TickControl::Exit;
        }

        //--- Step 2: Fold input into the snapshot ------------------------
        self.context.input.begin_frame();
        for batch in self.input_batches.drain(..) {
            self.context.input.apply(&batch);
        }

        //--- Step 3: Dispatch the current screen -------------------------
        self.director.dispatch(&mut self.context);

        //--- Step 4: Terminal check, same tick ---------------------------
        if self.director.is_closing() {
            info!("Screen flow reached Closing, ending session");
            return TickControl::Exit;
        }

        TickControl::Continue
    }

    //--- Internal Helpers -------------------------------------------------

    /// Drains all events the platform queued since the previous tick.
    ///
    /// Never blocks: the platform and the session share a thread, so a
    /// blocking receive here would deadlock the event loop.
    fn drain_platform_events(&mut self) -> TickControl {
        loop {
            match self.events.try_recv() {
                Ok(PlatformEvent::Inputs(batch)) => self.input_batches.push(batch),
                Ok(PlatformEvent::WindowClosed) => return TickControl::Exit,
                Err(crossbeam_channel::TryRecvError::Empty) => break,
                Err(crossbeam_channel::TryRecvError::Disconnected) => {
                    warn!("Platform event channel disconnected");
                    return TickControl::Exit;
                }
            }
        }

        TickControl::Continue
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn current_screen(&self) -> crate::core::screen::ScreenType {
        self.director.current()
    }

    #[cfg(test)]
    pub(crate) fn context(&self) -> &GameContext {
        &self.context
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
