//=========================================================================
// Land of Limbs — Game Facade
//
// Entry point and coordinator for the game shell.
//
// Architecture:
// ```text
//     GameBuilder  ──build()──>  Game  ──run()──>  [Event Loop]
//         │                       │
//         ├─ with_title()         └─ wires channel, session, platform
//         ├─ with_window_size()      blocks until the player quits
//         ├─ with_tps()
//         └─ with_rng_seed()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use crossbeam_channel::bounded;
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::context::GameContext;
use crate::core::screen::ScreenDirector;
use crate::core::session::GameSession;
use crate::platform::{Platform, WindowConfig};

//=== GameBuilder =========================================================

/// Builder for configuring and constructing a [`Game`].
///
/// # Default Values
///
/// - **Title**: `"Land of Limbs"`
/// - **Window**: 1280x720 logical pixels
/// - **TPS**: 60.0 (screen updates per second)
/// - **Channel capacity**: 128 queued platform events
/// - **RNG seed**: from the OS
///
/// # Examples
///
/// ```no_run
/// use land_of_limbs::GameBuilder;
///
/// GameBuilder::new()
///     .with_title("Land of Limbs")
///     .with_window_size(1024, 768)
///     .build()
///     .run();
/// ```
pub struct GameBuilder {
    title: String,
    window_size: (u32, u32),
    tps: f64,
    channel_capacity: usize,
    rng_seed: Option<u64>,
}

impl GameBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self {
            title: "Land of Limbs".to_string(),
            window_size: (1280, 720),
            tps: 60.0,
            channel_capacity: 128,
            rng_seed: None,
        }
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the logical window size.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window dimensions must be positive");
        self.window_size = (width, height);
        self
    }

    /// Sets the target ticks per second for the game loop.
    ///
    /// Each tick pumps events once and dispatches the current screen
    /// once. Higher values make input more responsive at the cost of CPU.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the capacity of the platform → session event queue.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Fixes the session RNG seed.
    ///
    /// The same seed and inputs replay the same encounters and battle
    /// rolls. Without this the seed comes from the OS.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Builds the game instance.
    ///
    /// Seeds the session RNG here, once, for the whole game. Call
    /// [`Game::init`] to register screens before running.
    pub fn build(self) -> Game {
        info!(
            "Building game (window: {}x{}, TPS: {})",
            self.window_size.0, self.window_size.1, self.tps
        );

        let context = match self.rng_seed {
            Some(seed) => GameContext::with_seed(seed),
            None => GameContext::new(),
        };

        Game {
            director: ScreenDirector::new(),
            context,
            title: self.title,
            window_size: self.window_size,
            tps: self.tps,
            channel_capacity: self.channel_capacity,
        }
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Game ================================================================

/// The assembled game, ready for screen registration and execution.
///
/// Create via [`GameBuilder`]. The game owns the screen director and the
/// context explicitly; nothing here is a process-wide singleton.
///
/// # Examples
///
/// ```no_run
/// use land_of_limbs::GameBuilder;
/// use land_of_limbs::core::ScreenType;
/// use land_of_limbs::screens::MenuScreen;
///
/// GameBuilder::new()
///     .build()
///     .init(|screens| {
///         screens.register(ScreenType::Menu, MenuScreen::new());
///     })
///     .run();
/// ```
pub struct Game {
    director: ScreenDirector,
    context: GameContext,
    title: String,
    window_size: (u32, u32),
    tps: f64,
    channel_capacity: usize,
}

impl Game {
    //--- Initialization ---------------------------------------------------

    /// Registers screens before execution.
    ///
    /// Provides mutable access to the [`ScreenDirector`] so the caller
    /// can register the menu, map, battle and character creation
    /// screens. Can only be called before [`Game::run`]; `run` consumes
    /// the game.
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut ScreenDirector),
    {
        info!("Registering screens");
        init_fn(&mut self.director);
        self
    }

    //--- Execution --------------------------------------------------------

    /// Runs the game and blocks until the player quits.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the platform → session event queue
    /// 2. Wraps director and context in a session
    /// 3. Runs the window event loop, one session tick per frame
    /// 4. On exit: the platform releases the window, then this returns
    pub fn run(self) {
        info!("Starting game (TPS: {})", self.tps);

        //--- 1. Event queue ----------------------------------------------
        let (tx, rx) = bounded(self.channel_capacity);

        //--- 2. Session ---------------------------------------------------
        let session = GameSession::new(self.director, self.context, rx);

        //--- 3. Platform + event loop ------------------------------------
        let config = WindowConfig {
            title: self.title,
            width: self.window_size.0,
            height: self.window_size.1,
        };
        let frame = Duration::from_secs_f64(1.0 / self.tps);
        let platform = Platform::new(tx, session, config, frame);

        if let Err(e) = platform.run() {
            error!("Platform error: {}", e);
        }

        //--- 4. Teardown --------------------------------------------------
        info!("Shutdown complete");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
