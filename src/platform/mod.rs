//=========================================================================
// Platform Subsystem
//
// Owns the OS window and drives the game from inside the Winit event
// loop. This is the explicit-object replacement for a UI singleton: one
// `Platform` instance holds the window handle, and it alone releases it
// at shutdown.
//
// Architecture:
// ```text
//  Main Thread (the only thread):
//  ┌─────────────────────────────────────────────┐
//  │  Winit Event Loop                           │
//  │   ↓                                         │
//  │  event_mapper  — Winit → InputEvent         │
//  │   ↓                                         │
//  │  InputBuffer   — staged until frame end     │
//  │   ↓ RedrawRequested (flush)                 │
//  │  Channel ──► GameSession::tick()            │
//  │               └─ ScreenDirector dispatch    │
//  └─────────────────────────────────────────────┘
// ```
//
// Key design decisions:
// - **RedrawRequested = frame boundary**: all input staged during the
//   frame is flushed as one batch, then the session ticks once.
// - **Single thread**: the session runs inside the event loop, so the
//   channel is drained with non-blocking receives and fed with
//   `try_send`. A full channel drops the batch with a warning rather
//   than deadlocking the loop.
// - **Quit goes through the session**: `CloseRequested` queues
//   `WindowClosed`; the next tick sees it and ends the session, which
//   ends the event loop. One exit path, not two.
// - **Fixed pacing**: after each tick the loop sleeps until the next
//   frame via `ControlFlow::WaitUntil`.
//
//=========================================================================

//=== Submodules ==========================================================

mod event_mapper;
mod input_buffer;

//=== External Crates =====================================================

use std::time::{Duration, Instant};

use crossbeam_channel::{Sender, TrySendError};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{StartCause, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::input::InputEvent;
use crate::core::session::{GameSession, TickControl};
use event_mapper::map_window_event;
use input_buffer::InputBuffer;

//=== PlatformEvent =======================================================

/// Events queued from the window layer to the game session.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// One frame's batched input events.
    ///
    /// Empty batches are never sent.
    Inputs(Vec<InputEvent>),

    /// Window close requested by the user or the OS.
    ///
    /// The session ends the loop when it drains this.
    WindowClosed,
}

//=== PlatformError =======================================================

/// Window-system initialization and runtime errors.
///
/// These are fatal: without an event loop the game cannot run.
#[derive(Debug)]
pub(crate) enum PlatformError {
    /// Failed to create the event loop.
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error.
    EventLoopExecution(winit::error::EventLoopError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=== WindowConfig ========================================================

/// Window parameters carried from the game builder.
#[derive(Debug, Clone)]
pub(crate) struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

//=== Platform ============================================================

/// Window owner and event pump.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(...)` with the session to drive
/// 2. **Execution**: `platform.run()` enters the Winit event loop
/// 3. **Frames**: `RedrawRequested` flushes input and ticks the session
/// 4. **Shutdown**: the session exits → the loop exits → the window
///    handle is released in `exiting`
pub(crate) struct Platform {
    /// OS window handle (None until `resumed`, None again after `exiting`).
    window: Option<Window>,

    /// Stages input between frame boundaries.
    buffer: InputBuffer,

    /// Queue into the session.
    events: Sender<PlatformEvent>,

    /// The game itself; ticked once per frame.
    session: GameSession,

    /// Window title and size.
    config: WindowConfig,

    /// Target duration of one frame.
    frame: Duration,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates the platform around a session.
    ///
    /// The window is created lazily in `resumed`.
    pub fn new(
        events: Sender<PlatformEvent>,
        session: GameSession,
        config: WindowConfig,
        frame: Duration,
    ) -> Self {
        info!(target: "platform", "Platform initialized ({}x{})", config.width, config.height);
        Self {
            window: None,
            buffer: InputBuffer::new(),
            events,
            session,
            config,
            frame,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the Winit event loop until the session ends.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (Winit requirement on
    /// macOS/iOS).
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Flushes staged input to the session's queue.
    ///
    /// Empty buffers are not sent. A full or disconnected channel drops
    /// the batch with a warning; blocking here would deadlock the loop
    /// since the receiver drains on this same thread.
    fn flush_input_buffer(&mut self) {
        let Some(batch) = self.buffer.drain() else {
            return;
        };

        let count = batch.len();
        trace!(target: "platform::input", "Flushing {} input events", count);

        match self.events.try_send(PlatformEvent::Inputs(batch)) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                warn!(target: "platform::input", "Event queue full, dropping {} events", count);
            }
            Err(TrySendError::Disconnected(_)) => {
                warn!(target: "platform::input", "Event queue disconnected, dropping {} events", count);
            }
        }
    }

    /// Runs one frame: flush input, tick the session, schedule the next
    /// frame or shut the loop down.
    fn step(&mut self, event_loop: &ActiveEventLoop) {
        self.flush_input_buffer();

        match self.session.tick() {
            TickControl::Exit => {
                info!(target: "platform", "Session ended, leaving event loop");
                event_loop.exit();
            }
            TickControl::Continue => {
                event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + self.frame));
            }
        }
    }

    /// Queues the quit signal for the session.
    fn request_quit(&mut self, event_loop: &ActiveEventLoop) {
        if self.events.try_send(PlatformEvent::WindowClosed).is_err() {
            // No session listening; nothing left to wind down
            event_loop.exit();
            return;
        }

        // Make sure a tick runs promptly to observe the signal
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when the app becomes active (startup or mobile resume).
    ///
    /// Creates the window and enters the initial screen. On mobile this
    /// may fire again after a suspend/resume cycle; the session is only
    /// started once.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
                self.session.start();
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                event_loop.exit();
            }
        }
    }

    /// Wakes the frame clock: when the pacing deadline passes, request
    /// the redraw that drives the next tick.
    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if let StartCause::ResumeTimeReached { .. } = cause {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.request_quit(event_loop);
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary
                self.step(event_loop);
            }

            other => {
                if let Some(input) = map_window_event(other) {
                    self.buffer.push(input);
                }
            }
        }
    }

    /// Releases the window handle before the loop returns.
    ///
    /// The Rust rendition of destroy-window-and-quit: dropping the
    /// handle tears the surface and window down.
    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        info!(target: "platform", "Releasing window resources");
        self.window.take();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::GameContext;
    use crate::core::input::Key;
    use crate::core::screen::ScreenDirector;
    use crossbeam_channel::{bounded, unbounded};

    //--- Test Helpers -----------------------------------------------------

    fn test_config() -> WindowConfig {
        WindowConfig {
            title: "test".to_string(),
            width: 320,
            height: 240,
        }
    }

    fn idle_session() -> (GameSession, crossbeam_channel::Sender<PlatformEvent>) {
        let (tx, rx) = unbounded();
        let session = GameSession::new(ScreenDirector::new(), GameContext::with_seed(3), rx);
        (session, tx)
    }

    //--- PlatformEvent Tests ----------------------------------------------

    #[test]
    fn platform_events_are_cloneable_and_debug() {
        let event = PlatformEvent::Inputs(vec![InputEvent::KeyDown(Key::KeyA)]);
        let cloned = event.clone();
        assert!(format!("{:?}", cloned).contains("Inputs"));

        let closed = PlatformEvent::WindowClosed;
        assert!(format!("{:?}", closed.clone()).contains("WindowClosed"));
    }

    //--- Platform Tests ---------------------------------------------------

    #[test]
    fn window_is_created_lazily() {
        let (session, _tx) = idle_session();
        let (out_tx, _out_rx) = unbounded();
        let platform = Platform::new(out_tx, session, test_config(), Duration::from_millis(16));

        assert!(platform.window().is_none());
    }

    #[test]
    fn flush_empty_buffer_sends_nothing() {
        let (session, _tx) = idle_session();
        let (out_tx, out_rx) = unbounded();
        let mut platform =
            Platform::new(out_tx, session, test_config(), Duration::from_millis(16));

        platform.flush_input_buffer();

        assert!(out_rx.try_recv().is_err());
    }

    #[test]
    fn flush_sends_one_batch() {
        let (session, _tx) = idle_session();
        let (out_tx, out_rx) = unbounded();
        let mut platform =
            Platform::new(out_tx, session, test_config(), Duration::from_millis(16));

        platform.buffer.push(InputEvent::KeyDown(Key::Space));
        platform.buffer.push(InputEvent::CursorMoved { x: 4.0, y: 8.0 });
        platform.flush_input_buffer();

        match out_rx.try_recv() {
            Ok(PlatformEvent::Inputs(batch)) => assert_eq!(batch.len(), 2),
            other => panic!("Expected Inputs batch, got {:?}", other),
        }
        assert!(out_rx.try_recv().is_err(), "only one batch per flush");
    }

    #[test]
    fn flush_survives_a_full_channel() {
        let (session, _tx) = idle_session();
        let (out_tx, out_rx) = bounded(1);
        let mut platform =
            Platform::new(out_tx, session, test_config(), Duration::from_millis(16));

        // Occupy the only slot
        platform.buffer.push(InputEvent::KeyDown(Key::KeyA));
        platform.flush_input_buffer();

        // Second flush must drop, not block or panic
        platform.buffer.push(InputEvent::KeyDown(Key::KeyB));
        platform.flush_input_buffer();

        assert!(out_rx.try_recv().is_ok());
        assert!(out_rx.try_recv().is_err());
    }

    #[test]
    fn flush_survives_a_disconnected_channel() {
        let (session, _tx) = idle_session();
        let (out_tx, out_rx) = unbounded();
        let mut platform =
            Platform::new(out_tx, session, test_config(), Duration::from_millis(16));

        drop(out_rx);
        platform.buffer.push(InputEvent::KeyDown(Key::KeyA));
        platform.flush_input_buffer();
    }

    //--- PlatformError Tests ----------------------------------------------

    #[test]
    fn platform_error_implements_error_and_display() {
        fn assert_error<T: std::error::Error>() {}
        fn assert_display<T: std::fmt::Display>() {}
        assert_error::<PlatformError>();
        assert_display::<PlatformError>();
    }
}
