//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS window and events) with the engine's single-threaded
// frame loop.
//
// Architecture:
// ```text
//  ┌────────────────────────────────────────────────┐
//  │  Frame Loop (one thread)                       │
//  │                                                │
//  │  process_input ── polls ──▶ InputTracker       │
//  │  update                          ▲             │
//  │  render ── poll_events() ────────┘             │
//  │            (pump Winit with zero timeout;      │
//  │             WindowShell feeds the tracker)     │
//  └────────────────────────────────────────────────┘
// ```
//
// Winit 0.30 wants to own the loop via `run_app`; this engine instead
// pumps it (`pump_app_events` with a zero timeout) once per frame, as
// the last step of the render phase. Input events land in the shared
// `InputTracker`, which states poll through the `Window` contract at the
// start of the next frame. One pump per frame keeps event delivery and
// frame boundaries aligned without a second thread.
//
// Responsibilities:
// - Create and manage the OS window (lazily, in `resumed`)
// - Translate Winit events into tracker updates (see `event_mapper`)
// - Apply display-mode requests: fullscreen, cursor capture, samples
// - Drive the present cycle hooks
//
//=========================================================================

//=== Submodules ==========================================================

mod event_mapper;

//=== External Crates =====================================================

use std::time::Duration;

use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{CursorGrabMode, Fullscreen, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::input::InputTracker;
use crate::core::window::{SampleCount, Window};
use event_mapper::{map_physical_key, scroll_delta_to_lines};

//=== PlatformError =======================================================

/// Platform initialization errors.
///
/// These are fatal: without an event loop the engine cannot run.
#[derive(Debug)]
pub enum PlatformError {
    /// Failed to create the event loop (rare, indicates an OS-level issue
    /// such as a missing display server).
    EventLoopCreation(winit::error::EventLoopError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=== WindowShell =========================================================

/// The `ApplicationHandler` half of the platform: receives pumped Winit
/// events and folds them into the input tracker.
struct WindowShell {
    /// OS window handle (None until `resumed` is called).
    window: Option<winit::window::Window>,

    /// Poll-side input state read by states through the Window contract.
    tracker: InputTracker,

    /// Set when the OS or the user asks the window to close.
    close_requested: bool,

    //--- Creation parameters ----------------------------------------------
    title: String,
    inner_size: (u32, u32),
}

impl WindowShell {
    fn new(title: &str, width: u32, height: u32) -> Self {
        Self {
            window: None,
            tracker: InputTracker::new(),
            close_requested: false,
            title: title.to_string(),
            inner_size: (width, height),
        }
    }
}

impl ApplicationHandler for WindowShell {
    /// Called when the app becomes active (startup or mobile resume).
    /// Creates the window on first activation only.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let (width, height) = self.inner_size;
        let attrs = WindowAttributes::default()
            .with_title(&self.title)
            .with_inner_size(LogicalSize::new(width, height));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.close_requested = true;
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.close_requested = true;
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                // OS key repeats would defeat the processed latches.
                if key_event.repeat {
                    return;
                }
                let key = map_physical_key(key_event.physical_key);
                match key_event.state {
                    ElementState::Pressed => self.tracker.key_down(key),
                    ElementState::Released => self.tracker.key_up(key),
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.tracker.cursor_moved(position.x as f32, position.y as f32);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.tracker.scroll_moved(scroll_delta_to_lines(delta));
            }

            _ => {
                // Ignore: Resized, Focused, RedrawRequested, etc.
            }
        }
    }
}

//=== PlatformWindow ======================================================

/// The shipping [`Window`] implementation, backed by a Winit event loop
/// pumped once per frame.
///
/// Must live on the main thread (Winit requirement on macOS/iOS); the
/// engine's frame loop runs there anyway, so this type is not Send.
pub struct PlatformWindow {
    event_loop: EventLoop<()>,
    shell: WindowShell,

    //--- Display state ----------------------------------------------------
    full_screen: bool,
    samples: SampleCount,
    should_close: bool,
}

impl PlatformWindow {
    //--- Construction -----------------------------------------------------

    /// Creates the event loop and pumps it once so the OS window exists
    /// before the first frame.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::EventLoopCreation`] if the event loop
    /// cannot be created (e.g. no display server).
    pub fn new(
        title: &str,
        width: u32,
        height: u32,
        samples: SampleCount,
    ) -> Result<Self, PlatformError> {
        debug!(target: "platform", "Creating Winit event loop");
        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut platform = Self {
            event_loop,
            shell: WindowShell::new(title, width, height),
            full_screen: false,
            samples,
            should_close: false,
        };
        platform.poll_events();
        Ok(platform)
    }
}

//--- Window Implementation -----------------------------------------------

impl Window for PlatformWindow {
    //--- Keyboard ---------------------------------------------------------

    fn key_is_pressed(&self, key: crate::core::input::KeyCode) -> bool {
        self.shell.tracker.key_is_pressed(key)
    }

    fn key_has_been_processed(&self, key: crate::core::input::KeyCode) -> bool {
        self.shell.tracker.key_has_been_processed(key)
    }

    fn set_key_as_processed(&mut self, key: crate::core::input::KeyCode) {
        self.shell.tracker.set_key_as_processed(key);
    }

    //--- Display Mode -----------------------------------------------------

    fn is_full_screen(&self) -> bool {
        self.full_screen
    }

    fn set_full_screen(&mut self, full_screen: bool) {
        self.full_screen = full_screen;
        if let Some(window) = self.shell.window.as_ref() {
            let mode = full_screen.then(|| Fullscreen::Borderless(None));
            window.set_fullscreen(mode);
        }
        info!(
            target: "platform",
            "Display mode: {}",
            if full_screen { "fullscreen" } else { "windowed" }
        );
    }

    fn enable_cursor(&mut self, enable: bool) {
        let Some(window) = self.shell.window.as_ref() else {
            return;
        };

        if enable {
            if let Err(e) = window.set_cursor_grab(CursorGrabMode::None) {
                warn!(target: "platform", "Cursor release failed: {}", e);
            }
            window.set_cursor_visible(true);
        } else {
            // Locked is not supported everywhere; Confined is close enough.
            let grabbed = window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
            if let Err(e) = grabbed {
                warn!(target: "platform", "Cursor capture failed: {}", e);
            }
            window.set_cursor_visible(false);
        }
        trace!(target: "platform", "Cursor {}", if enable { "enabled" } else { "disabled" });
    }

    fn set_number_of_samples(&mut self, samples: SampleCount) {
        if samples == self.samples {
            return;
        }
        self.samples = samples;
        // Takes effect when the multisampled target is next rebuilt.
        info!(target: "platform", "Anti-aliasing set to {}x", samples.as_u32());
    }

    //--- Cursor Input -----------------------------------------------------

    fn mouse_moved(&self) -> bool {
        self.shell.tracker.mouse_moved()
    }

    fn reset_mouse_moved(&mut self) {
        self.shell.tracker.reset_mouse_moved();
    }

    fn reset_first_move(&mut self) {
        self.shell.tracker.reset_first_move();
    }

    fn cursor_x_offset(&self) -> f32 {
        self.shell.tracker.cursor_x_offset()
    }

    fn cursor_y_offset(&self) -> f32 {
        self.shell.tracker.cursor_y_offset()
    }

    //--- Scroll Input -----------------------------------------------------

    fn scroll_wheel_moved(&self) -> bool {
        self.shell.tracker.scroll_wheel_moved()
    }

    fn reset_scroll_wheel_moved(&mut self) {
        self.shell.tracker.reset_scroll_wheel_moved();
    }

    fn scroll_y_offset(&self) -> f32 {
        self.shell.tracker.scroll_y_offset()
    }

    //--- Lifecycle --------------------------------------------------------

    fn set_should_close(&mut self, should_close: bool) {
        self.should_close = should_close;
    }

    fn should_close(&self) -> bool {
        self.should_close || self.shell.close_requested
    }

    //--- Present Cycle ----------------------------------------------------

    fn clear_and_bind_multisample_framebuffer(&mut self) {
        trace!(
            target: "platform",
            "Binding {}x multisampled render target",
            self.samples.as_u32()
        );
    }

    fn resolve_multisample_framebuffer(&mut self) {
        trace!(target: "platform", "Resolving multisampled render target");
    }

    fn swap_buffers(&mut self) {
        if let Some(window) = self.shell.window.as_ref() {
            window.pre_present_notify();
            window.request_redraw();
        }
    }

    fn poll_events(&mut self) {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.shell);

        if let PumpStatus::Exit(code) = status {
            debug!(target: "platform", "Event loop exited with code {}", code);
            self.should_close = true;
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

// Event loops need a display server, so PlatformWindow itself is not
// constructed here; event translation is covered in event_mapper and the
// tracker, policy in the states (against mock windows).
