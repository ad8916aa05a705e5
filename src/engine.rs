//=========================================================================
// Vantage Engine
//
// Main entry point and coordinator for the engine.
//
// Architecture:
// ```text
//     EngineBuilder ──build()──> Engine ──run()──> [Frame Loop]
//         │                        │
//         ├─ with_title()          ├─ owns the state machine
//         ├─ with_inner_size()     └─ shares Window/Camera/Sound/
//         └─ with_samples()           Renderer handles with states
// ```
//
// Everything runs on one thread. Each frame the active state's input,
// update, and render phases run back to back; queued state transitions
// and the close flag are honored only between frames.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use glam::Vec3;
use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::state::{State, StateStatus, TransitionQueue};
use crate::core::window::{SampleCount, Window};
use crate::core::{Camera, Renderer, SoundEngine, StateMachine};
use crate::platform::{PlatformError, PlatformWindow};
use crate::states::{PauseState, PlayState, PAUSE_STATE, PLAY_STATE};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Title**: "Vantage Engine"
/// - **Inner size**: 1280x720
/// - **Samples**: 4x multisampling
///
/// # Examples
///
/// ```no_run
/// use vantage_engine::EngineBuilder;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut engine = EngineBuilder::new()
///     .with_title("My Game")
///     .with_inner_size(1920, 1080)
///     .build()?;
///
/// engine.install_default_states();
/// engine.run();
/// # Ok(())
/// # }
/// ```
pub struct EngineBuilder {
    title: String,
    inner_size: (u32, u32),
    samples: SampleCount,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            title: "Vantage Engine".to_string(),
            inner_size: (1280, 720),
            samples: SampleCount::X4,
        }
    }

    /// Sets the window title.
    ///
    /// # Panics
    ///
    /// Panics if `title` is empty.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        assert!(!title.is_empty(), "Window title must not be empty");
        self.title = title;
        self
    }

    /// Sets the windowed-mode inner size in logical pixels.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_inner_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be positive, got {}x{}", width, height);
        self.inner_size = (width, height);
        self
    }

    /// Sets the initial multisample anti-aliasing level.
    ///
    /// Default: 4x
    pub fn with_samples(mut self, samples: SampleCount) -> Self {
        self.samples = samples;
        self
    }

    /// Builds the engine instance.
    ///
    /// Creates the OS window and all shared collaborators. Register
    /// states (or call [`Engine::install_default_states`]) before
    /// [`Engine::run`].
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created.
    pub fn build(self) -> Result<Engine, PlatformError> {
        info!(
            "Building engine (\"{}\", {}x{}, {}x AA)",
            self.title,
            self.inner_size.0,
            self.inner_size.1,
            self.samples.as_u32()
        );

        let window = PlatformWindow::new(
            &self.title,
            self.inner_size.0,
            self.inner_size.1,
            self.samples,
        )?;

        Ok(Engine::from_window(Rc::new(RefCell::new(window))))
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Vantage Engine runtime.
///
/// Owns the state machine and the shared collaborator handles; states
/// receive clones of the handles at registration time. Create via
/// [`EngineBuilder`].
pub struct Engine {
    window: Rc<RefCell<dyn Window>>,
    camera: Rc<RefCell<Camera>>,
    sound_engine: Rc<RefCell<SoundEngine>>,
    renderer: Rc<RefCell<Renderer>>,
    transitions: Rc<RefCell<TransitionQueue>>,
    machine: StateMachine,
}

impl Engine {
    //--- Construction -----------------------------------------------------

    /// Assembles an engine around an existing window implementation.
    ///
    /// [`EngineBuilder::build`] uses this with the shipping platform
    /// window; tests and headless drivers can substitute their own.
    pub fn from_window(window: Rc<RefCell<dyn Window>>) -> Self {
        let transitions = Rc::new(RefCell::new(TransitionQueue::new()));

        // Home pose: back on +Z looking down -Z at the scene origin.
        let camera = Rc::new(RefCell::new(Camera::new(
            Vec3::new(0.0, 0.0, 95.0),
            Vec3::Y,
            0.0,
            0.0,
            45.0,
        )));

        Self {
            window,
            camera,
            sound_engine: Rc::new(RefCell::new(SoundEngine::new())),
            renderer: Rc::new(RefCell::new(Renderer::new())),
            machine: StateMachine::new(Rc::clone(&transitions)),
            transitions,
        }
    }

    //--- Collaborator Handles ---------------------------------------------

    pub fn window(&self) -> Rc<RefCell<dyn Window>> {
        Rc::clone(&self.window)
    }

    pub fn camera(&self) -> Rc<RefCell<Camera>> {
        Rc::clone(&self.camera)
    }

    pub fn sound_engine(&self) -> Rc<RefCell<SoundEngine>> {
        Rc::clone(&self.sound_engine)
    }

    pub fn renderer(&self) -> Rc<RefCell<Renderer>> {
        Rc::clone(&self.renderer)
    }

    pub fn transitions(&self) -> Rc<RefCell<TransitionQueue>> {
        Rc::clone(&self.transitions)
    }

    //--- State Registration -----------------------------------------------

    /// Registers a state under a name.
    pub fn register_state(&mut self, name: impl Into<String>, state: Box<dyn State>) {
        self.machine.register(name, state);
    }

    /// Selects the state the frame loop starts in.
    pub fn set_initial_state(&mut self, name: &str) {
        self.machine.set_initial(name);
    }

    /// Registers the shipped play and pause states and starts in play.
    pub fn install_default_states(&mut self) {
        let play = PlayState::new(
            self.transitions(),
            self.window(),
            self.sound_engine(),
            self.camera(),
            self.renderer(),
        );
        let pause = PauseState::new(self.transitions(), self.window());

        self.register_state(PLAY_STATE, Box::new(play));
        self.register_state(PAUSE_STATE, Box::new(pause));
        self.set_initial_state(PLAY_STATE);
    }

    //--- Execution --------------------------------------------------------

    /// Runs the frame loop until a state or the OS requests shutdown.
    ///
    /// # Lifecycle
    ///
    /// 1. Enters the initial state
    /// 2. Per frame: measures delta time, runs the active state's
    ///    input/update/render phases
    /// 3. Between frames: applies queued transitions, checks the close
    ///    flag and the update status
    /// 4. Exits the final state
    pub fn run(mut self) {
        info!("Starting engine runtime");
        self.machine.start();

        let mut last_frame = Instant::now();
        loop {
            let now = Instant::now();
            let delta_time = now.duration_since(last_frame).as_secs_f32();
            last_frame = now;

            let status = self.machine.tick(delta_time);
            if status == StateStatus::Exit {
                debug!("Active state requested exit");
                break;
            }

            // Frame boundary: transitions first, then the close flag.
            self.machine.apply_transitions();

            if self.window.borrow().should_close() {
                debug!("Window close requested, leaving frame loop");
                break;
            }
        }

        self.machine.shutdown();
        info!("Engine shutdown complete");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;

    //--- Null Window ------------------------------------------------------

    /// Minimal non-OS window for driving the engine in tests.
    struct NullWindow {
        should_close: bool,
        frames_polled: u32,
    }

    impl NullWindow {
        fn new() -> Self {
            Self { should_close: false, frames_polled: 0 }
        }
    }

    impl Window for NullWindow {
        fn key_is_pressed(&self, _key: KeyCode) -> bool {
            false
        }

        fn key_has_been_processed(&self, _key: KeyCode) -> bool {
            false
        }

        fn set_key_as_processed(&mut self, _key: KeyCode) {}

        fn is_full_screen(&self) -> bool {
            false
        }

        fn set_full_screen(&mut self, _full_screen: bool) {}

        fn enable_cursor(&mut self, _enable: bool) {}

        fn set_number_of_samples(&mut self, _samples: SampleCount) {}

        fn mouse_moved(&self) -> bool {
            false
        }

        fn reset_mouse_moved(&mut self) {}

        fn reset_first_move(&mut self) {}

        fn cursor_x_offset(&self) -> f32 {
            0.0
        }

        fn cursor_y_offset(&self) -> f32 {
            0.0
        }

        fn scroll_wheel_moved(&self) -> bool {
            false
        }

        fn reset_scroll_wheel_moved(&mut self) {}

        fn scroll_y_offset(&self) -> f32 {
            0.0
        }

        fn set_should_close(&mut self, should_close: bool) {
            self.should_close = should_close;
        }

        fn should_close(&self) -> bool {
            self.should_close
        }

        fn clear_and_bind_multisample_framebuffer(&mut self) {}

        fn resolve_multisample_framebuffer(&mut self) {}

        fn swap_buffers(&mut self) {}

        fn poll_events(&mut self) {
            self.frames_polled += 1;
        }
    }

    fn null_engine() -> (Engine, Rc<RefCell<NullWindow>>) {
        let window = Rc::new(RefCell::new(NullWindow::new()));
        let dyn_window: Rc<RefCell<dyn Window>> = window.clone();
        (Engine::from_window(dyn_window), window)
    }

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.title, "Vantage Engine");
        assert_eq!(builder.inner_size, (1280, 720));
        assert_eq!(builder.samples, SampleCount::X4);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let builder = EngineBuilder::new()
            .with_title("Test")
            .with_inner_size(640, 480)
            .with_samples(SampleCount::X8);

        assert_eq!(builder.title, "Test");
        assert_eq!(builder.inner_size, (640, 480));
        assert_eq!(builder.samples, SampleCount::X8);
    }

    #[test]
    #[should_panic(expected = "Window title must not be empty")]
    fn builder_rejects_empty_title() {
        EngineBuilder::new().with_title("");
    }

    #[test]
    #[should_panic(expected = "Window size must be positive")]
    fn builder_rejects_zero_size() {
        EngineBuilder::new().with_inner_size(0, 720);
    }

    //=====================================================================
    // Engine Tests
    //=====================================================================

    /// The frame loop exits once the window requests close, after at
    /// least one full frame.
    #[test]
    fn run_exits_on_close_request() {
        let (mut engine, window) = null_engine();
        engine.install_default_states();

        window.borrow_mut().set_should_close(true);
        engine.run();

        assert_eq!(window.borrow().frames_polled, 1, "Exactly one frame before close");
    }

    /// Default states register play and pause; play renders first.
    #[test]
    fn default_states_start_in_play() {
        let (mut engine, window) = null_engine();
        engine.install_default_states();

        let renderer = engine.renderer();
        window.borrow_mut().set_should_close(true);
        engine.run();

        assert_eq!(
            renderer.borrow().frames_drawn(),
            1,
            "Play state draws the scene; pause would not"
        );
    }

    /// Collaborator handles are shared, not copies.
    #[test]
    fn collaborator_handles_are_shared() {
        let (engine, _window) = null_engine();

        let a = engine.camera();
        let b = engine.camera();
        a.borrow_mut().set_free(true);

        assert!(b.borrow().is_free());
    }
}
