//=========================================================================
// Play State
//
// The gameplay state: translates per-frame input signals into display
// and camera configuration changes, state transitions, and the present
// cycle.
//
// Input policy, evaluated in a fixed order each frame:
//   1. Quit (held)               → request application close
//   2. Fullscreen toggle (latched) → flip mode, re-derive cursor policy
//   3. AA sample select (latched)  → request 1/2/4/8 samples
//   4. Pause (latched)             → queue transition to "pause"
//   5. Camera reset (held)         → idempotent snap to the home pose
//   6. Camera mode toggle (latched) → flip free/fixed, re-derive cursor
//   7. Free-camera movement/look/zoom (only while the camera is free)
//
// Cursor rule: the cursor is visible only when windowed with a fixed
// camera. The rule is a pure function of (fullscreen, camera free) and
// is re-derived at every mutation site rather than tracked separately.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;
use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::camera::{Camera, MovementDirection};
use crate::core::input::KeyCode;
use crate::core::state::{State, StateStatus, TransitionQueue};
use crate::core::window::{SampleCount, Window};
use crate::core::{Renderer, SoundEngine};

//=== Key Bindings ========================================================

const QUIT_KEY: KeyCode = KeyCode::Escape;
const FULL_SCREEN_KEY: KeyCode = KeyCode::KeyF;
const PAUSE_KEY: KeyCode = KeyCode::KeyP;
const RESET_CAMERA_KEY: KeyCode = KeyCode::KeyR;
const CAMERA_MODE_KEY: KeyCode = KeyCode::KeyC;

const MOVE_FORWARD_KEY: KeyCode = KeyCode::KeyW;
const MOVE_BACKWARD_KEY: KeyCode = KeyCode::KeyS;
const MOVE_LEFT_KEY: KeyCode = KeyCode::KeyA;
const MOVE_RIGHT_KEY: KeyCode = KeyCode::KeyD;

/// Name under which the pause state is registered.
pub const PAUSE_STATE: &str = "pause";

//=== Camera Home Pose ====================================================

const HOME_POSITION: Vec3 = Vec3::new(0.0, 0.0, 95.0);
const HOME_WORLD_UP: Vec3 = Vec3::Y;
const HOME_YAW_DEG: f32 = 0.0;
const HOME_PITCH_DEG: f32 = 0.0;
const HOME_FOV_DEG: f32 = 45.0;

//=== Cursor Policy =======================================================

/// Whether the cursor should be visible for a given display/camera mode.
///
/// Visible only when windowed with a fixed camera; every other
/// combination hides it. Total over both inputs so the rule can be
/// re-derived from state alone at any mutation site.
fn cursor_visible(full_screen: bool, camera_free: bool) -> bool {
    !full_screen && !camera_free
}

//=== PlayState ===========================================================

/// The gameplay state.
///
/// Holds shared, reference-counted handles to its collaborators; all
/// mutated state lives in the Window and Camera, so whatever this state
/// configures remains visible to whichever state is entered next.
pub struct PlayState {
    transitions: Rc<RefCell<TransitionQueue>>,
    window: Rc<RefCell<dyn Window>>,
    // Carried for parity with states that drive audio; unused here.
    #[allow(dead_code)]
    sound_engine: Rc<RefCell<SoundEngine>>,
    camera: Rc<RefCell<Camera>>,
    renderer: Rc<RefCell<Renderer>>,
}

impl PlayState {
    //--- Construction -----------------------------------------------------

    pub fn new(
        transitions: Rc<RefCell<TransitionQueue>>,
        window: Rc<RefCell<dyn Window>>,
        sound_engine: Rc<RefCell<SoundEngine>>,
        camera: Rc<RefCell<Camera>>,
        renderer: Rc<RefCell<Renderer>>,
    ) -> Self {
        Self {
            transitions,
            window,
            sound_engine,
            camera,
            renderer,
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Re-derives and applies the cursor policy after a display-mode
    /// change. When the cursor ends up hidden with a free camera, the
    /// mode switch has teleported the OS cursor, so first-move tracking
    /// is reset to swallow the synthetic jump delta.
    fn apply_cursor_policy(window: &mut dyn Window, camera_free: bool) {
        let visible = cursor_visible(window.is_full_screen(), camera_free);
        window.enable_cursor(visible);
        if camera_free {
            window.reset_first_move();
        }
    }

    /// Snaps the camera back to the home pose.
    fn reset_camera(camera: &mut Camera) {
        camera.reposition(
            HOME_POSITION,
            HOME_WORLD_UP,
            HOME_YAW_DEG,
            HOME_PITCH_DEG,
            HOME_FOV_DEG,
        );
    }
}

//--- State Implementation ------------------------------------------------

impl State for PlayState {
    fn on_enter(&mut self) {
        debug!(target: "state", "Entering play state");
    }

    fn process_input(&mut self, delta_time: f32) {
        let mut window = self.window.borrow_mut();
        let mut camera = self.camera.borrow_mut();

        // Close the application
        if window.key_is_pressed(QUIT_KEY) {
            window.set_should_close(true);
        }

        // Switch between fullscreen and windowed mode
        if window.key_is_pressed(FULL_SCREEN_KEY)
            && !window.key_has_been_processed(FULL_SCREEN_KEY)
        {
            window.set_key_as_processed(FULL_SCREEN_KEY);
            let full_screen = !window.is_full_screen();
            window.set_full_screen(full_screen);
            Self::apply_cursor_policy(&mut *window, camera.is_free());
        }

        // Select the anti-aliasing level
        if window.key_is_pressed(KeyCode::Digit1)
            && !window.key_has_been_processed(KeyCode::Digit1)
        {
            window.set_key_as_processed(KeyCode::Digit1);
            window.set_number_of_samples(SampleCount::X1);
        } else if window.key_is_pressed(KeyCode::Digit2)
            && !window.key_has_been_processed(KeyCode::Digit2)
        {
            window.set_key_as_processed(KeyCode::Digit2);
            window.set_number_of_samples(SampleCount::X2);
        } else if window.key_is_pressed(KeyCode::Digit4)
            && !window.key_has_been_processed(KeyCode::Digit4)
        {
            window.set_key_as_processed(KeyCode::Digit4);
            window.set_number_of_samples(SampleCount::X4);
        } else if window.key_is_pressed(KeyCode::Digit8)
            && !window.key_has_been_processed(KeyCode::Digit8)
        {
            window.set_key_as_processed(KeyCode::Digit8);
            window.set_number_of_samples(SampleCount::X8);
        }

        // Pause the game
        if window.key_is_pressed(PAUSE_KEY) && !window.key_has_been_processed(PAUSE_KEY) {
            window.set_key_as_processed(PAUSE_KEY);
            self.transitions.borrow_mut().request(PAUSE_STATE);
        }

        // Reset the camera; held is fine, the snap is idempotent
        if window.key_is_pressed(RESET_CAMERA_KEY) {
            Self::reset_camera(&mut camera);
        }

        // Switch between a free and a fixed camera
        if window.key_is_pressed(CAMERA_MODE_KEY)
            && !window.key_has_been_processed(CAMERA_MODE_KEY)
        {
            window.set_key_as_processed(CAMERA_MODE_KEY);
            let free = !camera.is_free();
            camera.set_free(free);

            // Fullscreen keeps the cursor hidden either way
            if !window.is_full_screen() {
                window.enable_cursor(cursor_visible(false, camera.is_free()));
            }

            // Discard deltas accumulated before the mode switch
            window.reset_mouse_moved();
        }

        // Move and orient the camera
        if camera.is_free() {
            if window.key_is_pressed(MOVE_FORWARD_KEY) {
                camera.process_keyboard_input(MovementDirection::Forward, delta_time);
            }
            if window.key_is_pressed(MOVE_BACKWARD_KEY) {
                camera.process_keyboard_input(MovementDirection::Backward, delta_time);
            }
            if window.key_is_pressed(MOVE_LEFT_KEY) {
                camera.process_keyboard_input(MovementDirection::Left, delta_time);
            }
            if window.key_is_pressed(MOVE_RIGHT_KEY) {
                camera.process_keyboard_input(MovementDirection::Right, delta_time);
            }

            if window.mouse_moved() {
                camera.process_mouse_movement(
                    window.cursor_x_offset(),
                    window.cursor_y_offset(),
                );
                window.reset_mouse_moved();
            }

            if window.scroll_wheel_moved() {
                camera.process_scroll_wheel_movement(window.scroll_y_offset());
                window.reset_scroll_wheel_moved();
            }
        }
    }

    /// Reserved for simulation; see [`StateStatus`].
    fn update(&mut self, _delta_time: f32) -> StateStatus {
        StateStatus::Continue
    }

    fn render(&mut self) {
        let mut window = self.window.borrow_mut();

        window.clear_and_bind_multisample_framebuffer();
        self.renderer.borrow_mut().draw_scene(&self.camera.borrow());
        window.resolve_multisample_framebuffer();
        window.swap_buffers();

        // Last, so next frame's input phase sees freshly polled state
        window.poll_events();
    }

    fn on_exit(&mut self) {
        debug!(target: "state", "Exiting play state");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
