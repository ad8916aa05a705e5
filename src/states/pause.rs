//=========================================================================
// Pause State
//
// Freezes gameplay: no camera input, no scene redraw. The last
// presented frame stays on screen; only the quit and unpause keys are
// observed, and event polling keeps running so those keys arrive.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::input::KeyCode;
use crate::core::state::{State, StateStatus, TransitionQueue};
use crate::core::window::Window;

//=== Key Bindings ========================================================

const QUIT_KEY: KeyCode = KeyCode::Escape;
const UNPAUSE_KEY: KeyCode = KeyCode::KeyP;

/// Name under which the play state is registered.
pub const PLAY_STATE: &str = "play";

//=== PauseState ==========================================================

pub struct PauseState {
    transitions: Rc<RefCell<TransitionQueue>>,
    window: Rc<RefCell<dyn Window>>,
}

impl PauseState {
    pub fn new(
        transitions: Rc<RefCell<TransitionQueue>>,
        window: Rc<RefCell<dyn Window>>,
    ) -> Self {
        Self { transitions, window }
    }
}

impl State for PauseState {
    fn on_enter(&mut self) {
        debug!(target: "state", "Entering pause state");
    }

    fn process_input(&mut self, _delta_time: f32) {
        let mut window = self.window.borrow_mut();

        // Close the application
        if window.key_is_pressed(QUIT_KEY) {
            window.set_should_close(true);
        }

        // Resume the game
        if window.key_is_pressed(UNPAUSE_KEY) && !window.key_has_been_processed(UNPAUSE_KEY) {
            window.set_key_as_processed(UNPAUSE_KEY);
            self.transitions.borrow_mut().request(PLAY_STATE);
        }
    }

    fn update(&mut self, _delta_time: f32) -> StateStatus {
        StateStatus::Continue
    }

    fn render(&mut self) {
        let mut window = self.window.borrow_mut();

        // Keep presenting the frozen frame; poll so unpause can arrive
        window.swap_buffers();
        window.poll_events();
    }

    fn on_exit(&mut self) {
        debug!(target: "state", "Exiting pause state");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::InputTracker;
    use crate::core::window::SampleCount;

    //--- Mock Window ------------------------------------------------------

    struct MockWindow {
        tracker: InputTracker,
        should_close: bool,
        call_order: Vec<&'static str>,
    }

    impl MockWindow {
        fn new() -> Self {
            Self {
                tracker: InputTracker::new(),
                should_close: false,
                call_order: Vec::new(),
            }
        }
    }

    impl Window for MockWindow {
        fn key_is_pressed(&self, key: KeyCode) -> bool {
            self.tracker.key_is_pressed(key)
        }

        fn key_has_been_processed(&self, key: KeyCode) -> bool {
            self.tracker.key_has_been_processed(key)
        }

        fn set_key_as_processed(&mut self, key: KeyCode) {
            self.tracker.set_key_as_processed(key);
        }

        fn is_full_screen(&self) -> bool {
            false
        }

        fn set_full_screen(&mut self, _full_screen: bool) {}

        fn enable_cursor(&mut self, _enable: bool) {}

        fn set_number_of_samples(&mut self, _samples: SampleCount) {}

        fn mouse_moved(&self) -> bool {
            self.tracker.mouse_moved()
        }

        fn reset_mouse_moved(&mut self) {
            self.tracker.reset_mouse_moved();
        }

        fn reset_first_move(&mut self) {
            self.tracker.reset_first_move();
        }

        fn cursor_x_offset(&self) -> f32 {
            self.tracker.cursor_x_offset()
        }

        fn cursor_y_offset(&self) -> f32 {
            self.tracker.cursor_y_offset()
        }

        fn scroll_wheel_moved(&self) -> bool {
            self.tracker.scroll_wheel_moved()
        }

        fn reset_scroll_wheel_moved(&mut self) {
            self.tracker.reset_scroll_wheel_moved();
        }

        fn scroll_y_offset(&self) -> f32 {
            self.tracker.scroll_y_offset()
        }

        fn set_should_close(&mut self, should_close: bool) {
            self.should_close = should_close;
        }

        fn should_close(&self) -> bool {
            self.should_close
        }

        fn clear_and_bind_multisample_framebuffer(&mut self) {
            self.call_order.push("bind_msaa");
        }

        fn resolve_multisample_framebuffer(&mut self) {
            self.call_order.push("resolve");
        }

        fn swap_buffers(&mut self) {
            self.call_order.push("swap");
        }

        fn poll_events(&mut self) {
            self.call_order.push("poll");
        }
    }

    fn harness() -> (PauseState, Rc<RefCell<MockWindow>>, Rc<RefCell<TransitionQueue>>) {
        let window = Rc::new(RefCell::new(MockWindow::new()));
        let transitions = Rc::new(RefCell::new(TransitionQueue::new()));
        let dyn_window: Rc<RefCell<dyn Window>> = window.clone();
        let pause = PauseState::new(Rc::clone(&transitions), dyn_window);
        (pause, window, transitions)
    }

    //=====================================================================
    // Input Tests
    //=====================================================================

    /// Quit works while paused.
    #[test]
    fn quit_key_requests_close() {
        let (mut pause, window, _transitions) = harness();

        window.borrow_mut().tracker.key_down(QUIT_KEY);
        pause.process_input(0.016);

        assert!(window.borrow().should_close());
    }

    /// Holding unpause queues exactly one transition back to play.
    #[test]
    fn unpause_queues_one_transition() {
        let (mut pause, window, transitions) = harness();

        window.borrow_mut().tracker.key_down(UNPAUSE_KEY);
        for _ in 0..4 {
            pause.process_input(0.016);
        }

        assert_eq!(transitions.borrow_mut().take(), vec![PLAY_STATE.to_string()]);
    }

    /// Camera and display keys are dead while paused: nothing but quit
    /// and unpause has any effect.
    #[test]
    fn other_keys_are_ignored() {
        let (mut pause, window, transitions) = harness();

        {
            let mut window = window.borrow_mut();
            window.tracker.key_down(KeyCode::KeyW);
            window.tracker.key_down(KeyCode::KeyC);
            window.tracker.key_down(KeyCode::Digit8);
            window.tracker.cursor_moved(0.0, 0.0);
            window.tracker.cursor_moved(100.0, 100.0);
        }
        pause.process_input(0.016);

        assert!(transitions.borrow_mut().take().is_empty());
        assert!(!window.borrow().should_close());
        assert!(window.borrow().mouse_moved(), "Pause does not consume mouse deltas");
    }

    //=====================================================================
    // Render Tests
    //=====================================================================

    /// Pause does not redraw the scene; it only presents and polls.
    #[test]
    fn render_presents_without_redraw() {
        let (mut pause, window, _transitions) = harness();
        pause.render();

        assert_eq!(window.borrow().call_order, vec!["swap", "poll"]);
    }
}
