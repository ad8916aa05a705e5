//=========================================================================
// State Machine
//
// Name-indexed state registry with a single active state.
//
// States are registered once under a name and activated by transition
// requests. Lifecycle ordering on a switch is fixed: the outgoing
// state's on_exit runs before the incoming state's on_enter.
//
// Transition requests are queued (see TransitionQueue) and applied only
// via apply_transitions(), which the driver calls between frames. A
// state is therefore never deactivated mid-phase.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::{State, StateStatus, TransitionQueue};

//=== StateMachine ========================================================

/// Owns all registered states and drives the active one through its
/// per-frame lifecycle.
pub struct StateMachine {
    states: HashMap<String, Box<dyn State>>,
    active: Option<String>,
    transitions: Rc<RefCell<TransitionQueue>>,
}

impl StateMachine {
    //--- Construction -----------------------------------------------------

    /// Creates an empty machine sharing the given transition queue with
    /// its future states.
    pub fn new(transitions: Rc<RefCell<TransitionQueue>>) -> Self {
        Self {
            states: HashMap::new(),
            active: None,
            transitions,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a state under a name.
    ///
    /// Registering the same name twice replaces the previous state.
    pub fn register(&mut self, name: impl Into<String>, state: Box<dyn State>) {
        let name = name.into();
        if self.states.insert(name.clone(), state).is_some() {
            warn!("State \"{}\" was already registered and has been replaced", name);
        }
    }

    /// Selects the initial state without entering it; `start()` performs
    /// the first `on_enter`.
    pub fn set_initial(&mut self, name: &str) {
        if !self.states.contains_key(name) {
            warn!("Initial state \"{}\" is not registered", name);
            return;
        }
        self.active = Some(name.to_string());
    }

    /// Enters the initial state.
    pub fn start(&mut self) {
        if let Some(name) = self.active.clone() {
            debug!("Entering initial state \"{}\"", name);
            if let Some(state) = self.states.get_mut(&name) {
                state.on_enter();
            }
        } else {
            warn!("Starting state machine with no initial state set");
        }
    }

    //--- Frame Lifecycle --------------------------------------------------

    /// Runs one frame of the active state: input, update, render.
    ///
    /// Returns the update phase's status so the driver can honor a
    /// cooperative exit request.
    pub fn tick(&mut self, delta_time: f32) -> StateStatus {
        let Some(name) = self.active.as_ref() else {
            return StateStatus::Continue;
        };
        let Some(state) = self.states.get_mut(name) else {
            return StateStatus::Continue;
        };

        state.process_input(delta_time);
        let status = state.update(delta_time);
        state.render();
        status
    }

    /// Applies all queued transition requests, in FIFO order.
    ///
    /// Must only be called at a frame boundary.
    pub fn apply_transitions(&mut self) {
        let requests = self.transitions.borrow_mut().take();
        for target in requests {
            self.change_state(&target);
        }
    }

    /// Exits the active state. Called once on shutdown.
    pub fn shutdown(&mut self) {
        if let Some(name) = self.active.take() {
            debug!("Exiting final state \"{}\"", name);
            if let Some(state) = self.states.get_mut(&name) {
                state.on_exit();
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Switches the active state by name: exit old, enter new.
    ///
    /// Unknown targets are logged and ignored; the current state stays
    /// active. Transitioning to the already-active state re-runs its
    /// exit/enter pair.
    fn change_state(&mut self, target: &str) {
        if !self.states.contains_key(target) {
            warn!("Transition to unregistered state \"{}\" ignored", target);
            return;
        }

        if let Some(old) = self.active.take() {
            debug!("State transition \"{}\" -> \"{}\"", old, target);
            if let Some(state) = self.states.get_mut(&old) {
                state.on_exit();
            }
        } else {
            debug!("State transition <none> -> \"{}\"", target);
        }

        self.active = Some(target.to_string());
        if let Some(state) = self.states.get_mut(target) {
            state.on_enter();
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
