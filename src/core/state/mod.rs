//=========================================================================
// State System
//
// Polymorphic application states and name-addressed transitions.
//
// Architecture:
//   StateMachine
//     ├─ states: HashMap<String, Box<dyn State>>
//     ├─ active: one state at a time
//     └─ transitions: shared TransitionQueue, drained at frame boundaries
//
// Per frame, the active state runs process_input → update → render.
// States request transitions by name into the shared queue; the machine
// applies them between frames, never mid-phase.
//
//=========================================================================

//=== Module Declarations =================================================

mod machine;

//=== Public API ==========================================================

pub use machine::StateMachine;

//=== StateStatus =========================================================

/// Result of a state's update phase.
///
/// Reserved for signaling completion to the driver: every state currently
/// returns `Continue`; `Exit` is honored as a cooperative shutdown
/// request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateStatus {
    /// Keep running this state.
    #[default]
    Continue,

    /// Request application exit at the next frame boundary.
    Exit,
}

//=== State Trait =========================================================

/// Uniform lifecycle every application state implements.
///
/// The driver holds one active state and invokes, per frame:
/// `process_input(dt)` → `update(dt)` → `render()`. `on_enter` and
/// `on_exit` bracket the state's time on top; the machine guarantees
/// `on_exit` of the outgoing state runs before `on_enter` of the
/// incoming one.
pub trait State {
    /// Called when the state becomes active.
    ///
    /// Default implementation does nothing.
    fn on_enter(&mut self) {}

    /// Input-processing phase: polls input and applies policy. No
    /// rendering happens here.
    fn process_input(&mut self, delta_time: f32);

    /// Simulation phase. Reserved; see [`StateStatus`].
    fn update(&mut self, delta_time: f32) -> StateStatus;

    /// Render phase: drives one frame's presentation.
    fn render(&mut self);

    /// Called when the state is deactivated.
    ///
    /// Default implementation does nothing.
    fn on_exit(&mut self) {}
}

//=== TransitionQueue =====================================================

/// Name-addressed state transition requests.
///
/// States push target-state names during their update phases; the state
/// machine drains the queue at the frame boundary. Requests are
/// fire-and-forget: an unknown name is logged and dropped by the machine,
/// and multiple requests in one frame apply in FIFO order (the last one
/// wins).
#[derive(Debug, Default)]
pub struct TransitionQueue {
    queue: Vec<String>,
}

impl TransitionQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a transition to the named state.
    pub fn request(&mut self, target: impl Into<String>) {
        self.queue.push(target.into());
    }

    /// Returns `true` if no transitions are pending.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Takes all pending requests, leaving the queue empty.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.queue)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_default_is_continue() {
        assert_eq!(StateStatus::default(), StateStatus::Continue);
    }

    /// Requests drain in FIFO order and leave the queue empty.
    #[test]
    fn queue_drains_in_order() {
        let mut queue = TransitionQueue::new();
        assert!(queue.is_empty());

        queue.request("pause");
        queue.request("play");
        assert!(!queue.is_empty());

        assert_eq!(queue.take(), vec!["pause".to_string(), "play".to_string()]);
        assert!(queue.is_empty());
    }

    #[test]
    fn take_on_empty_queue_is_empty() {
        let mut queue = TransitionQueue::new();
        assert!(queue.take().is_empty());
    }
}
