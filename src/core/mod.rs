//=========================================================================
// Core Systems
//
// Platform-independent engine systems shared by all states:
//
// - input:  poll-side input state (held keys, latches, deltas)
// - window: the Window contract states program against
// - camera: free/fixed fly camera
// - state:  the State lifecycle trait, transition queue, state machine
// - render: scene draw-call hook
// - audio:  shared sound engine handle
//
// Collaborators are shared between states as Rc<RefCell<...>>; lifetime
// is bounded by the application, not by any one state.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod audio;
pub mod camera;
pub mod input;
pub mod render;
pub mod state;
pub mod window;

//=== Public API ==========================================================

pub use audio::SoundEngine;
pub use camera::{Camera, MovementDirection};
pub use input::{InputTracker, KeyCode, KeyLatch};
pub use render::Renderer;
pub use state::{State, StateMachine, StateStatus, TransitionQueue};
pub use window::{SampleCount, Window};
