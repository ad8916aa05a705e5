//=========================================================================
// Game States
//
// The shipped states: play (gameplay input policy and present cycle)
// and pause (frozen frame, quit/unpause only). Both are registered with
// the state machine by name; transitions between them go through the
// shared TransitionQueue.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod pause;
pub mod play;

//=== Public API ==========================================================

pub use pause::{PauseState, PLAY_STATE};
pub use play::{PlayState, PAUSE_STATE};
