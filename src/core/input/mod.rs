//=========================================================================
// Input Subsystem
//
// Poll-based input state for the frame loop.
//
// The platform layer pushes events into an [`InputTracker`]; states read
// it back every frame through the Window contract. Discrete actions use
// per-key [`KeyLatch`] edge detectors so one physical press fires one
// action no matter how many frames the key stays down.
//
//=========================================================================

//=== Submodules ==========================================================

mod keys;
mod latch;
mod tracker;

//=== Public API ==========================================================

pub use keys::KeyCode;
pub use latch::KeyLatch;
pub use tracker::InputTracker;
