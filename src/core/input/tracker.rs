//=========================================================================
// Input Tracker
//
// Poll-side input state shared by every Window implementation.
//
// Architecture:
//   platform events → key_down()/key_up()/cursor_moved()/scroll_moved()
//                   → held set + latches + accumulated offsets
//                   → polled by states via the Window contract
//
// The tracker owns three kinds of state:
// - Held keys: a set, fed by down/up events, queried every frame
// - Per-key latches: edge detectors for discrete actions; the consumer
//   latches a key after acting on it, the tracker releases the latch
//   when the key goes up
// - Continuous deltas: cursor and scroll offsets, accumulated between
//   polls and cleared explicitly by the consumer once applied
//
// First-move suppression: after a cursor-position discontinuity (window
// mode switch, initial event), the first cursor event re-anchors the
// reference position instead of producing a large synthetic delta.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::{HashMap, HashSet};

//=== Internal Dependencies ===============================================

use super::{KeyCode, KeyLatch};

//=== InputTracker ========================================================

/// Tracks held keys, per-key processed latches, and accumulated cursor and
/// scroll deltas between event polls.
pub struct InputTracker {
    //--- Keyboard ---------------------------------------------------------
    keys_down: HashSet<KeyCode>,
    latches: HashMap<KeyCode, KeyLatch>,

    //--- Cursor -----------------------------------------------------------
    first_move: bool,
    last_cursor: (f32, f32),
    cursor_offset: (f32, f32),
    mouse_moved: bool,

    //--- Scroll Wheel -----------------------------------------------------
    scroll_y_offset: f32,
    scroll_wheel_moved: bool,
}

impl InputTracker {
    /// Creates an empty tracker with first-move suppression armed.
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            latches: HashMap::new(),
            first_move: true,
            last_cursor: (0.0, 0.0),
            cursor_offset: (0.0, 0.0),
            mouse_moved: false,
            scroll_y_offset: 0.0,
            scroll_wheel_moved: false,
        }
    }

    //--- Event Intake -----------------------------------------------------

    /// Records a key press.
    pub fn key_down(&mut self, key: KeyCode) {
        if key == KeyCode::Unidentified {
            return;
        }
        self.keys_down.insert(key);
    }

    /// Records a key release and re-arms its latch.
    pub fn key_up(&mut self, key: KeyCode) {
        self.keys_down.remove(&key);
        if let Some(latch) = self.latches.get_mut(&key) {
            latch.release();
        }
    }

    /// Records a cursor position in screen coordinates.
    ///
    /// Offsets accumulate until [`reset_mouse_moved`](Self::reset_mouse_moved)
    /// is called. The y offset is inverted (upward motion is positive) so it
    /// feeds pitch directly. The first event after a discontinuity only
    /// re-anchors the reference position, yielding a zero delta.
    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        if self.first_move {
            self.last_cursor = (x, y);
            self.first_move = false;
        }

        self.cursor_offset.0 += x - self.last_cursor.0;
        self.cursor_offset.1 += self.last_cursor.1 - y;
        self.last_cursor = (x, y);
        self.mouse_moved = true;
    }

    /// Records scroll wheel motion (accumulates within a frame).
    pub fn scroll_moved(&mut self, y_offset: f32) {
        self.scroll_y_offset += y_offset;
        self.scroll_wheel_moved = true;
    }

    //--- Keyboard Queries -------------------------------------------------

    /// Returns `true` while the key is held.
    pub fn key_is_pressed(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns `true` if the current press of `key` was already consumed.
    pub fn key_has_been_processed(&self, key: KeyCode) -> bool {
        self.latches.get(&key).is_some_and(|latch| latch.is_latched())
    }

    /// Marks the current press of `key` as consumed.
    ///
    /// The latch re-arms when the key is released.
    pub fn set_key_as_processed(&mut self, key: KeyCode) {
        self.latches.entry(key).or_default().fire();
    }

    //--- Cursor Queries ---------------------------------------------------

    /// Returns `true` if cursor motion was recorded since the last reset.
    pub fn mouse_moved(&self) -> bool {
        self.mouse_moved
    }

    /// Accumulated horizontal cursor offset since the last reset.
    pub fn cursor_x_offset(&self) -> f32 {
        self.cursor_offset.0
    }

    /// Accumulated vertical cursor offset since the last reset (up positive).
    pub fn cursor_y_offset(&self) -> f32 {
        self.cursor_offset.1
    }

    /// Clears the moved flag and the accumulated cursor offsets.
    pub fn reset_mouse_moved(&mut self) {
        self.mouse_moved = false;
        self.cursor_offset = (0.0, 0.0);
    }

    /// Arms first-move suppression so the next cursor event re-anchors the
    /// reference position instead of producing a jump delta.
    pub fn reset_first_move(&mut self) {
        self.first_move = true;
    }

    //--- Scroll Queries ---------------------------------------------------

    /// Returns `true` if scroll motion was recorded since the last reset.
    pub fn scroll_wheel_moved(&self) -> bool {
        self.scroll_wheel_moved
    }

    /// Accumulated scroll offset since the last reset.
    pub fn scroll_y_offset(&self) -> f32 {
        self.scroll_y_offset
    }

    /// Clears the scroll flag and the accumulated offset.
    pub fn reset_scroll_wheel_moved(&mut self) {
        self.scroll_wheel_moved = false;
        self.scroll_y_offset = 0.0;
    }
}

//--- Trait Implementations -----------------------------------------------

impl Default for InputTracker {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
