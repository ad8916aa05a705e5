//=========================================================================
// Window Contract
//
// The seam between game states and the platform layer.
//
// States never talk to the OS directly: they poll input, flip display
// settings, and drive the present cycle through this trait. The shipping
// implementation is `platform::PlatformWindow`; tests substitute
// recording doubles.
//
// Every operation is total. Requests the underlying platform cannot
// honor (an unsupported sample count, a cursor grab the compositor
// refuses) are absorbed by the implementation and never surface to the
// calling state.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::input::KeyCode;

//=== SampleCount =========================================================

/// Multisample anti-aliasing level.
///
/// The closed set of sample counts the engine accepts. Requests are
/// idempotent: re-requesting the current level is a no-op on the window
/// side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleCount {
    X1,
    X2,
    X4,
    X8,
}

impl SampleCount {
    /// The raw sample count for render-target creation.
    pub fn as_u32(self) -> u32 {
        match self {
            Self::X1 => 1,
            Self::X2 => 2,
            Self::X4 => 4,
            Self::X8 => 8,
        }
    }
}

//=== Window ==============================================================

/// Windowing and input-polling contract consumed by game states.
///
/// Groups four concerns the platform owns on behalf of the states:
///
/// - **Keyboard polling** with per-key processed latches, so discrete
///   actions fire once per physical press
/// - **Display configuration**: fullscreen mode, cursor visibility,
///   multisample level
/// - **Continuous input**: accumulated cursor and scroll offsets with
///   explicit consume-and-clear semantics
/// - **Present cycle**: multisample target binding, resolve, buffer swap,
///   and event polling
pub trait Window {
    //--- Keyboard ---------------------------------------------------------

    /// Returns `true` while `key` is held down.
    fn key_is_pressed(&self, key: KeyCode) -> bool;

    /// Returns `true` if the current press of `key` was already consumed
    /// by a discrete action.
    fn key_has_been_processed(&self, key: KeyCode) -> bool;

    /// Marks the current press of `key` as consumed. The flag clears when
    /// the key is released.
    fn set_key_as_processed(&mut self, key: KeyCode);

    //--- Display Mode -----------------------------------------------------

    /// Returns `true` in fullscreen mode.
    fn is_full_screen(&self) -> bool;

    /// Switches between fullscreen and windowed mode.
    fn set_full_screen(&mut self, full_screen: bool);

    /// Shows (`true`) or hides-and-captures (`false`) the cursor.
    fn enable_cursor(&mut self, enable: bool);

    /// Requests a multisample level for the render target. Takes effect
    /// when the target is next rebuilt; redundant requests are no-ops.
    fn set_number_of_samples(&mut self, samples: SampleCount);

    //--- Cursor Input -----------------------------------------------------

    /// Returns `true` if cursor motion is pending consumption.
    fn mouse_moved(&self) -> bool;

    /// Clears the pending cursor motion (flag and offsets). Must be called
    /// exactly once per consumed motion, in the same frame.
    fn reset_mouse_moved(&mut self);

    /// Arms first-move suppression so the next cursor event after a
    /// position discontinuity yields no delta.
    fn reset_first_move(&mut self);

    /// Accumulated horizontal cursor offset.
    fn cursor_x_offset(&self) -> f32;

    /// Accumulated vertical cursor offset (upward motion positive).
    fn cursor_y_offset(&self) -> f32;

    //--- Scroll Input -----------------------------------------------------

    /// Returns `true` if scroll motion is pending consumption.
    fn scroll_wheel_moved(&self) -> bool;

    /// Clears the pending scroll motion (flag and offset).
    fn reset_scroll_wheel_moved(&mut self);

    /// Accumulated scroll offset.
    fn scroll_y_offset(&self) -> f32;

    //--- Lifecycle --------------------------------------------------------

    /// Cooperatively requests (or cancels) application shutdown.
    fn set_should_close(&mut self, should_close: bool);

    /// Returns `true` once shutdown has been requested.
    fn should_close(&self) -> bool;

    //--- Present Cycle ----------------------------------------------------

    /// Clears and binds the multisampled render target for this frame's
    /// draw calls.
    fn clear_and_bind_multisample_framebuffer(&mut self);

    /// Resolves the multisampled target into the presentable image.
    fn resolve_multisample_framebuffer(&mut self);

    /// Presents the frame (buffer swap).
    fn swap_buffers(&mut self);

    /// Polls the platform for the next frame's input events. Must be the
    /// last step of the present cycle so the next frame's input phase sees
    /// fresh state.
    fn poll_events(&mut self);
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// The enum covers exactly the supported sample counts.
    #[test]
    fn sample_count_values() {
        assert_eq!(SampleCount::X1.as_u32(), 1);
        assert_eq!(SampleCount::X2.as_u32(), 2);
        assert_eq!(SampleCount::X4.as_u32(), 4);
        assert_eq!(SampleCount::X8.as_u32(), 8);
    }

    #[test]
    fn sample_count_is_copy_and_eq() {
        let a = SampleCount::X4;
        let b = a;
        assert_eq!(a, b);
        assert_ne!(SampleCount::X1, SampleCount::X8);
    }
}
