//=========================================================================
// Platform Event Mapper
//
// Converts Winit input types to engine-level representations.
//
// Responsibilities:
// - Translate Winit key codes to the engine `KeyCode` enum
// - Normalize scroll deltas (lines vs. pixels) to line units
// - Provide a fallback (`Unidentified`) for unmapped inputs
//
//=========================================================================

use winit::event::MouseScrollDelta;
use winit::keyboard::KeyCode as WinitKeyCode;
use winit::keyboard::PhysicalKey;

use crate::core::input::KeyCode;

//=== Key Conversion ======================================================
//
// Maps `WinitKeyCode` values to the engine's internal `KeyCode` enum.
// Only a subset of codes is supported; all others map to `Unidentified`,
// which the input tracker discards.
//

impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Numeric keys -----------------------------------------------------
            Digit0 => KeyCode::Digit0, Digit1 => KeyCode::Digit1,
            Digit2 => KeyCode::Digit2, Digit3 => KeyCode::Digit3,
            Digit4 => KeyCode::Digit4, Digit5 => KeyCode::Digit5,
            Digit6 => KeyCode::Digit6, Digit7 => KeyCode::Digit7,
            Digit8 => KeyCode::Digit8, Digit9 => KeyCode::Digit9,

            //--- Alphabetic keys --------------------------------------------------
            KeyA => KeyCode::KeyA, KeyB => KeyCode::KeyB, KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD, KeyE => KeyCode::KeyE, KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG, KeyH => KeyCode::KeyH, KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ, KeyK => KeyCode::KeyK, KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM, KeyN => KeyCode::KeyN, KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP, KeyQ => KeyCode::KeyQ, KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS, KeyT => KeyCode::KeyT, KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV, KeyW => KeyCode::KeyW, KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY, KeyZ => KeyCode::KeyZ,

            //--- Arrow keys -------------------------------------------------------
            ArrowDown => KeyCode::ArrowDown, ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight, ArrowUp => KeyCode::ArrowUp,

            //--- Whitespace and control -------------------------------------------
            Space => KeyCode::Space, Enter => KeyCode::Enter,
            Escape => KeyCode::Escape, Tab => KeyCode::Tab,

            //--- Fallback ---------------------------------------------------------
            _ => KeyCode::Unidentified,
        }
    }
}

/// Maps a physical key identifier to an engine key code.
///
/// Non-code physical keys (raw scancodes Winit could not identify) map
/// to `Unidentified`.
pub(crate) fn map_physical_key(key: PhysicalKey) -> KeyCode {
    match key {
        PhysicalKey::Code(code) => KeyCode::from(code),
        _ => KeyCode::Unidentified,
    }
}

//=== Scroll Conversion ===================================================

/// Pixel-delta scrolls (touchpads, high-resolution wheels) are scaled to
/// roughly one line per this many pixels.
const PIXELS_PER_LINE: f64 = 20.0;

/// Normalizes a Winit scroll delta to vertical line units.
pub(crate) fn scroll_delta_to_lines(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_x, y) => y,
        MouseScrollDelta::PixelDelta(position) => (position.y / PIXELS_PER_LINE) as f32,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    //=====================================================================
    // Key Conversion Tests
    //=====================================================================

    #[test]
    fn maps_bound_keys() {
        assert_eq!(KeyCode::from(WinitKeyCode::Escape), KeyCode::Escape);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyF), KeyCode::KeyF);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyP), KeyCode::KeyP);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyR), KeyCode::KeyR);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyC), KeyCode::KeyC);
        assert_eq!(KeyCode::from(WinitKeyCode::Digit1), KeyCode::Digit1);
        assert_eq!(KeyCode::from(WinitKeyCode::Digit8), KeyCode::Digit8);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyW), KeyCode::KeyW);
    }

    #[test]
    fn unmapped_keys_become_unidentified() {
        assert_eq!(KeyCode::from(WinitKeyCode::F24), KeyCode::Unidentified);
        assert_eq!(KeyCode::from(WinitKeyCode::NumpadAdd), KeyCode::Unidentified);
    }

    #[test]
    fn unidentified_physical_keys_become_unidentified() {
        let key = PhysicalKey::Unidentified(winit::keyboard::NativeKeyCode::Unidentified);
        assert_eq!(map_physical_key(key), KeyCode::Unidentified);
    }

    //=====================================================================
    // Scroll Conversion Tests
    //=====================================================================

    #[test]
    fn line_deltas_pass_through() {
        let delta = MouseScrollDelta::LineDelta(0.0, 3.0);
        assert_eq!(scroll_delta_to_lines(delta), 3.0);
    }

    #[test]
    fn pixel_deltas_scale_to_lines() {
        let delta = MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 40.0));
        assert_eq!(scroll_delta_to_lines(delta), 2.0);

        let delta = MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -20.0));
        assert_eq!(scroll_delta_to_lines(delta), -1.0);
    }
}
