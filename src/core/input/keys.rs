//=========================================================================
// Key Codes
//
// Physical keyboard key identifiers, independent of the platform layer.
//
// A `KeyCode` names the physical key location, not the character it
// produces: `KeyW` is the same key on QWERTY and AZERTY keyboards, which
// is what camera movement bindings want.
//
// Coverage:
// - Number row (0-9)
// - Letters (A-Z)
// - Arrow keys
// - A handful of special keys (Space, Enter, Escape, Tab)
//
// Keys the platform reports but this enum does not name collapse into
// `Unidentified` and are ignored by the input tracker.
//
//=========================================================================

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Stable across keyboard layouts and platform backends. Additional keys
/// can be added without breaking existing bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Number Row -------------------------------------------------------

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Letters ----------------------------------------------------------

    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    /// Spacebar.
    Space,

    /// Return/Enter key.
    Enter,

    /// Escape key.
    Escape,

    /// Tab key.
    Tab,

    /// Fallback for keys the platform layer does not map.
    Unidentified,
}
