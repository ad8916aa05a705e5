//=========================================================================
// Key Latch
//
// Per-key edge detector for discrete actions.
//
// A latched key fires its action once per physical press: the action
// marks the key as processed when it fires, and the input layer releases
// the latch when the key goes up. Holding the key does not re-fire.
//
// States:
//   Idle    — the press (if any) has not been consumed yet
//   Latched — the press was consumed; further frames are ignored
//
//=========================================================================

//=== KeyLatch ============================================================

/// Two-state edge detector backing the per-key "processed" flag.
///
/// `fire()` transitions Idle → Latched and reports whether the transition
/// happened, so `latch.fire()` is "should the discrete action run this
/// frame". `release()` returns to Idle and is called by the input layer
/// when the physical key is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyLatch {
    /// No consumed press outstanding.
    #[default]
    Idle,

    /// The current press has been consumed.
    Latched,
}

impl KeyLatch {
    /// Consumes the current press.
    ///
    /// Returns `true` exactly once per Idle → Latched transition.
    pub fn fire(&mut self) -> bool {
        match self {
            Self::Idle => {
                *self = Self::Latched;
                true
            }
            Self::Latched => false,
        }
    }

    /// Clears the latch (key released).
    pub fn release(&mut self) {
        *self = Self::Idle;
    }

    /// Returns `true` if the current press has already been consumed.
    pub fn is_latched(&self) -> bool {
        matches!(self, Self::Latched)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
