//=========================================================================
// Sound Engine
//
// Opaque audio collaborator shared across states.
//
// The play state holds a handle but does not exercise it; menu-style
// states use it for cues. No audio backend is bundled: requests are
// logged and volume state is tracked so behavior stays observable.
//
//=========================================================================

use log::debug;

//=== SoundEngine =========================================================

/// Shared audio handle with cooperative volume control.
pub struct SoundEngine {
    volume: f32,
}

impl SoundEngine {
    pub fn new() -> Self {
        Self { volume: 1.0 }
    }

    /// Requests playback of a named 2D sound.
    pub fn play_2d(&mut self, name: &str, looped: bool) {
        debug!(target: "audio", "play_2d \"{}\" (looped: {})", name, looped);
    }

    /// Sets the master volume, clamped to [0, 1].
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        debug!(target: "audio", "Master volume set to {}", self.volume);
    }

    /// Current master volume.
    pub fn volume(&self) -> f32 {
        self.volume
    }
}

impl Default for SoundEngine {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_is_clamped() {
        let mut audio = SoundEngine::new();
        assert_eq!(audio.volume(), 1.0);

        audio.set_volume(2.5);
        assert_eq!(audio.volume(), 1.0);

        audio.set_volume(-1.0);
        assert_eq!(audio.volume(), 0.0);

        audio.set_volume(0.4);
        assert_eq!(audio.volume(), 0.4);
    }
}
