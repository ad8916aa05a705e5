//=========================================================================
// Renderer
//
// Opaque draw-call collaborator handed to states.
//
// States drive the present cycle through the Window contract; the
// renderer is where scene draw calls go between binding and resolving
// the multisampled target. No graphics backend is bundled, so the draw
// hook only traces the pose it would render from.
//
//=========================================================================

use log::trace;

use super::camera::Camera;

//=== Renderer ============================================================

/// Scene draw-call hook for the render phase.
pub struct Renderer {
    frame_index: u64,
}

impl Renderer {
    pub fn new() -> Self {
        Self { frame_index: 0 }
    }

    /// Issues this frame's scene draw calls against the bound target.
    pub fn draw_scene(&mut self, camera: &Camera) {
        self.frame_index += 1;
        trace!(
            target: "render",
            "Frame {}: view from {:?} (fov {}°)",
            self.frame_index,
            camera.position(),
            camera.field_of_view_deg()
        );
    }

    /// Number of frames drawn so far.
    pub fn frames_drawn(&self) -> u64 {
        self.frame_index
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
