//=========================================================================
// Camera
//
// Free-look fly camera with a fixed (orbit-less, input-deaf) mode.
//
// Orientation is stored as yaw/pitch in degrees; basis vectors are
// recomputed whenever orientation changes. Yaw 0 / pitch 0 looks down
// the negative Z axis, so the home pose at (0, 0, 95) faces the origin.
//
// Movement is scaled by the caller-supplied frame time, which makes
// displacement linear in elapsed time: two half-steps equal one full
// step regardless of frame rate.
//
// The `free` flag only records the mode; gating continuous input on it
// is the calling state's responsibility.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{Mat4, Vec3};

//=== Constants ===========================================================

const DEFAULT_MOVEMENT_SPEED: f32 = 10.0;
const DEFAULT_MOUSE_SENSITIVITY: f32 = 0.1;

const PITCH_LIMIT_DEG: f32 = 89.0;
const FOV_MIN_DEG: f32 = 1.0;
const FOV_MAX_DEG: f32 = 45.0;

//=== MovementDirection ===================================================

/// Discrete movement command for keyboard-driven translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementDirection {
    Forward,
    Backward,
    Left,
    Right,
}

//=== Camera ==============================================================

/// Free/fixed camera with yaw-pitch orientation and scroll-wheel zoom.
pub struct Camera {
    position: Vec3,
    world_up: Vec3,

    // Derived basis, recomputed from yaw/pitch.
    front: Vec3,
    right: Vec3,
    up: Vec3,

    yaw_deg: f32,
    pitch_deg: f32,
    field_of_view_deg: f32,

    movement_speed: f32,
    mouse_sensitivity: f32,

    free: bool,
}

impl Camera {
    //--- Construction -----------------------------------------------------

    /// Creates a camera at the given pose, starting in fixed mode.
    pub fn new(position: Vec3, world_up: Vec3, yaw_deg: f32, pitch_deg: f32, fov_deg: f32) -> Self {
        let mut camera = Self {
            position,
            world_up,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            yaw_deg,
            pitch_deg,
            field_of_view_deg: fov_deg,
            movement_speed: DEFAULT_MOVEMENT_SPEED,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
            free: false,
        };
        camera.update_basis_vectors();
        camera
    }

    //--- Mode -------------------------------------------------------------

    /// Returns `true` in free (user-controlled) mode.
    pub fn is_free(&self) -> bool {
        self.free
    }

    /// Switches between free and fixed mode.
    pub fn set_free(&mut self, free: bool) {
        self.free = free;
    }

    //--- Continuous Input -------------------------------------------------

    /// Translates the camera along its basis, scaled by elapsed frame time.
    pub fn process_keyboard_input(&mut self, direction: MovementDirection, delta_time: f32) {
        let distance = self.movement_speed * delta_time;
        match direction {
            MovementDirection::Forward => self.position += self.front * distance,
            MovementDirection::Backward => self.position -= self.front * distance,
            MovementDirection::Left => self.position -= self.right * distance,
            MovementDirection::Right => self.position += self.right * distance,
        }
    }

    /// Applies a cursor delta to yaw/pitch. Pitch is clamped short of the
    /// poles to keep the basis well-defined.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32) {
        self.yaw_deg += x_offset * self.mouse_sensitivity;
        self.pitch_deg = (self.pitch_deg + y_offset * self.mouse_sensitivity)
            .clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
        self.update_basis_vectors();
    }

    /// Applies a scroll delta to the field of view (zoom).
    pub fn process_scroll_wheel_movement(&mut self, y_offset: f32) {
        self.field_of_view_deg =
            (self.field_of_view_deg - y_offset).clamp(FOV_MIN_DEG, FOV_MAX_DEG);
    }

    //--- Reposition -------------------------------------------------------

    /// Snaps the camera to a pose in one step: no interpolation, and
    /// repeat calls with the same arguments leave the camera unchanged.
    pub fn reposition(
        &mut self,
        position: Vec3,
        world_up: Vec3,
        yaw_deg: f32,
        pitch_deg: f32,
        fov_deg: f32,
    ) {
        self.position = position;
        self.world_up = world_up;
        self.yaw_deg = yaw_deg;
        self.pitch_deg = pitch_deg;
        self.field_of_view_deg = fov_deg;
        self.update_basis_vectors();
    }

    //--- Queries ----------------------------------------------------------

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn yaw_deg(&self) -> f32 {
        self.yaw_deg
    }

    pub fn pitch_deg(&self) -> f32 {
        self.pitch_deg
    }

    pub fn field_of_view_deg(&self) -> f32 {
        self.field_of_view_deg
    }

    /// The view matrix for the current pose.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    //--- Internal Helpers -------------------------------------------------

    fn update_basis_vectors(&mut self) {
        let yaw = self.yaw_deg.to_radians();
        let pitch = self.pitch_deg.to_radians();

        self.front = Vec3::new(
            yaw.sin() * pitch.cos(),
            pitch.sin(),
            -yaw.cos() * pitch.cos(),
        )
        .normalize();

        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn test_camera() -> Camera {
        Camera::new(Vec3::new(0.0, 0.0, 95.0), Vec3::Y, 0.0, 0.0, 45.0)
    }

    //=====================================================================
    // Orientation Tests
    //=====================================================================

    /// Yaw 0 / pitch 0 looks down negative Z.
    #[test]
    fn neutral_orientation_faces_negative_z() {
        let camera = test_camera();
        assert!(camera.front().abs_diff_eq(Vec3::NEG_Z, EPSILON));
    }

    /// Pitch clamps short of the poles.
    #[test]
    fn pitch_is_clamped() {
        let mut camera = test_camera();
        camera.process_mouse_movement(0.0, 10_000.0);
        assert!(camera.pitch_deg() <= 89.0);

        camera.process_mouse_movement(0.0, -100_000.0);
        assert!(camera.pitch_deg() >= -89.0);
    }

    //=====================================================================
    // Movement Tests
    //=====================================================================

    /// Two half-size time steps displace exactly as far as one full step.
    #[test]
    fn movement_is_frame_rate_independent() {
        let dt = 0.2;

        let mut whole = test_camera();
        whole.process_keyboard_input(MovementDirection::Forward, dt);

        let mut halves = test_camera();
        halves.process_keyboard_input(MovementDirection::Forward, dt / 2.0);
        halves.process_keyboard_input(MovementDirection::Forward, dt / 2.0);

        assert!(whole.position().abs_diff_eq(halves.position(), EPSILON));
    }

    /// Opposite directions cancel out.
    #[test]
    fn opposite_moves_cancel() {
        let mut camera = test_camera();
        let start = camera.position();

        camera.process_keyboard_input(MovementDirection::Left, 0.5);
        camera.process_keyboard_input(MovementDirection::Right, 0.5);

        assert!(camera.position().abs_diff_eq(start, EPSILON));
    }

    //=====================================================================
    // Zoom Tests
    //=====================================================================

    /// Field of view narrows with positive scroll and clamps at both ends.
    #[test]
    fn zoom_clamps_field_of_view() {
        let mut camera = test_camera();

        camera.process_scroll_wheel_movement(10.0);
        assert_eq!(camera.field_of_view_deg(), 35.0);

        camera.process_scroll_wheel_movement(1_000.0);
        assert_eq!(camera.field_of_view_deg(), 1.0);

        camera.process_scroll_wheel_movement(-1_000.0);
        assert_eq!(camera.field_of_view_deg(), 45.0);
    }

    //=====================================================================
    // Reposition Tests
    //=====================================================================

    /// Repositioning is an idempotent snap.
    #[test]
    fn reposition_is_idempotent() {
        let mut camera = test_camera();
        camera.process_keyboard_input(MovementDirection::Forward, 1.0);
        camera.process_mouse_movement(250.0, -80.0);
        camera.process_scroll_wheel_movement(7.0);

        let home = Vec3::new(0.0, 0.0, 95.0);
        camera.reposition(home, Vec3::Y, 0.0, 0.0, 45.0);
        let pose_after_one = (camera.position(), camera.yaw_deg(), camera.pitch_deg(), camera.field_of_view_deg());

        camera.reposition(home, Vec3::Y, 0.0, 0.0, 45.0);
        camera.reposition(home, Vec3::Y, 0.0, 0.0, 45.0);
        let pose_after_many = (camera.position(), camera.yaw_deg(), camera.pitch_deg(), camera.field_of_view_deg());

        assert_eq!(pose_after_one, pose_after_many);
        assert!(camera.front().abs_diff_eq(Vec3::NEG_Z, EPSILON));
    }

    //=====================================================================
    // Mode Tests
    //=====================================================================

    #[test]
    fn mode_flag_round_trips() {
        let mut camera = test_camera();
        assert!(!camera.is_free());

        camera.set_free(true);
        assert!(camera.is_free());

        camera.set_free(false);
        assert!(!camera.is_free());
    }
}
