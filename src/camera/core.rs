use glam::{Mat4, Vec3};

/// Default yaw pointing down the canonical forward axis (−Z).
pub const DEFAULT_YAW: f32 = -90.0;
/// Default pitch (level with the horizon).
pub const DEFAULT_PITCH: f32 = 0.0;
/// Default movement speed in world units per second.
pub const DEFAULT_SPEED: f32 = 2.5;
/// Default mouse sensitivity in degrees per pixel.
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
/// Default vertical field of view in degrees.
pub const DEFAULT_ZOOM: f32 = 45.0;
/// Default lower bound of the scroll-driven field of view, degrees.
pub const DEFAULT_ZOOM_MIN: f32 = 1.0;
/// Default upper bound of the scroll-driven field of view, degrees.
pub const DEFAULT_ZOOM_MAX: f32 = 45.0;

/// Pitch is clamped strictly inside ±90° so the basis derivation never
/// degenerates at the poles.
const PITCH_LIMIT: f32 = 89.0;

/// Movement directions a key press can map to.
///
/// `Forward`/`Backward`/`Left`/`Right` move in the camera's current
/// horizontal frame; `Up`/`Down` move along the world up axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    /// Along the current front vector.
    Forward,
    /// Against the current front vector.
    Backward,
    /// Against the current right vector.
    Left,
    /// Along the current right vector.
    Right,
    /// Along the world up axis.
    Up,
    /// Against the world up axis.
    Down,
}

impl MoveDirection {
    /// All six directions, for iteration by input tracking.
    pub const ALL: [MoveDirection; 6] = [
        MoveDirection::Forward,
        MoveDirection::Backward,
        MoveDirection::Left,
        MoveDirection::Right,
        MoveDirection::Up,
        MoveDirection::Down,
    ];
}

/// Free-fly camera: world-space position plus yaw/pitch orientation.
///
/// The orthonormal basis (`front`, `right`, `up`) is derived from
/// yaw/pitch/world-up and is re-derived inside every mutator that touches
/// orientation, so consumers can never observe a stale basis. The derived
/// vectors are therefore read-only from the outside.
#[derive(Debug, Clone)]
pub struct FlyCamera {
    /// Eye position in world space.
    pub position: Vec3,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    /// Movement speed in world units per second.
    pub movement_speed: f32,
    /// Mouse-look sensitivity in degrees per pixel of cursor delta.
    pub mouse_sensitivity: f32,
    /// Lower field-of-view clamp bound in degrees.
    pub zoom_min: f32,
    /// Upper field-of-view clamp bound in degrees.
    pub zoom_max: f32,
    zoom: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl FlyCamera {
    /// Create a camera at `position` looking down −Z with world up +Y.
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        Self::with_orientation(position, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }

    /// Create a camera with explicit world-up and initial yaw/pitch.
    ///
    /// `world_up` must be non-zero; a zero vector makes the first cross
    /// product's normalization undefined. That contract is on the caller.
    #[must_use]
    pub fn with_orientation(
        position: Vec3,
        world_up: Vec3,
        yaw: f32,
        pitch: f32,
    ) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            world_up,
            yaw,
            pitch,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            zoom_min: DEFAULT_ZOOM_MIN,
            zoom_max: DEFAULT_ZOOM_MAX,
            zoom: DEFAULT_ZOOM,
        };
        camera.update_basis();
        camera
    }

    /// View matrix: right-handed look-at from the eye toward
    /// `position + front` with the derived up vector. Pure.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Derived front vector (unit length).
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Derived right vector (unit length).
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Derived up vector (unit length).
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Fixed world-up reference.
    #[must_use]
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Current yaw in degrees. Unbounded — never wrapped.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees, scroll-driven.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Move the camera in `direction` for `delta_time` seconds.
    ///
    /// Uses the *current* derived vectors, so translation always matches
    /// what is rendered. A zero or negative `delta_time` degenerates to no
    /// movement rather than a fault. Position changes never touch the basis.
    pub fn process_keyboard(
        &mut self,
        direction: MoveDirection,
        delta_time: f32,
    ) {
        let velocity = self.movement_speed * delta_time.max(0.0);
        match direction {
            MoveDirection::Forward => self.position += self.front * velocity,
            MoveDirection::Backward => self.position -= self.front * velocity,
            MoveDirection::Left => self.position -= self.right * velocity,
            MoveDirection::Right => self.position += self.right * velocity,
            MoveDirection::Up => self.position += self.world_up * velocity,
            MoveDirection::Down => self.position -= self.world_up * velocity,
        }
    }

    /// Apply a mouse-look delta in pixels (y already sign-flipped by the
    /// caller so up is positive).
    ///
    /// Yaw grows without bound; pitch is clamped strictly inside ±89° when
    /// `constrain_pitch` is set. The basis is re-derived before returning.
    pub fn process_mouse_movement(
        &mut self,
        x_offset: f32,
        y_offset: f32,
        constrain_pitch: bool,
    ) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_basis();
    }

    /// Apply a scroll delta to the field of view, clamped to
    /// `[zoom_min, zoom_max]` (1° to 45° by default).
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(self.zoom_min, self.zoom_max);
    }

    /// Re-derive `front`/`right`/`up` from yaw/pitch/world-up.
    ///
    /// The cross-product order keeps the set right-handed and mutually
    /// orthogonal even as pitch approaches the clamp bounds.
    fn update_basis(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        let front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        self.front = front.normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_orthonormal(camera: &FlyCamera) {
        assert!((camera.front().length() - 1.0).abs() < EPS);
        assert!((camera.right().length() - 1.0).abs() < EPS);
        assert!((camera.up().length() - 1.0).abs() < EPS);
        assert!(camera.front().dot(camera.right()).abs() < EPS);
        assert!(camera.front().dot(camera.up()).abs() < EPS);
        assert!(camera.right().dot(camera.up()).abs() < EPS);
        // Right-handed set: up must equal right × front exactly.
        let rebuilt_up = camera.right().cross(camera.front());
        assert!((rebuilt_up - camera.up()).length() < EPS);
    }

    #[test]
    fn default_camera_looks_down_negative_z() {
        let camera = FlyCamera::default();
        assert!((camera.front() - Vec3::NEG_Z).length() < EPS);
        assert!((camera.right() - Vec3::X).length() < EPS);
        assert!((camera.up() - Vec3::Y).length() < EPS);
    }

    #[test]
    fn default_view_matrix_matches_look_at() {
        let camera = FlyCamera::new(Vec3::ZERO);
        let expected =
            Mat4::look_at_rh(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y);
        let got = camera.view_matrix();
        for (a, b) in got
            .to_cols_array()
            .iter()
            .zip(expected.to_cols_array().iter())
        {
            assert!((a - b).abs() < EPS);
        }
    }

    #[test]
    fn basis_stays_orthonormal_across_orientations() {
        for yaw_step in 0..24 {
            for pitch_step in -8..=8 {
                let yaw = yaw_step as f32 * 15.0;
                let pitch = pitch_step as f32 * 11.0; // up to ±88°
                let camera = FlyCamera::with_orientation(
                    Vec3::ZERO,
                    Vec3::Y,
                    yaw,
                    pitch,
                );
                assert_orthonormal(&camera);
            }
        }
    }

    #[test]
    fn pitch_is_clamped_under_any_mouse_sequence() {
        let mut camera = FlyCamera::default();
        for _ in 0..500 {
            camera.process_mouse_movement(0.0, 50.0, true);
        }
        assert!(camera.pitch() <= 89.0);
        assert_orthonormal(&camera);

        for _ in 0..1000 {
            camera.process_mouse_movement(0.0, -50.0, true);
        }
        assert!(camera.pitch() >= -89.0);
        assert_orthonormal(&camera);
    }

    #[test]
    fn unconstrained_pitch_is_not_clamped() {
        let mut camera = FlyCamera::default();
        camera.process_mouse_movement(0.0, 2000.0, false);
        assert!(camera.pitch() > 89.0);
    }

    #[test]
    fn yaw_is_unbounded() {
        let mut camera = FlyCamera::default();
        for _ in 0..100 {
            camera.process_mouse_movement(3600.0, 0.0, true);
        }
        assert!(camera.yaw() > 360.0);
    }

    #[test]
    fn zoom_never_escapes_clamp_range() {
        let mut camera = FlyCamera::default();
        for _ in 0..100 {
            camera.process_mouse_scroll(5.0);
        }
        assert_eq!(camera.zoom(), 1.0);
        for _ in 0..100 {
            camera.process_mouse_scroll(-5.0);
        }
        assert_eq!(camera.zoom(), 45.0);
    }

    #[test]
    fn zoom_clamp_bounds_are_configurable() {
        let mut camera = FlyCamera::default();
        camera.zoom_min = 10.0;
        camera.zoom_max = 60.0;
        for _ in 0..100 {
            camera.process_mouse_scroll(5.0);
        }
        assert_eq!(camera.zoom(), 10.0);
        for _ in 0..100 {
            camera.process_mouse_scroll(-5.0);
        }
        assert_eq!(camera.zoom(), 60.0);
    }

    #[test]
    fn forward_then_backward_is_reversible() {
        let mut camera = FlyCamera::new(Vec3::new(-0.75, 0.5, 0.75));
        let start = camera.position;
        camera.process_keyboard(MoveDirection::Forward, 0.25);
        camera.process_keyboard(MoveDirection::Backward, 0.25);
        assert!((camera.position - start).length() < EPS);
    }

    #[test]
    fn yaw_round_trip_restores_basis() {
        let mut camera = FlyCamera::default();
        let front = camera.front();
        let right = camera.right();
        camera.process_mouse_movement(100.0, 0.0, true);
        camera.process_mouse_movement(-100.0, 0.0, true);
        assert!((camera.yaw() - DEFAULT_YAW).abs() < EPS);
        assert!((camera.front() - front).length() < EPS);
        assert!((camera.right() - right).length() < EPS);
    }

    #[test]
    fn movement_ignores_negative_delta_time() {
        let mut camera = FlyCamera::default();
        let start = camera.position;
        camera.process_keyboard(MoveDirection::Forward, -1.0);
        assert_eq!(camera.position, start);
    }

    #[test]
    fn vertical_movement_follows_world_up_not_view_up() {
        let mut camera = FlyCamera::default();
        camera.process_mouse_movement(0.0, 450.0, true); // pitch up 45°
        let start = camera.position;
        camera.process_keyboard(MoveDirection::Up, 1.0);
        let moved = camera.position - start;
        // Straight up regardless of pitch.
        assert!(moved.x.abs() < EPS && moved.z.abs() < EPS);
        assert!(moved.y > 0.0);
    }

    #[test]
    fn movement_uses_current_basis_after_look() {
        let mut camera = FlyCamera::default();
        // Turn 90° right: front swings from −Z to +X.
        camera.process_mouse_movement(900.0, 0.0, true);
        camera.process_keyboard(MoveDirection::Forward, 1.0);
        assert!(camera.position.x > 2.0);
        assert!(camera.position.z.abs() < 1e-3);
    }
}
