use glam::{Mat4, Vec3};

use crate::settings::CameraSettings;
use crate::traits::CameraController;

// Initial yaw points the default front vector down -Z.
pub const YAW: f32 = -90.0;
pub const PITCH: f32 = 0.0;

pub const SPEED: f32 = 3.0;
pub const SENSITIVITY: f32 = 0.25;
pub const DIAGONAL_COMPENSATION: f32 = std::f32::consts::FRAC_1_SQRT_2;
pub const PITCH_LIMIT: f32 = 89.0;

/// Direction of a keyboard movement command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

/// First-person camera driven by WASD and mouse look
///
/// `front`, `right` and `up` are derived from `yaw`/`pitch` (degrees) and
/// are only refreshed by [`Camera::process_mouse_movement`]; writing the
/// angles directly leaves the basis stale until the next mouse update.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub front: Vec3,
    /// `front` projected on the horizontal plane, used when ground-locked
    pub world_front: Vec3,
    pub up: Vec3,
    pub world_up: Vec3,
    pub right: Vec3,
    pub ground_locked: bool,
    pub yaw: f32,
    pub pitch: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    pub diagonal_compensation: f32,
}

impl Camera {
    pub fn new(position: Vec3, ground_locked: bool) -> Self {
        Self::with_settings(position, ground_locked, &CameraSettings::default())
    }

    pub fn with_settings(position: Vec3, ground_locked: bool, settings: &CameraSettings) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            world_front: Vec3::NEG_Z,
            up: Vec3::Y,
            world_up: Vec3::Y,
            right: Vec3::X,
            ground_locked,
            yaw: settings.yaw,
            pitch: settings.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            movement_speed: settings.movement_speed,
            mouse_sensitivity: settings.mouse_sensitivity,
            diagonal_compensation: 1.0,
        };
        camera.update_vectors();
        camera
    }

    /// Right-handed look-at transform from the current position and basis
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Scale movement when two perpendicular keys are held, so diagonal
    /// speed matches axis-aligned speed
    pub fn set_diagonal_compensation(&mut self, active: bool) {
        self.diagonal_compensation = if active { DIAGONAL_COMPENSATION } else { 1.0 };
    }

    /// Move along the camera basis. A negative `delta_time` moves backwards.
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time * self.diagonal_compensation;
        let forward = if self.ground_locked { self.world_front } else { self.front };

        match direction {
            CameraMovement::Forward => self.position += forward * velocity,
            CameraMovement::Backward => self.position -= forward * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, clamp_pitch: bool) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        if clamp_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    /// Mouse look with pitch clamping enabled
    pub fn process_mouse(&mut self, x_offset: f32, y_offset: f32) {
        self.process_mouse_movement(x_offset, y_offset, true);
    }

    // At a pitch of +-90 the horizontal projection is rounding noise, so
    // world_front can point anywhere on the horizon (it flips behind the
    // camera for the default yaw). Not reachable with clamping on.
    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());

        let front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos());
        self.front = front.normalize();
        self.world_front = Vec3::new(self.front.x, 0.0, self.front.z).normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl CameraController for Camera {
    fn view_matrix(&self) -> Mat4 {
        Camera::view_matrix(self)
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn forward(&self) -> Vec3 {
        self.front
    }
}
