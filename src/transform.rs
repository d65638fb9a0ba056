use glam::{Mat3, Mat4, Vec3};

/// Placement of one object: translation, optional rotation, scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectTransform {
    pub position: Vec3,
    /// Angle in degrees and rotation axis
    pub rotation: Option<(f32, Vec3)>,
    pub scale: Vec3,
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: None,
            scale: Vec3::ONE,
        }
    }
}

impl ObjectTransform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn rotated(mut self, angle_degrees: f32, axis: Vec3) -> Self {
        self.rotation = Some((angle_degrees, axis));
        self
    }

    pub fn scaled(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn scaled_uniform(self, scale: f32) -> Self {
        self.scaled(Vec3::splat(scale))
    }

    /// Model matrix `T * R * S`: scale is applied first to local
    /// coordinates, translation last.
    pub fn model_matrix(&self) -> Mat4 {
        let mut model = Mat4::IDENTITY;
        model *= Mat4::from_translation(self.position);
        if let Some((angle, axis)) = self.rotation {
            model *= Mat4::from_axis_angle(axis.normalize(), angle.to_radians());
        }
        model * Mat4::from_scale(self.scale)
    }
}

/// Inverse-transpose of the upper 3x3 of `view * model`, in view space.
///
/// A singular model (zero scale on some axis) yields non-finite entries.
pub fn normal_matrix(view: Mat4, model: Mat4) -> Mat3 {
    Mat3::from_mat4(view * model).inverse().transpose()
}

/// Matrices handed to the renderer for one object in one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneObjectTransform {
    pub model: Mat4,
    pub normal: Mat3,
}

impl SceneObjectTransform {
    pub fn compute(transform: &ObjectTransform, view: Mat4) -> Self {
        Self::from_model(transform.model_matrix(), view)
    }

    /// For models that come from elsewhere, e.g. a rigid body's world
    /// transform multiplied by its scale
    pub fn from_model(model: Mat4, view: Mat4) -> Self {
        Self {
            model,
            normal: normal_matrix(view, model),
        }
    }
}
