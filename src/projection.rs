use glam::{Mat4, Vec3};

pub const FOV_Y_DEGREES: f32 = 45.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 10000.0;

/// Initial speed given to projectiles shot along the cursor ray
pub const SHOOT_INITIAL_SPEED: f32 = 15.0;

/// Perspective projection parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    pub fn for_viewport(width: u32, height: u32) -> Self {
        Self {
            fov_y_degrees: FOV_Y_DEGREES,
            aspect: aspect_ratio(width, height),
            near: NEAR_PLANE,
            far: FAR_PLANE,
        }
    }

    pub fn with_fov(mut self, fov_y_degrees: f32) -> Self {
        self.fov_y_degrees = fov_y_degrees;
        self
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = aspect_ratio(width, height);
    }

    /// OpenGL clip space (depth in [-1, 1])
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_degrees.to_radians(), self.aspect, self.near, self.far)
    }
}

// A minimised window reports zero height
fn aspect_ratio(width: u32, height: u32) -> f32 {
    if height == 0 {
        1.0
    } else {
        width as f32 / height as f32
    }
}

/// World-space ray with a normalized direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    pub fn launch_velocity(&self, speed: f32) -> Vec3 {
        self.direction * speed
    }
}

/// Unproject a cursor position (window pixels, origin top-left) into a
/// world-space ray starting on the near plane
pub fn cursor_ray(
    cursor_x: f32,
    cursor_y: f32,
    width: u32,
    height: u32,
    view: Mat4,
    projection: Mat4,
) -> Ray {
    let ndc_x = 2.0 * cursor_x / width.max(1) as f32 - 1.0;
    let ndc_y = 1.0 - 2.0 * cursor_y / height.max(1) as f32;

    let inverse = (projection * view).inverse();
    let near = inverse.project_point3(Vec3::new(ndc_x, ndc_y, -1.0));
    let far = inverse.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));

    Ray {
        origin: near,
        direction: (far - near).normalize(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_from_viewport() {
        let projection = Projection::for_viewport(1200, 900);
        assert!((projection.aspect - 4.0 / 3.0).abs() < 1e-6);
        assert_eq!(projection.fov_y_degrees, 45.0);
    }

    #[test]
    fn zero_height_falls_back_to_square() {
        let mut projection = Projection::for_viewport(800, 600);
        projection.resize(800, 0);
        assert_eq!(projection.aspect, 1.0);
    }

    #[test]
    fn center_cursor_follows_view_direction() {
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 9.0), Vec3::ZERO, Vec3::Y);
        let projection = Projection::for_viewport(1200, 900).matrix();

        let ray = cursor_ray(600.0, 450.0, 1200, 900, view, projection);

        assert!(ray.direction.abs_diff_eq(Vec3::NEG_Z, 1e-4));
        assert!(ray.origin.abs_diff_eq(Vec3::new(0.0, 0.0, 9.0 - NEAR_PLANE), 1e-3));
    }

    #[test]
    fn top_left_cursor_points_up_and_left() {
        let view = Mat4::look_at_rh(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);
        let projection = Projection::for_viewport(800, 600).matrix();

        let ray = cursor_ray(0.0, 0.0, 800, 600, view, projection);

        assert!(ray.direction.x < 0.0);
        assert!(ray.direction.y > 0.0);
        assert!(ray.direction.z < 0.0);
    }

    #[test]
    fn launch_velocity_scales_direction() {
        let ray = Ray {
            origin: Vec3::ZERO,
            direction: Vec3::X,
        };
        assert_eq!(ray.launch_velocity(SHOOT_INITIAL_SPEED), Vec3::new(15.0, 0.0, 0.0));
        assert_eq!(ray.at(2.0), Vec3::new(2.0, 0.0, 0.0));
    }
}
