use glam::Vec3;
use rtgp::camera::{Camera, CameraMovement, PITCH_LIMIT, SPEED};

const EPS: f32 = 1e-5;

fn camera_at(yaw: f32, pitch: f32, ground_locked: bool) -> Camera {
    let mut camera = Camera::new(Vec3::ZERO, ground_locked);
    camera.yaw = yaw;
    camera.pitch = pitch;
    // Zero offsets recompute the basis from the angles just set
    camera.process_mouse_movement(0.0, 0.0, false);
    camera
}

#[cfg(test)]
mod camera_tests {
    use super::*;

    #[test]
    fn test_basis_is_orthonormal_across_orientations() {
        let mut yaw = -180.0;
        while yaw <= 180.0 {
            let mut pitch = -88.5;
            while pitch < 89.0 {
                let camera = camera_at(yaw, pitch, false);

                for v in [camera.front, camera.right, camera.up] {
                    assert!((v.length() - 1.0).abs() < EPS, "yaw {yaw} pitch {pitch}: {v:?}");
                }
                assert!(camera.front.dot(camera.right).abs() < EPS);
                assert!(camera.front.dot(camera.up).abs() < EPS);
                assert!(camera.right.dot(camera.up).abs() < EPS);

                // right-handed: right x up = -front for a camera looking down front
                assert!(camera.right.cross(camera.up).abs_diff_eq(-camera.front, 1e-4));

                pitch += 7.5;
            }
            yaw += 15.0;
        }
    }

    #[test]
    fn test_world_front_is_horizontal_unit() {
        for (yaw, pitch) in [(-90.0, 0.0), (0.0, 45.0), (37.0, -80.0), (180.0, 88.9), (-135.0, 10.0)] {
            let camera = camera_at(yaw, pitch, true);

            assert_eq!(camera.world_front.y, 0.0);
            assert!((camera.world_front.length() - 1.0).abs() < EPS);
            // same heading as front
            assert!(camera.world_front.dot(Vec3::new(camera.front.x, 0.0, camera.front.z)) > 0.0);
        }
    }

    #[test]
    fn test_zero_mouse_movement_is_noop() {
        let mut camera = camera_at(12.0, -33.0, false);
        let before = camera.clone();

        camera.process_mouse(0.0, 0.0);

        assert_eq!(camera.yaw, before.yaw);
        assert_eq!(camera.pitch, before.pitch);
        assert_eq!(camera.front, before.front);
        assert_eq!(camera.world_front, before.world_front);
        assert_eq!(camera.right, before.right);
        assert_eq!(camera.up, before.up);
    }

    #[test]
    fn test_pitch_pinned_at_upper_limit() {
        let mut camera = Camera::new(Vec3::ZERO, false);
        for _ in 0..100 {
            camera.process_mouse(0.0, 50.0);
            assert!(camera.pitch <= PITCH_LIMIT);
        }
        assert_eq!(camera.pitch, 89.0);
        assert!(camera.front.is_finite());
    }

    #[test]
    fn test_pitch_pinned_at_lower_limit() {
        let mut camera = Camera::new(Vec3::ZERO, false);
        camera.process_mouse(0.0, -10_000.0);
        assert_eq!(camera.pitch, -89.0);
        assert!(camera.world_front.is_finite());
    }

    #[test]
    fn test_unclamped_pole_flips_world_front() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 7.0), true);
        assert!(camera.world_front.abs_diff_eq(Vec3::NEG_Z, EPS));

        // 360 * 0.25 lands exactly on +90 degrees
        camera.process_mouse_movement(0.0, 360.0, false);
        assert_eq!(camera.pitch, 90.0);
        assert!(camera.front.abs_diff_eq(Vec3::Y, EPS));

        // the horizontal part of front is rounding noise; normalizing it
        // yields a unit vector that points behind the old heading
        assert!(camera.world_front.is_finite());
        assert_eq!(camera.world_front.y, 0.0);
        assert!((camera.world_front.length() - 1.0).abs() < EPS);
        assert!(camera.world_front.z > 0.99);

        // so a ground-locked walk "forward" goes backwards
        camera.process_keyboard(CameraMovement::Forward, 0.1);
        assert!((camera.position.z - 7.3).abs() < 1e-4);
        assert_eq!(camera.position.y, 0.0);
    }

    #[test]
    fn test_mouse_sensitivity_scales_offsets() {
        let mut camera = Camera::new(Vec3::ZERO, false);
        camera.process_mouse(8.0, 4.0);

        assert!((camera.yaw - (-90.0 + 2.0)).abs() < EPS);
        assert!((camera.pitch - 1.0).abs() < EPS);
    }

    #[test]
    fn test_diagonal_speed_matches_axis_speed() {
        for ground_locked in [true, false] {
            let t = 0.4;

            let mut axis = camera_at(30.0, 25.0, ground_locked);
            axis.set_diagonal_compensation(false);
            axis.process_keyboard(CameraMovement::Forward, t);

            let mut diagonal = camera_at(30.0, 25.0, ground_locked);
            diagonal.set_diagonal_compensation(true);
            diagonal.process_keyboard(CameraMovement::Forward, t);
            diagonal.process_keyboard(CameraMovement::Right, t);

            let axis_distance = axis.position.length();
            let diagonal_distance = diagonal.position.length();

            assert!((axis_distance - SPEED * t).abs() < EPS);
            assert!((diagonal_distance - axis_distance).abs() < EPS);
        }
    }

    #[test]
    fn test_uncompensated_diagonal_is_faster() {
        let mut camera = Camera::new(Vec3::ZERO, true);
        camera.process_keyboard(CameraMovement::Forward, 1.0);
        camera.process_keyboard(CameraMovement::Left, 1.0);

        assert!((camera.position.length() - SPEED * 2f32.sqrt()).abs() < EPS);
    }

    #[test]
    fn test_ground_locked_walk_keeps_altitude() {
        let mut camera = Camera::new(Vec3::new(0.0, 1.5, 0.0), true);
        camera.process_mouse(0.0, 160.0); // look 40 degrees up

        camera.process_keyboard(CameraMovement::Forward, 1.0);
        camera.process_keyboard(CameraMovement::Backward, 0.25);

        assert!(camera.position.abs_diff_eq(Vec3::new(0.0, 1.5, -2.25), EPS));
    }

    #[test]
    fn test_free_camera_flies_along_front() {
        let mut camera = Camera::new(Vec3::ZERO, false);
        camera.process_mouse(0.0, 160.0);

        camera.process_keyboard(CameraMovement::Forward, 1.0);

        assert!(camera.position.abs_diff_eq(camera.front * SPEED, EPS));
        assert!(camera.position.y > 0.0);
    }

    #[test]
    fn test_view_matrix_moves_front_onto_negative_z() {
        let camera = camera_at(20.0, -10.0, false);
        let view = camera.view_matrix();

        let ahead = view.transform_point3(camera.position + camera.front);
        assert!(ahead.abs_diff_eq(Vec3::NEG_Z, 1e-4));
        let up = view.transform_vector3(camera.up);
        assert!(up.abs_diff_eq(Vec3::Y, 1e-4));
    }
}
