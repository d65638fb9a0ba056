use glam::Vec3;

/// Degrees per second
pub const SPIN_SPEED: f32 = 30.0;

/// Time-driven rotation about the Y axis
///
/// The angle is advanced by increments, so pausing and resuming continues
/// from where the object stopped instead of jumping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spinner {
    pub angle_degrees: f32,
    pub speed: f32,
    pub spinning: bool,
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new(SPIN_SPEED)
    }
}

impl Spinner {
    pub const AXIS: Vec3 = Vec3::Y;

    pub fn new(speed: f32) -> Self {
        Self {
            angle_degrees: 0.0,
            speed,
            spinning: true,
        }
    }

    pub fn advance(&mut self, delta: f32) {
        if self.spinning {
            self.angle_degrees += delta * self.speed;
        }
    }

    pub fn toggle(&mut self) -> bool {
        self.spinning = !self.spinning;
        self.spinning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_by_speed_times_delta() {
        let mut spinner = Spinner::default();
        spinner.advance(0.5);
        spinner.advance(0.5);
        assert!((spinner.angle_degrees - 30.0).abs() < 1e-5);
    }

    #[test]
    fn paused_spinner_holds_angle() {
        let mut spinner = Spinner::default();
        spinner.advance(1.0);
        assert!(!spinner.toggle());
        spinner.advance(10.0);
        assert!((spinner.angle_degrees - 30.0).abs() < 1e-5);

        assert!(spinner.toggle());
        spinner.advance(1.0);
        assert!((spinner.angle_degrees - 60.0).abs() < 1e-5);
    }
}
