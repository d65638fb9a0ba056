use std::time::Instant;

/// Longest step handed to a physics simulation in one frame
pub const MAX_SECONDS_PER_STEP: f32 = 1.0 / 60.0;

/// Time elapsed over one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Wall-clock seconds since the previous tick
    pub delta: f32,
    /// `delta` capped at [`MAX_SECONDS_PER_STEP`], so one slow frame cannot
    /// produce a huge simulation step
    pub step: f32,
}

impl FrameTime {
    pub fn from_delta(delta: f32) -> Self {
        Self {
            delta,
            step: delta.min(MAX_SECONDS_PER_STEP),
        }
    }
}

/// Frame clock driving the window loop
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Time since the previous tick (or since creation/restart)
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        FrameTime::from_delta(delta)
    }

    /// Drop time accumulated while no frames were drawn, e.g. before the
    /// window exists
    pub fn restart(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn slow_tick_caps_the_step() {
        let mut clock = Clock::new();
        thread::sleep(Duration::from_millis(30));

        let time = clock.tick();

        assert!(time.delta >= 0.029);
        assert_eq!(time.step, MAX_SECONDS_PER_STEP);
    }

    #[test]
    fn restart_discards_idle_time() {
        let mut clock = Clock::new();
        thread::sleep(Duration::from_millis(20));
        clock.restart();

        assert!(clock.tick().delta < 0.015);
    }

    #[test]
    fn fast_frames_step_by_their_delta() {
        let time = FrameTime::from_delta(0.01);
        assert_eq!(time.step, 0.01);
        assert_eq!(FrameTime::from_delta(0.5).step, MAX_SECONDS_PER_STEP);
    }
}
