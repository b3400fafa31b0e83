use web_time::Instant;

/// Per-frame delta-time tracking with a smoothed FPS readout.
pub struct FrameTiming {
    /// Last frame timestamp.
    last_frame: Instant,
    /// Smoothed FPS using an exponential moving average.
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0).
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,
        }
    }

    /// Call at the start of each frame. Returns the delta time in seconds
    /// since the previous call and updates the FPS average.
    pub fn begin_frame(&mut self) -> f32 {
        let now = Instant::now();
        let frame_time =
            now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        frame_time
    }

    /// Get the current FPS (smoothed).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_time_is_non_negative() {
        let mut timing = FrameTiming::new();
        let dt = timing.begin_frame();
        assert!(dt >= 0.0);
    }

    #[test]
    fn fps_stays_positive() {
        let mut timing = FrameTiming::new();
        for _ in 0..5 {
            let _ = timing.begin_frame();
        }
        assert!(timing.fps() > 0.0);
    }
}
