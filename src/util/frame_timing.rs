//! Frame clock: fixed or measured timestep and a smoothed FPS estimate.

use web_time::{Duration, Instant};

use crate::options::{CameraOptions, TimestepMode};

/// Per-frame timestep source with a smoothed FPS estimate.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Fixed nominal step or measured wall-clock time.
    mode: TimestepMode,
    /// Step returned in fixed mode (seconds).
    nominal_step: f32,
    /// Upper bound on a measured step (seconds).
    max_step: f32,
    /// Last tick timestamp
    last_tick: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Clock configured from camera options, starting now.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        Self {
            mode: options.timestep,
            nominal_step: options.nominal_step,
            max_step: options.max_step,
            last_tick: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Call once per frame. Returns the step to feed the session.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.record(elapsed);
        self.step_for(elapsed)
    }

    /// Step for a frame that took `elapsed`.
    #[must_use]
    pub fn step_for(&self, elapsed: Duration) -> f32 {
        match self.mode {
            TimestepMode::Fixed => self.nominal_step,
            TimestepMode::Measured => {
                elapsed.as_secs_f32().min(self.max_step).max(0.0)
            }
        }
    }

    fn record(&mut self, elapsed: Duration) {
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
