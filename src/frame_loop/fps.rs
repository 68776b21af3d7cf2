// src/frame_loop/fps.rs

use std::time::Duration;

/// Counts presented frames and reports the rate once per window.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window: Duration,
    frames: u32,
    window_start: Duration,
    current: f32,
}

impl FpsCounter {
    pub fn new(window: Duration) -> Self {
        FpsCounter {
            window,
            frames: 0,
            window_start: Duration::ZERO,
            current: 0.0,
        }
    }

    /// Records one frame at `now`. Returns the new rate when a window closes.
    pub fn tick(&mut self, now: Duration) -> Option<f32> {
        self.frames += 1;
        let elapsed = now.saturating_sub(self.window_start);
        if self.window.is_zero() || elapsed < self.window {
            return None;
        }
        self.current = self.frames as f32 / elapsed.as_secs_f32();
        self.frames = 0;
        self.window_start = now;
        Some(self.current)
    }

    /// The rate measured over the last completed window.
    pub fn current(&self) -> f32 {
        self.current
    }
}
