// src/frame_loop/spawner.rs

use std::time::Duration;

/// Decides when the next wave may be created.
///
/// A wave is due once `interval` has elapsed since the previous creation (or
/// since the loop started) and the population is below `cap`. Time is passed
/// in as the elapsed duration since the loop started, so tests can simulate it.
#[derive(Debug, Clone)]
pub struct WaveSpawner {
    interval: Duration,
    cap: usize,
    last_spawn: Duration,
}

impl WaveSpawner {
    pub fn new(interval: Duration, cap: usize) -> Self {
        WaveSpawner {
            interval,
            cap,
            last_spawn: Duration::ZERO,
        }
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Restarts the timer so the next wave is due one interval after `now`.
    pub fn restart(&mut self, now: Duration) {
        self.last_spawn = now;
    }

    /// Returns `true` and restarts the timer if a wave should be created now.
    pub fn poll(&mut self, now: Duration, population: usize) -> bool {
        if population >= self.cap {
            return false;
        }
        if now.saturating_sub(self.last_spawn) < self.interval {
            return false;
        }
        self.last_spawn = now;
        true
    }
}
