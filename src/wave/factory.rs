// src/wave/factory.rs

//! Randomized wave creation.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Wave, WaveParams};
use crate::color::Color;
use crate::config::{FloatRange, WaveConfig};

/// Creates waves with parameters drawn uniformly from the configured ranges.
///
/// The factory owns its generator. Pass a seeded one to get a reproducible
/// sequence of waves.
pub struct WaveFactory<R> {
    rng: R,
    config: WaveConfig,
}

impl WaveFactory<StdRng> {
    /// A factory whose waves are fully determined by `seed`.
    pub fn seeded(seed: u64, config: WaveConfig) -> Self {
        Self::new(StdRng::seed_from_u64(seed), config)
    }

    /// A factory seeded from the operating system.
    pub fn from_entropy(config: WaveConfig) -> Self {
        Self::new(StdRng::from_os_rng(), config)
    }

    /// Seeds from `seed` when given, from the operating system otherwise.
    pub fn with_optional_seed(seed: Option<u64>, config: WaveConfig) -> Self {
        match seed {
            Some(seed) => {
                debug!("WaveFactory: using fixed seed {}", seed);
                Self::seeded(seed, config)
            }
            None => Self::from_entropy(config),
        }
    }
}

impl<R: Rng> WaveFactory<R> {
    /// Wraps an existing generator. `config` must have passed
    /// [`crate::config::Config::validate`]; empty ranges make sampling panic.
    pub fn new(rng: R, config: WaveConfig) -> Self {
        WaveFactory { rng, config }
    }

    /// Draws a new wave whose origin lies within
    /// `[0, screen_width] x [0, screen_height]`.
    pub fn create_wave(&mut self, screen_width: u32, screen_height: u32) -> Wave {
        let amplitude = sample(&mut self.rng, self.config.amplitude);
        let frequency = sample(&mut self.rng, self.config.frequency);
        let speed = sample(&mut self.rng, self.config.speed);
        let start_x = self.rng.random_range(0..=clamp_to_i32(screen_width));
        let start_y = self.rng.random_range(0..=clamp_to_i32(screen_height));
        let color = Color::from_rgb(self.rng.random(), self.rng.random(), self.rng.random());
        let direction_x = sample(&mut self.rng, self.config.direction);
        let direction_y = sample(&mut self.rng, self.config.direction);

        Wave::new(WaveParams {
            amplitude,
            frequency,
            speed,
            start_x,
            start_y,
            direction_x,
            direction_y,
            color,
            length: self.config.length,
        })
    }
}

fn sample<R: Rng>(rng: &mut R, range: FloatRange) -> f32 {
    rng.random_range(range.min..=range.max)
}

fn clamp_to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
