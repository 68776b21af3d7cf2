// src/wave/mod.rs

//! The `Wave` record and its per-frame phase update.

pub mod factory;

pub use factory::WaveFactory;

use std::f32::consts::TAU;

use crate::color::Color;

/// Construction parameters of a [`Wave`]. Everything here stays fixed for
/// the lifetime of the wave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParams {
    pub amplitude: f32,
    pub frequency: f32,
    pub speed: f32,
    pub start_x: i32,
    pub start_y: i32,
    pub direction_x: f32,
    pub direction_y: f32,
    pub color: Color,
    pub length: u32,
}

/// One animated sinusoid.
///
/// Only the phase changes after creation, and only through
/// [`Wave::update_position`].
#[derive(Debug, Clone, PartialEq)]
pub struct Wave {
    params: WaveParams,
    phase: f32,
}

impl Wave {
    /// Creates a wave with phase 0.
    pub fn new(params: WaveParams) -> Self {
        Wave { params, phase: 0.0 }
    }

    /// Advances the phase by one frame, wrapping into `[0, 2π)`.
    ///
    /// A single subtraction is enough because `speed < 2π`.
    pub fn update_position(&mut self) {
        self.phase += self.params.speed;
        if self.phase >= TAU {
            self.phase -= TAU;
        }
    }

    pub fn params(&self) -> &WaveParams {
        &self.params
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn amplitude(&self) -> f32 {
        self.params.amplitude
    }

    pub fn frequency(&self) -> f32 {
        self.params.frequency
    }

    pub fn speed(&self) -> f32 {
        self.params.speed
    }

    pub fn start(&self) -> (i32, i32) {
        (self.params.start_x, self.params.start_y)
    }

    pub fn direction(&self) -> (f32, f32) {
        (self.params.direction_x, self.params.direction_y)
    }

    pub fn color(&self) -> Color {
        self.params.color
    }

    pub fn length(&self) -> u32 {
        self.params.length
    }
}

#[cfg(test)]
mod tests;
