// src/config.rs

//! Defines the configuration structures for the wave screensaver.
//!
//! Every section derives `Deserialize` with `#[serde(default)]`, so a JSON
//! override file only needs to name the values it changes. Command-line
//! options are applied on top of whatever the file produced, and the final
//! result is checked by [`Config::validate`] before anything is built from it.

use std::f32::consts::TAU;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Largest accepted window side, in pixels. Matches the usual maximum texture
/// size of SDL renderers and keeps the framebuffer at or below 1 GiB.
pub const MAX_WINDOW_DIMENSION: u32 = 16_384;

// --- Top-Level Configuration Structure ---

/// Represents the complete configuration of the screensaver.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window and surface settings.
    pub window: WindowConfig,
    /// Wave population and parameter ranges.
    pub waves: WaveConfig,
    /// Frame pacing and dispatch settings.
    pub performance: PerformanceConfig,
}

impl Config {
    /// Reads a JSON configuration file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Rejects configurations the factory or the updater cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            bail!(
                "window size must be non-zero, got {}x{}",
                self.window.width,
                self.window.height
            );
        }
        if self.window.width > MAX_WINDOW_DIMENSION
            || self.window.height > MAX_WINDOW_DIMENSION
        {
            bail!(
                "window size {}x{} exceeds the maximum of {} pixels per side",
                self.window.width,
                self.window.height,
                MAX_WINDOW_DIMENSION
            );
        }
        self.waves.amplitude.validate("waves.amplitude")?;
        self.waves.frequency.validate("waves.frequency")?;
        self.waves.speed.validate("waves.speed")?;
        self.waves.direction.validate("waves.direction")?;
        if self.waves.speed.min < 0.0 || self.waves.speed.max >= TAU {
            bail!(
                "waves.speed must lie in [0, 2π), got [{}, {}]",
                self.waves.speed.min,
                self.waves.speed.max
            );
        }
        if self.waves.spawn_interval_ms == 0 {
            bail!("waves.spawn_interval_ms must be non-zero");
        }
        if self.performance.worker_threads == Some(0) {
            bail!("performance.worker_threads must be at least 1 when set");
        }
        Ok(())
    }
}

// --- Window Configuration ---

/// Settings for the window and the drawing surface behind it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
    /// Color the surface is cleared to at the start of every frame.
    pub background: Color,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 800,
            height: 600,
            title: "Moving waves".to_string(),
            background: Color::BLACK,
        }
    }
}

// --- Wave Configuration ---

/// Inclusive range a wave parameter is drawn from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FloatRange {
    pub min: f32,
    pub max: f32,
}

impl FloatRange {
    pub const fn new(min: f32, max: f32) -> Self {
        FloatRange { min, max }
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    fn validate(&self, name: &str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            bail!("{} bounds must be finite, got [{}, {}]", name, self.min, self.max);
        }
        if self.min > self.max {
            bail!("{} is empty: min {} > max {}", name, self.min, self.max);
        }
        Ok(())
    }
}

/// Settings for how many waves exist and what they look like.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WaveConfig {
    /// Upper bound on the number of live waves.
    pub max_waves: usize,
    /// Real-time spacing between two wave creations.
    pub spawn_interval_ms: u64,
    /// Number of points drawn per wave and frame.
    pub length: u32,
    pub amplitude: FloatRange,
    pub frequency: FloatRange,
    /// Phase increment per frame. Must stay below 2π.
    pub speed: FloatRange,
    /// Per-step displacement multiplier, used for both axes.
    pub direction: FloatRange,
}

impl Default for WaveConfig {
    fn default() -> Self {
        WaveConfig {
            max_waves: 50,
            spawn_interval_ms: 1000,
            length: 100,
            amplitude: FloatRange::new(10.0, 100.0),
            frequency: FloatRange::new(0.01, 0.1),
            speed: FloatRange::new(0.005, 0.02),
            direction: FloatRange::new(-1.0, 1.0),
        }
    }
}

// --- Performance Configuration ---

/// How the per-wave update and render step is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DispatchMode {
    /// Every wave is processed on the control thread.
    Sequential,
    /// Waves are fanned out across a worker pool.
    Parallel,
}

/// Settings related to frame pacing and parallelism.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    pub dispatch: DispatchMode,
    /// Worker pool size for parallel dispatch. `None` uses one thread per core.
    pub worker_threads: Option<usize>,
    /// Sleep inserted after every presented frame. Zero renders as fast as possible.
    pub frame_delay_ms: u64,
    /// How often the measured frame rate is logged.
    pub fps_report_interval_ms: u64,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        PerformanceConfig {
            dispatch: DispatchMode::Parallel,
            worker_threads: None,
            frame_delay_ms: 0,
            fps_report_interval_ms: 1000,
        }
    }
}
