// src/cli.rs

//! Command-line parsing.
//!
//! Every argument error is reported on standard output and ends the process
//! with status 1 before anything else starts.

use std::ffi::OsString;
use std::num::IntErrorKind;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;
use thiserror::Error;

use crate::config::{Config, DispatchMode};

/// Wave cap used when the user asks for 0 waves.
pub const DEFAULT_WAVE_COUNT: usize = 50;

/// Exit status for every argument error.
pub const USAGE_EXIT_CODE: i32 = 1;

/// Animated sine-wave screensaver.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "wavesaver", version)]
pub struct Args {
    /// Maximum number of waves on screen (0 selects the default of 50).
    #[arg(value_name = "COUNT", allow_negative_numbers = true)]
    pub count: Option<String>,

    /// How the per-wave update and render step is executed.
    #[arg(long, value_enum)]
    pub dispatch: Option<DispatchMode>,

    /// Worker threads for parallel dispatch (default: one per core).
    #[arg(long)]
    pub threads: Option<usize>,

    /// Seed for the wave generator; omit for a fresh random sequence.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Render without a window, requesting a close after this many frames.
    #[arg(long)]
    pub frames: Option<u64>,

    /// Render without opening a window.
    #[arg(long)]
    pub headless: bool,

    /// Surface width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Surface height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// JSON file overriding the built-in configuration.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("The number of waves is required: wavesaver <count>")]
    MissingCount,
    #[error("Error: invalid input '{0}'. The number of waves must be a non-negative integer.")]
    NonNumericCount(String),
    #[error("{0}")]
    Usage(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        USAGE_EXIT_CODE
    }
}

/// The wave cap requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveCount {
    /// The user asked for this many waves.
    Explicit(usize),
    /// The user passed 0; [`DEFAULT_WAVE_COUNT`] applies.
    Default,
}

impl WaveCount {
    pub fn cap(self) -> usize {
        match self {
            WaveCount::Explicit(count) => count,
            WaveCount::Default => DEFAULT_WAVE_COUNT,
        }
    }
}

/// Parses `args` (including the program name).
///
/// `--help` and `--version` print and exit with status 0 right here.
pub fn parse_from<I, T>(args: I) -> Result<Args, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(args).map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        _ => CliError::Usage(err.to_string()),
    })
}

/// Interprets the positional count. No upper bound is enforced: counts past
/// `usize::MAX` saturate.
pub fn resolve_wave_count(raw: Option<&str>) -> Result<WaveCount, CliError> {
    let raw = raw.ok_or(CliError::MissingCount)?;
    match raw.trim().parse::<usize>() {
        Ok(0) => Ok(WaveCount::Default),
        Ok(count) => Ok(WaveCount::Explicit(count)),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => {
            Ok(WaveCount::Explicit(usize::MAX))
        }
        Err(_) => Err(CliError::NonNumericCount(raw.to_string())),
    }
}

impl Args {
    pub fn wave_count(&self) -> Result<WaveCount, CliError> {
        resolve_wave_count(self.count.as_deref())
    }

    /// Whether the run should skip the window.
    pub fn wants_headless(&self) -> bool {
        self.headless || self.frames.is_some()
    }

    /// Writes the command-line overrides into `config`.
    pub fn apply_to(&self, config: &mut Config, count: WaveCount) {
        config.waves.max_waves = count.cap();
        if let Some(dispatch) = self.dispatch {
            config.performance.dispatch = dispatch;
        }
        if let Some(threads) = self.threads {
            config.performance.worker_threads = Some(threads);
        }
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
    }
}
