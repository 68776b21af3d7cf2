// src/frame_loop/mod.rs

//! The per-frame orchestration of the screensaver.
//!
//! One call to [`FrameLoop::step`] is one iteration: observe the input
//! events, create a wave if one is due, clear the surface and update+render
//! every wave that existed when the iteration began. Presenting the surface
//! is left to the caller, which owns the display.
//!
//! While the window is unfocused no new waves are created; the existing ones
//! keep moving.

pub mod dispatch;
pub mod fps;
pub mod spawner;

pub use dispatch::Dispatcher;
pub use fps::FpsCounter;
pub use spawner::WaveSpawner;

use std::time::{Duration, Instant};

use anyhow::Result;
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::Rng;

use crate::color::Color;
use crate::config::Config;
use crate::display::DisplayEvent;
use crate::renderer::Renderer;
use crate::surface::DrawSurface;
use crate::wave::{Wave, WaveFactory};

/// State of the loop after an iteration.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LoopStatus {
    /// Keep iterating.
    Running,
    /// A close request was observed. Terminal.
    Quit,
}

/// Owns the wave collection and everything needed to advance it.
pub struct FrameLoop<R = StdRng> {
    waves: Vec<Wave>,
    factory: WaveFactory<R>,
    spawner: WaveSpawner,
    dispatcher: Dispatcher,
    renderer: Renderer,
    screen_size: (u32, u32),
    background: Color,
    status: LoopStatus,
    focused: bool,
}

impl FrameLoop<StdRng> {
    /// Builds a loop from a validated configuration. `seed` fixes the wave
    /// sequence; `None` seeds from the operating system.
    pub fn from_config(config: &Config, seed: Option<u64>) -> Result<Self> {
        let factory = WaveFactory::with_optional_seed(seed, config.waves.clone());
        Self::new(config, factory)
    }
}

impl<R: Rng> FrameLoop<R> {
    pub fn new(config: &Config, factory: WaveFactory<R>) -> Result<Self> {
        let dispatcher = Dispatcher::new(
            config.performance.dispatch,
            config.performance.worker_threads,
        )?;
        let spawner = WaveSpawner::new(
            Duration::from_millis(config.waves.spawn_interval_ms),
            config.waves.max_waves,
        );
        info!(
            "FrameLoop: up to {} waves, one every {} ms, {} points each",
            config.waves.max_waves, config.waves.spawn_interval_ms, config.waves.length
        );
        Ok(FrameLoop {
            waves: Vec::with_capacity(config.waves.max_waves.min(1024)),
            factory,
            spawner,
            dispatcher,
            renderer: Renderer::new(),
            screen_size: (config.window.width, config.window.height),
            background: config.window.background,
            status: LoopStatus::Running,
            focused: true,
        })
    }

    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }

    pub fn status(&self) -> LoopStatus {
        self.status
    }

    /// Whether waves are currently being created.
    pub fn is_spawning(&self) -> bool {
        self.focused
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Runs one iteration at `now`, the time elapsed since the loop started.
    ///
    /// Waves created during this iteration are first drawn on the next one.
    /// A close request does not cut the iteration short: the frame is still
    /// fully drawn and the caller should present it before stopping.
    pub fn step<S>(&mut self, now: Duration, events: &[DisplayEvent], surface: &mut S) -> LoopStatus
    where
        S: DrawSurface + Send + ?Sized,
    {
        let live = self.waves.len();

        for event in events {
            match event {
                DisplayEvent::CloseRequested => {
                    if self.status == LoopStatus::Running {
                        info!("FrameLoop: close requested, finishing the current frame");
                    }
                    self.status = LoopStatus::Quit;
                }
                DisplayEvent::FocusLost => {
                    if self.focused {
                        debug!("FrameLoop: focus lost, pausing wave creation");
                    }
                    self.focused = false;
                }
                DisplayEvent::FocusGained => {
                    if !self.focused {
                        debug!("FrameLoop: focus regained, resuming wave creation");
                        // The next wave is due one full interval from now.
                        self.spawner.restart(now);
                    }
                    self.focused = true;
                }
            }
        }

        if self.focused && self.spawner.poll(now, self.waves.len()) {
            let started = Instant::now();
            let (width, height) = self.screen_size;
            let wave = self.factory.create_wave(width, height);
            debug!(
                "FrameLoop: wave #{} created in {:?}: {:?}",
                self.waves.len() + 1,
                started.elapsed(),
                wave
            );
            self.waves.push(wave);
        }

        surface.clear(self.background);
        trace!("FrameLoop: drawing {} waves at {:?}", live, now);
        self.dispatcher
            .update_and_render(&mut self.waves[..live], &self.renderer, surface);

        self.status
    }
}

#[cfg(test)]
mod tests;
