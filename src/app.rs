// src/app.rs

//! Ties the frame loop to a display: poll, step, present, repeat.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::info;

use crate::config::Config;
use crate::display::DisplayManager;
use crate::frame_loop::{FpsCounter, FrameLoop, LoopStatus};

/// The running screensaver.
pub struct Screensaver {
    frame_loop: FrameLoop,
    display: DisplayManager,
    fps: FpsCounter,
    frame_delay: Duration,
    title: String,
}

impl Screensaver {
    pub fn new(config: &Config, frame_loop: FrameLoop, display: DisplayManager) -> Self {
        Screensaver {
            frame_loop,
            display,
            fps: FpsCounter::new(Duration::from_millis(
                config.performance.fps_report_interval_ms,
            )),
            frame_delay: Duration::from_millis(config.performance.frame_delay_ms),
            title: config.window.title.clone(),
        }
    }

    /// Runs until the display reports a close request. Returns the number of
    /// frames presented.
    ///
    /// Display failures are fatal and end the run with an error.
    pub fn run(&mut self) -> Result<u64> {
        let mut framebuffer = self
            .display
            .request_framebuffer()
            .context("Failed to obtain the framebuffer")?;
        let started = Instant::now();
        let mut frames = 0u64;

        info!("Screensaver: entering main loop");
        loop {
            let events = self.display.poll_events()?;
            let now = started.elapsed();
            let status = self.frame_loop.step(now, &events, &mut framebuffer);
            framebuffer = self.display.present(framebuffer)?;
            frames += 1;

            if let Some(fps) = self.fps.tick(now) {
                let waves = self.frame_loop.waves().len();
                info!("FPS: {:.1} ({} waves)", fps, waves);
                self.display
                    .set_title(&format!("{} - {} waves, {:.0} FPS", self.title, waves, fps))?;
            }

            if status == LoopStatus::Quit {
                info!(
                    "Screensaver: quitting after {} frames, {} waves on screen",
                    frames,
                    self.frame_loop.waves().len()
                );
                return Ok(frames);
            }

            if !self.frame_delay.is_zero() {
                thread::sleep(self.frame_delay);
            }
        }
    }

    pub fn frame_loop(&self) -> &FrameLoop {
        &self.frame_loop
    }
}
