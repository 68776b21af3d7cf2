// src/frame_loop/dispatch.rs

//! Executes the per-wave update and render step, either on the calling
//! thread or fanned out over a rayon worker pool.

use std::sync::{Mutex, PoisonError};

use anyhow::{Context, Result};
use log::info;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::config::DispatchMode;
use crate::renderer::Renderer;
use crate::surface::{DrawSurface, Point};
use crate::wave::Wave;

/// Runs update+render over a batch of waves.
pub struct Dispatcher {
    mode: DispatchMode,
    pool: Option<ThreadPool>,
}

impl Dispatcher {
    /// Builds a dispatcher. Parallel mode gets a dedicated pool of
    /// `worker_threads` threads (one per core when `None`).
    pub fn new(mode: DispatchMode, worker_threads: Option<usize>) -> Result<Self> {
        let pool = match mode {
            DispatchMode::Sequential => None,
            DispatchMode::Parallel => {
                let mut builder =
                    ThreadPoolBuilder::new().thread_name(|idx| format!("wave-worker-{}", idx));
                if let Some(threads) = worker_threads {
                    builder = builder.num_threads(threads);
                }
                let pool = builder
                    .build()
                    .context("Failed to build the wave worker pool")?;
                info!(
                    "Dispatcher: parallel mode with {} worker threads",
                    pool.current_num_threads()
                );
                Some(pool)
            }
        };
        if pool.is_none() {
            info!("Dispatcher: sequential mode");
        }
        Ok(Dispatcher { mode, pool })
    }

    pub fn mode(&self) -> DispatchMode {
        self.mode
    }

    /// Updates every wave in `waves` and renders it onto `surface`.
    ///
    /// Returns once every wave has been drawn.
    pub fn update_and_render<S>(&self, waves: &mut [Wave], renderer: &Renderer, surface: &mut S)
    where
        S: DrawSurface + Send + ?Sized,
    {
        match &self.pool {
            None => {
                for wave in waves.iter_mut() {
                    wave.update_position();
                    renderer.render(wave, surface);
                }
            }
            Some(pool) => {
                debug_assert_eq!(self.mode, DispatchMode::Parallel);
                let surface = Mutex::new(surface);
                pool.install(|| {
                    waves.par_iter_mut().for_each(|wave| {
                        wave.update_position();
                        let points: Vec<Point> = Renderer::points(wave).collect();

                        // The draw color is shared state on the surface: hold the
                        // lock from the color change until the last point is out.
                        let mut surface = surface.lock().unwrap_or_else(PoisonError::into_inner);
                        surface.set_draw_color(wave.color());
                        surface.draw_points(&points);
                    });
                });
            }
        }
    }
}
