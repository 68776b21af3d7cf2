// src/renderer.rs

//! This module defines the `Renderer`.
//!
//! The `Renderer` turns a [`Wave`] into a sequence of points along its
//! current sinusoid and emits them on a [`DrawSurface`]. It holds no state of
//! its own, so one instance can be shared by every worker thread.

use crate::surface::{DrawSurface, Point};
use crate::wave::Wave;

/// Rasterizes waves as point sequences.
#[derive(Debug, Default, Clone, Copy)]
pub struct Renderer;

impl Renderer {
    /// Creates a new `Renderer` instance.
    pub fn new() -> Self {
        Renderer
    }

    /// The points of `wave` for its current phase, in draw order.
    ///
    /// For step `i` the point is
    /// `(start_x + floor(i * dx), start_y + floor(i * dy + amplitude * sin(frequency * i + phase)))`.
    /// Points may fall outside any surface; clipping is the surface's job.
    pub fn points(wave: &Wave) -> impl Iterator<Item = Point> + '_ {
        let (start_x, start_y) = wave.start();
        let (direction_x, direction_y) = wave.direction();
        let amplitude = wave.amplitude();
        let frequency = wave.frequency();
        let phase = wave.phase();

        (0..wave.length()).map(move |i| {
            let step = i as f32;
            let dx = (step * direction_x).floor() as i32;
            let dy = (step * direction_y + amplitude * (frequency * step + phase).sin()).floor() as i32;
            Point::new(start_x.saturating_add(dx), start_y.saturating_add(dy))
        })
    }

    /// Sets the surface color to the wave's color, then draws every point.
    ///
    /// The color change is visible to anyone else drawing on `surface`, so
    /// callers sharing one surface between threads must hold a lock across
    /// the whole call.
    pub fn render<S: DrawSurface + ?Sized>(&self, wave: &Wave, surface: &mut S) {
        surface.set_draw_color(wave.color());
        for point in Self::points(wave) {
            surface.draw_point(point);
        }
    }
}
