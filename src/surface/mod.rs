// src/surface/mod.rs

//! Drawing surfaces waves are rasterized onto.
//!
//! A surface carries a current draw color, like an SDL renderer: callers set
//! the color first and then emit points in it. Points outside the surface are
//! dropped silently.

pub mod framebuffer;
#[cfg(test)]
pub mod recording;

pub use framebuffer::Framebuffer;

use crate::color::Color;

/// A pixel position. May lie outside the visible area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

/// Minimal drawing interface consumed by the renderer and the frame loop.
pub trait DrawSurface {
    /// Fills the whole surface with `color`.
    fn clear(&mut self, color: Color);

    /// Sets the color used by subsequent point draws.
    fn set_draw_color(&mut self, color: Color);

    /// Draws one point in the current draw color.
    fn draw_point(&mut self, point: Point);

    fn draw_points(&mut self, points: &[Point]) {
        for &point in points {
            self.draw_point(point);
        }
    }
}
