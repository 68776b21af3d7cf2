// src/surface/framebuffer.rs

//! In-memory RGBA8888 pixel buffer.

use std::fmt;

use log::trace;

use super::{DrawSurface, Point};
use crate::color::Color;

/// A fixed-size buffer of packed `0xRRGGBBAA` pixels, row-major.
///
/// Ownership of the framebuffer moves between the frame loop, which draws
/// into it, and the display driver, which presents it and hands it back.
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Box<[u32]>,
    draw_color: Color,
}

impl Framebuffer {
    /// Creates a framebuffer filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let len = width as usize * height as usize;
        Framebuffer {
            width,
            height,
            pixels: vec![background.packed(); len].into_boxed_slice(),
            draw_color: Color::WHITE,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index_of(Point::new(x, y))
            .map(|idx| Color::from_packed(self.pixels[idx]))
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Iterates over the rows of the buffer, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.pixels.chunks_exact(self.width.max(1) as usize)
    }

    fn index_of(&self, point: Point) -> Option<usize> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        let (x, y) = (point.x as u32, point.y as u32);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}

impl DrawSurface for Framebuffer {
    fn clear(&mut self, color: Color) {
        self.pixels.fill(color.packed());
    }

    fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    fn draw_point(&mut self, point: Point) {
        match self.index_of(point) {
            Some(idx) => self.pixels[idx] = self.draw_color.packed(),
            None => trace!("Framebuffer: clipped point {:?}", point),
        }
    }
}

impl fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Framebuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("draw_color", &self.draw_color)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_filled_with_the_background() {
        let fb = Framebuffer::new(4, 3, Color::BLACK);
        assert_eq!(fb.pixels().len(), 12);
        assert!(fb.pixels().iter().all(|&p| p == Color::BLACK.packed()));
        assert_eq!(fb.rows().count(), 3);
    }

    #[test]
    fn test_draw_points_in_the_current_color() {
        let mut fb = Framebuffer::new(4, 3, Color::BLACK);
        let red = Color::from_rgb(255, 0, 0);
        fb.set_draw_color(red);
        fb.draw_points(&[Point::new(0, 0), Point::new(3, 2)]);
        assert_eq!(fb.pixel(0, 0), Some(red));
        assert_eq!(fb.pixel(3, 2), Some(red));
        assert_eq!(fb.pixel(1, 1), Some(Color::BLACK));
    }

    #[test]
    fn test_clip_points_outside_the_surface() {
        let mut fb = Framebuffer::new(4, 3, Color::BLACK);
        fb.set_draw_color(Color::WHITE);
        fb.draw_points(&[
            Point::new(-1, 0),
            Point::new(0, -1),
            Point::new(4, 0),
            Point::new(0, 3),
            Point::new(i32::MAX, i32::MIN),
        ]);
        assert!(fb.pixels().iter().all(|&p| p == Color::BLACK.packed()));
        assert_eq!(fb.pixel(4, 0), None);
    }

    #[test]
    fn test_clear_every_pixel() {
        let mut fb = Framebuffer::new(2, 2, Color::BLACK);
        fb.set_draw_color(Color::WHITE);
        fb.draw_point(Point::new(1, 1));
        fb.clear(Color::from_rgb(1, 2, 3));
        assert!(fb.pixels().iter().all(|&p| p == Color::from_rgb(1, 2, 3).packed()));
    }
}
