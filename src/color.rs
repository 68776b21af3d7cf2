// src/color.rs

//! Defines the packed RGBA `Color` used by waves and drawing surfaces.

use serde::{Deserialize, Serialize};

/// A 32-bit RGBA color packed as `0xRRGGBBAA`.
///
/// This matches SDL's `RGBA8888` pixel format, so framebuffer contents can be
/// uploaded to a streaming texture without any per-pixel conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);

    /// Builds a color from its four components.
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    /// Builds a fully opaque color.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color::from_rgba(r, g, b, 0xFF)
    }

    /// Wraps an already packed `0xRRGGBBAA` value.
    pub const fn from_packed(value: u32) -> Self {
        Color(value)
    }

    pub const fn packed(self) -> u32 {
        self.0
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn a(self) -> u8 {
        self.0 as u8
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}
