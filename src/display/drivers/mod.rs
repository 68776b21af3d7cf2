// src/display/drivers/mod.rs
//! Display driver implementations.

pub mod headless;
#[cfg(feature = "sdl")]
pub mod sdl;

pub use headless::HeadlessDisplayDriver;
#[cfg(feature = "sdl")]
pub use sdl::SdlDisplayDriver;
