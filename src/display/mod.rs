// src/display/mod.rs
//! Message-based display layer.
//!
//! - DisplayDriver: platform-specific primitives (SDL2, headless)
//! - DisplayManager: handshake and response checking
//! - Messages: request/response protocol between the two

pub mod driver;
pub mod drivers;
pub mod manager;
pub mod messages;

pub use driver::DisplayDriver;
pub use manager::{DisplayManager, DisplayMetrics};
pub use messages::{DisplayError, DisplayEvent, DriverConfig, DriverRequest, DriverResponse};
