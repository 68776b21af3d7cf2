// src/display/driver.rs
//! DisplayDriver trait - minimal interface for platform-specific display primitives.
//!
//! ## Lifecycle
//! 1. Inherent constructor - pure setup, no window yet
//! 2. `handle_request(Init)` - create the window, report metrics
//! 3. Request/response loop - poll, present, set title
//! 4. `Drop` - cleanup (no explicit shutdown message)

use crate::display::messages::{DisplayError, DriverRequest, DriverResponse};

/// Minimal platform-specific display driver interface.
///
/// All common logic (handshake, response checking) lives in DisplayManager.
/// Drivers run on the control thread; they need not be `Send`.
pub trait DisplayDriver {
    /// Handle a request from DisplayManager, returning a response.
    ///
    /// ## Request/Response Pairs
    /// - `Init(config)` → `InitComplete`
    /// - `PollEvents` → `Events`
    /// - `RequestFramebuffer` → `Framebuffer` (transfer ownership to manager)
    /// - `Present(buf)` → `PresentComplete(buf)` (display and return ownership)
    /// - `SetTitle(s)` → `TitleSet`
    fn handle_request(&mut self, request: DriverRequest) -> Result<DriverResponse, DisplayError>;
}
