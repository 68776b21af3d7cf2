// src/display/messages.rs
//! Message types for communication between DisplayManager and DisplayDriver.
//!
//! The framebuffer travels by value: the manager hands it to the driver with
//! `Present` and gets it back with `PresentComplete`.

use thiserror::Error;

use crate::surface::Framebuffer;

/// Window parameters sent with `Init`.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverConfig {
    pub width_px: u32,
    pub height_px: u32,
    pub title: String,
}

/// Requests sent from DisplayManager to DisplayDriver.
#[derive(Debug)]
pub enum DriverRequest {
    /// Create the window and report its size. Answered by `InitComplete`.
    Init(DriverConfig),

    /// Fetch pending native events. Answered by `Events`.
    PollEvents,

    /// Hand the framebuffer over for drawing. Answered by `Framebuffer`.
    RequestFramebuffer,

    /// Display the framebuffer. Answered by `PresentComplete`, which returns it.
    Present(Framebuffer),

    /// Set the window title. Answered by `TitleSet`.
    SetTitle(String),
}

/// Responses sent from DisplayDriver to DisplayManager.
#[derive(Debug)]
pub enum DriverResponse {
    /// Initialization complete with the actual surface size.
    InitComplete { width_px: u32, height_px: u32 },

    /// Native events that occurred since the last poll.
    Events(Vec<DisplayEvent>),

    /// Framebuffer ownership transferred to the manager.
    Framebuffer(Framebuffer),

    /// Presentation complete, framebuffer ownership returned for reuse.
    PresentComplete(Framebuffer),

    /// Window title was set.
    TitleSet,
}

/// Platform-agnostic display events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayEvent {
    /// User requested window close.
    CloseRequested,

    /// Window gained focus.
    FocusGained,

    /// Window lost focus.
    FocusLost,
}

/// Errors reported by display drivers.
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("Driver not initialized (send Init first)")]
    NotInitialized,
    #[error("Driver already initialized")]
    AlreadyInitialized,
    #[error("Framebuffer already transferred")]
    FramebufferUnavailable,
    #[error("Framebuffer is {actual:?}, surface is {expected:?}")]
    FramebufferMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
    #[error("SDL error: {0}")]
    Sdl(String),
}
