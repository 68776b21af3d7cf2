// src/display/manager.rs
//! DisplayManager - Synchronous wrapper around DisplayDriver.

use anyhow::{anyhow, Context, Result};
use log::{debug, info};

use crate::display::driver::DisplayDriver;
use crate::display::messages::{DisplayEvent, DriverConfig, DriverRequest, DriverResponse};
use crate::surface::Framebuffer;

/// Display metrics discovered during initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMetrics {
    pub width_px: u32,
    pub height_px: u32,
}

/// DisplayManager owns the display driver and checks its responses.
pub struct DisplayManager {
    driver: Box<dyn DisplayDriver>,
    metrics: DisplayMetrics,
}

impl DisplayManager {
    /// Initializes `driver` with `config` and records the resulting metrics.
    pub fn new(mut driver: Box<dyn DisplayDriver>, config: DriverConfig) -> Result<Self> {
        info!(
            "DisplayManager: Initializing driver ({}x{}, '{}')...",
            config.width_px, config.height_px, config.title
        );
        let response = driver
            .handle_request(DriverRequest::Init(config))
            .map_err(|e| anyhow!(e))
            .context("Failed to initialize display driver")?;

        let metrics = match response {
            DriverResponse::InitComplete {
                width_px,
                height_px,
            } => {
                info!("DisplayManager: Initialized - {}x{} px", width_px, height_px);
                DisplayMetrics {
                    width_px,
                    height_px,
                }
            }
            other => {
                return Err(anyhow!("Expected InitComplete response, got {:?}", other));
            }
        };

        Ok(Self { driver, metrics })
    }

    /// Drains the driver's pending events.
    pub fn poll_events(&mut self) -> Result<Vec<DisplayEvent>> {
        match self.request(DriverRequest::PollEvents)? {
            DriverResponse::Events(events) => {
                if !events.is_empty() {
                    debug!("DisplayManager: {} events", events.len());
                }
                Ok(events)
            }
            other => Err(anyhow!("Expected Events response, got {:?}", other)),
        }
    }

    /// Takes the framebuffer from the driver.
    pub fn request_framebuffer(&mut self) -> Result<Framebuffer> {
        match self.request(DriverRequest::RequestFramebuffer)? {
            DriverResponse::Framebuffer(framebuffer) => Ok(framebuffer),
            other => Err(anyhow!("Expected Framebuffer response, got {:?}", other)),
        }
    }

    /// Presents `framebuffer` and returns it for the next frame.
    pub fn present(&mut self, framebuffer: Framebuffer) -> Result<Framebuffer> {
        match self
            .request(DriverRequest::Present(framebuffer))
            .context("Failed to present frame")?
        {
            DriverResponse::PresentComplete(framebuffer) => Ok(framebuffer),
            other => Err(anyhow!("Expected PresentComplete response, got {:?}", other)),
        }
    }

    pub fn set_title(&mut self, title: &str) -> Result<()> {
        match self.request(DriverRequest::SetTitle(title.to_string()))? {
            DriverResponse::TitleSet => Ok(()),
            other => Err(anyhow!("Expected TitleSet response, got {:?}", other)),
        }
    }

    /// Get current display metrics.
    pub fn metrics(&self) -> &DisplayMetrics {
        &self.metrics
    }

    fn request(&mut self, request: DriverRequest) -> Result<DriverResponse> {
        self.driver.handle_request(request).map_err(|e| anyhow!(e))
    }
}
