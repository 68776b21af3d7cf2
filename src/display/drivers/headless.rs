//! Headless display driver: renders into memory, never opens a window.

use log::{debug, info, trace};

use crate::color::Color;
use crate::display::driver::DisplayDriver;
use crate::display::messages::{
    DisplayError, DisplayEvent, DriverConfig, DriverRequest, DriverResponse,
};
use crate::surface::Framebuffer;

pub struct HeadlessDisplayDriver {
    size: Option<(u32, u32)>,
    framebuffer: Option<Framebuffer>,
    frame_limit: Option<u64>,
    frames_presented: u64,
    close_sent: bool,
}

impl HeadlessDisplayDriver {
    /// `frame_limit` makes the driver report a close request once that many
    /// frames have been presented. Without it the driver never closes.
    pub fn new(frame_limit: Option<u64>) -> Self {
        HeadlessDisplayDriver {
            size: None,
            framebuffer: None,
            frame_limit,
            frames_presented: 0,
            close_sent: false,
        }
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl DisplayDriver for HeadlessDisplayDriver {
    fn handle_request(&mut self, request: DriverRequest) -> Result<DriverResponse, DisplayError> {
        match request {
            DriverRequest::Init(DriverConfig {
                width_px,
                height_px,
                ..
            }) => {
                if self.size.is_some() {
                    return Err(DisplayError::AlreadyInitialized);
                }
                info!("HeadlessDisplayDriver: Init {}x{}", width_px, height_px);
                self.size = Some((width_px, height_px));
                self.framebuffer = Some(Framebuffer::new(width_px, height_px, Color::BLACK));
                Ok(DriverResponse::InitComplete {
                    width_px,
                    height_px,
                })
            }
            DriverRequest::PollEvents => {
                self.size.ok_or(DisplayError::NotInitialized)?;
                let limit_reached = self
                    .frame_limit
                    .is_some_and(|limit| self.frames_presented >= limit);
                if limit_reached && !self.close_sent {
                    info!(
                        "HeadlessDisplayDriver: frame limit of {} reached, requesting close",
                        self.frames_presented
                    );
                    self.close_sent = true;
                    return Ok(DriverResponse::Events(vec![DisplayEvent::CloseRequested]));
                }
                Ok(DriverResponse::Events(Vec::new()))
            }
            DriverRequest::RequestFramebuffer => {
                self.size.ok_or(DisplayError::NotInitialized)?;
                let framebuffer = self
                    .framebuffer
                    .take()
                    .ok_or(DisplayError::FramebufferUnavailable)?;
                Ok(DriverResponse::Framebuffer(framebuffer))
            }
            DriverRequest::Present(framebuffer) => {
                let expected = self.size.ok_or(DisplayError::NotInitialized)?;
                if framebuffer.dimensions() != expected {
                    return Err(DisplayError::FramebufferMismatch {
                        expected,
                        actual: framebuffer.dimensions(),
                    });
                }
                self.frames_presented += 1;
                trace!("HeadlessDisplayDriver: Present #{}", self.frames_presented);
                Ok(DriverResponse::PresentComplete(framebuffer))
            }
            DriverRequest::SetTitle(title) => {
                debug!("HeadlessDisplayDriver: SetTitle '{}'", title);
                Ok(DriverResponse::TitleSet)
            }
        }
    }
}
