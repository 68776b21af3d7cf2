//! SDL2 display driver.
//!
//! The frame is drawn by the frame loop into a [`Framebuffer`] and uploaded
//! here into a streaming RGBA8888 texture, which is then copied to the window.
//! All SDL calls happen on the thread that owns the driver.

use log::{debug, info, trace};
use sdl2::event::{Event, WindowEvent};
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;
use sdl2::{EventPump, Sdl};

use crate::color::Color;
use crate::display::driver::DisplayDriver;
use crate::display::messages::{
    DisplayError, DisplayEvent, DriverConfig, DriverRequest, DriverResponse,
};
use crate::surface::Framebuffer;

struct SdlWindow {
    canvas: Canvas<Window>,
    // Built with `unsafe_textures`: no lifetime, destroyed by hand in `Drop`.
    texture: Option<Texture>,
    event_pump: EventPump,
    size: (u32, u32),
}

pub struct SdlDisplayDriver {
    context: Sdl,
    window: Option<SdlWindow>,
    framebuffer: Option<Framebuffer>,
}

impl SdlDisplayDriver {
    /// Initializes SDL's core. The window is created on `Init`.
    pub fn new() -> Result<Self, DisplayError> {
        let context = sdl2::init().map_err(DisplayError::Sdl)?;
        info!("SdlDisplayDriver: SDL initialized");
        Ok(SdlDisplayDriver {
            context,
            window: None,
            framebuffer: None,
        })
    }

    fn init(&mut self, config: DriverConfig) -> Result<DriverResponse, DisplayError> {
        if self.window.is_some() {
            return Err(DisplayError::AlreadyInitialized);
        }
        let video = self.context.video().map_err(DisplayError::Sdl)?;
        let window = video
            .window(&config.title, config.width_px, config.height_px)
            .position_centered()
            .build()
            .map_err(|e| DisplayError::Sdl(e.to_string()))?;
        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| DisplayError::Sdl(e.to_string()))?;
        let texture = canvas
            .texture_creator()
            .create_texture_streaming(PixelFormatEnum::RGBA8888, config.width_px, config.height_px)
            .map_err(|e| DisplayError::Sdl(e.to_string()))?;
        let event_pump = self.context.event_pump().map_err(DisplayError::Sdl)?;

        let size = (config.width_px, config.height_px);
        info!("SdlDisplayDriver: window '{}' created, {}x{}", config.title, size.0, size.1);
        self.window = Some(SdlWindow {
            canvas,
            texture: Some(texture),
            event_pump,
            size,
        });
        self.framebuffer = Some(Framebuffer::new(size.0, size.1, Color::BLACK));
        Ok(DriverResponse::InitComplete {
            width_px: size.0,
            height_px: size.1,
        })
    }

    fn window(&mut self) -> Result<&mut SdlWindow, DisplayError> {
        self.window.as_mut().ok_or(DisplayError::NotInitialized)
    }

    fn poll_events(&mut self) -> Result<DriverResponse, DisplayError> {
        let window = self.window()?;
        let mut events = Vec::new();
        for event in window.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => events.push(DisplayEvent::CloseRequested),
                Event::Window { win_event, .. } => match win_event {
                    WindowEvent::Close => events.push(DisplayEvent::CloseRequested),
                    WindowEvent::FocusGained => events.push(DisplayEvent::FocusGained),
                    WindowEvent::FocusLost => events.push(DisplayEvent::FocusLost),
                    _ => {}
                },
                other => trace!("SdlDisplayDriver: ignoring {:?}", other),
            }
        }
        Ok(DriverResponse::Events(events))
    }

    fn present(&mut self, framebuffer: Framebuffer) -> Result<DriverResponse, DisplayError> {
        let window = self.window()?;
        if framebuffer.dimensions() != window.size {
            return Err(DisplayError::FramebufferMismatch {
                expected: window.size,
                actual: framebuffer.dimensions(),
            });
        }
        let texture = window.texture.as_mut().ok_or(DisplayError::NotInitialized)?;
        texture
            .with_lock(None, |buffer: &mut [u8], pitch: usize| {
                for (row, pixels) in framebuffer.rows().enumerate() {
                    let line = &mut buffer[row * pitch..row * pitch + pixels.len() * 4];
                    for (dst, pixel) in line.chunks_exact_mut(4).zip(pixels) {
                        dst.copy_from_slice(&pixel.to_ne_bytes());
                    }
                }
            })
            .map_err(DisplayError::Sdl)?;
        window
            .canvas
            .copy(texture, None, None)
            .map_err(DisplayError::Sdl)?;
        window.canvas.present();
        Ok(DriverResponse::PresentComplete(framebuffer))
    }
}

impl DisplayDriver for SdlDisplayDriver {
    fn handle_request(&mut self, request: DriverRequest) -> Result<DriverResponse, DisplayError> {
        match request {
            DriverRequest::Init(config) => self.init(config),
            DriverRequest::PollEvents => self.poll_events(),
            DriverRequest::RequestFramebuffer => {
                self.window()?;
                let framebuffer = self
                    .framebuffer
                    .take()
                    .ok_or(DisplayError::FramebufferUnavailable)?;
                Ok(DriverResponse::Framebuffer(framebuffer))
            }
            DriverRequest::Present(framebuffer) => self.present(framebuffer),
            DriverRequest::SetTitle(title) => {
                let window = self.window()?;
                window
                    .canvas
                    .window_mut()
                    .set_title(&title)
                    .map_err(|e| DisplayError::Sdl(e.to_string()))?;
                Ok(DriverResponse::TitleSet)
            }
        }
    }
}

impl Drop for SdlDisplayDriver {
    fn drop(&mut self) {
        if let Some(texture) = self.window.as_mut().and_then(|w| w.texture.take()) {
            // SAFETY: the canvas that created the texture is still alive here;
            // it is dropped right after, together with `self.window`.
            unsafe { texture.destroy() };
        }
        debug!("SdlDisplayDriver: shut down");
    }
}
