use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use pixels::{Pixels, SurfaceTexture};
use std::error::Error;
use std::fmt;
use winit::dpi::PhysicalPosition;
use winit::window::Window;

#[derive(Debug)]
pub enum PresentError {
    SideMismatch { buffer_side: u32, surface_side: u32 },
    Surface(pixels::Error),
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SideMismatch {
                buffer_side,
                surface_side,
            } => {
                write!(
                    f,
                    "buffer side {} does not match presenter side {}",
                    buffer_side, surface_side
                )
            }
            Self::Surface(err) => write!(f, "surface error: {}", err),
        }
    }
}

impl Error for PresentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::SideMismatch { .. } => None,
            Self::Surface(err) => Some(err),
        }
    }
}

/// Uploads finished frames to the window through a `pixels` framebuffer.
///
/// The framebuffer is a fixed side×side texture; `pixels` scales it onto
/// whatever surface size the window ends up with, which also gives us the
/// cursor-to-buffer coordinate mapping on hidpi displays.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    side: u32,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, side: u32) -> Result<Self, pixels::Error> {
        let surface_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(surface_size.width, surface_size.height, window);
        let pixels = Pixels::new(side, side, surface_texture)?;

        Ok(Self { pixels, side })
    }

    /// Copies the RGB buffer into the RGBA frame (alpha 255) and presents.
    pub fn present(&mut self, buffer: &PixelBuffer) -> Result<(), PresentError> {
        if buffer.side() != self.side {
            return Err(PresentError::SideMismatch {
                buffer_side: buffer.side(),
                surface_side: self.side,
            });
        }

        let frame = self.pixels.frame_mut();
        for (src, dst) in buffer
            .buffer()
            .chunks_exact(3)
            .zip(frame.chunks_exact_mut(4))
        {
            dst[0] = src[0];
            dst[1] = src[1];
            dst[2] = src[2];
            dst[3] = 255;
        }

        self.pixels.render().map_err(PresentError::Surface)
    }

    /// Maps a physical cursor position to a buffer pixel, clamping
    /// positions outside the drawn area onto the nearest edge.
    #[must_use]
    pub fn cursor_to_pixel(&self, position: PhysicalPosition<f64>) -> Point {
        let pos = (position.x as f32, position.y as f32);
        let (x, y) = match self.pixels.window_pos_to_pixel(pos) {
            Ok(inside) => inside,
            Err(outside) => self.pixels.clamp_pixel_pos(outside),
        };

        Point {
            x: x as i32,
            y: y as i32,
        }
    }
}
