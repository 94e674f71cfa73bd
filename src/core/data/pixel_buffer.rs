use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

fn side_to_buffer_size(side: u32) -> usize {
    side as usize * side as usize * 3
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    SideTooSmall {
        side: u32,
    },
    PixelOutsideBounds {
        pixel: Point,
        side: u32,
    },
    SizeMismatch {
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SideTooSmall { side } => {
                write!(f, "buffer side must be at least 2 pixels, got {}", side)
            }
            Self::PixelOutsideBounds { pixel, side } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} buffer",
                    pixel.x, pixel.y, side, side
                )
            }
            Self::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "expected buffer of {} bytes, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Square RGB pixel grid, row-major, three bytes per pixel.
///
/// The output window is always square, so a single side length is the only
/// dimension carried around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    side: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn new(side: u32) -> Result<Self, PixelBufferError> {
        if side < 2 {
            return Err(PixelBufferError::SideTooSmall { side });
        }

        Ok(Self {
            side,
            buffer: vec![0; side_to_buffer_size(side)],
        })
    }

    pub fn from_data(side: u32, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        if side < 2 {
            return Err(PixelBufferError::SideTooSmall { side });
        }

        let expected = side_to_buffer_size(side);
        if expected != buffer.len() {
            return Err(PixelBufferError::SizeMismatch {
                expected,
                actual: buffer.len(),
            });
        }

        Ok(Self { side, buffer })
    }

    #[must_use]
    pub fn side(&self) -> u32 {
        self.side
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    fn contains(&self, pixel: Point) -> bool {
        pixel.x >= 0
            && pixel.y >= 0
            && (pixel.x as u32) < self.side
            && (pixel.y as u32) < self.side
    }

    fn index_of(&self, pixel: Point) -> usize {
        (pixel.y as usize * self.side as usize + pixel.x as usize) * 3
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        if !self.contains(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                side: self.side,
            });
        }

        let index = self.index_of(pixel);
        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        if !self.contains(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                side: self.side,
            });
        }

        let index = self.index_of(pixel);
        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }
}
