use rayon::prelude::*;

use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::mandelbrot::classify;
use crate::core::palette::Palette;
use crate::core::util::view_transform::pixel_to_complex;

fn colour_row(
    py: u32,
    side: u32,
    view: &ViewState,
    palette: &Palette,
    max_iterations: u32,
) -> Vec<u8> {
    let mut row = Vec::with_capacity(side as usize * 3);

    for px in 0..side {
        let pixel = Point {
            x: px as i32,
            y: py as i32,
        };
        let c = pixel_to_complex(pixel, view);
        let colour = palette.colour_for(classify(c, max_iterations), max_iterations);
        row.extend_from_slice(&[colour.r, colour.g, colour.b]);
    }

    row
}

/// Renders a complete frame, classifying every pixel of the side×side grid
/// under the given view. Rows are computed in parallel with rayon and only
/// assembled into the buffer once every row has finished, so callers always
/// observe a frame as one atomic full-buffer replace.
///
/// The scan uses integer pixel indices rather than accumulating complex
/// steps, so every pixel is visited exactly once with no floating-point
/// drift.
pub fn render_frame(
    side: u32,
    view: &ViewState,
    palette: &Palette,
    max_iterations: u32,
) -> Result<PixelBuffer, PixelBufferError> {
    let rows: Vec<Vec<u8>> = (0..side)
        .into_par_iter()
        .map(|py| colour_row(py, side, view, palette, max_iterations))
        .collect();

    PixelBuffer::from_data(side, rows.into_iter().flatten().collect())
}

/// Single-threaded reference version of [`render_frame`]. Used by tests to
/// pin down the row-major scan order the parallel version must reproduce.
pub fn render_frame_serial(
    side: u32,
    view: &ViewState,
    palette: &Palette,
    max_iterations: u32,
) -> Result<PixelBuffer, PixelBufferError> {
    let mut data = Vec::with_capacity(side as usize * side as usize * 3);

    for py in 0..side {
        data.extend_from_slice(&colour_row(py, side, view, palette, max_iterations));
    }

    PixelBuffer::from_data(side, data)
}
