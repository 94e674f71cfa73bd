mod controllers;
mod core;
mod input;
mod presenters;

pub use crate::core::actions::render_frame::{render_frame, render_frame_serial};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::view_state::{ViewState, ViewStateError};
pub use crate::core::fractals::mandelbrot::{EscapeResult, MAX_ITERATION, classify};
pub use crate::core::palette::{DEFAULT_PALETTE_SIZE, Palette, PaletteError};
pub use crate::input::cli::parse_width;
pub use crate::input::gui::app::{ViewerError, run_viewer};
