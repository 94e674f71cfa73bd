//! Window creation and the interactive event loop.

use crate::controllers::zoom::{ZoomDirection, apply_zoom};
use crate::core::actions::render_frame::render_frame;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::data::point::Point;
use crate::core::data::view_state::{ViewState, ViewStateError};
use crate::core::fractals::mandelbrot::MAX_ITERATION;
use crate::core::palette::{DEFAULT_PALETTE_SIZE, Palette, PaletteError};
use crate::presenters::pixels::presenter::PixelsPresenter;
use std::error::Error;
use std::fmt;
use std::time::Instant;
use winit::dpi::PhysicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, Event, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

#[derive(Debug)]
pub enum ViewerError {
    EventLoop(EventLoopError),
    Window(OsError),
    Surface(pixels::Error),
    Buffer(PixelBufferError),
    Palette(PaletteError),
    View(ViewStateError),
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(err) => write!(f, "event loop error: {}", err),
            Self::Window(err) => write!(f, "window error: {}", err),
            Self::Surface(err) => write!(f, "surface error: {}", err),
            Self::Buffer(err) => write!(f, "pixel buffer error: {}", err),
            Self::Palette(err) => write!(f, "palette error: {}", err),
            Self::View(err) => write!(f, "view error: {}", err),
        }
    }
}

impl Error for ViewerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Surface(err) => Some(err),
            Self::Buffer(err) => Some(err),
            Self::Palette(err) => Some(err),
            Self::View(err) => Some(err),
        }
    }
}

fn scroll_direction(delta: MouseScrollDelta) -> Option<ZoomDirection> {
    let vertical = match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    };

    if vertical > 0.0 {
        Some(ZoomDirection::In)
    } else if vertical < 0.0 {
        Some(ZoomDirection::Out)
    } else {
        None
    }
}

/// Opens a side×side window and runs the interactive loop until the window
/// is closed or a mouse button is released.
///
/// All state lives on this thread: scroll events mutate the view, trigger a
/// synchronous full re-render (the per-pixel work itself fans out over
/// rayon), and the finished buffer is presented on the next redraw. There
/// is no partial frame visible at any point.
pub fn run_viewer(side: u32) -> Result<(), ViewerError> {
    let palette = Palette::build(DEFAULT_PALETTE_SIZE).map_err(ViewerError::Palette)?;
    let mut view = ViewState::initial(side).map_err(ViewerError::View)?;

    let event_loop = EventLoop::new().map_err(ViewerError::EventLoop)?;

    // leak the window to get the 'static reference pixels needs
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandel Zoom")
            .with_inner_size(PhysicalSize::new(side, side))
            .with_resizable(false)
            .build(&event_loop)
            .map_err(ViewerError::Window)?,
    ));

    let mut presenter = PixelsPresenter::new(window, side).map_err(ViewerError::Surface)?;
    let mut buffer =
        render_frame(side, &view, &palette, MAX_ITERATION).map_err(ViewerError::Buffer)?;
    let mut cursor = Point { x: 0, y: 0 };

    window.request_redraw();

    event_loop
        .run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Wait);

            let Event::WindowEvent { event, window_id } = event else {
                return;
            };
            if window_id != window.id() {
                return;
            }

            match event {
                WindowEvent::CloseRequested
                | WindowEvent::MouseInput {
                    state: ElementState::Released,
                    ..
                } => {
                    elwt.exit();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = presenter.cursor_to_pixel(position);
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    let Some(direction) = scroll_direction(delta) else {
                        return;
                    };

                    apply_zoom(&mut view, direction, cursor, side);

                    let start = Instant::now();
                    match render_frame(side, &view, &palette, MAX_ITERATION) {
                        Ok(frame) => {
                            buffer = frame;
                            println!("scale: {:.2} | render: {:?}", view.scale(), start.elapsed());
                            window.request_redraw();
                        }
                        Err(err) => {
                            eprintln!("render error: {err}");
                            elwt.exit();
                        }
                    }
                }
                WindowEvent::RedrawRequested => {
                    if let Err(err) = presenter.present(&buffer) {
                        eprintln!("present error: {err}");
                        elwt.exit();
                    }
                }
                _ => {}
            }
        })
        .map_err(ViewerError::EventLoop)
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn test_scroll_up_zooms_in() {
        assert_eq!(
            scroll_direction(MouseScrollDelta::LineDelta(0.0, 1.0)),
            Some(ZoomDirection::In)
        );
    }

    #[test]
    fn test_scroll_down_zooms_out() {
        assert_eq!(
            scroll_direction(MouseScrollDelta::LineDelta(0.0, -1.0)),
            Some(ZoomDirection::Out)
        );
    }

    #[test]
    fn test_horizontal_scroll_is_ignored() {
        assert_eq!(scroll_direction(MouseScrollDelta::LineDelta(3.0, 0.0)), None);
    }

    #[test]
    fn test_pixel_delta_scroll() {
        assert_eq!(
            scroll_direction(MouseScrollDelta::PixelDelta(PhysicalPosition::new(
                0.0, 24.0
            ))),
            Some(ZoomDirection::In)
        );
        assert_eq!(
            scroll_direction(MouseScrollDelta::PixelDelta(PhysicalPosition::new(
                0.0, -24.0
            ))),
            Some(ZoomDirection::Out)
        );
    }
}
