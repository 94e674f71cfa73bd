use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;

/// Maps a pixel coordinate to its complex-plane counterpart under the view.
///
/// The pixel y axis grows downward while the imaginary axis grows upward,
/// so the imaginary part is computed against the inverted axis.
#[must_use]
pub fn pixel_to_complex(pixel: Point, view: &ViewState) -> Complex {
    Complex {
        real: (f64::from(pixel.x) - view.origin_x) / view.scale(),
        imag: (view.origin_y - f64::from(pixel.y)) / view.scale(),
    }
}

/// Exact inverse of [`pixel_to_complex`]. Returns fractional pixel
/// coordinates; callers needing a grid index round themselves.
#[must_use]
pub fn complex_to_pixel(z: Complex, view: &ViewState) -> (f64, f64) {
    (
        z.real * view.scale() + view.origin_x,
        view.origin_y - z.imag * view.scale(),
    )
}

/// Shifts the view origin so `target` lands on the centre of the buffer.
///
/// A target of exactly 0+0i instead resets the origin to its default
/// placement (2W/3, W/2). That placement is deliberately off the geometric
/// centre: it restores the startup framing, which leaves room for the
/// set's tail on the left. The half-size uses the width on both axes since
/// output is always square.
pub fn recenter(view: &mut ViewState, target: Complex, side: u32) {
    if target == Complex::ZERO {
        view.origin_x = 2.0 * f64::from(side) / 3.0;
        view.origin_y = f64::from(side) / 2.0;
        return;
    }

    let (x, y) = complex_to_pixel(target, view);
    let half = f64::from(side) / 2.0;
    view.origin_x += half - x;
    view.origin_y += half - y;
}
