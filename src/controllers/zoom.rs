use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;
use crate::core::util::view_transform::{pixel_to_complex, recenter};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// One zoom step changes the scale by a third of the buffer width, the
/// same increment the startup scale is built from.
#[must_use]
pub fn zoom_step(side: u32) -> f64 {
    f64::from(side) / 3.0
}

/// Applies one scroll event to the view.
///
/// Zooming in grows the scale by one step and recentres on the complex
/// point under the cursor. Zooming out shrinks the scale by one step only
/// when the result stays positive; at the floor the scale is left alone and
/// the view recentres on the plane origin instead, so the scale invariant
/// can never be violated from the event loop.
///
/// The cursor's complex point is sampled after the scale change, so the
/// net effect is that the pixel under the cursor moves to the centre of
/// the window.
pub fn apply_zoom(view: &mut ViewState, direction: ZoomDirection, cursor: Point, side: u32) {
    let step = zoom_step(side);

    match direction {
        ZoomDirection::In => {
            view.zoom_in(step);
            let target = pixel_to_complex(cursor, view);
            recenter(view, target, side);
        }
        ZoomDirection::Out => {
            if view.try_zoom_out(step) {
                let target = pixel_to_complex(cursor, view);
                recenter(view, target, side);
            } else {
                recenter(view, Complex::ZERO, side);
            }
        }
    }
}
