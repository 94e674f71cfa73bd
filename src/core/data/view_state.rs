use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewStateError {
    NonPositiveScale { scale: f64 },
}

impl fmt::Display for ViewStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveScale { scale } => {
                write!(f, "view scale must be positive, got {}", scale)
            }
        }
    }
}

impl Error for ViewStateError {}

/// Current placement of the complex plane inside the pixel grid.
///
/// `origin` is the pixel coordinate of complex 0+0i and `scale` is the
/// pixels-per-unit conversion factor (the echelon). The scale is kept
/// private so it can never be observed at or below zero; zoom transitions
/// go through [`ViewState::zoom_in`] and [`ViewState::try_zoom_out`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    pub origin_x: f64,
    pub origin_y: f64,
    scale: f64,
}

impl ViewState {
    pub fn new(origin_x: f64, origin_y: f64, scale: f64) -> Result<Self, ViewStateError> {
        if scale <= 0.0 {
            return Err(ViewStateError::NonPositiveScale { scale });
        }

        Ok(Self {
            origin_x,
            origin_y,
            scale,
        })
    }

    /// The startup view for a square buffer of the given side length:
    /// origin at (2W/3, W/2) and one third of the width per complex unit.
    /// This shows the classic [-2, 1] × [-1.5, 1.5] framing of the set.
    pub fn initial(side: u32) -> Result<Self, ViewStateError> {
        let side = f64::from(side);
        Self::new(2.0 * side / 3.0, side / 2.0, side / 3.0)
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Increases the scale by `step`. The step must be positive.
    pub fn zoom_in(&mut self, step: f64) {
        self.scale += step;
    }

    /// Decreases the scale by `step` if the result stays positive.
    /// Returns false, leaving the scale untouched, when the step would
    /// drive the scale to zero or below.
    pub fn try_zoom_out(&mut self, step: f64) -> bool {
        if self.scale - step > 0.0 {
            self.scale -= step;
            true
        } else {
            false
        }
    }
}
