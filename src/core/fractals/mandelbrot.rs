use crate::core::data::complex::Complex;

/// Default iteration cap for the escape loop.
pub const MAX_ITERATION: u32 = 255;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EscapeResult {
    /// The orbit stayed bounded for the whole iteration budget.
    InSet,
    /// The orbit crossed the escape threshold after `iterations` updates
    /// (0-based, so 0 means the very first update already escaped).
    Escaped { iterations: u32 },
}

/// Escape-time classification of a point under z ← z² + c.
///
/// The threshold test uses the squared modulus against 4.0, which is exact
/// and avoids the square root; it is applied after each update so the
/// iteration index counts completed updates.
#[must_use]
pub fn classify(c: Complex, max_iterations: u32) -> EscapeResult {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        z = z * z + c;

        if z.magnitude_squared() >= 4.0 {
            return EscapeResult::Escaped {
                iterations: iteration,
            };
        }
    }

    EscapeResult::InSet
}
