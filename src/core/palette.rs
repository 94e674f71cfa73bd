use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::EscapeResult;
use std::error::Error;
use std::fmt;

/// Default palette size: seven segments of 256 entries each, one entry
/// per 8-bit intensity step.
pub const DEFAULT_PALETTE_SIZE: usize = 1792;

const SEGMENTS: usize = 7;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PaletteError {
    TooSmall { size: usize, minimum: usize },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall { size, minimum } => {
                write!(
                    f,
                    "palette needs at least {} entries (one per segment), got {}",
                    minimum, size
                )
            }
        }
    }
}

impl Error for PaletteError {}

/// Fixed cyclic colour gradient indexed by escape iteration count.
///
/// Seven linear segments in a fixed order: black→magenta, magenta→blue,
/// blue→cyan, cyan→green, green→yellow, yellow→red, red→black. Built once
/// at startup and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colours: Vec<Colour>,
}

fn segment_colour(segment: usize, intensity: u8) -> Colour {
    let i = intensity;
    match segment {
        0 => Colour { r: i, g: 0, b: i },
        1 => Colour {
            r: 255 - i,
            g: 0,
            b: 255,
        },
        2 => Colour { r: 0, g: i, b: 255 },
        3 => Colour {
            r: 0,
            g: 255,
            b: 255 - i,
        },
        4 => Colour { r: i, g: 255, b: 0 },
        5 => Colour {
            r: 255,
            g: 255 - i,
            b: 0,
        },
        _ => Colour {
            r: 255 - i,
            g: 0,
            b: 0,
        },
    }
}

impl Palette {
    /// Builds a palette of `size` entries. Sizes that are not a multiple of
    /// seven still work: each entry scales its offset within the segment
    /// onto the 0..=255 intensity ramp.
    pub fn build(size: usize) -> Result<Self, PaletteError> {
        if size < SEGMENTS {
            return Err(PaletteError::TooSmall {
                size,
                minimum: SEGMENTS,
            });
        }

        let mut colours = Vec::with_capacity(size);

        for index in 0..size {
            let segment = index * SEGMENTS / size;
            let segment_start = segment * size / SEGMENTS;
            let segment_len = (segment + 1) * size / SEGMENTS - segment_start;
            let intensity = ((index - segment_start) * 256 / segment_len).min(255) as u8;

            colours.push(segment_colour(segment, intensity));
        }

        Ok(Self { colours })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    #[must_use]
    pub fn entry(&self, index: usize) -> Option<Colour> {
        self.colours.get(index).copied()
    }

    /// Colour for an escape classification. In-set points map to the black
    /// sentinel; escaped points map through the truncating integer index
    /// `iterations * (len - 1) / max_iterations`, so the selected entry is
    /// fully determined by the iteration count.
    ///
    /// `max_iterations` must be the same non-zero budget the classification
    /// ran with, which keeps the index inside the table.
    #[must_use]
    pub fn colour_for(&self, result: EscapeResult, max_iterations: u32) -> Colour {
        match result {
            EscapeResult::InSet => Colour::BLACK,
            EscapeResult::Escaped { iterations } => {
                let index =
                    iterations as usize * (self.colours.len() - 1) / max_iterations as usize;
                self.colours[index]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::MAX_ITERATION;

    #[test]
    fn test_build_returns_requested_size() {
        for size in [7, 100, 1000, DEFAULT_PALETTE_SIZE] {
            assert_eq!(Palette::build(size).unwrap().len(), size);
        }
    }

    #[test]
    fn test_build_rejects_undersized_palettes() {
        assert_eq!(
            Palette::build(6),
            Err(PaletteError::TooSmall {
                size: 6,
                minimum: 7
            })
        );
        assert_eq!(
            Palette::build(0),
            Err(PaletteError::TooSmall {
                size: 0,
                minimum: 7
            })
        );
    }

    #[test]
    fn test_first_entry_is_black() {
        let palette = Palette::build(DEFAULT_PALETTE_SIZE).unwrap();

        assert_eq!(palette.entry(0).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_segment_anchor_colours_at_default_size() {
        let palette = Palette::build(DEFAULT_PALETTE_SIZE).unwrap();

        let anchors = [
            (0, Colour { r: 0, g: 0, b: 0 }),        // black
            (256, Colour { r: 255, g: 0, b: 255 }),  // magenta
            (512, Colour { r: 0, g: 0, b: 255 }),    // blue
            (768, Colour { r: 0, g: 255, b: 255 }),  // cyan
            (1024, Colour { r: 0, g: 255, b: 0 }),   // green
            (1280, Colour { r: 255, g: 255, b: 0 }), // yellow
            (1536, Colour { r: 255, g: 0, b: 0 }),   // red
        ];

        for (index, expected) in anchors {
            assert_eq!(palette.entry(index).unwrap(), expected, "index {index}");
        }
    }

    #[test]
    fn test_last_entry_closes_the_cycle_near_black() {
        let palette = Palette::build(DEFAULT_PALETTE_SIZE).unwrap();

        // red → black segment ends at intensity 255: (255 - 255, 0, 0)
        assert_eq!(
            palette.entry(DEFAULT_PALETTE_SIZE - 1).unwrap(),
            Colour::BLACK
        );
    }

    #[test]
    fn test_channels_are_monotonic_within_each_segment() {
        let size = DEFAULT_PALETTE_SIZE;
        let palette = Palette::build(size).unwrap();
        let segment_len = size / 7;

        for segment in 0..7 {
            let entries: Vec<Colour> = (segment * segment_len..(segment + 1) * segment_len)
                .map(|i| palette.entry(i).unwrap())
                .collect();

            let channels: [fn(&Colour) -> u8; 3] = [|c| c.r, |c| c.g, |c| c.b];
            for channel in channels {
                let values: Vec<u8> = entries.iter().map(channel).collect();
                let ascending = values.windows(2).all(|w| w[0] <= w[1]);
                let descending = values.windows(2).all(|w| w[0] >= w[1]);
                assert!(
                    ascending || descending,
                    "segment {segment} channel not monotonic"
                );
            }
        }
    }

    #[test]
    fn test_odd_sizes_still_start_black_and_stay_in_range() {
        let palette = Palette::build(100).unwrap();

        assert_eq!(palette.entry(0).unwrap(), Colour::BLACK);
        assert_eq!(palette.len(), 100);
    }

    #[test]
    fn test_colour_for_in_set_is_black() {
        let palette = Palette::build(DEFAULT_PALETTE_SIZE).unwrap();

        assert_eq!(
            palette.colour_for(EscapeResult::InSet, MAX_ITERATION),
            Colour::BLACK
        );
    }

    #[test]
    fn test_colour_for_uses_truncating_index() {
        let palette = Palette::build(DEFAULT_PALETTE_SIZE).unwrap();

        // iteration 0 lands on the first entry
        assert_eq!(
            palette.colour_for(EscapeResult::Escaped { iterations: 0 }, MAX_ITERATION),
            palette.entry(0).unwrap()
        );

        // iteration 1: 1 * 1791 / 255 = 7 (truncated)
        assert_eq!(
            palette.colour_for(EscapeResult::Escaped { iterations: 1 }, MAX_ITERATION),
            palette.entry(7).unwrap()
        );

        // the highest escaped index stays inside the table
        let last = palette.colour_for(
            EscapeResult::Escaped {
                iterations: MAX_ITERATION - 1,
            },
            MAX_ITERATION,
        );
        assert_eq!(last, palette.entry(254 * 1791 / 255).unwrap());
    }
}
