//! Read back a rendered icon and describe what was drawn.

use crate::render::{Glyph, GlyphGeometry, GLYPH_COLOR};
use image::{Rgb, RgbImage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSummary {
    pub width: u32,
    pub height: u32,
    pub top_color: Rgb<u8>,
    pub bottom_color: Rgb<u8>,
    /// Glyph expected for an icon of this width
    pub glyph: Glyph,
    pub horizontal_bars: usize,
    pub vertical_bars: usize,
}

impl IconSummary {
    /// True when the bar counts match the glyph expected for this size.
    pub fn glyph_matches(&self) -> bool {
        let expected = match self.glyph {
            Glyph::Grid => 3,
            Glyph::Cross => 1,
        };
        self.width == self.height
            && self.horizontal_bars == expected
            && self.vertical_bars == expected
    }
}

/// Summarize an icon. Bars are counted as runs of glyph-colored pixels
/// along a probe column that only horizontal bars cross, and a probe row
/// that only vertical bars cross.
///
/// The gradient color is sampled at column 0, which no bar reaches.
pub fn inspect(img: &RgbImage) -> IconSummary {
    let (width, height) = img.dimensions();
    let geometry = GlyphGeometry::new(width);
    let glyph = geometry.glyph();

    let probe_x = geometry.margin;
    let probe_y = match glyph {
        Glyph::Grid => geometry.center - geometry.row_height + geometry.row_height / 2,
        Glyph::Cross => geometry.margin,
    };

    let horizontal_bars = if probe_x < width {
        count_runs((0..height).map(|y| *img.get_pixel(probe_x, y) == GLYPH_COLOR))
    } else {
        0
    };
    let vertical_bars = if probe_y < height {
        count_runs((0..width).map(|x| *img.get_pixel(x, probe_y) == GLYPH_COLOR))
    } else {
        0
    };

    IconSummary {
        width,
        height,
        top_color: *img.get_pixel(0, 0),
        bottom_color: *img.get_pixel(0, height.saturating_sub(1)),
        glyph,
        horizontal_bars,
        vertical_bars,
    }
}

/// Number of maximal runs of `true` in the sequence.
fn count_runs(samples: impl Iterator<Item = bool>) -> usize {
    let mut runs = 0;
    let mut previous = false;
    for hit in samples {
        if hit && !previous {
            runs += 1;
        }
        previous = hit;
    }
    runs
}
