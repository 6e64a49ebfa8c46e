//! Font size search for centering a single glyph inside a cell
//!
//! The search walks one point size at a time from a starting size. It
//! assumes the measured glyph height never shrinks as the size grows; a
//! measuring function that breaks this still terminates but may not return
//! the largest fitting size.

use crate::io::configuration::{GLYPH_FILL_RATIO, MAX_FONT_SIZE};

/// Largest font size whose glyph height fits within `target_height`
///
/// If the glyph at `initial_size` is already too tall, sizes are tried
/// downward until one fits or size 1 is reached. Otherwise sizes are tried
/// upward and the last one that still fits is returned. The result is
/// always in `1..=MAX_FONT_SIZE`.
pub fn fit_font_size<F, N>(initial_size: u32, mut measure_height: F, target_height: N) -> u32
where
    F: FnMut(u32) -> N,
    N: PartialOrd + Copy,
{
    let mut size = initial_size.clamp(1, MAX_FONT_SIZE);

    if measure_height(size) > target_height {
        while size > 1 && measure_height(size) > target_height {
            size -= 1;
        }
        return size;
    }

    while size < MAX_FONT_SIZE && measure_height(size + 1) <= target_height {
        size += 1;
    }
    size
}

/// Width and height of a glyph's bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphBox {
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

/// Font size and baseline origin of a glyph centered in a cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphPlacement {
    /// Chosen font size
    pub size: u32,
    /// Left edge of the glyph box
    pub x: f64,
    /// Bottom edge (baseline) of the glyph box
    pub y: f64,
}

/// Fit a glyph into a cell and center it
///
/// The glyph may use [`GLYPH_FILL_RATIO`] of the cell height. The returned
/// origin is the bottom-left corner of the glyph box, shifted right and up
/// from the cell's bottom-left corner by half the free space on each axis.
pub fn place_glyph<F>(
    cell_x: f64,
    cell_y: f64,
    cell_width: f64,
    cell_height: f64,
    initial_size: u32,
    mut measure: F,
) -> GlyphPlacement
where
    F: FnMut(u32) -> GlyphBox,
{
    let target = cell_height * GLYPH_FILL_RATIO;
    let size = fit_font_size(initial_size, |s| measure(s).height, target);
    let glyph = measure(size);

    let x_shift = (cell_width - glyph.width) / 2.0;
    let y_shift = (cell_height - glyph.height) / 2.0;

    GlyphPlacement {
        size,
        x: cell_x + x_shift,
        y: cell_y + cell_height - y_shift,
    }
}
