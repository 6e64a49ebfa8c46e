//! Rasterizing decoded frames into RGBA images
//!
//! Each cell becomes a square of `cell_size` pixels. Backgrounds are filled
//! first for the whole grid, then walls, marks and glyphs are drawn on top
//! so that a neighbour's background never hides a shared wall.

use image::{Rgba, RgbaImage};

use crate::io::configuration::{
    ACTIVE_COLOR, INACTIVE_COLOR, MARK_STROKE_RATIO, MAX_CELL_SIZE, PATH_COLOR, ROUTE_COLOR,
    TEXT_COLOR, WALL_COLOR,
};
use crate::io::error::{Result, invalid_parameter};
use crate::maze::cell::{Cell, Marker, Side};
use crate::maze::frame::Frame;
use crate::math::glyph::{GlyphBox, place_glyph};

const GLYPH_COLUMNS: u32 = 5;
const GLYPH_ROWS: u32 = 7;

/// Smallest cell edge whose glyph fits at scale 1
///
/// The 7-row bitmap may use 80% of the cell, so the cell needs 9 pixels.
pub const MIN_CELL_SIZE: u32 = 9;

// 5x7 bitmaps, bit 4 is the leftmost column
const START_GLYPH: [u8; 7] = [
    0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110,
];
const EXIT_GLYPH: [u8; 7] = [
    0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001,
];

/// Colors used when painting a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Background of unvisited cells
    pub inactive: Rgba<u8>,
    /// Background of visited cells
    pub active: Rgba<u8>,
    /// Wall lines and corner points
    pub wall: Rgba<u8>,
    /// Start and exit glyphs
    pub text: Rgba<u8>,
    /// Traversal marks
    pub path: Rgba<u8>,
    /// Route marks
    pub route: Rgba<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            inactive: Rgba(INACTIVE_COLOR),
            active: Rgba(ACTIVE_COLOR),
            wall: Rgba(WALL_COLOR),
            text: Rgba(TEXT_COLOR),
            path: Rgba(PATH_COLOR),
            route: Rgba(ROUTE_COLOR),
        }
    }
}

/// Paints frames at a fixed cell size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePainter {
    cell_size: u32,
    palette: Palette,
}

impl FramePainter {
    /// Painter with the default palette
    ///
    /// # Errors
    ///
    /// Returns an error if `cell_size` is outside
    /// `[MIN_CELL_SIZE, MAX_CELL_SIZE]`.
    pub fn new(cell_size: u32) -> Result<Self> {
        if !(MIN_CELL_SIZE..=MAX_CELL_SIZE).contains(&cell_size) {
            return Err(invalid_parameter(
                "cell_size",
                &cell_size,
                &format!("must be between {MIN_CELL_SIZE} and {MAX_CELL_SIZE} pixels"),
            ));
        }
        Ok(Self {
            cell_size,
            palette: Palette::default(),
        })
    }

    /// Same painter with different colors
    #[must_use]
    pub const fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Edge length of one cell in pixels
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Pixel size of a rendered frame, including the closing wall line
    ///
    /// # Errors
    ///
    /// Returns an error if either side does not fit in `u32` pixels.
    pub fn image_size(&self, frame: &Frame) -> Result<(u32, u32)> {
        Ok((
            self.edge_pixels("width", frame.width())?,
            self.edge_pixels("height", frame.height())?,
        ))
    }

    fn edge_pixels(&self, parameter: &'static str, cells: usize) -> Result<u32> {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(self.cell_size))
            .and_then(|pixels| pixels.checked_add(1))
            .ok_or_else(|| {
                invalid_parameter(parameter, &cells, &"rendered image would be too large")
            })
    }

    /// Render a frame
    ///
    /// # Errors
    ///
    /// Returns an error if the image size overflows.
    pub fn render(&self, frame: &Frame) -> Result<RgbaImage> {
        let (width, height) = self.image_size(frame)?;
        let mut img = RgbaImage::from_pixel(width, height, self.palette.inactive);

        for (x, y, cell) in frame.cells() {
            let color = if cell.is_active() {
                self.palette.active
            } else {
                self.palette.inactive
            };
            let (x0, y0) = self.origin(x, y);
            fill_rect(&mut img, x0, y0, self.cell_size, self.cell_size, color);
        }

        for (x, y, cell) in frame.cells() {
            self.draw_walls(&mut img, x, y, cell);
            self.draw_marks(&mut img, x, y, cell);
            self.draw_glyph(&mut img, x, y, cell);
        }

        Ok(img)
    }

    fn origin(&self, x: usize, y: usize) -> (i64, i64) {
        let size = i64::from(self.cell_size);
        (x as i64 * size, y as i64 * size)
    }

    fn draw_walls(&self, img: &mut RgbaImage, x: usize, y: usize, cell: &Cell) {
        let (x0, y0) = self.origin(x, y);
        let size = i64::from(self.cell_size);
        let span = self.cell_size + 1;
        let color = self.palette.wall;

        for side in Side::ALL {
            if !cell.wall(side) {
                continue;
            }
            match side {
                Side::Left => fill_rect(img, x0, y0, 1, span, color),
                Side::Right => fill_rect(img, x0 + size, y0, 1, span, color),
                Side::Top => fill_rect(img, x0, y0, span, 1, color),
                Side::Bottom => fill_rect(img, x0, y0 + size, span, 1, color),
            }
        }

        // Corners keep open junctions looking square
        for (cx, cy) in [(x0, y0), (x0 + size, y0), (x0, y0 + size), (x0 + size, y0 + size)] {
            fill_rect(img, cx, cy, 1, 1, color);
        }
    }

    fn draw_marks(&self, img: &mut RgbaImage, x: usize, y: usize, cell: &Cell) {
        let (x0, y0) = self.origin(x, y);
        let size = i64::from(self.cell_size);
        let stroke = ((f64::from(self.cell_size) * MARK_STROKE_RATIO).round() as u32).max(1);
        let half = i64::from(stroke / 2);
        let center = size / 2;
        let reach = (center + half + 1) as u32;

        let layers = [
            (self.palette.path, Cell::path as fn(&Cell, Side) -> bool),
            (self.palette.route, Cell::route as fn(&Cell, Side) -> bool),
        ];

        for (color, marked) in layers {
            for side in Side::ALL {
                if !marked(cell, side) {
                    continue;
                }
                match side {
                    Side::Left => fill_rect(img, x0, y0 + center - half, reach, stroke, color),
                    Side::Right => fill_rect(
                        img,
                        x0 + center - half,
                        y0 + center - half,
                        (size - center + half) as u32 + 1,
                        stroke,
                        color,
                    ),
                    Side::Top => fill_rect(img, x0 + center - half, y0, stroke, reach, color),
                    Side::Bottom => fill_rect(
                        img,
                        x0 + center - half,
                        y0 + center - half,
                        stroke,
                        (size - center + half) as u32 + 1,
                        color,
                    ),
                }
            }
        }
    }

    fn draw_glyph(&self, img: &mut RgbaImage, x: usize, y: usize, cell: &Cell) {
        let Some(marker) = cell.marker() else {
            return;
        };
        let bitmap = match marker {
            Marker::Start { .. } => &START_GLYPH,
            Marker::Exit { .. } => &EXIT_GLYPH,
        };

        let (x0, y0) = self.origin(x, y);
        let size = f64::from(self.cell_size);
        let placement = place_glyph(x0 as f64, y0 as f64, size, size, 1, |scale| GlyphBox {
            width: f64::from(GLYPH_COLUMNS * scale),
            height: f64::from(GLYPH_ROWS * scale),
        });

        let scale = placement.size;
        let left = placement.x.round() as i64;
        let top = placement.y.round() as i64 - i64::from(GLYPH_ROWS * scale);

        for (row, bits) in bitmap.iter().enumerate() {
            for column in 0..GLYPH_COLUMNS {
                if bits & (1 << (GLYPH_COLUMNS - 1 - column)) == 0 {
                    continue;
                }
                fill_rect(
                    img,
                    left + i64::from(column * scale),
                    top + row as i64 * i64::from(scale),
                    scale,
                    scale,
                    self.palette.text,
                );
            }
        }
    }
}

/// Fill a rectangle, silently clipping whatever falls outside the image
fn fill_rect(img: &mut RgbaImage, x: i64, y: i64, width: u32, height: u32, color: Rgba<u8>) {
    for py in y..y + i64::from(height) {
        for px in x..x + i64::from(width) {
            let (Ok(px), Ok(py)) = (u32::try_from(px), u32::try_from(py)) else {
                continue;
            };
            if let Some(pixel) = img.get_pixel_mut_checked(px, py) {
                *pixel = color;
            }
        }
    }
}
