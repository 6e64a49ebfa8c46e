//! Frame decoding from the fixed-grid ASCII format
//!
//! A frame of a `width x height` maze is `2*height+1` rows of `2*width+1`
//! characters. Even row/column indices hold walls and connectors, odd ones
//! hold cell content. Cell `(x, y)` has its content at column `2x+1`, row
//! `2y+1`, and the four characters orthogonally next to it describe its sides.

use ndarray::Array2;

use crate::io::error::{Result, format_error, invalid_parameter};
use crate::maze::cell::{
    Cell, EMPTY, PATH, ROUTE, Side, WALL, is_path_symbol, is_route_symbol,
};

/// Decoded grid snapshot of maze state
///
/// Cells are stored row-major; the cell at `(x, y)` has the flat index
/// `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    /// Indexed by `[y, x]`
    cells: Array2<Cell>,
}

impl Frame {
    /// Frame with every cell closed, the state of a cleared maze
    pub fn cleared(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: Array2::from_elem((height, width), Cell::walled()),
        }
    }

    /// Width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)` in cells
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Cell at column `x`, row `y`
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.cells.get([y, x])
    }

    /// Cell at row-major index `y * width + x`
    pub fn cell_at(&self, index: usize) -> Option<&Cell> {
        if self.width == 0 {
            return None;
        }
        self.cell(index % self.width, index / self.width)
    }

    /// All cells in row-major order with their coordinates
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Cell)> + '_ {
        self.cells.indexed_iter().map(|((y, x), cell)| (x, y, cell))
    }

    /// Number of visited cells
    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_active()).count()
    }
}

/// Decode one frame of a `width x height` maze
///
/// # Errors
///
/// Returns an error if:
/// - `width` or `height` is zero
/// - the text has fewer than `2*height+1` rows
/// - any of those rows has fewer than `2*width+1` characters
/// - any of those rows contains non-ASCII characters
pub fn decode(text: &str, width: usize, height: usize) -> Result<Frame> {
    if width == 0 {
        return Err(invalid_parameter("width", &width, &"must be at least 1"));
    }
    if height == 0 {
        return Err(invalid_parameter("height", &height, &"must be at least 1"));
    }

    let row_count = 2 * height + 1;
    let row_len = 2 * width + 1;

    let rows: Vec<&[u8]> = text
        .split('\n')
        .take(row_count)
        .map(|row| row.strip_suffix('\r').unwrap_or(row).as_bytes())
        .collect();

    if rows.len() < row_count {
        return Err(format_error(&format!(
            "expected at least {row_count} rows for height {height}, found {}",
            rows.len()
        )));
    }

    for (index, row) in rows.iter().enumerate() {
        if row.len() < row_len {
            return Err(format_error(&format!(
                "row {index} has {} characters, expected at least {row_len} for width {width}",
                row.len()
            )));
        }
        if !row.is_ascii() {
            return Err(format_error(&format!(
                "row {index} contains non-ASCII characters"
            )));
        }
    }

    let cells = Array2::from_shape_fn((height, width), |(y, x)| decode_cell(&rows, x, y));

    Ok(Frame {
        width,
        height,
        cells,
    })
}

/// Infer `(width, height)` from the shape of a frame
///
/// The width comes from the first row, the height from the number of rows.
///
/// # Errors
///
/// Returns an error if the frame has fewer than 3 rows or its first row has
/// fewer than 3 characters.
pub fn infer_dimensions(text: &str) -> Result<(usize, usize)> {
    let rows: Vec<&str> = text
        .split('\n')
        .map(|row| row.strip_suffix('\r').unwrap_or(row))
        .collect();
    let first_len = rows.first().map_or(0, |row| row.chars().count());

    if rows.len() < 3 || first_len < 3 {
        return Err(format_error(&format!(
            "a frame needs at least 3 rows of 3 characters, found {} rows, first row {first_len} characters",
            rows.len()
        )));
    }

    Ok(((first_len - 1) / 2, (rows.len() - 1) / 2))
}

fn decode_cell(rows: &[&[u8]], x: usize, y: usize) -> Cell {
    let xs = 2 * x + 1;
    let ys = 2 * y + 1;

    let at = |col: usize, row: usize| {
        rows.get(row)
            .and_then(|r| r.get(col))
            .map_or(EMPTY, |&b| char::from(b))
    };
    let neighbour = |side: Side| {
        let (col, row) = side.connector(xs, ys);
        at(col, row)
    };

    let symbol = at(xs, ys);
    let [left, right, top, bottom] = Side::ALL.map(neighbour);

    let on_path = is_path_symbol(symbol);
    let on_route = is_route_symbol(symbol);

    Cell {
        left: left == WALL,
        right: right == WALL,
        top: top == WALL,
        bottom: bottom == WALL,

        left_path: on_path && left == PATH,
        right_path: on_path && right == PATH,
        top_path: on_path && top == PATH,
        bottom_path: on_path && bottom == PATH,

        left_route: on_route && left == ROUTE,
        right_route: on_route && right == ROUTE,
        top_route: on_route && top == ROUTE,
        bottom_route: on_route && bottom == ROUTE,

        symbol,
    }
}
