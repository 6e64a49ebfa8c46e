//! Per-cell display state derived from one maze frame
//!
//! A cell carries three independent sets of side flags: walls, traversal
//! marks (path) and final solution marks (route), plus the content symbol
//! found at the cell's center in the frame text.

/// Wall character in frame text
pub const WALL: char = '#';
/// Open traversal mark
pub const PATH: char = '.';
/// Solution route mark
pub const ROUTE: char = '*';
/// Start cell, not yet visited
pub const START: char = 'S';
/// Start cell, visited
pub const START_VISITED: char = 's';
/// Exit cell, not yet visited
pub const EXIT: char = 'X';
/// Exit cell, visited
pub const EXIT_VISITED: char = 'x';
/// Empty content
pub const EMPTY: char = ' ';

/// One side of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Towards smaller x
    Left,
    /// Towards larger x
    Right,
    /// Towards smaller y
    Top,
    /// Towards larger y
    Bottom,
}

impl Side {
    /// All sides in declaration order
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    /// Column and row of the connector character next to the content
    /// position `(xs, ys)`
    ///
    /// `xs` and `ys` are odd in a well-formed frame, so subtracting one
    /// never underflows.
    pub const fn connector(self, xs: usize, ys: usize) -> (usize, usize) {
        match self {
            Self::Left => (xs - 1, ys),
            Self::Right => (xs + 1, ys),
            Self::Top => (xs, ys - 1),
            Self::Bottom => (xs, ys + 1),
        }
    }
}

/// Start or exit classification of a cell symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Start cell
    Start {
        /// Lower-case symbol, the solver has reached it
        visited: bool,
    },
    /// Exit cell
    Exit {
        /// Lower-case symbol, the solver has reached it
        visited: bool,
    },
}

impl Marker {
    /// Classify a symbol
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            START => Some(Self::Start { visited: false }),
            START_VISITED => Some(Self::Start { visited: true }),
            EXIT => Some(Self::Exit { visited: false }),
            EXIT_VISITED => Some(Self::Exit { visited: true }),
            _ => None,
        }
    }

    /// Letter drawn for the marker regardless of visit state
    pub const fn glyph(self) -> char {
        match self {
            Self::Start { .. } => START,
            Self::Exit { .. } => EXIT,
        }
    }
}

/// Whether a symbol belongs to the solution route (`*`, start or exit)
pub const fn is_route_symbol(symbol: char) -> bool {
    matches!(
        symbol,
        ROUTE | START | START_VISITED | EXIT | EXIT_VISITED
    )
}

/// Whether a symbol lies on a traversal (open path or route)
pub const fn is_path_symbol(symbol: char) -> bool {
    symbol == PATH || is_route_symbol(symbol)
}

/// Derived display state of one grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Wall on the left side
    pub left: bool,
    /// Wall on the right side
    pub right: bool,
    /// Wall on the top side
    pub top: bool,
    /// Wall on the bottom side
    pub bottom: bool,

    /// Traversal mark towards the left
    pub left_path: bool,
    /// Traversal mark towards the right
    pub right_path: bool,
    /// Traversal mark towards the top
    pub top_path: bool,
    /// Traversal mark towards the bottom
    pub bottom_path: bool,

    /// Route mark towards the left
    pub left_route: bool,
    /// Route mark towards the right
    pub right_route: bool,
    /// Route mark towards the top
    pub top_route: bool,
    /// Route mark towards the bottom
    pub bottom_route: bool,

    /// Content symbol at the cell center
    pub symbol: char,
}

impl Default for Cell {
    fn default() -> Self {
        Self::walled()
    }
}

impl Cell {
    /// Closed cell with no marks, as shown before anything is generated
    pub const fn walled() -> Self {
        Self {
            left: true,
            right: true,
            top: true,
            bottom: true,
            left_path: false,
            right_path: false,
            top_path: false,
            bottom_path: false,
            left_route: false,
            right_route: false,
            top_route: false,
            bottom_route: false,
            symbol: EMPTY,
        }
    }

    /// A cell is active (visited) unless all four walls are present
    pub const fn is_active(&self) -> bool {
        !(self.left && self.right && self.top && self.bottom)
    }

    /// Wall flag for one side
    pub const fn wall(&self, side: Side) -> bool {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
            Side::Top => self.top,
            Side::Bottom => self.bottom,
        }
    }

    /// Traversal mark for one side
    pub const fn path(&self, side: Side) -> bool {
        match side {
            Side::Left => self.left_path,
            Side::Right => self.right_path,
            Side::Top => self.top_path,
            Side::Bottom => self.bottom_path,
        }
    }

    /// Route mark for one side
    pub const fn route(&self, side: Side) -> bool {
        match side {
            Side::Left => self.left_route,
            Side::Right => self.right_route,
            Side::Top => self.top_route,
            Side::Bottom => self.bottom_route,
        }
    }

    /// Start/exit classification of the symbol
    pub const fn marker(&self) -> Option<Marker> {
        Marker::from_symbol(self.symbol)
    }
}
