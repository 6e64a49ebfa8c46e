//! Maze frame model
//!
//! This module contains the structured view of one step of a maze:
//! - Per-cell wall, path and route flags
//! - Decoding of the ASCII frame format

/// Per-cell display state and symbol classification
pub mod cell;
/// Frame grid and the ASCII frame decoder
pub mod frame;

pub use cell::{Cell, Side};
pub use frame::{Frame, decode};
