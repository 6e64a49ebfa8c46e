//! Core of a maze step viewer
//!
//! External generator and solver programs write every intermediate maze as
//! a text frame. This crate decodes those frames into per-cell display
//! state, steps through them manually or on a timer, keeps the selection
//! state of the generator dialogs and lays out the start/exit glyphs.

#![forbid(unsafe_code)]

/// Configuration dialog state: method selection, bias, size and speed
pub mod dialog;
/// Input/output operations, external tools and error handling
pub mod io;
/// Glyph size fitting for cell labels
pub mod math;
/// Maze cells and text frame decoding
pub mod maze;
/// Step sequences and timed playback
pub mod playback;

pub use io::error::{Result, ViewerError};
