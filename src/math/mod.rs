//! Mathematical utilities for glyph layout

/// Font size search and glyph centering
pub mod glyph;
