//! Maze size setting

use crate::dialog::keypad::{KeypadEntry, KeypadKey};
use crate::io::configuration::{DEFAULT_DIMENSION, MAX_DIMENSION, MIN_DIMENSION};

/// Maze size in cells, each side within `[2, 30]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeConfig {
    width: usize,
    height: usize,
}

impl Default for SizeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_DIMENSION,
            height: DEFAULT_DIMENSION,
        }
    }
}

impl SizeConfig {
    /// Size with each side clamped independently
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width.clamp(MIN_DIMENSION, MAX_DIMENSION),
            height: height.clamp(MIN_DIMENSION, MAX_DIMENSION),
        }
    }

    /// Width in cells
    pub const fn width(self) -> usize {
        self.width
    }

    /// Height in cells
    pub const fn height(self) -> usize {
        self.height
    }

    /// Same size with a different width
    #[must_use]
    pub fn with_width(self, width: usize) -> Self {
        Self::new(width, self.height)
    }

    /// Same size with a different height
    #[must_use]
    pub fn with_height(self, height: usize) -> Self {
        Self::new(self.width, height)
    }
}

/// Side edited by the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Horizontal cell count
    Width,
    /// Vertical cell count
    Height,
}

/// Keyboard and slider state of the size dialog
///
/// Values are only range-checked against the maximum while typing so that
/// two-digit sizes can be entered digit by digit; the minimum applies when
/// the dialog is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeEntry {
    width: KeypadEntry,
    height: KeypadEntry,
    focus: Dimension,
}

impl SizeEntry {
    /// Dialog opened on `size`, editing the width first
    pub fn new(size: SizeConfig) -> Self {
        let entry = |value: usize| KeypadEntry::new(value as u32, 0, MAX_DIMENSION as u32);
        Self {
            width: entry(size.width()),
            height: entry(size.height()),
            focus: Dimension::Width,
        }
    }

    /// Side currently edited
    pub const fn focus(&self) -> Dimension {
        self.focus
    }

    /// Switch the edited side
    pub fn toggle_focus(&mut self) -> Dimension {
        self.focus = match self.focus {
            Dimension::Width => Dimension::Height,
            Dimension::Height => Dimension::Width,
        };
        self.focus
    }

    /// Apply a key to the edited side and return its raw value
    pub fn press(&mut self, key: KeypadKey) -> usize {
        let entry = match self.focus {
            Dimension::Width => &mut self.width,
            Dimension::Height => &mut self.height,
        };
        entry.press(key) as usize
    }

    /// Take a slider position for one side
    pub fn slide(&mut self, dimension: Dimension, position: usize) {
        let entry = match dimension {
            Dimension::Width => &mut self.width,
            Dimension::Height => &mut self.height,
        };
        entry.set(position as u32);
    }

    /// Raw `(width, height)` shown by the dialog
    pub const fn shown(&self) -> (usize, usize) {
        (self.width.value() as usize, self.height.value() as usize)
    }

    /// Validated size to apply when the dialog is confirmed
    pub fn commit(&self) -> SizeConfig {
        let (width, height) = self.shown();
        SizeConfig::new(width, height)
    }
}
