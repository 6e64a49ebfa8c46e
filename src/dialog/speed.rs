//! Playback speed setting

use std::time::Duration;

use crate::dialog::keypad::{KeypadEntry, KeypadKey};
use crate::io::configuration::{DEFAULT_SPEED, MAX_SPEED, MIN_SPEED};

/// Steps played per second, always within `[1, 100]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpeedConfig(u32);

impl Default for SpeedConfig {
    fn default() -> Self {
        Self(DEFAULT_SPEED)
    }
}

impl SpeedConfig {
    /// Speed clamped to the supported range
    pub fn new(steps_per_second: u32) -> Self {
        Self(steps_per_second.clamp(MIN_SPEED, MAX_SPEED))
    }

    /// Steps per second
    pub const fn steps_per_second(self) -> u32 {
        self.0
    }

    /// Time between ticks, `floor(1000 / speed)` milliseconds
    pub const fn tick_interval(self) -> Duration {
        Duration::from_millis(1000 / self.0 as u64)
    }

    /// Text shown next to the speed slider
    pub fn label(self) -> String {
        format!("{} steps/s", self.0)
    }
}

/// Keyboard and slider state of the speed dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedEntry {
    entry: KeypadEntry,
}

impl SpeedEntry {
    /// Dialog opened on `speed`
    pub fn new(speed: SpeedConfig) -> Self {
        Self {
            entry: KeypadEntry::new(speed.steps_per_second(), MIN_SPEED, MAX_SPEED),
        }
    }

    /// Apply a key and return the resulting speed
    pub fn press(&mut self, key: KeypadKey) -> SpeedConfig {
        SpeedConfig::new(self.entry.press(key))
    }

    /// Take a slider position
    pub fn slide(&mut self, position: u32) -> SpeedConfig {
        self.entry.set(position);
        self.speed()
    }

    /// Speed currently shown
    pub fn speed(&self) -> SpeedConfig {
        SpeedConfig::new(self.entry.value())
    }
}
