//! Digit entry shared by the numeric dialogs
//!
//! Typing digits builds a number left to right. The first digit after the
//! dialog opens replaces the shown value; later digits are appended as long
//! as the result stays within the maximum, otherwise the digit starts a new
//! number.

/// Key understood by a [`KeypadEntry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadKey {
    /// Digit `0..=9`; larger values are ignored
    Digit(u8),
    /// Drop the last digit
    Backspace,
    /// Keep only the last digit
    Delete,
}

impl KeypadKey {
    /// Map a typed character to a key
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self::Digit(c as u8 - b'0')),
            '\u{8}' => Some(Self::Backspace),
            '\u{7f}' => Some(Self::Delete),
            _ => None,
        }
    }
}

/// Number being typed into a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadEntry {
    value: u32,
    min: u32,
    max: u32,
    fresh: bool,
}

impl KeypadEntry {
    /// Entry showing `initial`, accepting values in `[min, max]`
    pub fn new(initial: u32, min: u32, max: u32) -> Self {
        let max = max.max(min);
        Self {
            value: initial.clamp(min, max),
            min,
            max,
            fresh: true,
        }
    }

    /// Current value
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Whether no digit has been typed yet
    pub const fn is_fresh(&self) -> bool {
        self.fresh
    }

    /// Replace the value, for example from a slider
    pub fn set(&mut self, value: u32) {
        self.value = value.clamp(self.min, self.max);
    }

    /// Apply one key and return the new value
    pub fn press(&mut self, key: KeypadKey) -> u32 {
        let next = match key {
            KeypadKey::Digit(digit) if digit <= 9 => {
                let digit = u32::from(digit);
                if self.fresh {
                    self.fresh = false;
                    digit
                } else {
                    let appended = self.value.saturating_mul(10).saturating_add(digit);
                    if appended <= self.max { appended } else { digit }
                }
            }
            KeypadKey::Digit(_) => self.value,
            KeypadKey::Backspace if self.value >= 10 => self.value / 10,
            KeypadKey::Delete if self.value >= 10 => self.value % 10,
            KeypadKey::Backspace | KeypadKey::Delete => self.value,
        };

        self.value = next.clamp(self.min, self.max);
        self.value
    }
}
