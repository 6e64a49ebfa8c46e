//! Method selection for the growing-tree generator
//!
//! Up to two growth methods can be chosen. Their click order is remembered
//! because it decides which one a modifier-click replaces, while the pair
//! handed to the generator is always ordered by method ordinal. With two
//! methods chosen, a ratio in `[0, 1]` blends them.

use std::fmt;

use crate::dialog::keypad::{KeypadEntry, KeypadKey};
use crate::io::configuration::{DEFAULT_RATIO, RATIO_LABEL_WIDTH};

/// Growth strategy picking the next cell of the growing tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, clap::ValueEnum)]
pub enum GrowingTreeMethod {
    /// Most recently added cell
    Newest = 0,
    /// Cell in the middle of the active list
    Middle = 1,
    /// Least recently added cell
    Oldest = 2,
    /// Random active cell
    Random = 3,
}

impl GrowingTreeMethod {
    /// All methods in ordinal order
    pub const ALL: [Self; 4] = [Self::Newest, Self::Middle, Self::Oldest, Self::Random];

    /// Position in the enumeration
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Token understood by the generator
    pub const fn token(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Middle => "middle",
            Self::Oldest => "oldest",
            Self::Random => "random",
        }
    }
}

impl fmt::Display for GrowingTreeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Outcome of one click on a method button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// First method chosen
    Selected(GrowingTreeMethod),
    /// Second method added next to the first
    Added(GrowingTreeMethod),
    /// A chosen method was clicked again and removed
    Deselected(GrowingTreeMethod),
    /// A modifier-click swapped one method for another
    Replaced {
        /// Method that was dropped
        removed: GrowingTreeMethod,
        /// Method that took its place
        added: GrowingTreeMethod,
    },
    /// Third method clicked without the modifier, nothing changed
    Rejected(GrowingTreeMethod),
}

/// Ordered choice of at most two distinct methods plus a blend ratio
#[derive(Debug, Clone, PartialEq)]
pub struct DualMethodSelector {
    /// Click order, oldest first, never more than two entries
    order: Vec<GrowingTreeMethod>,
    ratio: f64,
    ratio_entry: KeypadEntry,
}

impl Default for DualMethodSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl DualMethodSelector {
    /// Nothing selected, default ratio
    pub fn new() -> Self {
        Self {
            order: Vec::with_capacity(2),
            ratio: DEFAULT_RATIO,
            ratio_entry: ratio_entry(DEFAULT_RATIO),
        }
    }

    /// Restore a previously confirmed pair
    ///
    /// A lone second method becomes the first, the pair is put in ordinal
    /// order and a second method equal to the first is dropped.
    pub fn from_pair(
        first: Option<GrowingTreeMethod>,
        second: Option<GrowingTreeMethod>,
        ratio: f64,
    ) -> Self {
        let mut selector = Self::new();
        selector.set_ratio(ratio);

        let (first, second) = match (first, second) {
            (None, second) => (second, None),
            (Some(a), Some(b)) if b < a => (Some(b), Some(a)),
            (Some(a), Some(b)) if a == b => (Some(a), None),
            pair => pair,
        };
        selector.order.extend(first.into_iter().chain(second));
        selector
    }

    /// Handle a click on `method`, with the replace modifier held or not
    pub fn click(&mut self, method: GrowingTreeMethod, modifier: bool) -> SelectionChange {
        let change = if self.order.contains(&method) {
            self.order.retain(|&m| m != method);
            SelectionChange::Deselected(method)
        } else {
            match (self.order.first().copied(), self.order.len(), modifier) {
                (None, _, _) => {
                    self.order.push(method);
                    SelectionChange::Selected(method)
                }
                (Some(_), 1, false) => {
                    self.order.push(method);
                    SelectionChange::Added(method)
                }
                (Some(removed), _, true) => {
                    // The earliest click makes room
                    self.order.remove(0);
                    self.order.push(method);
                    SelectionChange::Replaced {
                        removed,
                        added: method,
                    }
                }
                (Some(_), _, false) => SelectionChange::Rejected(method),
            }
        };

        tracing::debug!(?change, order = ?self.order, "growing-tree selection");
        change
    }

    /// Methods in click order
    pub fn order(&self) -> &[GrowingTreeMethod] {
        &self.order
    }

    /// Number of chosen methods
    pub fn selected_count(&self) -> usize {
        self.order.len()
    }

    /// Whether `method` is chosen
    pub fn is_selected(&self, method: GrowingTreeMethod) -> bool {
        self.order.contains(&method)
    }

    /// Chosen methods ordered by ordinal
    pub fn canonical_pair(&self) -> (Option<GrowingTreeMethod>, Option<GrowingTreeMethod>) {
        match self.order.as_slice() {
            [a, b] if b < a => (Some(*b), Some(*a)),
            [a, b] => (Some(*a), Some(*b)),
            [only] => (Some(*only), None),
            _ => (None, None),
        }
    }

    /// Blend ratio between the two methods
    pub const fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Set the blend ratio, clamped to `[0, 1]`
    ///
    /// NaN leaves the ratio unchanged.
    pub fn set_ratio(&mut self, ratio: f64) -> f64 {
        if !ratio.is_nan() {
            self.ratio = ratio.clamp(0.0, 1.0);
            self.ratio_entry.set(to_percent(self.ratio));
        }
        self.ratio
    }

    /// Type a digit or editing key into the ratio field (in percent)
    pub fn press_ratio_key(&mut self, key: KeypadKey) -> f64 {
        let percent = self.ratio_entry.press(key);
        self.ratio = f64::from(percent) / 100.0;
        self.ratio
    }

    /// The ratio controls are shown only while two methods are chosen
    pub fn ratio_panel_visible(&self) -> bool {
        self.order.len() == 2
    }

    /// Text shown for the ratio and passed to the generator
    pub fn ratio_label(&self) -> String {
        format_ratio(self.ratio)
    }

    /// Method token for the generator, `first` or `first-second`
    ///
    /// Falls back to the newest method when nothing is chosen.
    pub fn method_token(&self) -> String {
        match self.canonical_pair() {
            (Some(first), Some(second)) => format!("{first}-{second}"),
            (Some(first), None) => first.token().to_string(),
            _ => GrowingTreeMethod::Newest.token().to_string(),
        }
    }

    /// Parameter tokens following the algorithm name on the generator command
    pub fn generator_tokens(&self) -> Vec<String> {
        let mut tokens = vec![self.method_token()];
        if self.ratio_panel_visible() {
            tokens.push(self.ratio_label());
        }
        tokens
    }
}

/// Decimal text of a ratio, at most four characters
///
/// Whole numbers keep one fractional digit (`1.0`), everything else is cut,
/// not rounded (`0.3333` becomes `0.33`).
pub fn format_ratio(ratio: f64) -> String {
    let mut text = if ratio.fract() == 0.0 {
        format!("{ratio:.1}")
    } else {
        format!("{ratio}")
    };
    text.truncate(RATIO_LABEL_WIDTH);
    text
}

fn to_percent(ratio: f64) -> u32 {
    (ratio * 100.0).round() as u32
}

fn ratio_entry(ratio: f64) -> KeypadEntry {
    KeypadEntry::new(to_percent(ratio), 0, 100)
}
