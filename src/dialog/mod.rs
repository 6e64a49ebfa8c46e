//! Configuration dialog state without any widgets
//!
//! Each dialog keeps its selection and keyboard entry state here; a
//! presentation layer only forwards clicks, key presses and slider moves
//! and reflects the resulting values back onto its widgets.

/// Bias choice for the binary-tree generator
pub mod binary_tree;
/// Dual-method selection and blend ratio for the growing-tree generator
pub mod growing_tree;
/// Digit entry shared by the numeric dialogs
pub mod keypad;
/// Maze size value and entry state
pub mod size;
/// Playback speed value and entry state
pub mod speed;

pub use binary_tree::BinaryTreeBias;
pub use growing_tree::{DualMethodSelector, GrowingTreeMethod, SelectionChange};
pub use size::SizeConfig;
pub use speed::SpeedConfig;
