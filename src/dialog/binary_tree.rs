//! Bias setting for the binary-tree generator

use std::fmt;

/// Diagonal the binary-tree generator carves towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum BinaryTreeBias {
    /// Passages open north and west
    #[value(name = "northwest")]
    NorthWest,
    /// Passages open north and east
    #[value(name = "northeast")]
    NorthEast,
    /// Passages open south and west
    #[default]
    #[value(name = "southwest")]
    SouthWest,
    /// Passages open south and east
    #[value(name = "southeast")]
    SouthEast,
}

impl BinaryTreeBias {
    /// All biases in dialog order
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Token understood by the generator
    pub const fn token(self) -> &'static str {
        match self {
            Self::NorthWest => "northwest",
            Self::NorthEast => "northeast",
            Self::SouthWest => "southwest",
            Self::SouthEast => "southeast",
        }
    }

    /// Dialog keyboard shortcut, case-insensitive
    ///
    /// `N` northwest, `E` northeast, `W` southwest, `S` southeast.
    pub const fn from_shortcut(key: char) -> Option<Self> {
        match key.to_ascii_uppercase() {
            'N' => Some(Self::NorthWest),
            'E' => Some(Self::NorthEast),
            'W' => Some(Self::SouthWest),
            'S' => Some(Self::SouthEast),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryTreeBias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
