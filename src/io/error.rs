//! Error types for frame decoding, playback and external tool operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all viewer operations
#[derive(Debug)]
pub enum ViewerError {
    /// Frame text does not match the expected grid shape
    ///
    /// Raised when the text has fewer than `2*height+1` rows, a row is shorter
    /// than `2*width+1` characters, or the text is not ASCII.
    FrameFormat {
        /// Index of the frame inside its step sequence, when known
        frame: Option<usize>,
        /// Description of the shape mismatch
        reason: String,
    },

    /// Input produced no frames at all
    EmptyInput {
        /// Where the input came from (file path or a short description)
        origin: String,
    },

    /// Frame index outside the loaded sequence
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Number of frames in the sequence
        len: usize,
    },

    /// A frame was requested while no sequence is loaded
    NoSequenceLoaded,

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to encode or save a rendered image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// External generator or solver did not produce usable output
    ToolFailed {
        /// Program that was invoked
        program: PathBuf,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrameFormat {
                frame: Some(index),
                reason,
            } => {
                write!(f, "Malformed frame {index}: {reason}")
            }
            Self::FrameFormat {
                frame: None,
                reason,
            } => {
                write!(f, "Malformed frame: {reason}")
            }
            Self::EmptyInput { origin } => {
                write!(f, "No frames found in {origin}")
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "Frame index {index} is out of bounds (length: {len})")
            }
            Self::NoSequenceLoaded => write!(f, "No step sequence is loaded"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::ToolFailed { program, reason } => {
                write!(f, "External tool '{}' failed: {reason}", program.display())
            }
        }
    }
}

impl std::error::Error for ViewerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for viewer results
pub type Result<T> = std::result::Result<T, ViewerError>;

impl ViewerError {
    /// Attach the index of the frame inside its sequence to a format error
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn in_frame(self, index: usize) -> Self {
        match self {
            Self::FrameFormat { reason, .. } => Self::FrameFormat {
                frame: Some(index),
                reason,
            },
            other => other,
        }
    }

    /// Whether the error means the frame payload itself was unusable
    pub const fn is_payload_error(&self) -> bool {
        matches!(self, Self::FrameFormat { .. } | Self::EmptyInput { .. })
    }
}

impl From<std::io::Error> for ViewerError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a frame format error without a sequence index
pub fn format_error(reason: &impl ToString) -> ViewerError {
    ViewerError::FrameFormat {
        frame: None,
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ViewerError {
    ViewerError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a tool failure error
pub fn tool_failed(program: impl Into<PathBuf>, reason: &impl ToString) -> ViewerError {
    ViewerError::ToolFailed {
        program: program.into(),
        reason: reason.to_string(),
    }
}
