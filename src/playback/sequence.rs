//! Ordered list of raw frames produced by one generator or solver run
//!
//! Frames are kept as text and decoded on first access; a decoded frame is
//! cached for the lifetime of the sequence.

use std::cell::OnceCell;
use std::path::Path;

use crate::io::configuration::STEP_SEPARATOR;
use crate::io::error::{Result, ViewerError};
use crate::maze::frame::{Frame, decode, infer_dimensions};

#[derive(Debug, Clone)]
struct RawFrame {
    text: String,
    decoded: OnceCell<Frame>,
}

/// Step log split into frames plus the current playback position
///
/// Invariant: the sequence holds at least one frame and
/// `current_index < len()`.
#[derive(Debug, Clone)]
pub struct StepSequence {
    frames: Vec<RawFrame>,
    width: usize,
    height: usize,
    current: usize,
}

/// Split a step log into frame texts
///
/// Line endings are normalized to `\n` before splitting on blank lines.
/// Each piece is trimmed of surrounding newlines and empty pieces are
/// dropped, so a trailing separator does not produce an extra frame.
pub fn split_frames(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n");
    normalized
        .split(STEP_SEPARATOR)
        .map(|piece| piece.trim_matches('\n'))
        .filter(|piece| !piece.trim().is_empty())
        .map(str::to_owned)
        .collect()
}

impl StepSequence {
    /// Split a step log, taking the maze size from the first frame
    ///
    /// # Errors
    ///
    /// Returns an error if the text contains no frames or the first frame is
    /// too small to infer a size from.
    pub fn load(text: &str) -> Result<Self> {
        let frames = split_frames(text);
        let first = frames.first().ok_or_else(|| ViewerError::EmptyInput {
            origin: "step text".to_string(),
        })?;
        let (width, height) = infer_dimensions(first).map_err(|e| e.in_frame(0))?;
        Ok(Self::from_frames(frames, width, height))
    }

    /// Split a step log for a maze of known size
    ///
    /// # Errors
    ///
    /// Returns an error if the text contains no frames.
    pub fn load_with_dimensions(text: &str, width: usize, height: usize) -> Result<Self> {
        let frames = split_frames(text);
        if frames.is_empty() {
            return Err(ViewerError::EmptyInput {
                origin: "step text".to_string(),
            });
        }
        Ok(Self::from_frames(frames, width, height))
    }

    /// Read and split a step log file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds no frames.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ViewerError::FileSystem {
            path: path.to_path_buf(),
            operation: "read step log",
            source: e,
        })?;

        Self::load(&text).map_err(|e| match e {
            ViewerError::EmptyInput { .. } => ViewerError::EmptyInput {
                origin: path.display().to_string(),
            },
            other => other,
        })
    }

    fn from_frames(frames: Vec<String>, width: usize, height: usize) -> Self {
        tracing::debug!(frames = frames.len(), width, height, "loaded step sequence");
        Self {
            frames: frames
                .into_iter()
                .map(|text| RawFrame {
                    text,
                    decoded: OnceCell::new(),
                })
                .collect(),
            width,
            height,
            current: 0,
        }
    }

    /// Number of frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false for a loaded sequence
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Index of the last frame
    pub fn last_index(&self) -> usize {
        self.frames.len().saturating_sub(1)
    }

    /// Maze size in cells used to decode frames
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Current playback position
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// Move the playback position
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of bounds.
    pub fn set_current_index(&mut self, index: usize) -> Result<()> {
        if index >= self.frames.len() {
            return Err(ViewerError::IndexOutOfBounds {
                index,
                len: self.frames.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// Move back to the first frame, which always exists
    pub(crate) const fn rewind(&mut self) {
        self.current = 0;
    }

    /// Undecoded text of a frame
    pub fn raw_frame(&self, index: usize) -> Option<&str> {
        self.frames.get(index).map(|raw| raw.text.as_str())
    }

    /// Decoded frame at `index`
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of bounds or the frame text is
    /// malformed.
    pub fn frame_at(&self, index: usize) -> Result<&Frame> {
        let raw = self
            .frames
            .get(index)
            .ok_or(ViewerError::IndexOutOfBounds {
                index,
                len: self.frames.len(),
            })?;

        if let Some(frame) = raw.decoded.get() {
            return Ok(frame);
        }

        let frame = decode(&raw.text, self.width, self.height).map_err(|e| e.in_frame(index))?;
        Ok(raw.decoded.get_or_init(|| frame))
    }

    /// Decoded frame at the current position
    ///
    /// # Errors
    ///
    /// Returns an error if the frame text is malformed.
    pub fn current_frame(&self) -> Result<&Frame> {
        self.frame_at(self.current)
    }

    /// Decoded final frame, the finished maze
    ///
    /// # Errors
    ///
    /// Returns an error if the frame text is malformed.
    pub fn last_frame(&self) -> Result<&Frame> {
        self.frame_at(self.last_index())
    }

    /// Decode every frame, reporting the first malformed one
    ///
    /// # Errors
    ///
    /// Returns the error of the first frame that fails to decode.
    pub fn validate(&self) -> Result<()> {
        for index in 0..self.frames.len() {
            self.frame_at(index)?;
        }
        Ok(())
    }
}
