//! Progress display for frame-by-frame exports

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static FRAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len} frames")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar counting rendered frames
///
/// A hidden bar keeps the same bookkeeping without drawing anything, so
/// quiet runs and tests go through the same code path.
#[derive(Debug, Clone)]
pub struct FrameProgress {
    bar: ProgressBar,
}

impl FrameProgress {
    /// Visible bar over `total` frames labelled with `label`
    pub fn new(total: usize, label: &str) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(FRAME_STYLE.clone());
        bar.set_message(label.to_string());
        Self { bar }
    }

    /// Bar that never draws
    pub fn hidden(total: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total as u64);
        Self { bar }
    }

    /// Visible unless `quiet`
    pub fn for_run(total: usize, label: &str, quiet: bool) -> Self {
        if quiet {
            Self::hidden(total)
        } else {
            Self::new(total, label)
        }
    }

    /// Record that the frame at `index` has been rendered
    pub fn advance(&self, index: usize) {
        self.bar.set_position(index as u64 + 1);
    }

    /// Frames counted so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total frames expected
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Stop the bar, leaving `message` in place
    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }
}
