//! Exporting step sequences as animated GIFs and single frames as PNGs

use crate::dialog::speed::SpeedConfig;
use crate::io::configuration::{FINAL_FRAME_HOLD, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{Result, ViewerError};
use crate::io::progress::FrameProgress;
use crate::io::render::FramePainter;
use crate::maze::frame::Frame;
use crate::playback::sequence::StepSequence;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame as ImageFrame, RgbaImage};
use std::path::Path;

/// Frame delay and skip factor for a playback speed
///
/// Speeds faster than viewers can display keep every `skip`-th step so the
/// animation still finishes in about the same wall time.
pub fn frame_timing(speed: SpeedConfig) -> (u32, usize) {
    let delay_ms = 1000 / speed.steps_per_second().max(1);
    let effective_delay_ms = delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
    let skip_factor = if delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
        VIEWER_MIN_FRAME_DELAY_MS.div_ceil(delay_ms.max(1))
    } else {
        1
    };
    (effective_delay_ms, skip_factor as usize)
}

/// Indices of the steps that become GIF frames
///
/// Always starts at the first step and always includes the last one.
pub fn exported_indices(len: usize, skip_factor: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let mut indices: Vec<usize> = (0..len).step_by(skip_factor.max(1)).collect();
    if indices.last() != Some(&(len - 1)) {
        indices.push(len - 1);
    }
    indices
}

/// Export the whole sequence as an animated GIF
///
/// Returns the number of GIF frames written, including the held final
/// frame.
///
/// # Errors
///
/// Returns an error if:
/// - A frame in the sequence is malformed
/// - File system operations fail
/// - GIF encoding fails
pub fn export_gif(
    sequence: &StepSequence,
    painter: &FramePainter,
    speed: SpeedConfig,
    output_path: &Path,
    progress: &FrameProgress,
) -> Result<usize> {
    let (delay_ms, skip_factor) = frame_timing(speed);
    let indices = exported_indices(sequence.len(), skip_factor);

    let mut frames = Vec::with_capacity(indices.len() + 1);
    for &index in &indices {
        let image = painter.render(sequence.frame_at(index)?)?;
        frames.push(gif_frame(image, delay_ms));
        progress.advance(index);
    }

    // Final frame displays longer for better visibility
    if let Some(last) = frames.last().map(|f| f.buffer().clone()) {
        frames.push(gif_frame(last, delay_ms * FINAL_FRAME_HOLD));
    }

    let written = frames.len();
    let file = create_output(output_path)?;
    let export_error = |e| ViewerError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    };
    let mut encoder = GifEncoder::new(file);
    encoder.set_repeat(Repeat::Infinite).map_err(export_error)?;
    encoder.encode_frames(frames).map_err(export_error)?;

    tracing::info!(
        path = %output_path.display(),
        steps = sequence.len(),
        frames = written,
        delay_ms,
        skip_factor,
        "exported animation"
    );
    Ok(written)
}

/// Export one frame as a PNG image
///
/// # Errors
///
/// Returns an error if the file cannot be created or encoding fails.
pub fn export_png(frame: &Frame, painter: &FramePainter, output_path: &Path) -> Result<()> {
    let image = painter.render(frame)?;
    create_parent(output_path)?;
    image.save(output_path).map_err(|e| ViewerError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(path = %output_path.display(), "exported frame");
    Ok(())
}

fn gif_frame(image: RgbaImage, delay_ms: u32) -> ImageFrame {
    ImageFrame::from_parts(image, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1))
}

fn create_parent(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ViewerError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}

fn create_output(output_path: &Path) -> Result<std::fs::File> {
    create_parent(output_path)?;
    std::fs::File::create(output_path).map_err(|e| ViewerError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "create file",
        source: e,
    })
}
