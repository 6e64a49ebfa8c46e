//! Tests for step log splitting, lazy decoding and file loading

#[cfg(test)]
mod tests {
    use mazeview::ViewerError;
    use mazeview::playback::sequence::{StepSequence, split_frames};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FIRST: &str = "#####\n#.#.#\n#####";
    const SECOND: &str = "#####\n#. .#\n#####";
    const THIRD: &str = "#####\n#s*x#\n#####";

    fn three_frames() -> String {
        format!("{FIRST}\n\n{SECOND}\n\n{THIRD}\n")
    }

    // Tests frames are split on blank lines
    // Verified by splitting on single newlines
    #[test]
    fn test_split_on_blank_lines() {
        let frames = split_frames(&three_frames());
        assert_eq!(frames, vec![FIRST, SECOND, THIRD]);
    }

    // Tests CRLF logs and trailing separators do not add frames
    // Verified by keeping empty pieces
    #[test]
    fn test_split_normalizes_line_endings() {
        let text = format!("{FIRST}\n\n{SECOND}\n\n\n").replace('\n', "\r\n");
        let frames = split_frames(&text);
        assert_eq!(frames.len(), 2);
        assert_eq!(frames.first().map(String::as_str), Some(FIRST));
    }

    // Tests loading infers the maze size from the first frame
    // Verified by swapping width and height in the inference
    #[test]
    fn test_load_infers_dimensions() {
        let sequence = StepSequence::load(&three_frames()).expect("Failed to load sequence");
        assert_eq!(sequence.len(), 3);
        assert_eq!(sequence.dimensions(), (2, 1));
        assert_eq!(sequence.current_index(), 0);
        assert_eq!(sequence.last_index(), 2);
        assert!(!sequence.is_empty());
    }

    // Tests empty and whitespace-only input fail
    // Verified by allowing an empty frame list
    #[test]
    fn test_empty_input() {
        for text in ["", "\n\n\n", "  \n\n  "] {
            assert!(matches!(
                StepSequence::load(text),
                Err(ViewerError::EmptyInput { .. })
            ));
            assert!(matches!(
                StepSequence::load_with_dimensions(text, 2, 1),
                Err(ViewerError::EmptyInput { .. })
            ));
        }
    }

    // Tests frames decode on access and out-of-range access fails
    // Verified by decoding with the height as width
    #[test]
    fn test_frame_at() {
        let sequence = StepSequence::load(&three_frames()).expect("Failed to load sequence");

        let last = sequence.frame_at(2).expect("Failed to decode last frame");
        assert_eq!(last.cell(0, 0).map(|c| c.right_route), Some(true));
        assert_eq!(sequence.last_frame().expect("Failed to decode"), last);

        assert!(matches!(
            sequence.frame_at(3),
            Err(ViewerError::IndexOutOfBounds { index: 3, len: 3 })
        ));
    }

    // Tests a malformed frame reports its index
    // Verified by dropping the frame index from the error
    #[test]
    fn test_malformed_frame_index() {
        let text = format!("{FIRST}\n\n###\n#.\n\n{THIRD}");
        let sequence = StepSequence::load(&text).expect("Splitting should not decode");

        assert!(sequence.frame_at(0).is_ok());
        assert!(matches!(
            sequence.frame_at(1),
            Err(ViewerError::FrameFormat { frame: Some(1), .. })
        ));
        assert!(matches!(
            sequence.validate(),
            Err(ViewerError::FrameFormat { frame: Some(1), .. })
        ));
    }

    // Tests the current position is bounds checked
    // Verified by allowing index == len
    #[test]
    fn test_set_current_index() {
        let mut sequence = StepSequence::load(&three_frames()).expect("Failed to load sequence");

        sequence.set_current_index(2).expect("Index 2 should be valid");
        assert_eq!(sequence.current_index(), 2);
        assert_eq!(sequence.raw_frame(2), Some(THIRD));

        assert!(sequence.set_current_index(3).is_err());
        assert_eq!(sequence.current_index(), 2);
    }

    // Tests loading from a file and reporting the path for empty files
    // Verified by reporting a generic origin
    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write!(file, "{}", three_frames()).expect("Failed to write temp file");
        let sequence = StepSequence::from_file(file.path()).expect("Failed to load file");
        assert_eq!(sequence.len(), 3);

        let empty = NamedTempFile::new().expect("Failed to create temp file");
        match StepSequence::from_file(empty.path()) {
            Err(ViewerError::EmptyInput { origin }) => {
                assert_eq!(origin, empty.path().display().to_string());
            }
            other => unreachable!("Expected EmptyInput, got {other:?}"),
        }

        assert!(matches!(
            StepSequence::from_file(std::path::Path::new("/nonexistent/maze.steps")),
            Err(ViewerError::FileSystem { .. })
        ));
    }
}
