//! Tests for maze size clamping and the size dialog entry

#[cfg(test)]
mod tests {
    use mazeview::dialog::keypad::KeypadKey;
    use mazeview::dialog::size::{Dimension, SizeConfig, SizeEntry};

    // Tests each side is clamped independently to [2, 30]
    // Verified by clamping height against the width bounds
    #[test]
    fn test_size_clamping() {
        let size = SizeConfig::new(35, 0);
        assert_eq!((size.width(), size.height()), (30, 2));

        let size = SizeConfig::new(12, 7);
        assert_eq!((size.width(), size.height()), (12, 7));
    }

    // Tests the default size and single-side updates
    // Verified by resetting the other side in with_width
    #[test]
    fn test_default_and_updates() {
        let size = SizeConfig::default();
        assert_eq!((size.width(), size.height()), (10, 10));

        let size = size.with_width(100).with_height(1);
        assert_eq!((size.width(), size.height()), (30, 2));
    }

    // Tests two-digit sizes can be typed through a value below the minimum
    // Verified by clamping to the minimum while typing
    #[test]
    fn test_typing_two_digits() {
        let mut entry = SizeEntry::new(SizeConfig::default());
        assert_eq!(entry.press(KeypadKey::Digit(1)), 1);
        assert_eq!(entry.press(KeypadKey::Digit(5)), 15);
        assert_eq!(entry.shown(), (15, 10));
    }

    // Tests space-style focus toggling switches the edited side
    // Verified by always editing the width
    #[test]
    fn test_focus_toggle() {
        let mut entry = SizeEntry::new(SizeConfig::new(4, 4));
        assert_eq!(entry.focus(), Dimension::Width);
        assert_eq!(entry.toggle_focus(), Dimension::Height);

        entry.press(KeypadKey::Digit(2));
        entry.press(KeypadKey::Digit(0));
        assert_eq!(entry.shown(), (4, 20));

        assert_eq!(entry.toggle_focus(), Dimension::Width);
    }

    // Tests committing applies the minimum
    // Verified by returning the raw typed value
    #[test]
    fn test_commit_clamps() {
        let mut entry = SizeEntry::new(SizeConfig::default());
        entry.press(KeypadKey::Digit(0));
        assert_eq!(entry.shown(), (0, 10));
        assert_eq!(entry.commit(), SizeConfig::new(2, 10));
    }

    // Tests sliders set one side and are bounded by the maximum
    // Verified by ignoring the dimension argument
    #[test]
    fn test_slide() {
        let mut entry = SizeEntry::new(SizeConfig::default());
        entry.slide(Dimension::Height, 25);
        entry.slide(Dimension::Width, 99);
        assert_eq!(entry.shown(), (30, 25));
    }
}
