//! Tests for dual-method selection, ratio handling and generator tokens

#[cfg(test)]
mod tests {
    use mazeview::dialog::growing_tree::{
        DualMethodSelector, GrowingTreeMethod, SelectionChange, format_ratio,
    };
    use mazeview::dialog::keypad::KeypadKey;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use GrowingTreeMethod::{Middle, Newest, Oldest, Random};

    // Tests the select, add, replace walk through
    // Verified by replacing the newest entry instead of the oldest
    #[test]
    fn test_select_add_replace_scenario() {
        let mut selector = DualMethodSelector::new();

        assert_eq!(selector.click(Newest, false), SelectionChange::Selected(Newest));
        assert_eq!(selector.order(), &[Newest]);

        assert_eq!(selector.click(Middle, false), SelectionChange::Added(Middle));
        assert_eq!(selector.order(), &[Newest, Middle]);
        assert_eq!(selector.canonical_pair(), (Some(Newest), Some(Middle)));

        assert_eq!(
            selector.click(Oldest, true),
            SelectionChange::Replaced {
                removed: Newest,
                added: Oldest
            }
        );
        assert_eq!(selector.order(), &[Middle, Oldest]);
    }

    // Tests a modifier click with one method selected substitutes it
    // Verified by adding instead of replacing
    #[test]
    fn test_modifier_click_replaces_single() {
        let mut selector = DualMethodSelector::new();
        selector.click(Random, false);

        assert_eq!(
            selector.click(Middle, true),
            SelectionChange::Replaced {
                removed: Random,
                added: Middle
            }
        );
        assert_eq!(selector.order(), &[Middle]);
        assert!(!selector.ratio_panel_visible());
    }

    // Tests clicking a selected method deselects it
    // Verified by ignoring repeated clicks
    #[test]
    fn test_deselect() {
        let mut selector = DualMethodSelector::new();
        selector.click(Oldest, false);
        assert_eq!(selector.click(Oldest, false), SelectionChange::Deselected(Oldest));
        assert_eq!(selector.selected_count(), 0);

        selector.click(Oldest, false);
        selector.click(Newest, false);
        assert_eq!(selector.click(Oldest, true), SelectionChange::Deselected(Oldest));
        assert_eq!(selector.order(), &[Newest]);
        assert_eq!(selector.canonical_pair(), (Some(Newest), None));
    }

    // Tests a third method without the modifier changes nothing
    // Verified by dropping the oldest entry on a plain click
    #[test]
    fn test_third_method_rejected() {
        let mut selector = DualMethodSelector::new();
        selector.click(Random, false);
        selector.click(Newest, false);

        assert_eq!(selector.click(Middle, false), SelectionChange::Rejected(Middle));
        assert_eq!(selector.order(), &[Random, Newest]);
        assert!(!selector.is_selected(Middle));
    }

    // Tests the canonical pair is ordered by ordinal regardless of click order
    // Verified by returning the click order
    #[test]
    fn test_canonical_pair_ordering() {
        let mut selector = DualMethodSelector::new();
        assert_eq!(selector.canonical_pair(), (None, None));

        selector.click(Random, false);
        selector.click(Middle, false);
        assert_eq!(selector.order(), &[Random, Middle]);
        assert_eq!(selector.canonical_pair(), (Some(Middle), Some(Random)));
        assert_eq!(selector.method_token(), "middle-random");
    }

    // Tests order length and uniqueness under random clicking
    // Verified by pushing on a modifier click without removing
    #[test]
    fn test_selection_invariants_hold_for_random_clicks() {
        let mut rng = StdRng::seed_from_u64(0x6d61_7a65);
        let mut selector = DualMethodSelector::new();

        for _ in 0..2_000 {
            let method = GrowingTreeMethod::ALL[rng.random_range(0..GrowingTreeMethod::ALL.len())];
            let before = selector.order().to_vec();
            let change = selector.click(method, rng.random_bool(0.3));

            let order = selector.order();
            assert!(order.len() <= 2, "Order grew to {order:?}");
            if let [a, b] = order {
                assert_ne!(a, b, "Duplicate method in {order:?}");
            }
            assert_eq!(selector.ratio_panel_visible(), order.len() == 2);

            if change == SelectionChange::Rejected(method) {
                assert_eq!(order, before.as_slice());
            }
        }
    }

    // Tests the ratio is clamped and NaN is ignored
    // Verified by storing the raw ratio
    #[test]
    fn test_ratio_clamping() {
        let mut selector = DualMethodSelector::new();
        assert!((selector.ratio() - 0.5).abs() < f64::EPSILON);

        assert!(selector.set_ratio(-0.4).abs() < f64::EPSILON);
        assert!((selector.set_ratio(1.7) - 1.0).abs() < f64::EPSILON);
        assert!((selector.set_ratio(f64::NAN) - 1.0).abs() < f64::EPSILON);
    }

    // Tests typing the ratio as a percentage
    // Verified by treating typed digits as a fraction
    #[test]
    fn test_ratio_keypad() {
        let mut selector = DualMethodSelector::new();
        assert!((selector.press_ratio_key(KeypadKey::Digit(7)) - 0.07).abs() < 1e-9);
        assert!((selector.press_ratio_key(KeypadKey::Digit(5)) - 0.75).abs() < 1e-9);
        assert_eq!(selector.ratio_label(), "0.75");
    }

    // Tests ratio text is cut to four characters
    // Verified by rounding instead of truncating
    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(1.0), "1.0");
        assert_eq!(format_ratio(0.0), "0.0");
        assert_eq!(format_ratio(0.5), "0.5");
        assert_eq!(format_ratio(1.0 / 3.0), "0.33");
        assert_eq!(format_ratio(0.666_666), "0.66");
    }

    // Tests the generator tokens for none, one and two methods
    // Verified by always appending the ratio
    #[test]
    fn test_generator_tokens() {
        let mut selector = DualMethodSelector::new();
        assert_eq!(selector.generator_tokens(), vec!["newest".to_string()]);

        selector.click(Oldest, false);
        assert_eq!(selector.generator_tokens(), vec!["oldest".to_string()]);

        selector.click(Newest, false);
        selector.set_ratio(0.25);
        assert_eq!(
            selector.generator_tokens(),
            vec!["newest-oldest".to_string(), "0.25".to_string()]
        );
    }

    // Tests restoring a confirmed pair normalizes it
    // Verified by keeping a duplicate second method
    #[test]
    fn test_from_pair() {
        let selector = DualMethodSelector::from_pair(Some(Oldest), Some(Newest), 0.3);
        assert_eq!(selector.order(), &[Newest, Oldest]);
        assert!((selector.ratio() - 0.3).abs() < f64::EPSILON);

        let selector = DualMethodSelector::from_pair(None, Some(Middle), 2.0);
        assert_eq!(selector.order(), &[Middle]);
        assert!((selector.ratio() - 1.0).abs() < f64::EPSILON);

        let selector = DualMethodSelector::from_pair(Some(Random), Some(Random), 0.5);
        assert_eq!(selector.order(), &[Random]);
    }

    // Tests method tokens and ordinals
    // Verified by reordering the enumeration
    #[test]
    fn test_method_tokens() {
        let tokens: Vec<_> = GrowingTreeMethod::ALL.iter().map(|m| m.token()).collect();
        assert_eq!(tokens, ["newest", "middle", "oldest", "random"]);
        assert_eq!(Oldest.ordinal(), 2);
        assert_eq!(Random.to_string(), "random");
    }
}
