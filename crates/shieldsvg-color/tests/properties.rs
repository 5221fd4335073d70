//! Property-based tests for contrast selection.

use proptest::prelude::*;
use shieldsvg_color::{BRIGHTNESS_THRESHOLD, Rgb, TextColor, parse_css_color, shadow_color_for, text_color_for};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn hex_round_trips_through_parser(r: u8, g: u8, b: u8) {
        let rgb = Rgb::new(r, g, b);
        prop_assert_eq!(parse_css_color(&rgb.to_hex()), Some(rgb));
    }

    #[test]
    fn text_color_follows_threshold(r: u8, g: u8, b: u8) {
        let rgb = Rgb::new(r, g, b);
        let expected = if rgb.brightness() > BRIGHTNESS_THRESHOLD {
            TextColor::Dark
        } else {
            TextColor::Light
        };
        prop_assert_eq!(text_color_for(&rgb.to_hex()), expected);
    }

    #[test]
    fn shadow_is_never_brighter(r: u8, g: u8, b: u8) {
        let rgb = Rgb::new(r, g, b);
        let shadow = parse_css_color(&shadow_color_for(&rgb.to_hex())).unwrap();
        prop_assert!(shadow.r <= r && shadow.g <= g && shadow.b <= b);
    }

    #[test]
    fn arbitrary_input_never_panics(input in "\\PC{0,24}") {
        let _ = text_color_for(&input);
        let shadow = shadow_color_for(&input);
        prop_assert_eq!(shadow.len(), 7);
        prop_assert!(shadow.starts_with('#'));
    }
}
