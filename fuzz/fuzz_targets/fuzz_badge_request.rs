//! Fuzz target for JSON badge requests.
//!
//! Tests `make_badge_from_json()` with arbitrary input to verify:
//! - No panics on any input
//! - Failures are typed errors, never partial output
//! - Rendered output parses as XML
//! - A request that renders once renders identically again

#![no_main]
use libfuzzer_sys::fuzz_target;
use shieldsvg::{BadgeError, make_badge_from_json};

const MAX_INPUT_SIZE: usize = 16 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };

    match make_badge_from_json(json) {
        Ok(svg) => {
            assert!(svg.starts_with("<svg ") && svg.ends_with("</svg>"));
            if let Err(err) = roxmltree::Document::parse(&svg) {
                panic!("badge is not well-formed XML: {err}\n{svg}");
            }
            let again = make_badge_from_json(json).expect("second render must succeed");
            assert_eq!(svg, again, "rendering must be deterministic");
        }
        Err(BadgeError::UnknownStyle(name)) => {
            assert!(
                !matches!(name.as_str(), "flat" | "flat-square" | "plastic" | "for-the-badge" | "social"),
                "known style rejected: {name}"
            );
        }
        Err(BadgeError::InvalidIdSuffix(_) | BadgeError::InvalidRequest(_)) => {}
    }
});
