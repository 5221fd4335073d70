//! Fuzz target for badge rendering.
//!
//! The first byte picks a style; the rest is split on NUL into a message,
//! a label and an optional color. Verifies:
//! - Rendering never fails for a known style
//! - Determinism (same input produces same output)
//! - The document is a single closed `<svg>` element
//! - The document parses as XML, whatever characters the text holds

#![no_main]
use libfuzzer_sys::fuzz_target;
use shieldsvg::{BadgeRequest, Style, make_badge};

/// Max input size - layout is linear in text length
const MAX_INPUT_SIZE: usize = 4 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Ok(input) = std::str::from_utf8(rest) else {
        return;
    };

    let style = Style::ALL[usize::from(selector) % Style::ALL.len()];
    let mut parts = input.splitn(3, '\0');
    let message = parts.next().unwrap_or_default();
    let label = parts.next().unwrap_or_default();

    let mut request = BadgeRequest::new(message)
        .with_label(label)
        .with_style(style.as_str());
    if let Some(color) = parts.next() {
        request = request.with_color(color).with_label_color(color);
    }

    let svg = make_badge(&request).expect("known styles always render");

    // Invariant: deterministic
    assert_eq!(svg, make_badge(&request).unwrap(), "rendering must be deterministic");

    // Invariant: closed envelope
    assert!(svg.starts_with("<svg "), "missing root element");
    assert!(svg.ends_with("</svg>"), "unterminated root element");
    assert_eq!(svg.matches("<svg").count(), 1, "nested svg element");

    // Invariant: well-formed XML (escaping, no forbidden characters)
    if let Err(err) = roxmltree::Document::parse(&svg) {
        panic!("badge is not well-formed XML: {err}\n{svg}");
    }
});
