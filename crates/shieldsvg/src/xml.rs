//! Markup escaping.

/// Stand-in for characters XML 1.0 cannot carry.
const REPLACEMENT: char = '\u{FFFD}';

/// Whether `ch` may appear in an XML 1.0 document.
fn is_xml_char(ch: char) -> bool {
    matches!(ch, '\t' | '\n' | '\r' | ' '..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

/// Replace characters XML 1.0 forbids (C0 controls other than tab, LF and
/// CR, plus U+FFFE and U+FFFF) with U+FFFD.
pub(crate) fn sanitize(input: &str) -> String {
    input
        .chars()
        .map(|ch| if is_xml_char(ch) { ch } else { REPLACEMENT })
        .collect()
}

/// Escape `input` for use as XML character data or a quoted attribute value.
/// Characters XML cannot carry are replaced as in [`sanitize`].
pub(crate) fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            c if !is_xml_char(c) => out.push(REPLACEMENT),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// Format a coordinate without a trailing `.0`.
pub(crate) fn num(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_specials() {
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("<a href=\"x\">'"), "&lt;a href=&quot;x&quot;&gt;&apos;");
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(escape("data:image/svg+xml;base64,PHN2Zw=="), "data:image/svg+xml;base64,PHN2Zw==");
        assert_eq!(escape("言語 ✅"), "言語 ✅");
    }

    #[test]
    fn forbidden_characters_are_replaced() {
        assert_eq!(escape("a\u{8}b"), "a\u{FFFD}b");
        assert_eq!(escape("\u{0}\u{1f}\u{FFFE}\u{FFFF}"), "\u{FFFD}".repeat(4));
        assert_eq!(sanitize("ok\u{1}"), "ok\u{FFFD}");
    }

    #[test]
    fn whitespace_controls_and_astral_chars_survive() {
        assert_eq!(sanitize("a\tb\nc\rd"), "a\tb\nc\rd");
        assert_eq!(sanitize("\u{FFFD}\u{10000}\u{1F600}"), "\u{FFFD}\u{10000}\u{1F600}");
        assert_eq!(escape("\u{7f}"), "\u{7f}");
    }

    #[test]
    fn num_drops_integral_fraction() {
        assert_eq!(num(140.0), "140");
        assert_eq!(num(0.5), "0.5");
        assert_eq!(num(-3.0), "-3");
        assert_eq!(num(175.5), "175.5");
    }
}
