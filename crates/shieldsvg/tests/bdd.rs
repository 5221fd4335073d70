use shieldsvg::{BadgeError, BadgeRequest, MAX_LOGO_WIDTH, Style, make_badge, make_badge_from_json};

const LOGO: &str = "data:image/svg+xml;base64,PHN2ZyB4bWxu";
const XLINK: &str = "http://www.w3.org/1999/xlink";

// ── Given any recognized style, the badge is well-formed SVG ────────

#[test]
fn given_each_style_when_rendered_then_document_parses_and_holds_both_texts() {
    for style in Style::ALL {
        let svg = render(BadgeRequest::new("grown").with_label("cactus").with_style(style.as_str()));
        let doc = roxmltree::Document::parse(&svg).expect("well-formed svg");
        assert_eq!(doc.root_element().tag_name().name(), "svg", "{style}");
        let expected = match style {
            Style::ForTheBadge => ("CACTUS", "GROWN"),
            Style::Social => ("Cactus", "grown"),
            _ => ("cactus", "grown"),
        };
        assert!(svg.contains(expected.0), "{style}: {svg}");
        assert!(svg.contains(expected.1), "{style}: {svg}");
    }
}

// ── Given no style, flat is used ────────────────────────────────────

#[test]
fn given_missing_style_when_rendered_then_output_equals_flat() {
    let implicit = render(BadgeRequest::new("Bob").with_label("name"));
    let explicit = render(BadgeRequest::new("Bob").with_label("name").with_style("flat"));
    assert_eq!(implicit, explicit);
}

// ── Given an unknown style, rendering fails naming it ───────────────

#[test]
fn given_unknown_style_when_rendered_then_error_names_the_value() {
    let err = make_badge(&BadgeRequest::new("Bob").with_label("name").with_style("unknown_style"))
        .unwrap_err();
    assert!(matches!(err, BadgeError::UnknownStyle(ref s) if s == "unknown_style"));
    assert_eq!(err.to_string(), "Unknown badge style: 'unknown_style'");
}

#[test]
fn given_wrong_case_style_when_rendered_then_it_is_rejected() {
    let err = make_badge(&BadgeRequest::new("x").with_style("Flat")).unwrap_err();
    assert!(err.to_string().contains("'Flat'"));
}

// ── Given numeric text, it renders in decimal ───────────────────────

#[test]
fn given_numbers_when_rendered_for_the_badge_then_digits_appear() {
    let svg = render(BadgeRequest::new(1999).with_label(1998).with_style("for-the-badge"));
    assert!(svg.contains(">1998<"));
    assert!(svg.contains(">1999<"));
}

#[test]
fn given_json_numbers_when_rendered_then_digits_appear() {
    let svg = shieldsvg::make_badge_from_json(r#"{"label": 1998, "message": 2.5}"#).unwrap();
    assert!(svg.contains(">1998<"));
    assert!(svg.contains(">2.5<"));
}

// ── Given for-the-badge, text is uppercased ─────────────────────────

#[test]
fn given_mixed_case_when_rendered_for_the_badge_then_text_is_uppercase() {
    let svg = render(BadgeRequest::new("1 string").with_label("Label").with_style("for-the-badge"));
    assert!(svg.contains("LABEL"));
    assert!(svg.contains("1 STRING"));
    assert!(!svg.contains("Label"));
}

// ── Given social, only the label's first letter is capitalized ──────

#[test]
fn given_social_when_rendered_then_label_is_capitalized() {
    let svg = render(BadgeRequest::new("some-value").with_label("some-key").with_style("social"));
    assert!(svg.contains("Some-key"));
    assert!(svg.contains("some-value"));
}

#[test]
fn given_social_with_empty_label_when_rendered_then_empty_text_element_exists() {
    let svg = render(BadgeRequest::new("some-value").with_label("").with_style("social"));
    assert!(svg.contains("></text>"));
    assert!(svg.contains("some-value"));
}

// ── Given light backgrounds, text turns dark ────────────────────────

#[test]
fn given_light_label_color_when_rendered_then_label_text_is_dark() {
    for style in ["flat", "flat-square", "plastic", "for-the-badge"] {
        let svg = render(
            BadgeRequest::new("grown")
                .with_label("cactus")
                .with_style(style)
                .with_color("#000")
                .with_label_color("#f3f3f3"),
        );
        assert_eq!(visible_text_fills(&svg), ["#333", "#fff"], "{style}");
    }
}

#[test]
fn given_light_message_color_when_rendered_then_message_text_is_dark() {
    for style in ["flat", "flat-square", "plastic", "for-the-badge"] {
        let svg = render(
            BadgeRequest::new("grown")
                .with_label("cactus")
                .with_style(style)
                .with_color("#e2ffe1")
                .with_label_color("#000"),
        );
        assert_eq!(visible_text_fills(&svg), ["#fff", "#333"], "{style}");
    }
}

#[test]
fn given_unparseable_color_when_rendered_then_badge_still_renders() {
    let svg = render(BadgeRequest::new("grown").with_color("definitely not a color"));
    assert!(svg.contains("fill=\"definitely not a color\""));
    assert_eq!(visible_text_fills(&svg), ["#fff"]);
}

// ── Given identical input twice, output is identical ────────────────

#[test]
fn given_same_request_when_rendered_twice_then_bytes_match() {
    let request = BadgeRequest::new("message")
        .with_label("label")
        .with_logo(LOGO)
        .with_links(["https://shields.io/", "https://www.google.co.uk/"]);
    assert_eq!(render(request.clone()), render(request));
}

// ── Given two links, there are two hit regions over the boxes ───────

#[test]
fn given_two_links_when_rendered_then_regions_cover_label_and_message() {
    for style in ["flat", "flat-square", "plastic", "for-the-badge"] {
        let svg = render(
            BadgeRequest::new("grown")
                .with_label("cactus")
                .with_style(style)
                .with_links(["https://shields.io/", "https://www.google.co.uk/"]),
        );
        let doc = roxmltree::Document::parse(&svg).unwrap();
        let regions = link_regions(&doc);
        assert_eq!(regions.len(), 2, "{style}");
        let (left, right) = (&regions[0], &regions[1]);
        assert_eq!(left.0, "https://shields.io/");
        assert_eq!(right.0, "https://www.google.co.uk/");
        assert_eq!(left.1, 0);
        assert_eq!(right.1, left.2, "{style}: message region starts where label ends");
        assert_eq!(right.1 + right.2, root_width(&svg), "{style}");
    }
}

#[test]
fn given_links_when_rendered_then_role_img_is_dropped_but_title_kept() {
    let svg = render(BadgeRequest::new("grown").with_label("cactus").with_links(["https://a/"]));
    assert!(!svg.contains("role=\"img\""));
    assert!(svg.contains("<title>cactus: grown</title>"));
}

// ── Given a logo, the badge grows by the logo reservation ───────────

#[test]
fn given_logo_when_rendered_then_width_grows_by_reservation() {
    for style in Style::ALL {
        let plain = BadgeRequest::new("grown").with_label("cactus").with_style(style.as_str());
        let with_logo = plain.clone().with_logo(LOGO);
        let grown = root_width(&render(with_logo)) - root_width(&render(plain));
        assert_eq!(grown, style.logo_reservation(14), "{style}");
        assert!(grown > 14, "{style}");
    }
}

#[test]
fn given_logo_when_rendered_then_image_carries_data_uri() {
    let svg = render(BadgeRequest::new("grown").with_label("cactus").with_logo(LOGO));
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let image = doc
        .descendants()
        .find(|n| n.has_tag_name("image"))
        .expect("image element");
    assert_eq!(image.attribute((XLINK, "href")), Some(LOGO));
    assert_eq!(image.attribute("y"), Some("3"));
}

#[test]
fn given_empty_logo_when_rendered_then_no_image_element() {
    let svg = render(BadgeRequest::new("grown").with_logo(""));
    assert!(!svg.contains("<image"));
    assert!(roxmltree::Document::parse(&svg).is_ok());
}

// ── Given hostile text, output stays well-formed ────────────────────

#[test]
fn given_markup_in_text_when_rendered_then_it_is_escaped() {
    let svg = render(BadgeRequest::new("<script>alert(1)</script>").with_label("a&b\"c'"));
    assert!(!svg.contains("<script>"));
    assert!(svg.contains("&lt;script&gt;"));
    assert!(svg.contains("a&amp;b&quot;c&apos;"));
    assert!(roxmltree::Document::parse(&svg).is_ok());
}

#[test]
fn given_quote_in_logo_or_link_when_rendered_then_attribute_is_escaped() {
    let svg = render(
        BadgeRequest::new("m")
            .with_label("l")
            .with_logo("data:x\"/><script/>")
            .with_links(["https://a/?q=\"><x", "https://b/?a=1&b=2"]),
    );
    assert!(!svg.contains("<script/>"));
    assert!(svg.contains("https://b/?a=1&amp;b=2"));
    let doc = roxmltree::Document::parse(&svg).unwrap();
    assert_eq!(link_regions(&doc)[1].0, "https://b/?a=1&b=2");
}

#[test]
fn given_control_characters_when_rendered_then_document_stays_well_formed() {
    for style in Style::ALL {
        let svg = render(
            BadgeRequest::new("ok\u{1}")
                .with_label("1\u{8}2")
                .with_style(style.as_str())
                .with_color("#4c1\u{0}")
                .with_links(["https://a/\u{1b}", "https://b/\u{FFFF}"]),
        );
        let doc = roxmltree::Document::parse(&svg).expect("well-formed svg");
        let texts: Vec<&str> = doc
            .descendants()
            .filter(|n| n.has_tag_name("text") && n.attribute("aria-hidden").is_none())
            .filter_map(|n| n.text())
            .collect();
        assert!(texts.iter().any(|t| t.ends_with("\u{FFFD}2")), "{style}: {texts:?}");
        assert!(texts.iter().any(|t| t.ends_with("\u{FFFD}")), "{style}: {texts:?}");
    }
}

#[test]
fn given_control_character_when_measured_then_width_matches_replacement() {
    let controlled = render(BadgeRequest::new("x\u{7}y").with_label("l"));
    let replaced = render(BadgeRequest::new("x\u{FFFD}y").with_label("l"));
    assert_eq!(controlled, replaced);
}

// ── Given an oversized logo width, it is clamped ────────────────────

#[test]
fn given_max_u32_logo_width_when_rendered_from_json_then_width_is_clamped() {
    let svg = make_badge_from_json(
        r#"{"label":"a","message":"b","logo":"data:x","logoWidth":4294967295}"#,
    )
    .expect("renders without overflow");
    let doc = roxmltree::Document::parse(&svg).expect("well-formed svg");
    let image = doc.descendants().find(|n| n.has_tag_name("image")).unwrap();
    assert_eq!(image.attribute("width"), Some(MAX_LOGO_WIDTH.to_string().as_str()));

    let plain = render(BadgeRequest::new("b").with_label("a"));
    assert_eq!(
        root_width(&svg) - root_width(&plain),
        Style::Flat.logo_reservation(MAX_LOGO_WIDTH)
    );
}

#[test]
fn given_oversized_logo_width_in_every_style_when_rendered_then_no_panic() {
    for style in Style::ALL {
        for label in ["", "a"] {
            let svg = render(
                BadgeRequest::new("b")
                    .with_label(label)
                    .with_style(style.as_str())
                    .with_label_color("#000")
                    .with_logo("data:x")
                    .with_logo_width(u32::MAX),
            );
            assert!(roxmltree::Document::parse(&svg).is_ok(), "{style}");
        }
    }
}

// ── Given an id suffix, ids stay unique per badge ───────────────────

#[test]
fn given_id_suffix_when_rendered_then_ids_and_references_carry_it() {
    let svg = render(BadgeRequest::new("m").with_label("l").with_id_suffix("b7"));
    assert!(svg.contains("id=\"sb7\""));
    assert!(svg.contains("id=\"rb7\""));
    assert!(svg.contains("url(#rb7)"));
    assert!(svg.contains("url(#sb7)"));
}

#[test]
fn given_invalid_id_suffix_when_rendered_then_error_names_it() {
    let err = make_badge(&BadgeRequest::new("m").with_id_suffix("a\"b")).unwrap_err();
    assert!(matches!(err, BadgeError::InvalidIdSuffix(ref s) if s == "a\"b"));
}

// ── helpers ─────────────────────────────────────────────────────────

fn render(request: BadgeRequest) -> String {
    make_badge(&request).expect("badge renders")
}

fn root_width(svg: &str) -> u32 {
    let start = svg.find("width=\"").expect("width attr") + 7;
    let end = svg[start..].find('"').expect("width close") + start;
    svg[start..end].parse().expect("numeric width")
}

/// Fill of each visible (non-shadow) text element, in document order.
fn visible_text_fills(svg: &str) -> Vec<String> {
    let doc = roxmltree::Document::parse(svg).expect("well-formed svg");
    doc.descendants()
        .filter(|n| n.has_tag_name("text") && n.attribute("aria-hidden").is_none())
        .map(|n| n.attribute("fill").unwrap_or_default().to_string())
        .collect()
}

/// `(href, x, width)` of each link region.
fn link_regions(doc: &roxmltree::Document<'_>) -> Vec<(String, u32, u32)> {
    doc.descendants()
        .filter(|n| n.has_tag_name("a"))
        .map(|a| {
            let rect = a
                .children()
                .find(|c| c.has_tag_name("rect"))
                .expect("link rect");
            (
                a.attribute((XLINK, "href")).unwrap_or_default().to_string(),
                rect.attribute("x").unwrap().parse().unwrap(),
                rect.attribute("width").unwrap().parse().unwrap(),
            )
        })
        .collect()
}
