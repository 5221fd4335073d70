//! # shieldsvg
//!
//! **Tier 1 (Rendering)**
//!
//! Renders status badges such as `build | passing` as self-contained SVG
//! documents, without a browser, font engine or rasterizer. Text widths come
//! from the static tables in `shieldsvg-metrics`; text colors come from
//! `shieldsvg-color`.
//!
//! ## What belongs here
//! * The badge request record and its validation
//! * Per-style geometry and markup
//! * Escaping of user-controlled text
//!
//! ## What does NOT belong here
//! * Serving, caching, CLI front-ends
//! * Logo decoding (logos are opaque data URIs)
//!
//! ## Example
//! ```
//! use shieldsvg::{BadgeRequest, make_badge};
//!
//! let svg = make_badge(&BadgeRequest::new("passing").with_label("build"))?;
//! assert!(svg.starts_with("<svg"));
//! # Ok::<(), shieldsvg::BadgeError>(())
//! ```

#![forbid(unsafe_code)]

mod error;
mod layout;
mod render;
mod request;
mod style;
mod xml;

pub use error::BadgeError;
pub use layout::{BadgeInput, BoxPlan, LayoutPlan, LinkRegion, LogoPlan, TextPlan, plan};
pub use request::{BadgeRequest, BadgeText};
pub use style::{DEFAULT_LOGO_WIDTH, LOGO_HEIGHT, MAX_LOGO_WIDTH, Style, StyleMetrics};

/// Number of link slots a badge has: label, then message.
pub const MAX_LINKS: usize = 2;

fn valid_id_suffix(suffix: &str) -> bool {
    suffix
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

/// Validate `request`, apply style defaults and text transforms.
pub fn prepare(request: &BadgeRequest) -> Result<BadgeInput, BadgeError> {
    let style = request.resolved_style()?;

    let label = xml::sanitize(&request.label.to_string());
    let message = xml::sanitize(&request.message.to_string());
    let (label, message) = match style {
        Style::ForTheBadge => (label.to_uppercase(), message.to_uppercase()),
        Style::Social => (capitalize(&label), message),
        _ => (label, message),
    };

    if request.links.len() > MAX_LINKS {
        tracing::debug!(
            count = request.links.len(),
            "ignoring links beyond the label and message slots"
        );
    }
    let mut links = request.links.iter().map(Some).chain(std::iter::repeat(None));
    let links = [
        non_empty(links.next().flatten()),
        non_empty(links.next().flatten()),
    ];

    let logo_width = request.logo_width.unwrap_or(DEFAULT_LOGO_WIDTH);
    if logo_width > MAX_LOGO_WIDTH {
        tracing::debug!(logo_width, max = MAX_LOGO_WIDTH, "clamping logo width");
    }

    Ok(BadgeInput {
        style,
        label,
        message,
        color: request
            .color
            .clone()
            .unwrap_or_else(|| style.default_color().to_string()),
        label_color: request
            .label_color
            .clone()
            .unwrap_or_else(|| style.default_label_color().to_string()),
        label_color_explicit: request.label_color.is_some(),
        logo: non_empty(request.logo.as_ref()),
        logo_width: logo_width.min(MAX_LOGO_WIDTH),
        links,
    })
}

/// Render `request` as an SVG document.
///
/// Fails only on an unknown style name or an invalid id suffix; any color
/// or logo value renders.
pub fn make_badge(request: &BadgeRequest) -> Result<String, BadgeError> {
    let input = prepare(request)?;
    let id_suffix = request.id_suffix.as_deref().unwrap_or_default();
    if !valid_id_suffix(id_suffix) {
        return Err(BadgeError::InvalidIdSuffix(id_suffix.to_string()));
    }
    let plan = plan(&input);
    let svg = render::render(&plan, id_suffix);
    tracing::trace!(style = %plan.style, width = plan.width, "rendered badge");
    Ok(svg)
}

/// Parse a JSON request and render it.
pub fn make_badge_from_json(json: &str) -> Result<String, BadgeError> {
    make_badge(&BadgeRequest::from_json(json)?)
}
