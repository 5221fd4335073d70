//! Badge styles and their fixed geometry.

use std::fmt;
use std::str::FromStr;

use shieldsvg_metrics::FontWeight;

use crate::error::BadgeError;

/// Visual style of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    #[default]
    Flat,
    FlatSquare,
    Plastic,
    ForTheBadge,
    Social,
}

impl Style {
    pub const ALL: [Style; 5] = [
        Style::Flat,
        Style::FlatSquare,
        Style::Plastic,
        Style::ForTheBadge,
        Style::Social,
    ];

    /// Name as accepted in requests.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Style::Flat => "flat",
            Style::FlatSquare => "flat-square",
            Style::Plastic => "plastic",
            Style::ForTheBadge => "for-the-badge",
            Style::Social => "social",
        }
    }

    /// Resolve an optional style name. Absent means flat; anything that is
    /// not an exact, case-sensitive match is rejected.
    pub fn resolve(name: Option<&str>) -> Result<Self, BadgeError> {
        name.map_or(Ok(Style::Flat), str::parse)
    }

    /// Default message box color.
    #[must_use]
    pub const fn default_color(self) -> &'static str {
        match self {
            Style::Social => SOCIAL_MESSAGE_FILL,
            _ => "#4c1",
        }
    }

    /// Default label box color.
    #[must_use]
    pub const fn default_label_color(self) -> &'static str {
        match self {
            Style::Social => SOCIAL_LABEL_FILL,
            _ => "#555",
        }
    }

    /// Fixed geometry for this style.
    #[must_use]
    pub fn metrics(self) -> &'static StyleMetrics {
        match self {
            Style::Flat => &FLAT,
            Style::FlatSquare => &FLAT_SQUARE,
            Style::Plastic => &PLASTIC,
            Style::ForTheBadge => &FOR_THE_BADGE,
            Style::Social => &SOCIAL,
        }
    }

    /// Extra width a logo of `logo_width` adds in front of non-empty text.
    #[must_use]
    pub fn logo_reservation(self, logo_width: u32) -> u32 {
        let m = self.metrics();
        (m.logo_inset + m.logo_gutter)
            .saturating_sub(m.label_padding)
            .saturating_add(logo_width)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = BadgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| BadgeError::UnknownStyle(s.to_string()))
    }
}

pub(crate) const SOCIAL_LABEL_FILL: &str = "#fcfcfc";
pub(crate) const SOCIAL_MESSAGE_FILL: &str = "#fafafa";

/// Height of every logo image.
pub const LOGO_HEIGHT: u32 = 14;

/// Default logo width.
pub const DEFAULT_LOGO_WIDTH: u32 = 14;

/// Largest accepted logo width; wider requests are clamped to it.
pub const MAX_LOGO_WIDTH: u32 = 1024;

/// Per-style layout constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleMetrics {
    /// Outer badge height.
    pub height: u32,
    /// Horizontal padding on each side of label text.
    pub label_padding: u32,
    /// Horizontal padding on each side of message text.
    pub message_padding: u32,
    /// Distance from a box's left edge to its logo.
    pub logo_inset: u32,
    /// Space between a logo and the text after it.
    pub logo_gutter: u32,
    /// Space between the label box and the message box.
    pub segment_gap: u32,
    pub font_size: f64,
    pub label_weight: FontWeight,
    pub message_weight: FontWeight,
    /// Added per character on top of the measured width.
    pub letter_spacing: f64,
    pub corner_radius: u32,
    /// Text baseline, in pixels from the top.
    pub baseline: f64,
    /// Shadow baseline; `None` when the style draws no shadow.
    pub shadow_baseline: Option<f64>,
}

const FLAT: StyleMetrics = StyleMetrics {
    height: 20,
    label_padding: 5,
    message_padding: 5,
    logo_inset: 5,
    logo_gutter: 3,
    segment_gap: 0,
    font_size: 11.0,
    label_weight: FontWeight::Normal,
    message_weight: FontWeight::Normal,
    letter_spacing: 0.0,
    corner_radius: 3,
    baseline: 14.0,
    shadow_baseline: Some(15.0),
};

const FLAT_SQUARE: StyleMetrics = StyleMetrics {
    corner_radius: 0,
    shadow_baseline: None,
    ..FLAT
};

const PLASTIC: StyleMetrics = StyleMetrics {
    height: 18,
    corner_radius: 4,
    baseline: 13.0,
    shadow_baseline: Some(14.0),
    ..FLAT
};

const FOR_THE_BADGE: StyleMetrics = StyleMetrics {
    height: 28,
    label_padding: 12,
    message_padding: 12,
    logo_inset: 9,
    logo_gutter: 6,
    segment_gap: 0,
    font_size: 10.0,
    label_weight: FontWeight::Normal,
    message_weight: FontWeight::Bold,
    letter_spacing: 1.25,
    corner_radius: 0,
    baseline: 17.5,
    shadow_baseline: None,
};

const SOCIAL: StyleMetrics = StyleMetrics {
    height: 20,
    label_padding: 5,
    message_padding: 4,
    logo_inset: 5,
    logo_gutter: 3,
    segment_gap: 5,
    font_size: 11.0,
    label_weight: FontWeight::Bold,
    message_weight: FontWeight::Bold,
    letter_spacing: 0.0,
    corner_radius: 2,
    baseline: 14.0,
    shadow_baseline: Some(15.0),
};
