//! Badge geometry.
//!
//! Turns resolved badge content into pixel boxes, text anchors, a logo slot
//! and link regions. Widths are whole pixels; text anchors may sit on half
//! pixels because they are box-relative centres.

use shieldsvg_color::{TextColor, shadow_color_for, text_color_for};
use shieldsvg_metrics::{FontWeight, preferred_width};

use crate::style::{LOGO_HEIGHT, SOCIAL_LABEL_FILL, SOCIAL_MESSAGE_FILL, Style, StyleMetrics};

/// Badge content after validation, defaulting and text transforms.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeInput {
    pub style: Style,
    pub label: String,
    pub message: String,
    pub color: String,
    pub label_color: String,
    /// Whether `label_color` came from the request rather than a default.
    pub label_color_explicit: bool,
    pub logo: Option<String>,
    pub logo_width: u32,
    pub links: [Option<String>; 2],
}

/// Where a text run goes and how it is colored.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPlan {
    pub content: String,
    pub center_x: f64,
    pub baseline: f64,
    pub width: u32,
    pub weight: FontWeight,
    pub color: TextColor,
    pub shadow_color: String,
}

/// One colored box of the badge.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxPlan {
    pub x: u32,
    pub width: u32,
    pub fill: String,
    /// `None` when the box carries no text element.
    pub text: Option<TextPlan>,
}

impl BoxPlan {
    #[must_use]
    pub fn end(&self) -> u32 {
        self.x.saturating_add(self.width)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogoPlan {
    pub href: String,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A clickable rectangle spanning one box.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkRegion {
    pub href: String,
    pub x: u32,
    pub width: u32,
    pub height: u32,
}

/// Complete geometry of one badge.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPlan {
    pub style: Style,
    pub width: u32,
    pub height: u32,
    pub corner_radius: u32,
    pub label: Option<BoxPlan>,
    pub message: Option<BoxPlan>,
    pub logo: Option<LogoPlan>,
    pub links: Vec<LinkRegion>,
    /// `"label: message"`, or just the message when there is no label.
    pub accessible_text: String,
}

struct Segment {
    width: u32,
    text_start: u32,
}

fn segment(m: &StyleMetrics, padding: u32, text_width: u32, logo_width: Option<u32>) -> Segment {
    match logo_width {
        Some(logo) if text_width > 0 => {
            let text_start = m.logo_inset.saturating_add(logo).saturating_add(m.logo_gutter);
            Segment {
                width: text_start.saturating_add(text_width).saturating_add(padding),
                text_start,
            }
        }
        Some(logo) => Segment {
            width: m.logo_inset.saturating_add(logo).saturating_add(m.logo_inset),
            text_start: m.logo_inset.saturating_add(logo),
        },
        None => Segment {
            width: text_width.saturating_add(2 * padding),
            text_start: padding,
        },
    }
}

fn text_width(text: &str, weight: FontWeight, m: &StyleMetrics) -> u32 {
    if text.is_empty() {
        return 0;
    }
    let base = preferred_width(text, weight, m.font_size);
    if m.letter_spacing > 0.0 {
        let spacing = m.letter_spacing * text.chars().count() as f64;
        (f64::from(base) + spacing).ceil() as u32
    } else {
        base
    }
}

fn text_plan(
    content: &str,
    box_x: u32,
    seg: &Segment,
    width: u32,
    weight: FontWeight,
    background: &str,
    m: &StyleMetrics,
) -> TextPlan {
    TextPlan {
        content: content.to_string(),
        center_x: f64::from(box_x) + f64::from(seg.text_start) + f64::from(width) / 2.0,
        baseline: m.baseline,
        width,
        weight,
        color: text_color_for(background),
        shadow_color: shadow_color_for(background),
    }
}

/// Lay out `input` according to its style.
#[must_use]
pub fn plan(input: &BadgeInput) -> LayoutPlan {
    let style = input.style;
    let m = style.metrics();
    let social = style == Style::Social;
    let logo_width = input.logo.as_ref().map(|_| input.logo_width);

    let (label_fill, message_fill) = if social {
        (SOCIAL_LABEL_FILL, SOCIAL_MESSAGE_FILL)
    } else {
        (input.label_color.as_str(), input.color.as_str())
    };

    let has_label_box =
        social || !input.label.is_empty() || (logo_width.is_some() && input.label_color_explicit);
    let logo_in_label = has_label_box;

    let label = has_label_box.then(|| {
        let width = text_width(&input.label, m.label_weight, m);
        let seg = segment(m, m.label_padding, width, logo_width);
        let text = (social || !input.label.is_empty()).then(|| {
            text_plan(&input.label, 0, &seg, width, m.label_weight, label_fill, m)
        });
        BoxPlan {
            x: 0,
            // Social draws a stroked rect; the extra pixel holds the stroke.
            width: seg.width.saturating_add(u32::from(social)),
            fill: label_fill.to_string(),
            text,
        }
    });

    let message = (!social || !input.message.is_empty()).then(|| {
        let x = label.as_ref().map_or(0, |l| l.end().saturating_add(m.segment_gap));
        let width = text_width(&input.message, m.message_weight, m);
        let logo_here = if logo_in_label { None } else { logo_width };
        let seg = segment(m, m.message_padding, width, logo_here);
        let text = (!input.message.is_empty()).then(|| {
            text_plan(&input.message, x, &seg, width, m.message_weight, message_fill, m)
        });
        BoxPlan {
            x,
            width: seg.width.saturating_add(u32::from(social)),
            fill: message_fill.to_string(),
            text,
        }
    });

    let logo = input.logo.as_ref().map(|href| {
        let host_x = if logo_in_label {
            0
        } else {
            message.as_ref().map_or(0, |b| b.x)
        };
        LogoPlan {
            href: href.clone(),
            x: host_x.saturating_add(m.logo_inset),
            y: (m.height - LOGO_HEIGHT) / 2,
            width: input.logo_width,
            height: LOGO_HEIGHT,
        }
    });

    let width = message
        .as_ref()
        .or(label.as_ref())
        .map_or(0, BoxPlan::end);

    let links = [label.as_ref(), message.as_ref()]
        .into_iter()
        .zip(input.links.iter())
        .filter_map(|(target, href)| {
            let (target, href) = (target?, href.as_ref()?);
            Some(LinkRegion {
                href: href.clone(),
                x: target.x,
                width: target.width,
                height: m.height,
            })
        })
        .collect();

    let accessible_text = if input.label.is_empty() {
        input.message.clone()
    } else {
        format!("{}: {}", input.label, input.message)
    };

    LayoutPlan {
        style,
        width,
        height: m.height,
        corner_radius: m.corner_radius,
        label,
        message,
        logo,
        links,
        accessible_text,
    }
}
