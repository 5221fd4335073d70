//! Markup emitters for each badge style.
//!
//! Every renderer turns a [`LayoutPlan`] into the body of the document; the
//! root element, title and link regions are shared.

mod flat;
mod for_the_badge;
mod plastic;
mod social;

use std::fmt::Write as _;

use crate::layout::{BoxPlan, LayoutPlan, LogoPlan, TextPlan};
use crate::style::Style;
use crate::xml::{escape, num};

pub(crate) const FONT_FAMILY: &str = "Verdana,Geneva,DejaVu Sans,sans-serif";

/// Element ids, made unique per document by an optional suffix.
pub(crate) struct Ids<'a> {
    suffix: &'a str,
}

impl Ids<'_> {
    pub(crate) fn id(&self, base: &str) -> String {
        format!("{base}{}", self.suffix)
    }

    pub(crate) fn url(&self, base: &str) -> String {
        format!("url(#{base}{})", self.suffix)
    }
}

/// Shadow drawn under a text run.
pub(crate) struct Shadow<'a> {
    pub(crate) baseline: f64,
    pub(crate) fill: &'a str,
    pub(crate) opacity: Option<&'a str>,
}

/// Render the complete document for `plan`.
pub(crate) fn render(plan: &LayoutPlan, id_suffix: &str) -> String {
    let ids = Ids { suffix: id_suffix };
    let body = match plan.style {
        Style::Flat => flat::render(plan, &ids),
        Style::FlatSquare => flat::render_square(plan),
        Style::Plastic => plastic::render(plan, &ids),
        Style::ForTheBadge => for_the_badge::render(plan),
        Style::Social => social::render(plan, &ids),
    };
    document(plan, &body)
}

fn document(plan: &LayoutPlan, body: &str) -> String {
    let title = escape(&plan.accessible_text);
    let aria = if plan.links.is_empty() {
        format!(" role=\"img\" aria-label=\"{title}\"")
    } else {
        String::new()
    };
    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" width=\"{}\" height=\"{}\"{aria}><title>{title}</title>",
        plan.width, plan.height
    );
    out.push_str(body);
    for link in &plan.links {
        let _ = write!(
            out,
            "<a target=\"_blank\" xlink:href=\"{}\"><rect x=\"{}\" width=\"{}\" height=\"{}\" fill=\"rgba(0,0,0,0)\"/></a>",
            escape(&link.href),
            link.x,
            link.width,
            link.height
        );
    }
    out.push_str("</svg>");
    out
}

/// `<rect>` elements filling the label and message boxes.
pub(crate) fn box_rects(plan: &LayoutPlan) -> String {
    [plan.label.as_ref(), plan.message.as_ref()]
        .into_iter()
        .flatten()
        .map(|b| box_rect(b, plan.height))
        .collect()
}

fn box_rect(b: &BoxPlan, height: u32) -> String {
    if b.x == 0 {
        format!(
            "<rect width=\"{}\" height=\"{height}\" fill=\"{}\"/>",
            b.width,
            escape(&b.fill)
        )
    } else {
        format!(
            "<rect x=\"{}\" width=\"{}\" height=\"{height}\" fill=\"{}\"/>",
            b.x,
            b.width,
            escape(&b.fill)
        )
    }
}

pub(crate) fn logo(plan: &LayoutPlan) -> String {
    plan.logo.as_ref().map(logo_image).unwrap_or_default()
}

fn logo_image(logo: &LogoPlan) -> String {
    format!(
        "<image x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" xlink:href=\"{}\"/>",
        logo.x,
        logo.y,
        logo.width,
        logo.height,
        escape(&logo.href)
    )
}

/// Text of a box in the `scale(.1)` coordinate space, optionally with a
/// shadow run underneath. `extra` is appended verbatim to the attributes.
pub(crate) fn text(t: &TextPlan, shadow: Option<Shadow<'_>>, fill: bool, extra: &str) -> String {
    let x = num(t.center_x * 10.0);
    let length = u64::from(t.width) * 10;
    let content = escape(&t.content);
    let mut out = String::new();
    if let Some(shadow) = shadow {
        let opacity = shadow
            .opacity
            .map(|o| format!(" fill-opacity=\"{o}\""))
            .unwrap_or_default();
        let _ = write!(
            out,
            "<text aria-hidden=\"true\" x=\"{x}\" y=\"{}\" fill=\"{}\"{opacity} transform=\"scale(.1)\" textLength=\"{length}\"{extra}>{content}</text>",
            num(shadow.baseline * 10.0),
            escape(shadow.fill),
        );
    }
    let fill = if fill {
        format!(" fill=\"{}\"", t.color.as_fill())
    } else {
        String::new()
    };
    let _ = write!(
        out,
        "<text x=\"{x}\" y=\"{}\" transform=\"scale(.1)\"{fill} textLength=\"{length}\"{extra}>{content}</text>",
        num(t.baseline * 10.0),
    );
    out
}

/// Label then message text for the flat-like styles.
pub(crate) fn texts(plan: &LayoutPlan, shadow_baseline: Option<f64>) -> String {
    [plan.label.as_ref(), plan.message.as_ref()]
        .into_iter()
        .flatten()
        .filter_map(|b| b.text.as_ref())
        .map(|t| {
            let shadow = shadow_baseline.map(|baseline| Shadow {
                baseline,
                fill: &t.shadow_color,
                opacity: Some(".3"),
            });
            text(t, shadow, true, "")
        })
        .collect()
}

/// Body shared by the rounded, gradient-glossed styles (flat, plastic).
pub(crate) fn rounded_body(plan: &LayoutPlan, ids: &Ids<'_>, stops: &str) -> String {
    let shadow_baseline = plan.style.metrics().shadow_baseline;
    format!(
        concat!(
            "<linearGradient id=\"{s}\" x2=\"0\" y2=\"100%\">{stops}</linearGradient>",
            "<clipPath id=\"{r}\"><rect width=\"{w}\" height=\"{h}\" rx=\"{rx}\" fill=\"#fff\"/></clipPath>",
            "<g clip-path=\"{r_url}\">{rects}<rect width=\"{w}\" height=\"{h}\" fill=\"{s_url}\"/></g>",
            "<g fill=\"#fff\" text-anchor=\"middle\" font-family=\"{font}\" text-rendering=\"geometricPrecision\" font-size=\"110\">{logo}{texts}</g>",
        ),
        s = ids.id("s"),
        r = ids.id("r"),
        s_url = ids.url("s"),
        r_url = ids.url("r"),
        stops = stops,
        w = plan.width,
        h = plan.height,
        rx = plan.corner_radius,
        rects = box_rects(plan),
        font = FONT_FAMILY,
        logo = logo(plan),
        texts = texts(plan, shadow_baseline),
    )
}
