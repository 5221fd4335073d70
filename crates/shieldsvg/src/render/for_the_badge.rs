//! `for-the-badge`: tall, square, uppercase, letter-spaced.

use std::fmt::Write as _;

use shieldsvg_metrics::FontWeight;

use super::{FONT_FAMILY, box_rects, logo, text};
use crate::layout::LayoutPlan;
use crate::style::Style;

pub(crate) fn render(plan: &LayoutPlan) -> String {
    let spacing = Style::ForTheBadge.metrics().letter_spacing * 10.0;
    let mut texts = String::new();
    for t in [plan.label.as_ref(), plan.message.as_ref()]
        .into_iter()
        .flatten()
        .filter_map(|b| b.text.as_ref())
    {
        let weight = match t.weight {
            FontWeight::Bold => " font-weight=\"bold\"",
            FontWeight::Normal => "",
        };
        let extra = format!(" letter-spacing=\"{spacing}\"{weight}");
        let _ = write!(texts, "{}", text(t, None, true, &extra));
    }
    format!(
        "<g shape-rendering=\"crispEdges\">{}</g><g fill=\"#fff\" text-anchor=\"middle\" font-family=\"{FONT_FAMILY}\" text-rendering=\"geometricPrecision\" font-size=\"100\">{}{texts}</g>",
        box_rects(plan),
        logo(plan),
    )
}
