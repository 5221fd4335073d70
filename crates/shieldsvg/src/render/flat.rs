//! `flat` and `flat-square`.

use super::{FONT_FAMILY, Ids, box_rects, logo, rounded_body, texts};
use crate::layout::LayoutPlan;

const FLAT_STOPS: &str =
    "<stop offset=\"0\" stop-color=\"#bbb\" stop-opacity=\".1\"/><stop offset=\"1\" stop-opacity=\".1\"/>";

/// Rounded corners, a faint top-to-bottom gloss and shadowed text.
pub(crate) fn render(plan: &LayoutPlan, ids: &Ids<'_>) -> String {
    rounded_body(plan, ids, FLAT_STOPS)
}

/// Square corners, no gloss, no text shadow.
pub(crate) fn render_square(plan: &LayoutPlan) -> String {
    format!(
        "<g shape-rendering=\"crispEdges\">{}</g><g fill=\"#fff\" text-anchor=\"middle\" font-family=\"{FONT_FAMILY}\" text-rendering=\"geometricPrecision\" font-size=\"110\">{}{}</g>",
        box_rects(plan),
        logo(plan),
        texts(plan, None),
    )
}
