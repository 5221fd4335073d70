//! `plastic`: a glossier take on flat with a bright top edge.

use super::{Ids, rounded_body};
use crate::layout::LayoutPlan;

const PLASTIC_STOPS: &str = concat!(
    "<stop offset=\"0\" stop-color=\"#fff\" stop-opacity=\".7\"/>",
    "<stop offset=\".1\" stop-color=\"#aaa\" stop-opacity=\".1\"/>",
    "<stop offset=\".9\" stop-color=\"#000\" stop-opacity=\".3\"/>",
    "<stop offset=\"1\" stop-color=\"#000\" stop-opacity=\".5\"/>",
);

pub(crate) fn render(plan: &LayoutPlan, ids: &Ids<'_>) -> String {
    rounded_body(plan, ids, PLASTIC_STOPS)
}
