//! `social`: outlined pill label with a speech-bubble count next to it.

use super::{FONT_FAMILY, Ids, Shadow, logo, text};
use crate::layout::{BoxPlan, LayoutPlan};

const STROKE: &str = "#d5d5d5";

fn bubble(message: &BoxPlan, inner_height: u32, radius: u32) -> String {
    let main_x = f64::from(message.x) + 0.5;
    format!(
        concat!(
            "<rect x=\"{main_x}\" y=\"0.5\" width=\"{w}\" height=\"{h}\" rx=\"{rx}\" fill=\"{fill}\"/>",
            "<rect x=\"{notch_x}\" y=\"7.5\" width=\"0.5\" height=\"5\" stroke=\"{fill}\"/>",
            "<path d=\"M{main_x} 6.5 l-3 3v1 l3 3\" stroke=\"{stroke}\" fill=\"{fill}\"/>",
        ),
        main_x = main_x,
        notch_x = message.x,
        w = message.width - 1,
        h = inner_height,
        rx = radius,
        fill = message.fill,
        stroke = STROKE,
    )
}

pub(crate) fn render(plan: &LayoutPlan, ids: &Ids<'_>) -> String {
    let inner_height = plan.height - 1;
    let radius = plan.corner_radius;
    let shadow_baseline = plan.style.metrics().shadow_baseline.unwrap_or_default();

    let mut outline = String::new();
    if let Some(label) = &plan.label {
        outline = format!(
            concat!(
                "<rect stroke=\"none\" fill=\"{fill}\" x=\"0.5\" y=\"0.5\" width=\"{w}\" height=\"{h}\" rx=\"{rx}\"/>",
                "<rect fill=\"{grad}\" x=\"0.5\" y=\"0.5\" width=\"{w}\" height=\"{h}\" rx=\"{rx}\"/>",
            ),
            fill = label.fill,
            grad = ids.url("a"),
            w = label.width - 1,
            h = inner_height,
            rx = radius,
        );
    }
    if let Some(message) = &plan.message {
        outline.push_str(&bubble(message, inner_height, radius));
    }

    let texts: String = [plan.label.as_ref(), plan.message.as_ref()]
        .into_iter()
        .flatten()
        .filter_map(|b| b.text.as_ref())
        .map(|t| {
            let highlight = Shadow {
                baseline: shadow_baseline,
                fill: "#fff",
                opacity: None,
            };
            text(t, Some(highlight), false, "")
        })
        .collect();

    let text_fill = plan
        .label
        .as_ref()
        .and_then(|b| b.text.as_ref())
        .map_or("#333", |t| t.color.as_fill());

    format!(
        concat!(
            "<linearGradient id=\"{a}\" x2=\"0\" y2=\"100%\">",
            "<stop offset=\"0\" stop-color=\"#fcfcfc\" stop-opacity=\"0\"/><stop offset=\"1\" stop-opacity=\".1\"/>",
            "</linearGradient>",
            "<g stroke=\"{stroke}\">{outline}</g>",
            "{logo}",
            "<g fill=\"{text_fill}\" text-anchor=\"middle\" font-family=\"{font}\" font-weight=\"700\" font-size=\"110\">{texts}</g>",
        ),
        a = ids.id("a"),
        stroke = STROKE,
        outline = outline,
        logo = logo(plan),
        text_fill = text_fill,
        font = FONT_FAMILY,
        texts = texts,
    )
}
