//! Card with a score readout and a horizontal progress bar.

use leptos::prelude::*;

use chunks::gauge::{percentage, rounded_percentage};

#[cfg(test)]
#[path = "quality_metric_card_test.rs"]
mod quality_metric_card_test;

#[component]
pub fn QualityMetricCard(
    #[prop(into)] title: String,
    value: f64,
    #[prop(default = 10.0)] max: f64,
    #[prop(optional, into)] description: Option<String>,
    #[prop(into, default = "blue".into())] color: String,
) -> impl IntoView {
    let width = format!("width: {:.1}%", percentage(value, max));
    let bar_class = progress_class(&color);

    view! {
        <div class=format!("metric-card metric-card--{color}")>
            <div class="metric-card__header">
                <span class="metric-card__title">{title}</span>
                <span class="metric-card__percent">{format!("{}%", rounded_percentage(value, max))}</span>
            </div>
            <div class="metric-card__value">{score_readout(value, max)}</div>
            <div class="progress">
                <div class=bar_class style=width></div>
            </div>
            {description.map(|d| view! { <p class="metric-card__description">{d}</p> })}
        </div>
    }
}

/// `value:.2 / max:.1`, e.g. `7.46 / 10.0`.
fn score_readout(value: f64, max: f64) -> String {
    format!("{value:.2} / {max:.1}")
}

/// Progress-bar class for a card colour; unknown colours fall back to blue.
fn progress_class(color: &str) -> String {
    let color = match color {
        "blue" | "green" | "amber" | "red" | "purple" | "teal" => color,
        _ => "blue",
    };
    format!("progress__bar progress__bar--{color}")
}
