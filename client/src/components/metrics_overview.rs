//! Summary cards and per-dimension meters for the selected bot.
//!
//! Renders whatever the page's metrics fetch holds; the numbers themselves
//! come from `chunks::overview::Overview`.

use leptos::prelude::*;

use chunks::overview::{Overview, group_thousands};
use chunks::{BotMetrics, Dimension};

use crate::components::circular_meter::CircularMeter;
use crate::state::fetch::FetchState;

#[cfg(test)]
#[path = "metrics_overview_test.rs"]
mod metrics_overview_test;

#[component]
pub fn MetricsOverview(#[prop(into)] metrics: Signal<FetchState<BotMetrics>>) -> impl IntoView {
    let body = move || {
        metrics.with(|state| match state {
            FetchState::Idle | FetchState::Loading => view! {
                <div class="overview__cards overview__cards--loading">
                    {(0..4).map(|_| view! { <div class="card card--placeholder"></div> }).collect_view()}
                </div>
            }
            .into_any(),
            FetchState::Failed(message) => view! {
                <div class="card overview__error">{format!("Could not load metrics: {message}")}</div>
            }
            .into_any(),
            FetchState::Loaded(m) => view! { <OverviewBody overview=Overview::from_metrics(m)/> }.into_any(),
        })
    };

    view! {
        <section class="overview">
            <h2 class="overview__title">"RAG Quality Dashboard"</h2>
            <p class="overview__subtitle">"Overview of your retrieval-augmented generation content quality metrics"</p>
            {body}
        </section>
    }
}

#[component]
fn OverviewBody(overview: Overview) -> impl IntoView {
    let low = overview.low_quality;
    let low_caption = format!(
        "{}{} of total chunks need improvement",
        low.share_label(overview.total_chunks),
        if low.is_estimate() { " (estimated)" } else { "" }
    );

    view! {
        <div class="overview__cards">
            <SummaryCard
                title="Total Chunks"
                value=group_thousands(overview.total_chunks)
                caption="Total chunks in the knowledge base".to_owned()
            />
            <SummaryCard
                title="Average Quality"
                value=format!("{}/10", overview.overall)
                caption="Overall quality score across all metrics".to_owned()
            />
            <SummaryCard title="Low Quality Chunks" value=group_thousands(low.count()) caption=low_caption/>
            <SummaryCard
                title="Last Updated"
                value=overview.last_updated.clone().unwrap_or_else(|| "—".to_owned())
                caption="Date of the last metrics evaluation".to_owned()
            />
        </div>
        <div class="overview__meters">
            <div class="card overview__meter">
                <div class="overview__meter-title">"Overall Quality"</div>
                <div class="overview__meter-blurb">"Average across all metrics"</div>
                <CircularMeter
                    value={overview.overall as f64}
                    label="Overall"
                    rating=overview.overall_rating.label()
                    color="purple"
                />
            </div>
            {overview
                .meters
                .iter()
                .map(|meter| {
                    view! {
                        <div class="card overview__meter">
                            <div class="overview__meter-title">{meter.dimension.label()}</div>
                            <div class="overview__meter-blurb">{dimension_blurb(meter.dimension)}</div>
                            <CircularMeter
                                value={meter.rounded as f64}
                                label=meter.dimension.short_label()
                                rating=meter.rating.label()
                                color="violet"
                            />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn SummaryCard(title: &'static str, value: String, caption: String) -> impl IntoView {
    view! {
        <div class="card overview__card">
            <div class="overview__card-title">{title}</div>
            <div class="overview__card-value">{value}</div>
            <div class="overview__card-caption">{caption}</div>
        </div>
    }
}

/// One-line explanation shown under each dimension meter.
fn dimension_blurb(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Cohesion => "Logical flow and structure",
        Dimension::LowNoise => "Free of irrelevant information",
        Dimension::Completeness => "Contains full information needed",
        Dimension::Substantiveness => "Contains valuable content",
        Dimension::ContextualSufficiency => "Understandable on its own",
    }
}
