//! Grouped bar chart of the per-dimension score distribution.
//!
//! One group per score value 1..10, five bars per group in canonical
//! dimension order. Counts come from the bot's aggregate metrics, so the
//! chart covers the whole corpus rather than the visible page.

use leptos::prelude::*;

use chunks::{Dimension, ScoreDistribution};

use crate::util::bar_chart::{CHART_HEIGHT, CHART_WIDTH, PlotArea, axis_ticks, grouped_bars, nice_axis_max, slot_center};

#[component]
pub fn MetricHistogram(distribution: ScoreDistribution) -> impl IntoView {
    let rows = distribution.rows();
    let axis_max = nice_axis_max(distribution.max_bucket());
    let plot = PlotArea::default();
    let groups: Vec<[u64; 5]> = rows.iter().map(|r| r.counts).collect();
    let bars = grouped_bars(&groups, axis_max, plot);

    view! {
        <div class="histogram">
            <svg class="histogram__chart" viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}") role="img" aria-label="Score distribution">
                {axis_ticks(axis_max)
                    .into_iter()
                    .map(|tick| {
                        let y = plot.y_for(tick, axis_max);
                        view! {
                            <line class="histogram__grid" x1=plot.x y1=y x2={plot.x + plot.width} y2=y></line>
                            <text class="histogram__tick" x={plot.x - 6.0} y=y text-anchor="end" dominant-baseline="central">
                                {tick.to_string()}
                            </text>
                        }
                    })
                    .collect_view()}
                {bars
                    .iter()
                    .zip(&rows)
                    .map(|(group, row)| {
                        group
                            .iter()
                            .zip(Dimension::ALL)
                            .enumerate()
                            .map(|(series, (bar, dimension))| {
                                view! {
                                    <rect
                                        class=format!("histogram__bar histogram__bar--series-{series}")
                                        x=bar.x
                                        y=bar.y
                                        width=bar.width
                                        height=bar.height
                                    >
                                        <title>{format!("{}: {} chunks scored {}", dimension.label(), row.counts[series], row.score)}</title>
                                    </rect>
                                }
                            })
                            .collect_view()
                    })
                    .collect_view()}
                {rows
                    .iter()
                    .enumerate()
                    .map(|(i, row)| {
                        view! {
                            <text class="histogram__caption" x=slot_center(plot, i, rows.len()) y={plot.bottom() + 18.0} text-anchor="middle">
                                {row.score.to_string()}
                            </text>
                        }
                    })
                    .collect_view()}
            </svg>
            <ul class="histogram__legend">
                {Dimension::ALL
                    .iter()
                    .enumerate()
                    .map(|(series, dimension)| {
                        view! {
                            <li class="histogram__legend-item">
                                <span class=format!("histogram__swatch histogram__bar--series-{series}")></span>
                                {dimension.label()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
