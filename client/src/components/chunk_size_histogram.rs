//! Bar chart of chunk text lengths in 100-character buckets.
//!
//! Fed from the chunk table's current page, so it approximates the corpus
//! shape rather than counting every chunk.

use leptos::prelude::*;

use chunks::histogram::{SizeBucket, size_axis_label};

use crate::util::bar_chart::{CHART_HEIGHT, CHART_WIDTH, PlotArea, axis_ticks, bars, nice_axis_max, slot_center};

#[component]
pub fn ChunkSizeHistogram(#[prop(into)] buckets: Signal<Vec<SizeBucket>>) -> impl IntoView {
    move || {
        let buckets = buckets.get();
        if buckets.is_empty() {
            return view! { <p class="histogram__empty">"No chunks on this page."</p> }.into_any();
        }
        let counts: Vec<u64> = buckets.iter().map(|b| b.count).collect();
        let axis_max = nice_axis_max(counts.iter().copied().max().unwrap_or(0));
        let plot = PlotArea::default();
        let drawn = bars(&counts, axis_max, plot);
        let slots = buckets.len();

        view! {
            <div class="histogram">
                <svg class="histogram__chart" viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}") role="img" aria-label="Chunk size distribution">
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
                    {drawn
                        .iter()
                        .zip(&buckets)
                        .enumerate()
                        .map(|(i, (bar, bucket))| {
                            view! {
                                <rect class="histogram__bar histogram__bar--size" x=bar.x y=bar.y width=bar.width height=bar.height>
                                    <title>{format!("{} chunks", bucket.count)}</title>
                                </rect>
                                <text class="histogram__caption" x=slot_center(plot, i, slots) y={plot.bottom() + 18.0} text-anchor="middle">
                                    {size_axis_label(bucket.size)}
                                </text>
                            }
                        })
                        .collect_view()}
                </svg>
                <p class="histogram__note">"Based on the chunks shown on the current page."</p>
            </div>
        }
        .into_any()
    }
}
