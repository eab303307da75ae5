//! Radar chart of one chunk's five quality scores.

use leptos::prelude::*;

use chunks::QualityMetrics;

use crate::util::radar::{RADAR_SIZE, grid_rings, radar_axes, radar_center, radar_radius, score_polygon, svg_points};

#[component]
pub fn ChunkQualityChart(metrics: QualityMetrics) -> impl IntoView {
    let center = radar_center();
    let radius = radar_radius();
    let axes = radar_axes(&metrics, center, radius);
    let scores: Vec<u8> = axes.iter().map(|a| a.score).collect();
    let polygon = svg_points(&score_polygon(&scores, center, radius));
    let rings = grid_rings(axes.len(), center, radius);

    view! {
        <svg class="radar" viewBox=format!("0 0 {RADAR_SIZE} {RADAR_SIZE}") role="img" aria-label="Chunk quality radar">
            {rings
                .iter()
                .map(|ring| view! { <polygon class="radar__ring" points=svg_points(ring)></polygon> })
                .collect_view()}
            {axes
                .iter()
                .map(|axis| {
                    view! {
                        <line class="radar__axis" x1=center y1=center x2=axis.end.0 y2=axis.end.1></line>
                        <text class="radar__label" x=axis.label_at.0 y=axis.label_at.1 text-anchor=axis.anchor dominant-baseline="central">
                            {format!("{} ({})", axis.label, axis.score)}
                        </text>
                    }
                })
                .collect_view()}
            <polygon class="radar__area" points=polygon></polygon>
        </svg>
    }
}
