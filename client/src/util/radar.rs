//! Radar (spider) chart geometry for a chunk's five quality scores.
//!
//! Axes start at twelve o'clock and proceed clockwise in `Dimension::ALL`
//! order. Scores are plotted against a fixed 0-10 range.

use chunks::model::MAX_SCORE;
use chunks::{Dimension, QualityMetrics};

#[cfg(test)]
#[path = "radar_test.rs"]
mod radar_test;

pub const RADAR_SIZE: f64 = 260.0;
pub const RADAR_PADDING: f64 = 40.0;
pub const RADAR_RINGS: usize = 5;

/// Offset of axis labels beyond the outer ring.
const LABEL_GAP: f64 = 14.0;

pub fn radar_center() -> f64 {
    RADAR_SIZE / 2.0
}

pub fn radar_radius() -> f64 {
    RADAR_SIZE / 2.0 - RADAR_PADDING
}

/// Point at `fraction` of `radius` along axis `index` of `count`.
pub fn axis_point(index: usize, count: usize, fraction: f64, center: f64, radius: f64) -> (f64, f64) {
    if count == 0 {
        return (center, center);
    }
    let angle = -std::f64::consts::FRAC_PI_2 + std::f64::consts::TAU * index as f64 / count as f64;
    let r = radius * fraction.clamp(0.0, 1.0);
    (center + r * angle.cos(), center + r * angle.sin())
}

/// SVG `points` attribute for a closed polygon through `points`.
pub fn svg_points(points: &[(f64, f64)]) -> String {
    points.iter().map(|(x, y)| format!("{x:.2},{y:.2}")).collect::<Vec<_>>().join(" ")
}

/// Polygon through each score's position on its axis.
pub fn score_polygon(scores: &[u8], center: f64, radius: f64) -> Vec<(f64, f64)> {
    let max = f64::from(MAX_SCORE);
    scores
        .iter()
        .enumerate()
        .map(|(i, score)| axis_point(i, scores.len(), f64::from(*score) / max, center, radius))
        .collect()
}

/// Concentric grid polygons, innermost first.
pub fn grid_rings(axes: usize, center: f64, radius: f64) -> Vec<Vec<(f64, f64)>> {
    (1..=RADAR_RINGS)
        .map(|ring| {
            let fraction = ring as f64 / RADAR_RINGS as f64;
            (0..axes).map(|i| axis_point(i, axes, fraction, center, radius)).collect()
        })
        .collect()
}

/// One labelled axis of the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct RadarAxis {
    pub label: &'static str,
    pub score: u8,
    pub end: (f64, f64),
    pub label_at: (f64, f64),
    /// SVG `text-anchor` for the label.
    pub anchor: &'static str,
}

pub fn radar_axes(metrics: &QualityMetrics, center: f64, radius: f64) -> Vec<RadarAxis> {
    let count = Dimension::ALL.len();
    let label_fraction = (radius + LABEL_GAP) / radius;
    Dimension::ALL
        .iter()
        .enumerate()
        .map(|(i, dimension)| {
            let end = axis_point(i, count, 1.0, center, radius);
            let (lx, ly) = axis_point(i, count, 1.0, center, radius * label_fraction);
            let anchor = if (lx - center).abs() < 1.0 {
                "middle"
            } else if lx > center {
                "start"
            } else {
                "end"
            };
            RadarAxis { label: dimension.short_label(), score: metrics.score(*dimension), end, label_at: (lx, ly), anchor }
        })
        .collect()
}
