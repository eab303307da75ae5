//! Bar chart layout for the score and size histograms.

#[cfg(test)]
#[path = "bar_chart_test.rs"]
mod bar_chart_test;

pub const CHART_WIDTH: f64 = 640.0;
pub const CHART_HEIGHT: f64 = 280.0;
pub const AXIS_TICKS: u64 = 5;

/// Inner drawing area of a chart, in SVG user units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for PlotArea {
    /// Leaves room for the y-axis labels and the x-axis captions.
    fn default() -> Self {
        Self { x: 44.0, y: 12.0, width: CHART_WIDTH - 56.0, height: CHART_HEIGHT - 48.0 }
    }
}

impl PlotArea {
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    /// Vertical position of `value` on an axis running `0..=axis_max`.
    pub fn y_for(self, value: u64, axis_max: u64) -> f64 {
        self.bottom() - self.bar_height(value, axis_max)
    }

    fn bar_height(self, value: u64, axis_max: u64) -> f64 {
        if axis_max == 0 {
            return 0.0;
        }
        self.height * (value.min(axis_max) as f64 / axis_max as f64)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Smallest `1, 2, 5 x 10^k` at or above `max`; never below 1.
pub fn nice_axis_max(max: u64) -> u64 {
    if max <= 1 {
        return 1;
    }
    let mut magnitude = 1_u64;
    while magnitude.saturating_mul(10) <= max {
        magnitude *= 10;
    }
    [1, 2, 5, 10]
        .into_iter()
        .map(|step| step * magnitude)
        .find(|candidate| *candidate >= max)
        .unwrap_or(max)
}

/// Distinct tick values from 0 to `axis_max`, ascending.
pub fn axis_ticks(axis_max: u64) -> Vec<u64> {
    let mut ticks: Vec<u64> = (0..=AXIS_TICKS).map(|i| axis_max * i / AXIS_TICKS).collect();
    ticks.dedup();
    ticks
}

/// Centre x of slot `index` when `slots` slots share the plot width.
pub fn slot_center(plot: PlotArea, index: usize, slots: usize) -> f64 {
    let slot = plot.width / slots.max(1) as f64;
    plot.x + slot * (index as f64 + 0.5)
}

/// Bars grouped per slot, `N` series side by side in each slot.
pub fn grouped_bars<const N: usize>(groups: &[[u64; N]], axis_max: u64, plot: PlotArea) -> Vec<[Bar; N]> {
    let slot = plot.width / groups.len().max(1) as f64;
    let inner = slot * 0.8;
    let bar_width = inner / N.max(1) as f64;
    groups
        .iter()
        .enumerate()
        .map(|(g, values)| {
            let left = plot.x + slot * g as f64 + (slot - inner) / 2.0;
            std::array::from_fn(|s| {
                let height = plot.bar_height(values[s], axis_max);
                Bar { x: left + bar_width * s as f64, y: plot.bottom() - height, width: bar_width, height }
            })
        })
        .collect()
}

/// Single-series bars.
pub fn bars(values: &[u64], axis_max: u64, plot: PlotArea) -> Vec<Bar> {
    let groups: Vec<[u64; 1]> = values.iter().map(|v| [*v]).collect();
    grouped_bars(&groups, axis_max, plot).into_iter().map(|[bar]| bar).collect()
}
