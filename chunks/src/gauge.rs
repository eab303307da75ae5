//! Gauge and progress math for circular meters and metric cards.

#[cfg(test)]
#[path = "gauge_test.rs"]
mod gauge_test;

/// Errors produced when gauge geometry cannot be computed.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum GaugeError {
    /// The gauge maximum is zero, negative, or not a finite number.
    #[error("gauge maximum must be a positive finite number, got {0}")]
    InvalidMax(f64),

    /// The stroke is at least as wide as the gauge, leaving no radius.
    #[error("gauge size {size} leaves no radius for stroke width {stroke_width}")]
    InvalidSize { size: f64, stroke_width: f64 },
}

/// Clamp `value` into `[0, max]`. A non-positive `max` clamps to 0.
#[must_use]
pub fn clamp_value(value: f64, max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 || value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, max)
}

/// Filled share of the gauge in percent: `100 * clamp(value, 0, max) / max`.
///
/// An invalid maximum renders as an empty gauge rather than dividing by zero.
#[must_use]
pub fn percentage(value: f64, max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 0.0;
    }
    clamp_value(value, max) / max * 100.0
}

/// Percentage rounded to a whole number, as shown next to progress bars.
#[must_use]
pub fn rounded_percentage(value: f64, max: f64) -> u32 {
    percentage(value, max).round() as u32
}

/// Stroke geometry of a circular meter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeArc {
    pub size: f64,
    pub stroke_width: f64,
    pub center: f64,
    pub radius: f64,
    pub circumference: f64,
    pub percentage: f64,
    /// Dash offset that leaves exactly `percentage` of the ring stroked.
    pub dash_offset: f64,
    /// Value after clamping into `[0, max]`.
    pub display_value: f64,
}

impl GaugeArc {
    /// Compute the arc for `value` out of `max` on a `size`-pixel square.
    ///
    /// # Errors
    ///
    /// Returns [`GaugeError::InvalidMax`] when `max` is not a positive finite
    /// number and [`GaugeError::InvalidSize`] when the stroke consumes the radius.
    pub fn new(value: f64, max: f64, size: f64, stroke_width: f64) -> Result<Self, GaugeError> {
        if !max.is_finite() || max <= 0.0 {
            return Err(GaugeError::InvalidMax(max));
        }
        let radius = (size - stroke_width) / 2.0;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GaugeError::InvalidSize { size, stroke_width });
        }
        let circumference = 2.0 * std::f64::consts::PI * radius;
        let pct = percentage(value, max);
        Ok(Self {
            size,
            stroke_width,
            center: size / 2.0,
            radius,
            circumference,
            percentage: pct,
            dash_offset: circumference - (pct / 100.0) * circumference,
            display_value: clamp_value(value, max),
        })
    }

    /// Length of the stroked portion of the ring.
    #[must_use]
    pub fn arc_length(&self) -> f64 {
        self.circumference - self.dash_offset
    }
}
