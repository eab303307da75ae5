//! Circular gauge showing one score out of a maximum.

use leptos::prelude::*;

use chunks::gauge::GaugeArc;

/// Ring gauge with the clamped value in the middle and a caption below.
///
/// An invalid `max` or a stroke wider than the gauge renders an empty ring
/// with a dash instead of a number.
#[component]
pub fn CircularMeter(
    value: f64,
    #[prop(default = 10.0)] max: f64,
    #[prop(default = 112.0)] size: f64,
    #[prop(default = 10.0)] stroke_width: f64,
    #[prop(into)] label: String,
    #[prop(optional, into)] rating: Option<String>,
    #[prop(into, default = "blue".into())] color: String,
) -> impl IntoView {
    let arc = GaugeArc::new(value, max, size, stroke_width);
    if let Err(e) = &arc {
        log_invalid(&label, e);
    }
    let center = size / 2.0;
    let radius = ((size - stroke_width) / 2.0).max(0.0);
    let (circumference, dash_offset, readout) = match arc {
        Ok(arc) => (arc.circumference, arc.dash_offset, format!("{:.0}", arc.display_value)),
        Err(_) => (0.0, 0.0, "—".to_owned()),
    };
    let view_box = format!("0 0 {size} {size}");
    let transform = format!("rotate(-90 {center} {center})");

    view! {
        <div class=format!("meter meter--{color}")>
            <svg class="meter__ring" width=size height=size viewBox=view_box>
                <circle class="meter__track" cx=center cy=center r=radius stroke-width=stroke_width fill="none"></circle>
                <circle
                    class="meter__value"
                    cx=center
                    cy=center
                    r=radius
                    stroke-width=stroke_width
                    fill="none"
                    stroke-linecap="round"
                    stroke-dasharray=circumference
                    stroke-dashoffset=dash_offset
                    transform=transform
                ></circle>
                <text class="meter__readout" x=center y=center text-anchor="middle" dominant-baseline="central">
                    {readout}
                </text>
            </svg>
            <div class="meter__label">{label}</div>
            {rating.map(|r| view! { <div class="meter__rating">{r}</div> })}
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn log_invalid(label: &str, e: &chunks::gauge::GaugeError) {
    log::warn!("meter {label}: {e}");
}

#[cfg(not(feature = "hydrate"))]
fn log_invalid(_label: &str, _e: &chunks::gauge::GaugeError) {}
