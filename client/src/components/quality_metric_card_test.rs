use super::*;

#[test]
fn score_readout_formats_value_and_max() {
    assert_eq!(score_readout(7.456, 10.0), "7.46 / 10.0");
    assert_eq!(score_readout(0.0, 1.0), "0.00 / 1.0");
}

#[test]
fn progress_class_follows_card_colour() {
    assert_eq!(progress_class("green"), "progress__bar progress__bar--green");
    assert_eq!(progress_class("magenta"), "progress__bar progress__bar--blue");
}
