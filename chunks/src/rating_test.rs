use super::*;

#[test]
fn rating_thresholds() {
    assert_eq!(QualityRating::from_score(10.0), QualityRating::Excellent);
    assert_eq!(QualityRating::from_score(9.0), QualityRating::Excellent);
    assert_eq!(QualityRating::from_score(8.9), QualityRating::Good);
    assert_eq!(QualityRating::from_score(7.0), QualityRating::Good);
    assert_eq!(QualityRating::from_score(5.0), QualityRating::Average);
    assert_eq!(QualityRating::from_score(3.0), QualityRating::Fair);
    assert_eq!(QualityRating::from_score(2.99), QualityRating::Poor);
    assert_eq!(QualityRating::from_score(-1.0), QualityRating::Poor);
}

#[test]
fn rating_labels() {
    assert_eq!(QualityRating::from_score(8.0).label(), "Good");
    assert_eq!(QualityRating::Poor.label(), "Poor");
}

#[test]
fn badge_thresholds() {
    assert_eq!(QualityBadge::from_score(8.0).label(), "High");
    assert_eq!(QualityBadge::from_score(5.0).label(), "Medium");
    assert_eq!(QualityBadge::from_score(4.99).label(), "Low");
    assert_eq!(QualityBadge::from_score(7.99), QualityBadge::Medium);
}

#[test]
fn badge_css_modifier_matches_level() {
    assert_eq!(QualityBadge::High.css_modifier(), "badge--high");
    assert_eq!(QualityBadge::Low.css_modifier(), "badge--low");
}
