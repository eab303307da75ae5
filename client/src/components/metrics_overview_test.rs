use super::*;

#[test]
fn every_dimension_has_a_distinct_blurb() {
    let blurbs: Vec<&str> = Dimension::ALL.iter().map(|d| dimension_blurb(*d)).collect();
    for (i, blurb) in blurbs.iter().enumerate() {
        assert!(!blurb.is_empty());
        assert!(!blurbs[i + 1..].contains(blurb));
    }
}
