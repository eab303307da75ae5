use super::*;

fn loaded() -> FetchState<Vec<String>> {
    FetchState::Loaded(vec!["bot1".to_owned(), "bot2".to_owned(), "support-bot".to_owned()])
}

#[test]
fn typed_text_narrows_candidates() {
    assert_eq!(visible_suggestions(&loaded(), "SUPP"), vec!["support-bot"]);
}

#[test]
fn unmatched_text_offers_every_candidate() {
    assert_eq!(visible_suggestions(&loaded(), "zzz").len(), 3);
}

#[test]
fn nothing_offered_before_bots_load() {
    assert!(visible_suggestions(&FetchState::Loading, "bot").is_empty());
    assert!(visible_suggestions(&FetchState::Failed("fetch failed: 502".to_owned()), "").is_empty());
}
