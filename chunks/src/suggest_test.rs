use super::*;

fn bots() -> Vec<String> {
    vec!["bot1".into(), "bot2".into(), "Support-Bot".into(), "sales".into()]
}

#[test]
fn blank_input_shows_everything() {
    let all = bots();
    assert_eq!(filter_suggestions(&all, ""), vec!["bot1", "bot2", "Support-Bot", "sales"]);
    assert_eq!(filter_suggestions(&all, "   ").len(), 4);
}

#[test]
fn substring_match_ignores_case() {
    let all = bots();
    assert_eq!(filter_suggestions(&all, "BOT"), vec!["bot1", "bot2", "Support-Bot"]);
    assert_eq!(filter_suggestions(&all, "port"), vec!["Support-Bot"]);
}

#[test]
fn no_match_falls_back_to_full_list() {
    let all = bots();
    assert_eq!(filter_suggestions(&all, "zzz"), vec!["bot1", "bot2", "Support-Bot", "sales"]);
}

#[test]
fn empty_candidates_stay_empty() {
    assert!(filter_suggestions(&[], "bot").is_empty());
}

#[test]
fn resolve_candidate_matches_exact_name() {
    let all = bots();
    assert_eq!(resolve_candidate(&all, " support-bot "), Some("Support-Bot"));
    assert_eq!(resolve_candidate(&all, "bot"), None);
}
