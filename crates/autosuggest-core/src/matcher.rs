//! Candidate filtering.
//!
//! Matching is plain case-sensitive substring containment. Candidate order is
//! preserved and duplicates are kept; there is no ranking.

use smol_str::SmolStr;

use crate::types::WordMatch;

/// Keep every candidate that contains `word` anywhere.
pub fn filter_candidates(word: &str, candidates: &[SmolStr]) -> Vec<SmolStr> {
    candidates
        .iter()
        .filter(|candidate| candidate.contains(word))
        .cloned()
        .collect()
}

/// Produce the match list for the word under the caret.
///
/// Nothing is suggested when there is no current word or `can_suggest`
/// rejects it. Candidates are only fetched once the gate has passed, since
/// hosts may compute them per call.
pub fn match_suggestions<G, I>(word: Option<&WordMatch>, can_suggest: G, candidates: I) -> Vec<SmolStr>
where
    G: FnOnce(&WordMatch) -> bool,
    I: FnOnce() -> Vec<SmolStr>,
{
    let Some(word) = word else {
        return Vec::new();
    };
    if !can_suggest(word) {
        return Vec::new();
    }
    filter_candidates(&word.text, &candidates())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(list: &[&str]) -> Vec<SmolStr> {
        list.iter().map(|s| SmolStr::new(s)).collect()
    }

    #[test]
    fn test_substring_anywhere() {
        let candidates = items(&["apple", "grape", "snap"]);
        assert_eq!(filter_candidates("ap", &candidates), candidates);
        assert!(filter_candidates("xyz", &candidates).is_empty());
    }

    #[test]
    fn test_case_sensitive() {
        let candidates = items(&["Start", "start", "restart"]);
        assert_eq!(filter_candidates("Sta", &candidates), items(&["Start"]));
        assert_eq!(filter_candidates("sta", &candidates), items(&["start", "restart"]));
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let candidates = items(&["zeta", "beta", "zeta", "alpha"]);
        assert_eq!(filter_candidates("eta", &candidates), items(&["zeta", "beta", "zeta"]));
    }

    #[test]
    fn test_idempotent() {
        let candidates = items(&["Start", "Stage", "End"]);
        let word = WordMatch::new("Sta", 0, 3);
        let first = match_suggestions(Some(&word), |_| true, || candidates.clone());
        let second = match_suggestions(Some(&word), |_| true, || candidates.clone());
        assert_eq!(first, second);
        assert_eq!(first, items(&["Start", "Stage"]));
    }

    #[test]
    fn test_no_word_or_gate_closed() {
        let word = WordMatch::new("ap", 0, 2);
        assert!(match_suggestions(None, |_| true, || items(&["apple"])).is_empty());
        assert!(match_suggestions(Some(&word), |_| false, || items(&["apple"])).is_empty());
    }

    #[test]
    fn test_candidates_not_fetched_when_gated() {
        let word = WordMatch::new("ap", 0, 2);
        let result = match_suggestions(Some(&word), |_| false, || -> Vec<SmolStr> {
            panic!("candidates fetched although suggestion is not allowed")
        });
        assert!(result.is_empty());
    }
}
