//! Heuristic scoring of engine responses.
//!
//! Three pure sub-computations: a word-list sentiment score, a loose keyword
//! relevance match, and a composite performance score. Every call is
//! stateless and total — malformed or empty input degrades to defaults
//! instead of erroring.

pub mod performance;
pub mod relevance;
pub mod sentiment;

use serde::Serialize;

/// Output of a single scoring pass over one engine response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    /// 0-100 tone estimate, 75 when no marker words are present.
    pub sentiment_score: u8,
    /// Subset of the input keywords judged relevant, input order preserved.
    pub keyword_relevance: Vec<String>,
    /// 0-100 composite of sentiment, length, latency, and quality vocabulary.
    pub performance_score: u8,
}

/// Scores one engine response against the domain's current keyword set.
///
/// `elapsed_ms` is the wall-clock time the upstream engine call took; it only
/// feeds the performance score's speed bonus.
pub fn score(text: &str, keywords: &[String], elapsed_ms: i64) -> AnalysisResult {
    let sentiment_score = sentiment::sentiment_score(text);
    AnalysisResult {
        keyword_relevance: relevance::keyword_relevance(text, keywords),
        performance_score: performance::performance_score(text, sentiment_score, elapsed_ms),
        sentiment_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn scores_a_realistic_response() {
        let keywords = kw(&["growth", "market share", "telemetry"]);
        let result = score("We see strong growth potential", &keywords, 2000);

        assert_eq!(result.sentiment_score, 100);
        assert_eq!(result.keyword_relevance, vec!["growth"]);
        // 100 sentiment + 10 speed + 2 ("growth") + 2 ("potential"), clamped
        assert_eq!(result.performance_score, 100);
    }

    #[test]
    fn empty_input_degrades_to_defaults() {
        let result = score("", &kw(&["growth"]), 0);
        assert_eq!(result.sentiment_score, 75);
        assert!(result.keyword_relevance.is_empty());
        assert_eq!(result.performance_score, 85);
    }

    #[test]
    fn scoring_is_idempotent() {
        let keywords = kw(&["analysis", "risk"]);
        let text = "A careful analysis of the risk involved";
        assert_eq!(score(text, &keywords, 4500), score(text, &keywords, 4500));
    }

    #[test]
    fn scores_stay_in_range_across_varied_input() {
        let keywords = kw(&["market", ""]);
        let long_text = "excellent strategy analysis growth ".repeat(50);
        for (text, elapsed) in [
            ("", 0),
            ("poor bad weak problem risk concern", -100),
            (long_text.as_str(), 9999),
        ] {
            let result = score(text, &keywords, elapsed);
            assert!(result.sentiment_score <= 100);
            assert!(result.performance_score <= 100);
            assert!(result.keyword_relevance.len() <= keywords.len());
        }
    }
}
