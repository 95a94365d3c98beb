/// Marker words treated as positive signals. Tokens match by substring
/// containment, so "successful" counts via "success".
const POSITIVE_MARKERS: &[&str] = &[
    "excellent",
    "good",
    "strong",
    "opportunity",
    "success",
    "effective",
    "valuable",
];

/// Marker words treated as negative signals.
const NEGATIVE_MARKERS: &[&str] = &["poor", "bad", "weak", "problem", "risk", "concern"];

/// Score returned when the text contains no marker words at all.
pub const NEUTRAL_SENTIMENT: u8 = 75;

/// Scores the overall tone of a response on a 0-100 scale.
///
/// Tokenizes on whitespace and counts tokens that contain a positive or
/// negative marker word as a substring. A token can count toward both sides
/// ("good-risk" is one positive and one negative hit). Text with no marker
/// hits at all gets the neutral default of 75.
pub fn sentiment_score(text: &str) -> u8 {
    let mut positive: u32 = 0;
    let mut negative: u32 = 0;

    for token in text.to_lowercase().split_whitespace() {
        if POSITIVE_MARKERS.iter().any(|marker| token.contains(marker)) {
            positive += 1;
        }
        if NEGATIVE_MARKERS.iter().any(|marker| token.contains(marker)) {
            negative += 1;
        }
    }

    let total = positive + negative;
    if total == 0 {
        return NEUTRAL_SENTIMENT;
    }

    (positive as f64 / total as f64 * 100.0).round() as u8
}
