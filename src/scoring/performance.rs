/// Words whose presence marks a substantive answer. Each occurrence anywhere
/// in the text (substring, not token) is worth +2.
const QUALITY_INDICATORS: &[&str] = &[
    "strategy",
    "analysis",
    "recommendation",
    "insight",
    "opportunity",
    "potential",
    "market",
    "competitive",
    "growth",
];

/// Upper bound on the response-length bonus.
const LENGTH_BONUS_CAP: i64 = 20;

/// Composes the 0-100 performance score from the sentiment score, response
/// length, response latency, and quality-vocabulary density.
///
/// Additive: sentiment, plus min(20, chars/100), plus a speed bonus (+10
/// under 3s, +5 under 5s), plus +2 per case-insensitive occurrence of a
/// quality indicator word. The running total is clamped to [0,100].
pub fn performance_score(text: &str, sentiment: u8, elapsed_ms: i64) -> u8 {
    let mut score = i64::from(sentiment);

    score += LENGTH_BONUS_CAP.min(text.chars().count() as i64 / 100);

    score += if elapsed_ms < 3000 {
        10
    } else if elapsed_ms < 5000 {
        5
    } else {
        0
    };

    let lowered = text.to_lowercase();
    for word in QUALITY_INDICATORS {
        score += 2 * lowered.matches(word).count() as i64;
    }

    score.clamp(0, 100) as u8
}
