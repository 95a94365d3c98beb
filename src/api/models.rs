use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[derive(Deserialize)]
pub struct ScoreRequest {
    pub text: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Wall-clock time the upstream engine call took, measured by the caller.
    #[serde(default)]
    pub response_time_ms: i64,
}

#[derive(Serialize)]
pub struct ScoreResponse {
    pub sentiment_score: u8,
    pub keyword_relevance: Vec<String>,
    pub performance_score: u8,
    pub text_length: usize,
    pub scored_at: DateTime<Utc>,
}
