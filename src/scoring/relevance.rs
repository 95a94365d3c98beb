/// Selects the keywords judged relevant to the response text.
///
/// Matching is deliberately loose: a keyword counts as relevant if the
/// lowercased text contains it as a substring, contains it with its internal
/// whitespace stripped ("market share" matching "marketshare"), or shares a
/// whitespace token with it in either containment direction. False positives
/// are accepted ("cat" matches text containing "category").
///
/// The result preserves the input order and drops exact duplicates, so it is
/// always a subset of the supplied keyword sequence.
pub fn keyword_relevance(text: &str, keywords: &[String]) -> Vec<String> {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    let mut relevant: Vec<String> = Vec::new();
    for keyword in keywords {
        if relevant.contains(keyword) {
            continue;
        }
        let needle = keyword.to_lowercase();
        // An empty keyword would match every text via empty-substring
        // containment; treat it as never relevant instead.
        if needle.trim().is_empty() {
            continue;
        }
        if matches_keyword(&lowered, &tokens, &needle) {
            relevant.push(keyword.clone());
        }
    }

    relevant
}

fn matches_keyword(text: &str, tokens: &[&str], keyword: &str) -> bool {
    if text.contains(keyword) {
        return true;
    }

    let collapsed: String = keyword.split_whitespace().collect();
    if text.contains(&collapsed) {
        return true;
    }

    tokens
        .iter()
        .any(|token| keyword.contains(token) || token.contains(keyword))
}
