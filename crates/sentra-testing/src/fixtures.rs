//! Canonical sentiment results.
//!
//! Each fixture mirrors a scenario the UI must render in a specific way, so
//! tests on both sides of the wire agree on the same values.

use sentra_types::SentimentResult;

fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Positive result with only positive words.
pub fn positive_result() -> SentimentResult {
    SentimentResult {
        score: 3.7,
        positive_words: words(&["great", "love"]),
        negative_words: vec![],
        tokens: words(&["i", "love", "this", "great", "day"]),
    }
}

/// Negative result with only negative words.
pub fn negative_result() -> SentimentResult {
    SentimentResult {
        score: -2.0,
        positive_words: vec![],
        negative_words: words(&["bad", "terrible"]),
        tokens: words(&["bad", "and", "terrible"]),
    }
}

/// Zero score with no attributed words.
pub fn neutral_result() -> SentimentResult {
    SentimentResult {
        score: 0.0,
        positive_words: vec![],
        negative_words: vec![],
        tokens: words(&["the", "a"]),
    }
}

/// Both lists populated, with a repeated word.
pub fn mixed_result() -> SentimentResult {
    SentimentResult {
        score: 0.25,
        positive_words: words(&["good", "good"]),
        negative_words: words(&["slow"]),
        tokens: words(&["good", "food", "good", "price", "slow", "service"]),
    }
}

/// JSON body the service would send for `result`.
pub fn response_body(result: &SentimentResult) -> String {
    serde_json::json!({
        "score": result.score,
        "positive_words": result.positive_words,
        "negative_words": result.negative_words,
        "tokens": result.tokens,
    })
    .to_string()
}
