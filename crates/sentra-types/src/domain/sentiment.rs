use serde::{Deserialize, Serialize};

use super::polarity::Polarity;

/// Body of a `POST /analyze` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

impl AnalyzeRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Classification returned by the analysis service.
///
/// Treated as an immutable value once received. The word lists keep the
/// service's order and are neither deduplicated nor checked for overlap with
/// each other or with `tokens`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Signed strength. Sign carries polarity; there are no declared bounds.
    pub score: f64,
    pub positive_words: Vec<String>,
    pub negative_words: Vec<String>,
    /// Full tokenization of the submitted text. Only its length is displayed.
    pub tokens: Vec<String>,
}

impl SentimentResult {
    pub fn polarity(&self) -> Polarity {
        Polarity::from_score(self.score)
    }

    pub fn word_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn has_word_lists(&self) -> bool {
        !self.positive_words.is_empty() || !self.negative_words.is_empty()
    }
}
