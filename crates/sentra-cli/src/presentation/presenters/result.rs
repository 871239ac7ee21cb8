use sentra_types::{Polarity, SentimentResult};

use crate::presentation::view_models::{SentimentViewModel, WordListsViewModel};

pub fn polarity_icon(polarity: Polarity) -> &'static str {
    match polarity {
        Polarity::Positive => "👍",
        Polarity::Negative => "👎",
        Polarity::Neutral => "😐",
    }
}

fn non_empty(words: &[String]) -> Option<Vec<String>> {
    if words.is_empty() {
        None
    } else {
        Some(words.to_vec())
    }
}

/// One decimal place, rounding half away from zero.
///
/// `{:.1}` already rounds the exact binary value correctly; the only cases it
/// settles differently are exact ties (`x.25`, `x.75`), which it sends to
/// even. Negative zero prints without a sign.
pub fn format_score(score: f64) -> String {
    let magnitude = score.abs();
    let quarters = magnitude * 4.0;
    let magnitude = if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        (magnitude * 10.0).ceil() / 10.0
    } else {
        magnitude
    };

    if score < 0.0 {
        format!("-{magnitude:.1}")
    } else {
        format!("{magnitude:.1}")
    }
}

/// Pure mapping from a result to what the results panel shows.
pub fn present_result(result: &SentimentResult) -> SentimentViewModel {
    let polarity = result.polarity();

    let word_lists = if result.has_word_lists() {
        Some(WordListsViewModel {
            positive: non_empty(&result.positive_words),
            negative: non_empty(&result.negative_words),
        })
    } else {
        None
    };

    SentimentViewModel {
        polarity,
        icon: polarity_icon(polarity),
        score_text: format_score(result.score),
        word_count: result.word_count(),
        word_lists,
    }
}
