use sentra_types::Polarity;

/// Everything the results panel shows for one sentiment result.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentViewModel {
    pub polarity: Polarity,
    pub icon: &'static str,
    /// Score with one fractional digit, sign kept.
    pub score_text: String,
    pub word_count: usize,
    /// `None` when neither list has any words.
    pub word_lists: Option<WordListsViewModel>,
}

/// Word chips, in service order, duplicates kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordListsViewModel {
    /// `None` when the service attributed no positive words.
    pub positive: Option<Vec<String>>,
    /// `None` when the service attributed no negative words.
    pub negative: Option<Vec<String>>,
}
