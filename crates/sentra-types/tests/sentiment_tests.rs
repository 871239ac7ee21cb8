use sentra_types::{AnalyzeRequest, Polarity, SentimentResult};

#[test]
fn test_decode_service_response() {
    let body = r#"{
        "score": 3.7,
        "positive_words": ["great", "love"],
        "negative_words": [],
        "tokens": ["i", "love", "this", "great", "day"]
    }"#;

    let result: SentimentResult = serde_json::from_str(body).unwrap();

    assert_eq!(result.score, 3.7);
    assert_eq!(result.positive_words, vec!["great", "love"]);
    assert!(result.negative_words.is_empty());
    assert_eq!(result.word_count(), 5);
    assert_eq!(result.polarity(), Polarity::Positive);
    assert!(result.has_word_lists());
}

#[test]
fn test_integer_score_decodes() {
    let body = r#"{"score": -2, "positive_words": [], "negative_words": ["bad"], "tokens": ["bad"]}"#;
    let result: SentimentResult = serde_json::from_str(body).unwrap();
    assert_eq!(result.score, -2.0);
    assert_eq!(result.polarity(), Polarity::Negative);
}

#[test]
fn test_missing_list_is_rejected() {
    let body = r#"{"score": 1.0, "positive_words": [], "tokens": []}"#;
    assert!(serde_json::from_str::<SentimentResult>(body).is_err());
}

#[test]
fn test_duplicates_and_overlap_are_kept() {
    let body = r#"{
        "score": 0.5,
        "positive_words": ["good", "good", "fine"],
        "negative_words": ["fine"],
        "tokens": ["good", "good", "fine"]
    }"#;
    let result: SentimentResult = serde_json::from_str(body).unwrap();
    assert_eq!(result.positive_words, vec!["good", "good", "fine"]);
    assert_eq!(result.negative_words, vec!["fine"]);
}

#[test]
fn test_neutral_result_has_no_word_lists() {
    let result = SentimentResult {
        score: 0.0,
        positive_words: vec![],
        negative_words: vec![],
        tokens: vec!["the".into(), "a".into()],
    };
    assert_eq!(result.polarity(), Polarity::Neutral);
    assert!(!result.has_word_lists());
    assert_eq!(result.word_count(), 2);
}

#[test]
fn test_request_body_shape() {
    let json = serde_json::to_value(AnalyzeRequest::new("hello world")).unwrap();
    assert_eq!(json, serde_json::json!({ "text": "hello world" }));
}
