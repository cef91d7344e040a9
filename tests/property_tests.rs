//! Property-based tests for datasense using proptest
//!
//! These tests generate random inputs to test edge cases and ensure
//! robustness across a wide range of potential inputs.

use assert_cmd::prelude::*;
use proptest::prelude::*;
use std::fs;
use std::process::Command;

use datasense::analysis::{
    ChartKind, InteractiveChart, KeywordExtractor, SentimentAnalyzer, advanced_text_analysis,
};
use datasense::core::error::DataSenseError;

const NAME: &str = "datasense";

/// Generate finite numeric series of varying shapes
fn numbers_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6f64..1.0e6, 1..50)
}

/// Generate a supported chart type name
fn chart_type_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just("scatter".to_string()), Just("line".to_string())]
}

/// Generate lowercase words that survive stop-word filtering
fn content_word_strategy() -> impl Strategy<Value = String> {
    "[a-z]{3,10}".prop_filter("not a stop word", |word| {
        !datasense::analysis::tokenizer::is_stop_word(word)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10))] // Default is 256...

    #[test]
    fn test_chart_renders_for_any_series(
        numbers in numbers_strategy(),
        chart_type in chart_type_strategy(),
    ) {
        let kind = ChartKind::parse(&chart_type).unwrap();
        let html = InteractiveChart::render(&numbers, kind).unwrap();

        prop_assert!(html.starts_with("<!DOCTYPE html>"));
        prop_assert!(html.contains("cdn.jsdelivr.net/npm/chart.js"));
        prop_assert!(html.contains(kind.title()));
    }

    #[test]
    fn test_unknown_chart_types_always_rejected(
        name in "[a-z]{1,12}".prop_filter("not a supported type", |n| n != "scatter" && n != "line"),
    ) {
        match ChartKind::parse(&name) {
            Err(DataSenseError::Validation(msg)) => prop_assert!(msg.contains(&name)),
            other => prop_assert!(false, "Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_text_analysis_bounds_hold(
        words in prop::collection::vec(content_word_strategy(), 1..30),
    ) {
        let text = words.join(" ");
        let result = advanced_text_analysis(&text).unwrap();

        prop_assert!((-1.0..=1.0).contains(&result.polarity));
        prop_assert!((0.0..=1.0).contains(&result.subjectivity));
        prop_assert!(!result.keywords.is_empty());
        prop_assert!(result.keywords.len() <= 5);
        for keyword in &result.keywords {
            prop_assert!(words.contains(keyword), "keyword {keyword} not in input");
        }
    }

    #[test]
    fn test_keyword_extraction_is_deterministic(
        words in prop::collection::vec(content_word_strategy(), 1..40),
    ) {
        let text = words.join(" ");
        let extractor = KeywordExtractor::new();
        prop_assert_eq!(extractor.extract(&text, 5), extractor.extract(&text, 5));
    }

    #[test]
    fn test_unique_words_rank_lexicographically(
        words in prop::collection::hash_set(content_word_strategy(), 1..10),
    ) {
        // All term frequencies tie, so ranking is the documented
        // lexicographic tie-break
        let words: Vec<String> = words.into_iter().collect();
        let text = words.join(" ");

        let mut expected = words.clone();
        expected.sort();
        expected.truncate(5);

        prop_assert_eq!(KeywordExtractor::new().extract(&text, 5), expected);
    }

    #[test]
    fn test_sentiment_bounds_for_arbitrary_text(
        text in "[ -~]{0,200}",
    ) {
        let score = SentimentAnalyzer::new().analyze(&text);
        prop_assert!((-1.0..=1.0).contains(&score.polarity));
        prop_assert!((0.0..=1.0).contains(&score.subjectivity));
    }

    #[test]
    fn test_binary_exits_cleanly_for_any_valid_series(
        numbers in prop::collection::vec(-1000i64..1000, 1..10),
        chart_type in chart_type_strategy(),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let numbers_yaml = numbers
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        fs::write(
            dir.path().join("config.yaml"),
            format!("data:\n  numbers: [{numbers_yaml}]\n  chart_type: \"{chart_type}\"\n"),
        )
        .unwrap();

        let mut cmd = Command::cargo_bin(NAME).unwrap();
        cmd.current_dir(dir.path());

        cmd.assert().success();
        prop_assert!(dir.path().join("interactive_chart.html").exists());
    }
}

#[cfg(test)]
mod unit_property_tests {
    use super::*;
    use proptest::proptest;

    proptest! {

        #[test]
        fn test_content_word_strategy_generates_usable_words(word in content_word_strategy()) {
            prop_assert!(word.len() >= 3);
            prop_assert!(word.chars().all(|c| c.is_ascii_lowercase()));
            prop_assert!(!datasense::analysis::tokenizer::is_stop_word(&word));
        }

        #[test]
        fn test_numbers_strategy_stays_finite(numbers in numbers_strategy()) {
            prop_assert!(!numbers.is_empty());
            prop_assert!(numbers.iter().all(|n| n.is_finite()));
        }
    }
}
