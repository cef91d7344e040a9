//! Lexicon-based sentiment scoring
//!
//! Scores text with word-level polarity/subjectivity entries plus
//! negation and intensity handling. Polarity runs from -1.0 (negative)
//! to 1.0 (positive), subjectivity from 0.0 (objective) to 1.0
//! (subjective). Text with no lexicon matches scores neutral (0.0, 0.0).

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

use crate::analysis::tokenizer;

/// How many preceding tokens to inspect for negations and intensifiers
const MODIFIER_WINDOW: usize = 2;

/// Polarity dampening factor applied under negation
const NEGATION_FACTOR: f64 = -0.5;

/// Word-level sentiment entries: token -> (polarity, subjectivity)
static LEXICON: Lazy<HashMap<&'static str, (f64, f64)>> = Lazy::new(|| {
    [
        // Strongly positive
        ("amazing", (0.6, 0.9)),
        ("awesome", (1.0, 1.0)),
        ("best", (1.0, 0.3)),
        ("brilliant", (0.9, 0.9)),
        ("excellent", (1.0, 1.0)),
        ("fantastic", (0.4, 0.9)),
        ("great", (0.8, 0.75)),
        ("incredible", (0.9, 0.9)),
        ("outstanding", (1.0, 1.0)),
        ("perfect", (1.0, 1.0)),
        ("superb", (0.9, 0.9)),
        ("wonderful", (1.0, 1.0)),
        // Positive
        ("beautiful", (0.85, 1.0)),
        ("better", (0.5, 0.5)),
        ("clean", (0.4, 0.6)),
        ("clear", (0.1, 0.4)),
        ("delightful", (0.8, 0.9)),
        ("easy", (0.4, 0.8)),
        ("effective", (0.6, 0.7)),
        ("efficient", (0.5, 0.6)),
        ("enjoy", (0.4, 0.5)),
        ("enjoyable", (0.5, 0.6)),
        ("fast", (0.2, 0.6)),
        ("favorite", (0.5, 0.6)),
        ("fine", (0.4, 0.4)),
        ("friendly", (0.4, 0.6)),
        ("fun", (0.3, 0.5)),
        ("glad", (0.5, 1.0)),
        ("good", (0.7, 0.6)),
        ("happy", (0.8, 1.0)),
        ("helpful", (0.5, 0.6)),
        ("impressive", (0.9, 1.0)),
        ("interesting", (0.5, 0.5)),
        ("love", (0.5, 0.6)),
        ("loved", (0.7, 0.8)),
        ("nice", (0.6, 1.0)),
        ("pleasant", (0.7, 0.8)),
        ("positive", (0.2, 0.3)),
        ("powerful", (0.4, 0.6)),
        ("recommend", (0.3, 0.4)),
        ("reliable", (0.5, 0.5)),
        ("rich", (0.4, 0.4)),
        ("right", (0.3, 0.5)),
        ("robust", (0.4, 0.5)),
        ("simple", (0.3, 0.4)),
        ("smart", (0.5, 0.7)),
        ("smooth", (0.4, 0.6)),
        ("strong", (0.4, 0.5)),
        ("useful", (0.3, 0.2)),
        ("valuable", (0.5, 0.6)),
        ("win", (0.6, 0.7)),
        // Strongly negative
        ("awful", (-1.0, 1.0)),
        ("disaster", (-0.9, 0.8)),
        ("disgusting", (-0.9, 1.0)),
        ("dreadful", (-0.9, 0.9)),
        ("horrible", (-1.0, 1.0)),
        ("terrible", (-1.0, 1.0)),
        ("worst", (-1.0, 1.0)),
        // Negative
        ("annoying", (-0.6, 0.8)),
        ("bad", (-0.7, 0.67)),
        ("boring", (-0.7, 0.9)),
        ("broken", (-0.4, 0.5)),
        ("buggy", (-0.5, 0.6)),
        ("confusing", (-0.4, 0.7)),
        ("difficult", (-0.5, 0.7)),
        ("disappointed", (-0.6, 0.8)),
        ("disappointing", (-0.6, 0.7)),
        ("error", (-0.3, 0.4)),
        ("fail", (-0.5, 0.5)),
        ("failed", (-0.5, 0.5)),
        ("failure", (-0.5, 0.5)),
        ("fake", (-0.5, 0.7)),
        ("hard", (-0.3, 0.4)),
        ("hate", (-0.8, 0.9)),
        ("hated", (-0.9, 0.7)),
        ("lose", (-0.4, 0.5)),
        ("mediocre", (-0.3, 0.5)),
        ("mess", (-0.4, 0.6)),
        ("negative", (-0.3, 0.4)),
        ("poor", (-0.4, 0.6)),
        ("problem", (-0.2, 0.3)),
        ("sad", (-0.5, 1.0)),
        ("slow", (-0.3, 0.4)),
        ("ugly", (-0.7, 0.9)),
        ("unreliable", (-0.5, 0.6)),
        ("useless", (-0.5, 0.6)),
        ("weak", (-0.4, 0.5)),
        ("wrong", (-0.5, 0.5)),
        // Weakly polar / mostly subjective
        ("certain", (0.2, 0.6)),
        ("likely", (0.0, 0.7)),
        ("new", (0.1, 0.4)),
        ("old", (0.1, 0.2)),
        ("possible", (0.0, 0.6)),
        ("probably", (0.0, 0.5)),
        ("surprising", (0.1, 0.9)),
        ("unusual", (-0.1, 0.6)),
    ]
    .into_iter()
    .collect()
});

/// Intensity modifiers: token -> polarity multiplier
static INTENSIFIERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("absolutely", 1.3),
        ("completely", 1.3),
        ("extremely", 1.5),
        ("fairly", 0.9),
        ("highly", 1.3),
        ("incredibly", 1.5),
        ("quite", 1.1),
        ("really", 1.2),
        ("slightly", 0.7),
        ("somewhat", 0.8),
        ("totally", 1.3),
        ("truly", 1.2),
        ("very", 1.3),
    ]
    .into_iter()
    .collect()
});

/// Negation tokens flipping the polarity of the following entry
static NEGATIONS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["no", "not", "never", "neither", "nor", "cannot"].into_iter().collect());

/// Polarity and subjectivity scores for a piece of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScore {
    /// Sentiment from -1.0 (negative) to 1.0 (positive)
    pub polarity: f64,

    /// Sentiment from 0.0 (objective) to 1.0 (subjective)
    pub subjectivity: f64,
}

impl SentimentScore {
    /// Neutral score for text without lexicon matches
    pub fn neutral() -> Self {
        Self {
            polarity: 0.0,
            subjectivity: 0.0,
        }
    }
}

/// Sentiment analyzer backed by the pretrained word lexicon
#[derive(Debug, Default)]
pub struct SentimentAnalyzer;

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Score a piece of text.
    ///
    /// Each lexicon match contributes its polarity/subjectivity pair,
    /// adjusted by negations and intensifiers within the preceding
    /// token window; the result is the mean over all matches.
    pub fn analyze(&self, text: &str) -> SentimentScore {
        let tokens = tokenizer::tokenize(text);

        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        let mut matches = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            let Some(&(base_polarity, base_subjectivity)) = LEXICON.get(token.as_str()) else {
                continue;
            };

            let mut polarity = base_polarity;
            let mut subjectivity = base_subjectivity;

            let window_start = i.saturating_sub(MODIFIER_WINDOW);
            for preceding in &tokens[window_start..i] {
                if let Some(&factor) = INTENSIFIERS.get(preceding.as_str()) {
                    polarity *= factor;
                    subjectivity = (subjectivity * factor).min(1.0);
                } else if NEGATIONS.contains(preceding.as_str()) {
                    polarity *= NEGATION_FACTOR;
                }
            }

            polarity_sum += polarity.clamp(-1.0, 1.0);
            subjectivity_sum += subjectivity.clamp(0.0, 1.0);
            matches += 1;
        }

        if matches == 0 {
            return SentimentScore::neutral();
        }

        SentimentScore {
            polarity: (polarity_sum / matches as f64).clamp(-1.0, 1.0),
            subjectivity: (subjectivity_sum / matches as f64).clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str) -> SentimentScore {
        SentimentAnalyzer::new().analyze(text)
    }

    #[test]
    fn test_positive_text() {
        let score = analyze("This is a great and wonderful library");
        assert!(score.polarity > 0.0);
        assert!(score.subjectivity > 0.0);
    }

    #[test]
    fn test_negative_text() {
        let score = analyze("A terrible, disappointing mess");
        assert!(score.polarity < 0.0);
        assert!(score.subjectivity > 0.0);
    }

    #[test]
    fn test_neutral_text_without_lexicon_matches() {
        let score = analyze("The committee reviewed the quarterly numbers");
        assert_eq!(score, SentimentScore::neutral());
    }

    #[test]
    fn test_negation_flips_and_dampens_polarity() {
        let plain = analyze("good");
        let negated = analyze("not good");

        assert!(plain.polarity > 0.0);
        assert!(negated.polarity < 0.0);
        assert!(negated.polarity.abs() < plain.polarity.abs());
    }

    #[test]
    fn test_intensifier_amplifies_polarity() {
        let plain = analyze("good");
        let intensified = analyze("very good");

        assert!(intensified.polarity > plain.polarity);
    }

    #[test]
    fn test_diminisher_softens_polarity() {
        let plain = analyze("good");
        let softened = analyze("slightly good");

        assert!(softened.polarity > 0.0);
        assert!(softened.polarity < plain.polarity);
    }

    #[test]
    fn test_scores_stay_within_bounds() {
        for text in [
            "extremely awesome extremely awesome extremely awesome",
            "extremely terrible extremely terrible extremely terrible",
            "not very extremely perfect",
            "",
        ] {
            let score = analyze(text);
            assert!((-1.0..=1.0).contains(&score.polarity), "text: {text}");
            assert!((0.0..=1.0).contains(&score.subjectivity), "text: {text}");
        }
    }

    #[test]
    fn test_mixed_sentiment_averages() {
        let score = analyze("good bad");
        assert!(score.polarity.abs() < 0.5);
    }

    #[test]
    fn test_case_insensitive_matching() {
        assert_eq!(analyze("GREAT"), analyze("great"));
    }
}
