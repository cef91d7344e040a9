//! Text analysis front-end
//!
//! Combines the sentiment scorer and the keyword extractor into the
//! `advanced_text_analysis` operation.

use crate::analysis::keywords::KeywordExtractor;
use crate::analysis::sentiment::SentimentAnalyzer;
use crate::core::constants::analysis;
use crate::core::error::{DataSenseError, Result};

/// Result of advanced text analysis
#[derive(Debug, Clone, PartialEq)]
pub struct TextAnalysis {
    /// Sentiment from -1.0 (negative) to 1.0 (positive)
    pub polarity: f64,

    /// Sentiment from 0.0 (objective) to 1.0 (subjective)
    pub subjectivity: f64,

    /// Up to five keywords, descending relevance
    pub keywords: Vec<String>,
}

/// Analyze a text: sentiment scores plus the top TF-IDF keywords.
///
/// Empty text and text without any non-stop-word token are validation
/// failures; both are logged at error severity before returning.
pub fn advanced_text_analysis(text: &str) -> Result<TextAnalysis> {
    if text.is_empty() {
        log::error!("No text provided for analysis.");
        return Err(DataSenseError::Validation("The text is empty.".to_string()));
    }

    let keywords = KeywordExtractor::new().extract(text, analysis::TOP_KEYWORDS);
    if keywords.is_empty() {
        log::error!("Text contains no analyzable terms.");
        return Err(DataSenseError::Validation(
            "Text contains no analyzable terms.".to_string(),
        ));
    }

    let sentiment = SentimentAnalyzer::new().analyze(text);

    log::info!(
        "Advanced text analysis completed. Polarity: {}, Subjectivity: {}, Keywords: {}",
        sentiment.polarity,
        sentiment.subjectivity,
        keywords.join(", ")
    );

    Ok(TextAnalysis {
        polarity: sentiment.polarity,
        subjectivity: sentiment.subjectivity,
        keywords,
    })
}
