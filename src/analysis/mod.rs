//! Analysis operations
//!
//! This module contains the two dispatched operations: interactive
//! chart rendering and advanced text analysis, together with the
//! tokenization, sentiment, and keyword machinery backing them.

pub mod chart;
pub mod keywords;
pub mod sentiment;
pub mod text;
pub mod tokenizer;

// Re-export commonly used items
pub use chart::{ChartKind, InteractiveChart, interactive_visualization};
pub use keywords::KeywordExtractor;
pub use sentiment::{SentimentAnalyzer, SentimentScore};
pub use text::{TextAnalysis, advanced_text_analysis};
