//! TF-IDF keyword extraction
//!
//! Ranks the distinct non-stop-word tokens of a document by TF-IDF
//! weight. Over a single-document corpus the inverse-document-frequency
//! term is constant, so the ranking reduces to term frequency; exact
//! ties break lexicographically ascending so results are deterministic
//! across runs and platforms.

use rustc_hash::FxHashMap;
use std::cmp::Ordering;

use crate::analysis::tokenizer;

/// A token with its TF-IDF weight
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedTerm {
    pub term: String,
    pub weight: f64,
}

/// TF-IDF extractor over a single-document corpus
#[derive(Debug, Default)]
pub struct KeywordExtractor;

impl KeywordExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Compute TF-IDF weights for every distinct non-stop-word token,
    /// sorted by descending weight with lexicographic tie-break
    pub fn weigh_terms(&self, text: &str) -> Vec<WeightedTerm> {
        let tokens = tokenizer::content_tokens(text);
        if tokens.is_empty() {
            return Vec::new();
        }

        let total = tokens.len() as f64;
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        for token in tokens {
            *counts.entry(token).or_insert(0) += 1;
        }

        // Smoothed IDF over a one-document corpus: ln((1+n)/(1+df)) + 1
        // with n = df = 1, so every term carries the same constant.
        let idf = 1.0;

        let mut terms: Vec<WeightedTerm> = counts
            .into_iter()
            .map(|(term, count)| WeightedTerm {
                weight: (count as f64 / total) * idf,
                term,
            })
            .collect();

        terms.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.term.cmp(&b.term))
        });

        terms
    }

    /// Extract the top `top_n` keywords by descending relevance
    pub fn extract(&self, text: &str, top_n: usize) -> Vec<String> {
        self.weigh_terms(text)
            .into_iter()
            .take(top_n)
            .map(|weighted| weighted.term)
            .collect()
    }
}
