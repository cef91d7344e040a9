//! datasense - config-driven chart rendering and text analysis
//!
//! A small command-line utility that reads a YAML configuration file
//! and dispatches to one of two operations: rendering an interactive
//! HTML chart from a numeric series, or running sentiment and keyword
//! analysis on a text string. Every run writes structured JSON logs
//! alongside human-readable console output.

pub mod analysis;
pub mod config;
pub mod core;
pub mod logging;
pub mod ui;

// Re-export commonly used items at the crate root
pub use analysis::{TextAnalysis, advanced_text_analysis, interactive_visualization};
pub use config::{AppConfig, Operation};
pub use crate::core::{DataSenseError, Result};
pub use logging::LogSettings;
