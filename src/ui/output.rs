//! Output formatting and display logic for datasense

use crate::analysis::TextAnalysis;
use crate::core::constants::paths;

/// Print the success message after a chart has been written
pub fn print_chart_success() {
    println!(
        "Interactive chart created and saved as '{}'. Open this file in a web browser to view.",
        paths::CHART_OUTPUT_FILE
    );
}

/// Print the text analysis result block
pub fn print_analysis_results(analysis: &TextAnalysis) {
    println!("Advanced Text Analysis Results:");
    println!("  Polarity: {}", analysis.polarity);
    println!("  Subjectivity: {}", analysis.subjectivity);
    println!("  Keywords: {}", analysis.keywords.join(", "));
}

/// Print the handled message for an unsupported operation name
pub fn print_unsupported_operation(name: &str) {
    println!("Unsupported operation: {name}");
}

/// Print the one-line user message for a caught analysis error
pub fn print_execution_error(error: &dyn std::error::Error) {
    println!("An error occurred: {error}");
}
