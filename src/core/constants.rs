/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes all magic strings, numbers, and other literal values
/// used across the application, making them easier to maintain and modify.
/// Operation name constants
pub mod operations {
    /// Render an interactive chart from the configured number series
    pub const INTERACTIVE_VISUALIZATION: &str = "interactive_visualization";
    /// Run sentiment and keyword analysis on the configured text
    pub const ADVANCED_TEXT_ANALYSIS: &str = "advanced_text_analysis";

    /// Default operation when the configuration omits one
    pub const DEFAULT: &str = INTERACTIVE_VISUALIZATION;

    /// All valid operation names
    pub const ALL: [&str; 2] = [INTERACTIVE_VISUALIZATION, ADVANCED_TEXT_ANALYSIS];
}

/// Chart type constants
pub mod chart_types {
    /// Scatter chart - individual points without connecting lines
    pub const SCATTER: &str = "scatter";
    /// Line chart - points connected in index order
    pub const LINE: &str = "line";

    /// Default chart type
    pub const DEFAULT: &str = SCATTER;

    /// All valid chart types
    pub const ALL: [&str; 2] = [SCATTER, LINE];
}

/// Fixed file path constants
pub mod paths {
    /// Output path for the rendered interactive chart, overwritten per run
    pub const CHART_OUTPUT_FILE: &str = "interactive_chart.html";
    /// Append-only JSON log file, one object per line
    pub const LOG_OUTPUT_FILE: &str = "app_logs.json";
    /// Default configuration file path, relative to the working directory
    pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";
}

/// Default configuration values
pub mod defaults {
    /// Default log level name when the configuration omits or misspells one
    pub const LOG_LEVEL: &str = "info";
    /// Default analysis text (single space, matching the documented default)
    pub const TEXT: &str = " ";
}

/// Text analysis constants
pub mod analysis {
    /// Number of top-ranked keywords to return
    pub const TOP_KEYWORDS: usize = 5;
    /// Minimum token length considered by the tokenizer
    pub const MIN_TOKEN_LENGTH: usize = 2;
}
