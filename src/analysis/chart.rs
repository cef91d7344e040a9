//! Interactive chart rendering
//!
//! Renders a numeric series as a self-contained interactive HTML
//! document. Drawing is delegated to Chart.js loaded from its CDN;
//! this module only builds the document with the data embedded as JSON.

use std::fs;
use std::path::Path;

use crate::core::constants::{chart_types, paths};
use crate::core::error::{DataSenseError, Result};

/// Constants for chart document generation
mod chart_constants {
    /// Chart.js CDN URL for rendering charts
    pub const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js";

    /// Point and line color
    pub const SERIES_COLOR: &str = "#2563eb";
}

/// Supported chart kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Individual points without connecting lines
    Scatter,
    /// Points connected in index order
    Line,
}

impl ChartKind {
    /// Parse a chart type name, rejecting anything outside the
    /// supported set
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            chart_types::SCATTER => Ok(ChartKind::Scatter),
            chart_types::LINE => Ok(ChartKind::Line),
            other => Err(DataSenseError::Validation(format!(
                "Unsupported chart type {other}"
            ))),
        }
    }

    /// Document title for this chart kind
    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::Scatter => "Interactive Scatter Plot",
            ChartKind::Line => "Interactive Line Chart",
        }
    }

    /// Whether Chart.js should connect the points
    fn show_line(&self) -> bool {
        matches!(self, ChartKind::Line)
    }
}

/// HTML chart generator for numeric series
pub struct InteractiveChart;

impl InteractiveChart {
    /// Render the chart document and write it to the fixed output
    /// path, overwriting any existing file
    pub fn write(numbers: &[f64], kind: ChartKind) -> Result<()> {
        Self::write_to(numbers, kind, paths::CHART_OUTPUT_FILE)
    }

    /// Render the chart document and write it to the given path
    pub fn write_to<P: AsRef<Path>>(numbers: &[f64], kind: ChartKind, path: P) -> Result<()> {
        let html_content = Self::render(numbers, kind)?;
        fs::write(path, html_content)?;
        Ok(())
    }

    /// Generate the complete HTML document content with the series
    /// embedded as (index, value) points
    pub fn render(numbers: &[f64], kind: ChartKind) -> Result<String> {
        let points: Vec<serde_json::Value> = numbers
            .iter()
            .enumerate()
            .map(|(index, value)| serde_json::json!({ "x": index, "y": value }))
            .collect();
        let data_json = serde_json::to_string(&points)?;

        let css_styles = Self::generate_css();
        let js_script = Self::generate_javascript(&data_json, kind);

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <script src="{}"></script>
    <style>{}</style>
</head>
<body>
    <div class="container">
        <h1>{}</h1>
        <canvas id="chart"></canvas>
    </div>
    <script>{}</script>
</body>
</html>"#,
            kind.title(),
            chart_constants::CHART_JS_CDN,
            css_styles,
            kind.title(),
            js_script
        ))
    }

    fn generate_css() -> &'static str {
        r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background-color: #f8fafc;
            color: #1e293b;
            margin: 0;
        }

        .container {
            max-width: 900px;
            margin: 0 auto;
            padding: 2rem;
        }

        h1 {
            text-align: center;
            font-weight: 600;
        }
        "#
    }

    fn generate_javascript(data_json: &str, kind: ChartKind) -> String {
        format!(
            r#"
        const ctx = document.getElementById('chart').getContext('2d');
        new Chart(ctx, {{
            type: 'scatter',
            data: {{
                datasets: [{{
                    label: 'Value',
                    data: {data},
                    showLine: {show_line},
                    borderColor: '{color}',
                    backgroundColor: '{color}'
                }}]
            }},
            options: {{
                responsive: true,
                scales: {{
                    x: {{ title: {{ display: true, text: 'Index' }} }},
                    y: {{ title: {{ display: true, text: 'Value' }} }}
                }}
            }}
        }});
        "#,
            data = data_json,
            show_line = kind.show_line(),
            color = chart_constants::SERIES_COLOR,
        )
    }
}

/// Render the configured number series as an interactive chart file.
///
/// Validates the inputs, writes `interactive_chart.html` into the
/// working directory, and logs the outcome. Success is observable only
/// via the written file and the log.
pub fn interactive_visualization(numbers: &[f64], chart_type: &str) -> Result<()> {
    if numbers.is_empty() {
        log::error!("No data provided to visualize.");
        return Err(DataSenseError::Validation(
            "The list of numbers is empty.".to_string(),
        ));
    }

    let kind = ChartKind::parse(chart_type).inspect_err(|_| {
        log::error!("Unsupported chart type {chart_type}");
    })?;

    InteractiveChart::write(numbers, kind)?;
    log::info!(
        "Interactive chart saved as '{}'.",
        paths::CHART_OUTPUT_FILE
    );

    Ok(())
}
