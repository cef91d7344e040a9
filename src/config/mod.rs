//! Configuration management
//!
//! This module handles loading and managing configuration from
//! YAML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::constants::{chart_types, defaults, operations};
use crate::core::error::{DataSenseError, Result};

/// Top-level application configuration, loaded once per run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Runtime settings (logging)
    #[serde(default)]
    pub settings: Settings,

    /// Data parameters for the dispatched operation
    #[serde(default)]
    pub data: DataSection,
}

/// Runtime settings section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Minimum severity level name (case-insensitive)
    pub log_level: Option<String>,
}

/// Data parameters section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSection {
    /// Ordered numeric series to visualize
    pub numbers: Option<Vec<f64>>,

    /// Text to analyze
    pub text: Option<String>,

    /// Operation to dispatch to
    pub operation: Option<String>,

    /// Chart type for visualization (scatter, line)
    pub chart_type: Option<String>,
}

/// CLI argument overrides merged into the loaded configuration
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Log level override from `--log-level`
    pub log_level: Option<String>,
}

/// Closed enumeration of dispatchable operations.
///
/// Unrecognized names are carried through for error reporting rather
/// than rejected at parse time, since an unsupported operation is a
/// handled condition and not a configuration failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    InteractiveVisualization,
    AdvancedTextAnalysis,
    Unrecognized(String),
}

impl Operation {
    /// Parse an operation name from the configuration
    pub fn parse(name: &str) -> Self {
        match name {
            operations::INTERACTIVE_VISUALIZATION => Operation::InteractiveVisualization,
            operations::ADVANCED_TEXT_ANALYSIS => Operation::AdvancedTextAnalysis,
            other => Operation::Unrecognized(other.to_string()),
        }
    }

    /// The operation name as it appears in configuration files
    pub fn name(&self) -> &str {
        match self {
            Operation::InteractiveVisualization => operations::INTERACTIVE_VISUALIZATION,
            Operation::AdvancedTextAnalysis => operations::ADVANCED_TEXT_ANALYSIS,
            Operation::Unrecognized(name) => name,
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(DataSenseError::FileNotFound(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            DataSenseError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: AppConfig = serde_yaml::from_str(&content).map_err(|e| {
            DataSenseError::Config(format!(
                "Invalid YAML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(config)
    }

    /// Merge CLI arguments with this configuration (CLI takes precedence)
    pub fn merge_with_cli(&mut self, overrides: &CliOverrides) {
        if let Some(ref log_level) = overrides.log_level {
            self.settings.log_level = Some(log_level.clone());
        }
    }

    /// Configured log level, falling back to info for absent or
    /// unrecognized level names
    pub fn log_level(&self) -> log::LevelFilter {
        let name = self
            .settings
            .log_level
            .as_deref()
            .unwrap_or(defaults::LOG_LEVEL);

        match name.to_ascii_lowercase().as_str() {
            "error" => log::LevelFilter::Error,
            "warn" | "warning" => log::LevelFilter::Warn,
            "info" => log::LevelFilter::Info,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            _ => log::LevelFilter::Info,
        }
    }

    /// Configured number series, defaulting to an empty sequence
    pub fn numbers(&self) -> Vec<f64> {
        self.data.numbers.clone().unwrap_or_default()
    }

    /// Configured analysis text, defaulting to a single space
    pub fn text(&self) -> String {
        self.data
            .text
            .clone()
            .unwrap_or_else(|| defaults::TEXT.to_string())
    }

    /// Configured operation, defaulting to interactive visualization
    pub fn operation(&self) -> Operation {
        Operation::parse(self.data.operation.as_deref().unwrap_or(operations::DEFAULT))
    }

    /// Configured chart type, defaulting to scatter
    pub fn chart_type(&self) -> String {
        self.data
            .chart_type
            .clone()
            .unwrap_or_else(|| chart_types::DEFAULT.to_string())
    }
}
