// Command-line interface definitions and parsing for datasense

use clap::{Parser, Subcommand};
use clap_complete::{Generator, generate};

use crate::config::CliOverrides;
use crate::core::constants::paths;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // Configuration
    /// Path to the YAML configuration file
    #[arg(
        short = 'c',
        long,
        value_name = "FILE",
        default_value = paths::DEFAULT_CONFIG_FILE,
        help_heading = "Configuration"
    )]
    pub config: String,

    /// Override the configured log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", help_heading = "Configuration")]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Extract configuration overrides from the parsed CLI arguments
pub fn cli_to_overrides(cli: &Cli) -> CliOverrides {
    CliOverrides {
        log_level: cli.log_level.clone(),
    }
}

/// Generate shell completions for the given shell
pub fn print_completions<G: Generator>(generator: G, app: &mut clap::Command) {
    generate(
        generator,
        app,
        app.get_name().to_string(),
        &mut std::io::stdout(),
    );
}
