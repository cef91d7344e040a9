use clap::{CommandFactory, Parser};

use datasense::analysis::{advanced_text_analysis, interactive_visualization};
use datasense::config::{AppConfig, Operation};
use datasense::logging::{self, LogSettings};
use datasense::ui::output;
use datasense::ui::{Cli, Commands, cli_to_overrides, print_completions};

fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    // Initializing: a missing or unparseable configuration file is
    // fatal, before logging is even configured
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Running -> Terminated: analysis failures are handled conditions,
    // so the process exits 0 once the logger is in place
    match run(&config) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle completion commands and return exit code if a completion command was processed
pub fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::CompletionGenerate { shell }) => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        None => None,
    }
}

/// Load the configuration file and merge CLI overrides into it
pub fn load_config(cli: &Cli) -> datasense::Result<AppConfig> {
    let mut config = AppConfig::load_from_file(&cli.config)?;
    config.merge_with_cli(&cli_to_overrides(cli));
    Ok(config)
}

/// Guard logging the completion record on every exit path out of the
/// running phase, including handled analysis failures
struct CompletionGuard;

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        log::info!("Application finished");
    }
}

/// The running phase: configure the logger, then dispatch the
/// configured operation. Only a logger setup failure is an error here;
/// everything the analysis functions raise is caught and reported.
pub fn run(config: &AppConfig) -> datasense::Result<()> {
    logging::configure(&LogSettings::with_level(config.log_level()))?;

    log::info!("Application started");
    let _completion = CompletionGuard;

    dispatch(config);
    Ok(())
}

/// Dispatch the configured operation and handle its outcome
fn dispatch(config: &AppConfig) {
    match config.operation() {
        Operation::InteractiveVisualization => {
            match interactive_visualization(&config.numbers(), &config.chart_type()) {
                Ok(()) => output::print_chart_success(),
                Err(e) => report_execution_error(&e),
            }
        }
        Operation::AdvancedTextAnalysis => match advanced_text_analysis(&config.text()) {
            Ok(analysis) => output::print_analysis_results(&analysis),
            Err(e) => report_execution_error(&e),
        },
        Operation::Unrecognized(name) => {
            log::error!("Unsupported operation: {name}");
            output::print_unsupported_operation(&name);
        }
    }
}

/// Log a caught analysis error with its source chain, then surface it
/// to the user as a one-line message
fn report_execution_error(error: &datasense::DataSenseError) {
    logging::log_error("An error occurred during execution", Some(error));
    output::print_execution_error(error);
}
