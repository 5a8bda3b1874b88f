//! `cukegen` binary: infer step expressions from example sentences.
//!
//! Sentences are taken from the command line or, when none are given, from
//! standard input, one per line. Expressions are written to stdout; logs go
//! to stderr.

use std::io;

use clap::Parser;
use tracing::info;

use cukegen_cli::app::{OutputFormat, RunOptions, run};
use cukegen_cli::config::{CliConfig, LogLevel};
use cukegen_cli::definition::ParameterTypeDefinition;
use cukegen_cli::error::CliError;
use cukegen_cli::logging::init_logging;

/// Infer Cucumber-style step expressions from example sentences.
#[derive(Parser, Debug)]
#[command(name = "cukegen", version, about)]
struct Args {
    /// Sentences to generate expressions for (defaults to stdin lines).
    #[arg(value_name = "SENTENCE")]
    sentences: Vec<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<LogLevel>,

    /// Annotate placeholders with parameter type names.
    #[arg(long, conflicts_with = "untyped")]
    typed: bool,

    /// Emit bare `{argN}` placeholders.
    #[arg(long)]
    untyped: bool,

    /// Decimal separator for the built-in numeric types.
    #[arg(long, value_name = "CHAR")]
    decimal_separator: Option<char>,

    /// Grouping separator for the built-in numeric types.
    #[arg(long, value_name = "CHAR")]
    grouping_separator: Option<char>,

    /// Additional parameter type, repeatable.
    #[arg(long = "parameter-type", value_name = "NAME=REGEX")]
    parameter_types: Vec<ParameterTypeDefinition>,

    /// Print one JSON object per sentence.
    #[arg(long)]
    json: bool,
}

impl Args {
    fn typed_override(&self) -> Option<bool> {
        match (self.typed, self.untyped) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        }
    }
}

fn main() {
    let args = Args::parse();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&CliConfig::default());
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };
    init_logging(&config);

    info!(version = env!("CARGO_PKG_VERSION"), "starting cukegen");

    let options = RunOptions {
        sentences: args.sentences,
        parameter_types: args.parameter_types,
        format: if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Plain
        },
    };

    let stdin = io::stdin();
    match run(&config, &options, stdin.lock(), io::stdout().lock()) {
        Ok(processed) => info!(processed, "done"),
        Err(e) => {
            tracing::error!(error = %e, "generation failed");
            std::process::exit(if e.is_configuration() { 2 } else { 1 });
        }
    }
}

fn build_config(args: &Args) -> Result<CliConfig, CliError> {
    CliConfig::from_env()?.apply_overrides(
        args.log_level,
        args.typed_override(),
        args.decimal_separator,
        args.grouping_separator,
    )
}
