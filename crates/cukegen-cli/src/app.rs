//! Sentence processing shared by the binary and the tests.

use std::io::{BufRead, Write};

use cukegen::{ExpressionGenerator, GeneratedExpression, ParameterTypeRegistry};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::definition::{ParameterTypeDefinition, register_all};
use crate::error::CliError;

/// Output format for generated expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One expression per line.
    #[default]
    Plain,
    /// One JSON object per line.
    Json,
}

/// What to generate expressions for.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Sentences given on the command line; standard input is read when empty.
    pub sentences: Vec<String>,
    /// User-defined parameter types registered after the built-ins.
    pub parameter_types: Vec<ParameterTypeDefinition>,
    /// How to print each result.
    pub format: OutputFormat,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonRecord<'a> {
    text: &'a str,
    expression: String,
    parameter_types: Vec<Option<&'a str>>,
}

/// Build the registry: built-ins for the configured locale, then user types.
///
/// # Errors
/// Returns the first rejected or colliding user-defined parameter type.
pub fn build_registry(
    config: &CliConfig,
    definitions: &[ParameterTypeDefinition],
) -> Result<ParameterTypeRegistry, CliError> {
    let mut registry = ParameterTypeRegistry::with_builtins(&config.locale);
    register_all(&mut registry, definitions)?;
    info!(parameter_types = registry.len(), "registry ready");
    Ok(registry)
}

/// Generate and print an expression for every sentence.
///
/// Sentences come from `options.sentences` or, when none were given, from
/// the non-blank lines of `input`. Returns the number of sentences processed.
///
/// # Errors
/// Returns registry construction failures, I/O failures and JSON
/// serialisation failures.
pub fn run<R, W>(
    config: &CliConfig,
    options: &RunOptions,
    input: R,
    mut output: W,
) -> Result<usize, CliError>
where
    R: BufRead,
    W: Write,
{
    let registry = build_registry(config, &options.parameter_types)?;
    let generator = ExpressionGenerator::new(&registry);
    let mut processed = 0usize;

    let mut emit = |sentence: &str| -> Result<(), CliError> {
        let generated = generator.generate(sentence);
        debug!(sentence, parameters = generated.parameter_count(), "processed sentence");
        write_result(&mut output, config, options.format, sentence, &generated)?;
        processed += 1;
        Ok(())
    };

    if options.sentences.is_empty() {
        for line in input.lines() {
            let line = line?;
            let sentence = line.trim_end_matches('\r');
            if sentence.trim().is_empty() {
                continue;
            }
            emit(sentence)?;
        }
    } else {
        for sentence in &options.sentences {
            emit(sentence)?;
        }
    }

    output.flush()?;
    Ok(processed)
}

fn write_result<W: Write>(
    output: &mut W,
    config: &CliConfig,
    format: OutputFormat,
    sentence: &str,
    generated: &GeneratedExpression<'_>,
) -> Result<(), CliError> {
    let expression = generated.render(config.typed);
    match format {
        OutputFormat::Plain => writeln!(output, "{expression}")?,
        OutputFormat::Json => {
            let record = JsonRecord {
                text: sentence,
                expression,
                parameter_types: generated
                    .parameter_types()
                    .iter()
                    .map(|ty| ty.name())
                    .collect(),
            };
            serde_json::to_writer(&mut *output, &record)?;
            writeln!(output)?;
        }
    }
    Ok(())
}
