//! Generator configuration parsed from environment variables.
//!
//! Every setting can be overridden via environment variables prefixed with
//! `CUKEGEN_`; command-line flags are applied on top through
//! [`CliConfig::apply_overrides`].

use std::env;
use std::str::FromStr;

use cukegen::NumberLocale;

use crate::error::CliError;

/// Log level enumeration matching tracing crate levels.
///
/// Defaults to `Warn` when not specified so that generated expressions are
/// not drowned in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Most verbose logging, includes every selected candidate.
    Trace,
    /// Debug-level information such as per-sentence summaries.
    Debug,
    /// Standard informational messages.
    Info,
    /// Warning messages for potentially problematic situations.
    #[default]
    Warn,
    /// Error messages for failures.
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

const LOG_LEVEL_VAR: &str = "CUKEGEN_LOG_LEVEL";
const TYPED_VAR: &str = "CUKEGEN_TYPED";
const DECIMAL_SEPARATOR_VAR: &str = "CUKEGEN_DECIMAL_SEPARATOR";
const GROUPING_SEPARATOR_VAR: &str = "CUKEGEN_GROUPING_SEPARATOR";

/// Configuration for the generator front end.
///
/// # Environment Variables
///
/// - `CUKEGEN_LOG_LEVEL`: log level (trace, debug, info, warn, error)
/// - `CUKEGEN_TYPED`: annotate placeholders with type names (true/false)
/// - `CUKEGEN_DECIMAL_SEPARATOR`: single character, default `.`
/// - `CUKEGEN_GROUPING_SEPARATOR`: single character, default `,`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: LogLevel,
    /// Whether placeholders carry parameter type names.
    pub typed: bool,
    /// Number separators used by the built-in numeric types.
    pub locale: NumberLocale,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            typed: true,
            locale: NumberLocale::english(),
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Falls back to defaults for missing values.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if an environment variable contains
    /// an invalid value.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a variable contains an invalid
    /// value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(val) => val.parse()?,
            None => defaults.log_level,
        };

        let typed = match lookup(TYPED_VAR) {
            Some(val) => parse_bool(TYPED_VAR, &val)?,
            None => defaults.typed,
        };

        let decimal = match lookup(DECIMAL_SEPARATOR_VAR) {
            Some(val) => parse_separator(DECIMAL_SEPARATOR_VAR, &val)?,
            None => defaults.locale.decimal_separator(),
        };

        let grouping = match lookup(GROUPING_SEPARATOR_VAR) {
            Some(val) => parse_separator(GROUPING_SEPARATOR_VAR, &val)?,
            None => defaults.locale.grouping_separator(),
        };

        Self {
            log_level,
            typed,
            locale: defaults.locale,
        }
        .with_separators(decimal, grouping)
    }

    /// Apply optional overrides to an existing configuration.
    ///
    /// This is intended for CLI overrides that should take precedence over
    /// environment-based defaults.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` when the resulting separators clash.
    pub fn apply_overrides(
        mut self,
        log_level: Option<LogLevel>,
        typed: Option<bool>,
        decimal_separator: Option<char>,
        grouping_separator: Option<char>,
    ) -> Result<Self, CliError> {
        if let Some(level) = log_level {
            self.log_level = level;
        }

        if let Some(typed) = typed {
            self.typed = typed;
        }

        let locale = self.locale;
        let decimal = decimal_separator.unwrap_or_else(|| locale.decimal_separator());
        let grouping = grouping_separator.unwrap_or_else(|| locale.grouping_separator());
        self.with_separators(decimal, grouping)
    }

    /// Create a new configuration with the specified log level.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    fn with_separators(mut self, decimal: char, grouping: char) -> Result<Self, CliError> {
        if decimal == grouping {
            return Err(CliError::InvalidConfig(format!(
                "decimal and grouping separators must differ, both are '{decimal}'"
            )));
        }
        self.locale = NumberLocale::from_separators(decimal, grouping);
        Ok(self)
    }
}

fn parse_bool(var: &str, val: &str) -> Result<bool, CliError> {
    match val.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(CliError::InvalidConfig(format!(
            "invalid {var} value '{val}', expected true or false"
        ))),
    }
}

fn parse_separator(var: &str, val: &str) -> Result<char, CliError> {
    let mut chars = val.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_ascii_digit() && !c.is_whitespace() => Ok(c),
        _ => Err(CliError::InvalidConfig(format!(
            "invalid {var} value '{val}', expected a single non-digit character"
        ))),
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[rstest]
    #[case("trace", LogLevel::Trace)]
    #[case("debug", LogLevel::Debug)]
    #[case("info", LogLevel::Info)]
    #[case("warn", LogLevel::Warn)]
    #[case("warning", LogLevel::Warn)]
    #[case("ERROR", LogLevel::Error)]
    fn log_level_parses_valid_values(#[case] input: &str, #[case] expected: LogLevel) {
        assert_eq!(input.parse::<LogLevel>().ok(), Some(expected));
    }

    #[test]
    fn log_level_rejects_invalid_values() {
        let result = "invalid".parse::<LogLevel>();
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("unknown log level"));
    }

    #[test]
    fn defaults_apply_without_variables() {
        let config = CliConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(config.typed);
    }

    #[test]
    fn reads_every_variable() {
        let config = CliConfig::from_lookup(lookup(&[
            ("CUKEGEN_LOG_LEVEL", "debug"),
            ("CUKEGEN_TYPED", "false"),
            ("CUKEGEN_DECIMAL_SEPARATOR", ","),
            ("CUKEGEN_GROUPING_SEPARATOR", "."),
        ]))
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(!config.typed);
        assert_eq!(config.locale, NumberLocale::from_separators(',', '.'));
    }

    #[rstest]
    #[case("CUKEGEN_TYPED", "maybe")]
    #[case("CUKEGEN_DECIMAL_SEPARATOR", "")]
    #[case("CUKEGEN_DECIMAL_SEPARATOR", "::")]
    #[case("CUKEGEN_GROUPING_SEPARATOR", "5")]
    #[case("CUKEGEN_GROUPING_SEPARATOR", ".")]
    fn rejects_invalid_variables(#[case] var: &str, #[case] val: &str) {
        let err = CliConfig::from_lookup(lookup(&[(var, val)])).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn apply_overrides_updates_selected_fields() {
        let config = CliConfig::default()
            .apply_overrides(Some(LogLevel::Error), Some(false), Some(','), Some(' '))
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Error);
        assert!(!config.typed);
        assert_eq!(config.locale, NumberLocale::from_separators(',', ' '));

        let config = CliConfig::default()
            .apply_overrides(None, None, None, None)
            .unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn apply_overrides_rejects_clashing_separators() {
        let result = CliConfig::default().apply_overrides(None, None, Some(','), None);
        assert!(result.is_err());
    }

    #[test]
    fn with_log_level_builder() {
        let config = CliConfig::default().with_log_level(LogLevel::Trace);
        assert_eq!(config.log_level, LogLevel::Trace);
    }
}
