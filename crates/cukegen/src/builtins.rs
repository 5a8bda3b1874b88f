//! Built-in parameter types and the locale data that shapes them.

use std::str::FromStr;

use regex::escape;
use tracing::warn;

use crate::errors::TransformError;
use crate::parameter_type::{ParameterType, ParameterTypeBuilder};

/// Separators used when recognising and converting decimal numbers.
///
/// # Examples
/// ```
/// use cukegen::NumberLocale;
/// let german = NumberLocale::from_separators(',', '.');
/// assert_eq!(german.decimal_separator(), ',');
/// assert_eq!(NumberLocale::default(), NumberLocale::english());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    decimal_separator: char,
    grouping_separator: char,
}

impl NumberLocale {
    /// `.` for decimals, `,` for thousands.
    #[must_use]
    pub const fn english() -> Self {
        Self::from_separators('.', ',')
    }

    /// Build a locale from explicit separators.
    #[must_use]
    pub const fn from_separators(decimal_separator: char, grouping_separator: char) -> Self {
        Self {
            decimal_separator,
            grouping_separator,
        }
    }

    /// The decimal separator.
    #[must_use]
    pub const fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// The thousands grouping separator.
    #[must_use]
    pub const fn grouping_separator(&self) -> char {
        self.grouping_separator
    }

    /// Rewrite a localised number into the form Rust's parsers accept.
    fn normalise(&self, text: &str) -> String {
        text.chars()
            .filter(|&c| c != self.grouping_separator)
            .map(|c| if c == self.decimal_separator { '.' } else { c })
            .collect()
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::english()
    }
}

const INTEGER_PATTERNS: [&str; 2] = [r"-?\d+", r"\d+"];
const WORD_PATTERN: &str = r"[^\s]+";
const STRING_PATTERNS: [&str; 2] = [r#""([^"\\]*(\\.[^"\\]*)*)""#, r"'([^'\\]*(\\.[^'\\]*)*)'"];
const ANONYMOUS_PATTERN: &str = ".*";

/// Build the framework-provided parameter types for `locale`.
///
/// The table is `int`, `float`, `double`, `word`, `string` and the anonymous
/// type, in that order. Any type that fails to build is skipped with a
/// warning; the patterns are fixed, so this only happens for separators the
/// regex engine cannot express.
#[must_use]
pub fn builtin_parameter_types(locale: &NumberLocale) -> Vec<ParameterType> {
    let decimal = escape(&locale.decimal_separator.to_string());
    let declarations = [
        numeric::<i64>(*locale, "int")
            .patterns(INTEGER_PATTERNS)
            .prefer_for_regexp_match(true),
        numeric::<f32>(*locale, "float").pattern(format!(r"-?\d*{decimal}\d+")),
        numeric::<f64>(*locale, "double").pattern(format!(r"-?\d*{decimal}?\d+")),
        ParameterType::builder()
            .name("word")
            .pattern(WORD_PATTERN)
            .value_type::<String>()
            .use_for_snippets(false),
        ParameterType::builder()
            .name("string")
            .patterns(STRING_PATTERNS)
            .transform(|groups: &[String]| Ok(unescape_quoted(groups))),
        ParameterType::builder()
            .pattern(ANONYMOUS_PATTERN)
            .value_type::<String>()
            .use_for_snippets(false)
            .prefer_for_regexp_match(true),
    ];

    declarations
        .into_iter()
        .filter_map(|builder| match builder.builtin(true).build() {
            Ok(parameter_type) => Some(parameter_type),
            Err(err) => {
                warn!(error = %err, "skipping built-in parameter type");
                None
            }
        })
        .collect()
}

fn numeric<T>(locale: NumberLocale, name: &str) -> ParameterTypeBuilder
where
    T: FromStr + Send + Sync + 'static,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    ParameterType::builder()
        .name(name)
        .transform(move |groups: &[String]| {
            let text = first_group(groups)?;
            locale
                .normalise(text)
                .parse::<T>()
                .map_err(|err| TransformError::failed(text, err))
        })
}

fn first_group(groups: &[String]) -> Result<&str, TransformError> {
    groups
        .first()
        .map(String::as_str)
        .ok_or(TransformError::Arity {
            expected: 1,
            actual: 0,
        })
}

/// Pick the participating quoted body and drop escaping backslashes.
///
/// The double- and single-quoted patterns each capture the body in their first
/// group; whichever pattern matched supplies it.
fn unescape_quoted(groups: &[String]) -> String {
    let body = groups.first().map_or("", String::as_str);
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
                continue;
            }
        }
        out.push(c);
    }
    out
}
