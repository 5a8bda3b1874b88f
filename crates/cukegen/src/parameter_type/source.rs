//! Regular-expression sources accepted by parameter types.

use std::fmt;

use regex::Regex;

use crate::errors::ParameterTypeError;

/// A regular-expression source together with the flags it was written with.
///
/// Parameter types reject every flag: flag semantics would make the same
/// pattern match differently depending on how it was declared. Sources are
/// built from pattern text rather than a compiled [`Regex`], because flags set
/// through `RegexBuilder` cannot be read back from the compiled value. A bare
/// inline flag group such as `(?i)` counts as a flag wherever it appears
/// outside a character class.
///
/// # Examples
/// ```
/// use cukegen::RegexSource;
/// let plain = RegexSource::from(r"\d+");
/// assert_eq!(plain.source(), r"\d+");
/// assert!(plain.flags().is_empty());
///
/// let flagged = RegexSource::with_flags("[a-z]+", "gi");
/// assert_eq!(flagged.flags(), "gi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegexSource {
    source: String,
    flags: String,
}

impl RegexSource {
    /// Create a flag-free source.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self::with_flags(source, String::new())
    }

    /// Create a source declared with the given flags.
    #[must_use]
    pub fn with_flags(source: impl Into<String>, flags: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            flags: flags.into(),
        }
    }

    /// The pattern text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The declared flags, empty for well-formed parameter type patterns.
    #[must_use]
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Return the first flag carried by this source, declared or inline.
    #[must_use]
    pub fn first_flag(&self) -> Option<char> {
        self.flags
            .chars()
            .next()
            .or_else(|| inline_flag(&self.source))
    }

    /// Reject flags, then compile the source both for searching and for
    /// whole-text matching.
    pub(crate) fn compile(&self) -> Result<(Regex, Regex), ParameterTypeError> {
        if let Some(flag) = self.first_flag() {
            return Err(ParameterTypeError::Flag {
                regexp: self.source.clone(),
                flag,
            });
        }
        let search = Regex::new(&self.source)?;
        let anchored = Regex::new(&format!("^(?:{})$", self.source))?;
        Ok((search, anchored))
    }
}

/// Find the first flag of a bare inline flag group anywhere in `source`.
///
/// A bare group such as `(?i)` or `(?i-m)` switches flags for the rest of the
/// pattern and counts. Scoped groups like `(?i:...)`, named groups like
/// `(?P<n>...)`, escaped parentheses and parentheses inside a character class
/// do not.
fn inline_flag(source: &str) -> Option<char> {
    let mut chars = source.chars().peekable();
    let mut class_depth = 0usize;
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '[' => {
                class_depth += 1;
                chars.next_if_eq(&'^');
                chars.next_if_eq(&']');
            }
            ']' if class_depth > 0 => class_depth -= 1,
            '(' if class_depth == 0 && chars.next_if_eq(&'?').is_some() => {
                let mut group = String::new();
                while let Some(f) = chars.next_if(|f| f.is_ascii_alphabetic() || *f == '-') {
                    group.push(f);
                }
                let flag = group.chars().find(char::is_ascii_alphabetic);
                if flag.is_some() && chars.peek() == Some(&')') {
                    return flag;
                }
            }
            _ => {}
        }
    }
    None
}

impl fmt::Display for RegexSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

impl From<&str> for RegexSource {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for RegexSource {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r"\d+", None)]
    #[case("(?i)abc", Some('i'))]
    #[case("(?-m)abc", Some('m'))]
    #[case("(?i:abc)", None)]
    #[case("(?P<n>abc)", None)]
    #[case("(?:abc)", None)]
    #[case("(?", None)]
    #[case("a(?i)b", Some('i'))]
    #[case("(?:x)|y(?s)z", Some('s'))]
    #[case("(a)(?x) b", Some('x'))]
    #[case(r"a\(?i)b", None)]
    #[case("a[(?i)]b", None)]
    #[case("[^]](?m)", Some('m'))]
    #[case("[[:alpha:]](?i:x)", None)]
    fn detects_inline_flags(#[case] source: &str, #[case] expected: Option<char>) {
        assert_eq!(RegexSource::from(source).first_flag(), expected);
    }

    #[test]
    fn declared_flags_win_over_inline_flags() {
        let source = RegexSource::with_flags("(?m)abc", "g");
        assert_eq!(source.first_flag(), Some('g'));
    }

    #[rstest]
    #[case("g")]
    #[case("i")]
    #[case("m")]
    #[case("y")]
    fn compile_rejects_each_flag(#[case] flags: &str) {
        let source = RegexSource::with_flags("abc", flags);
        match source.compile() {
            Err(ParameterTypeError::Flag { regexp, flag }) => {
                assert_eq!(regexp, "abc");
                assert_eq!(Some(flag), flags.chars().next());
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("flagged source should be rejected"),
        }
    }

    #[test]
    fn compile_produces_search_and_anchored_forms() {
        let (search, anchored) = match RegexSource::from("a|bc").compile() {
            Ok(pair) => pair,
            Err(err) => panic!("source should compile: {err}"),
        };
        assert!(search.is_match("xxbcxx"));
        assert!(anchored.is_match("bc"));
        assert!(!anchored.is_match("abc"));
    }

    #[test]
    fn compile_surfaces_syntax_errors() {
        assert!(matches!(
            RegexSource::from("(unclosed").compile(),
            Err(ParameterTypeError::Regex(_))
        ));
    }
}
