//! Regex capture helpers used to feed parameter type transforms.

use regex::Regex;

/// Extract the capture groups when `text` matches `re`, returning `None` otherwise.
///
/// Explicit capture groups are returned in order, with groups that do not
/// participate in the match yielding empty strings to keep positional
/// alignment. A pattern without explicit groups contributes its whole match as
/// the single value, so every matching pattern produces at least one value.
///
/// # Examples
/// ```
/// # use regex::Regex;
/// # use cukegen::extract_captured_values;
/// let regex = Regex::new(r"^(\d+)-(\w+)$")
///     .expect("example ensures fallible call succeeds");
/// let values = extract_captured_values(&regex, "42-answer")
///     .expect("example ensures fallible call succeeds");
/// assert_eq!(values, vec!["42".to_string(), "answer".to_string()]);
///
/// let bare = Regex::new(r"\d+").expect("example ensures fallible call succeeds");
/// let values = extract_captured_values(&bare, "abc 17")
///     .expect("example ensures fallible call succeeds");
/// assert_eq!(values, vec!["17".to_string()]);
/// ```
#[must_use]
pub fn extract_captured_values(re: &Regex, text: &str) -> Option<Vec<String>> {
    let caps = re.captures(text)?;
    if caps.len() == 1 {
        return Some(vec![caps.get(0)?.as_str().to_string()]);
    }
    let mut values = Vec::with_capacity(caps.len().saturating_sub(1));
    for capture in caps.iter().skip(1) {
        let value = capture.map_or_else(String::new, |m| m.as_str().to_string());
        values.push(value);
    }

    Some(values)
}
