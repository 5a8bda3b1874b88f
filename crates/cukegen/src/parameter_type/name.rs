//! Legality rules for parameter type names.

use crate::errors::ParameterTypeError;

/// Characters that may appear in a name when preceded by a backslash.
const ESCAPABLE: &[char] = &['[', ']', '$', '.', '|', '?', '*', '+'];

/// Characters rejected wherever they are not escaped.
const ILLEGAL: &[char] = &[
    '{', '}', '(', ')', '\\', '/', '[', ']', '$', '.', '|', '?', '*', '+',
];

/// Validate a parameter type name.
///
/// A backslash followed by one of `[ ] $ . | ? * +` is an escaped literal and
/// is skipped. Every other occurrence of `{ } ( ) \ /` or of a regex
/// metacharacter is rejected, reporting the first offending character.
pub(crate) fn check_parameter_type_name(name: &str) -> Result<(), ParameterTypeError> {
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' && chars.next_if(|next| ESCAPABLE.contains(next)).is_some() {
            continue;
        }
        if ILLEGAL.contains(&c) {
            return Err(ParameterTypeError::IllegalName {
                name: name.to_string(),
                character: c,
            });
        }
    }
    Ok(())
}
