//! User-defined parameter types given on the command line.

use std::str::FromStr;

use cukegen::{ParameterType, ParameterTypeRegistry};

use crate::error::CliError;

/// A `NAME=REGEX` parameter type definition.
///
/// Only the first `=` separates the name from the pattern, so patterns may
/// contain `=` themselves.
///
/// # Examples
/// ```
/// use cukegen_cli::definition::ParameterTypeDefinition;
/// let definition: ParameterTypeDefinition = "currency=[A-Z]{3}".parse()
///     .expect("definition parses");
/// assert_eq!(definition.name, "currency");
/// assert_eq!(definition.pattern, "[A-Z]{3}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterTypeDefinition {
    /// The parameter type name.
    pub name: String,
    /// The regular-expression source.
    pub pattern: String,
}

impl FromStr for ParameterTypeDefinition {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((name, pattern)) if !name.trim().is_empty() && !pattern.is_empty() => Ok(Self {
                name: name.trim().to_string(),
                pattern: pattern.to_string(),
            }),
            _ => Err(CliError::InvalidParameterType(s.to_string())),
        }
    }
}

impl ParameterTypeDefinition {
    /// Build the parameter type described by this definition.
    ///
    /// # Errors
    /// Returns [`CliError::ParameterType`] when the name or pattern is
    /// rejected.
    pub fn build(&self) -> Result<ParameterType, CliError> {
        Ok(ParameterType::builder()
            .name(self.name.as_str())
            .pattern(self.pattern.as_str())
            .build()?)
    }
}

/// Register every definition in order, stopping at the first failure.
///
/// # Errors
/// Returns the first construction or registration failure.
pub fn register_all(
    registry: &mut ParameterTypeRegistry,
    definitions: &[ParameterTypeDefinition],
) -> Result<(), CliError> {
    for definition in definitions {
        registry.register(definition.build()?)?;
    }
    Ok(())
}
