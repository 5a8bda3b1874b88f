//! Error types shared by the parameter type, registry and transform modules.

use std::error::Error as StdError;
use thiserror::Error;

/// Errors surfaced while constructing a [`ParameterType`](crate::ParameterType).
///
/// # Examples
/// ```
/// use cukegen::{ParameterType, ParameterTypeError};
/// let Err(err) = ParameterType::builder().name("a{b").pattern("x").build() else {
///     panic!("illegal name should be rejected");
/// };
/// assert!(matches!(err, ParameterTypeError::IllegalName { character: '{', .. }));
/// ```
#[derive(Debug, Error)]
pub enum ParameterTypeError {
    /// The name contains a character reserved by expression syntax.
    #[error("illegal character '{character}' in parameter type name {name:?}")]
    IllegalName {
        /// The rejected name.
        name: String,
        /// The first offending character.
        character: char,
    },
    /// A regular expression carries a flag.
    #[error("parameter type regexp /{regexp}/ carries flag '{flag}'; flags are not allowed")]
    Flag {
        /// Source of the offending regular expression.
        regexp: String,
        /// The first offending flag.
        flag: char,
    },
    /// No pattern was supplied.
    #[error("parameter type {} has no patterns", display_name(.name.as_deref()))]
    NoPatterns {
        /// Name of the parameter type, if any.
        name: Option<String>,
    },
    /// A pattern failed to compile.
    #[error(transparent)]
    Regex(#[from] regex::Error),
}

/// Errors raised by [`ParameterTypeRegistry`](crate::ParameterTypeRegistry).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A parameter type with the same name is already registered.
    #[error("there is already a parameter type with name {0:?}")]
    NameCollision(String),
}

/// Failure raised by a parameter type's value-construction function.
///
/// The generator never calls transforms; these errors only reach callers of
/// [`ParameterType::transform`](crate::ParameterType::transform) and
/// [`ParameterType::parse`](crate::ParameterType::parse).
#[derive(Debug, Error)]
pub enum TransformError {
    /// The transform rejected the captured values.
    #[error("cannot convert {input:?}: {source}")]
    Failed {
        /// The captured text that failed to convert.
        input: String,
        /// The underlying failure.
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
    /// The transform expected more capture groups than were supplied.
    #[error("expected {expected} captured value(s), got {actual}")]
    Arity {
        /// Number of captures the transform needs.
        expected: usize,
        /// Number of captures supplied.
        actual: usize,
    },
}

impl TransformError {
    /// Wrap an arbitrary error raised while converting `input`.
    ///
    /// # Examples
    /// ```
    /// use cukegen::TransformError;
    /// let err = "x".parse::<i64>().map_err(|e| TransformError::failed("x", e));
    /// assert!(err.is_err());
    /// ```
    pub fn failed(
        input: impl Into<String>,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        Self::Failed {
            input: input.into(),
            source: source.into(),
        }
    }
}

fn display_name(name: Option<&str>) -> String {
    name.map_or_else(|| "<anonymous>".to_string(), |n| format!("{n:?}"))
}
