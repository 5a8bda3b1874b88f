//! Builder validating and compiling parameter type declarations.

use std::any::Any;
use std::sync::Arc;

use crate::errors::{ParameterTypeError, TransformError};

use super::name::check_parameter_type_name;
use super::{ParameterType, ParameterValue, RegexSource, TransformFn, ValueType};

/// Collects the parts of a [`ParameterType`] before validation.
///
/// Nothing is checked until [`ParameterTypeBuilder::build`], which validates
/// the name, rejects flagged regexes and compiles every pattern.
#[derive(Default)]
#[must_use]
pub struct ParameterTypeBuilder {
    name: Option<String>,
    sources: Vec<RegexSource>,
    value_type: Option<ValueType>,
    transform: Option<Arc<TransformFn>>,
    use_for_snippets: Option<bool>,
    prefer_for_regexp_match: bool,
    builtin: bool,
}

impl ParameterTypeBuilder {
    /// Name the parameter type.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append one pattern.
    pub fn pattern(mut self, source: impl Into<RegexSource>) -> Self {
        self.sources.push(source.into());
        self
    }

    /// Append several patterns, keeping their order.
    pub fn patterns<I>(mut self, sources: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<RegexSource>,
    {
        self.sources.extend(sources.into_iter().map(Into::into));
        self
    }

    /// Record the logical result type without attaching a transform.
    pub fn value_type<T: Any>(mut self) -> Self {
        self.value_type = Some(ValueType::of::<T>());
        self
    }

    /// Attach a value-construction function.
    ///
    /// The function's output type becomes the value type unless one was set
    /// explicitly.
    pub fn transform<T, F>(mut self, transform: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn(&[String]) -> Result<T, TransformError> + Send + Sync + 'static,
    {
        if self.value_type.is_none() {
            self.value_type = Some(ValueType::of::<T>());
        }
        self.transform = Some(Arc::new(move |groups: &[String]| {
            transform(groups).map(|value| Box::new(value) as ParameterValue)
        }));
        self
    }

    /// Whether the type takes part in expression generation (default `true`).
    pub fn use_for_snippets(mut self, enabled: bool) -> Self {
        self.use_for_snippets = Some(enabled);
        self
    }

    /// Whether the type wins ties in candidate selection (default `false`).
    pub fn prefer_for_regexp_match(mut self, enabled: bool) -> Self {
        self.prefer_for_regexp_match = enabled;
        self
    }

    /// Mark the type as framework-provided.
    pub fn builtin(mut self, builtin: bool) -> Self {
        self.builtin = builtin;
        self
    }

    /// Validate the declaration and compile its patterns.
    ///
    /// # Errors
    /// - [`ParameterTypeError::IllegalName`] when the name contains a reserved
    ///   character.
    /// - [`ParameterTypeError::NoPatterns`] when no pattern was supplied.
    /// - [`ParameterTypeError::Flag`] when a pattern carries a flag.
    /// - [`ParameterTypeError::Regex`] when a pattern fails to compile.
    pub fn build(self) -> Result<ParameterType, ParameterTypeError> {
        if let Some(name) = &self.name {
            check_parameter_type_name(name)?;
        }
        if self.sources.is_empty() {
            return Err(ParameterTypeError::NoPatterns { name: self.name });
        }

        let mut regexes = Vec::with_capacity(self.sources.len());
        let mut anchored = Vec::with_capacity(self.sources.len());
        for source in &self.sources {
            let (search, whole) = source.compile()?;
            regexes.push(search);
            anchored.push(whole);
        }

        Ok(ParameterType {
            name: self.name,
            sources: self.sources,
            regexes,
            anchored,
            value_type: self.value_type,
            transform: self.transform,
            use_for_snippets: self.use_for_snippets.unwrap_or(true),
            prefer_for_regexp_match: self.prefer_for_regexp_match,
            builtin: self.builtin,
        })
    }
}
