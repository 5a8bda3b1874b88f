//! Parameter types: named value classes recognised by regular expressions.

mod builder;
mod name;
mod source;

use std::any::{Any, TypeId};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::capture::extract_captured_values;
use crate::errors::TransformError;

pub use builder::ParameterTypeBuilder;
pub use source::RegexSource;

/// Type-erased value produced by a parameter type's transform.
pub type ParameterValue = Box<dyn Any + Send + Sync>;

/// Value-construction function mapping captured groups to a value.
pub(crate) type TransformFn =
    dyn Fn(&[String]) -> Result<ParameterValue, TransformError> + Send + Sync;

/// The logical type a parameter type converts matched text into.
///
/// Only used for bookkeeping; matching never inspects it.
///
/// # Examples
/// ```
/// use cukegen::ValueType;
/// let ty = ValueType::of::<i64>();
/// assert_eq!(ty.name(), "i64");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueType {
    name: &'static str,
    id: TypeId,
}

impl ValueType {
    /// Describe the Rust type `T`.
    #[must_use]
    pub fn of<T: Any>() -> Self {
        Self {
            name: std::any::type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }

    /// Fully qualified type name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The [`TypeId`] of the described type.
    #[must_use]
    pub fn id(&self) -> TypeId {
        self.id
    }
}

/// An immutable description of a named value class.
///
/// A parameter type owns one or more compiled patterns, an optional transform
/// and the flags that control its participation in expression generation.
/// Instances are built through [`ParameterType::builder`] and never change
/// afterwards.
///
/// # Examples
/// ```
/// use cukegen::ParameterType;
/// let currency = ParameterType::builder()
///     .name("currency")
///     .pattern("[A-Z]{3}")
///     .build()
///     .expect("valid parameter type");
/// assert_eq!(currency.name(), Some("currency"));
/// assert!(currency.use_for_snippets());
/// assert!(!currency.prefer_for_regexp_match());
/// ```
pub struct ParameterType {
    name: Option<String>,
    sources: Vec<RegexSource>,
    regexes: Vec<Regex>,
    anchored: Vec<Regex>,
    value_type: Option<ValueType>,
    transform: Option<Arc<TransformFn>>,
    use_for_snippets: bool,
    prefer_for_regexp_match: bool,
    builtin: bool,
}

impl ParameterType {
    /// Start building a parameter type.
    #[must_use]
    pub fn builder() -> ParameterTypeBuilder {
        ParameterTypeBuilder::default()
    }

    /// The type name, absent for anonymous types.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Pattern sources in declaration order.
    #[must_use]
    pub fn regexp_sources(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.sources.iter().map(RegexSource::source)
    }

    /// Compiled search patterns in declaration order.
    #[must_use]
    pub fn regexes(&self) -> &[Regex] {
        &self.regexes
    }

    /// The logical result type, when declared.
    #[must_use]
    pub fn value_type(&self) -> Option<ValueType> {
        self.value_type
    }

    /// Whether the type participates in expression generation.
    #[must_use]
    pub fn use_for_snippets(&self) -> bool {
        self.use_for_snippets
    }

    /// Whether the type wins ties against types without this preference.
    #[must_use]
    pub fn prefer_for_regexp_match(&self) -> bool {
        self.prefer_for_regexp_match
    }

    /// Whether the type is provided by the framework.
    #[must_use]
    pub fn is_builtin(&self) -> bool {
        self.builtin
    }

    /// Order parameter types for tie-breaking.
    ///
    /// Types preferring regexp matches sort first; ties are broken by name
    /// (case-sensitive, an absent name compares as the empty string).
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        other
            .prefer_for_regexp_match
            .cmp(&self.prefer_for_regexp_match)
            .then_with(|| self.name_or_empty().cmp(other.name_or_empty()))
    }

    /// Convert captured group values into a value.
    ///
    /// Without a transform the first captured value is returned as a
    /// [`String`] (empty when nothing was captured).
    ///
    /// # Errors
    /// Propagates any [`TransformError`] raised by the transform unchanged.
    pub fn transform(&self, groups: &[String]) -> Result<ParameterValue, TransformError> {
        self.transform.as_ref().map_or_else(
            || Ok(Box::new(groups.first().cloned().unwrap_or_default()) as ParameterValue),
            |transform| transform(groups),
        )
    }

    /// Capture groups of the first pattern matching the whole of `text`.
    #[must_use]
    pub fn captures(&self, text: &str) -> Option<Vec<String>> {
        self.anchored
            .iter()
            .find_map(|re| extract_captured_values(re, text))
    }

    /// Match `text` against the patterns and transform the captures.
    ///
    /// Returns `Ok(None)` when no pattern matches the whole text.
    ///
    /// # Errors
    /// Propagates any [`TransformError`] raised by the transform unchanged.
    ///
    /// # Examples
    /// ```
    /// use cukegen::{NumberLocale, ParameterTypeRegistry};
    /// let registry = ParameterTypeRegistry::with_builtins(&NumberLocale::english());
    /// let int = registry.lookup_by_type_name("int").expect("int is built in");
    /// let value = int.parse("-42").expect("transform succeeds").expect("text matches");
    /// assert_eq!(value.downcast_ref::<i64>(), Some(&-42));
    /// ```
    pub fn parse(&self, text: &str) -> Result<Option<ParameterValue>, TransformError> {
        self.captures(text)
            .map(|groups| self.transform(&groups))
            .transpose()
    }

    fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

impl fmt::Debug for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterType")
            .field("name", &self.name)
            .field("sources", &self.sources)
            .field("value_type", &self.value_type.map(|ty| ty.name))
            .field("has_transform", &self.transform.is_some())
            .field("use_for_snippets", &self.use_for_snippets)
            .field("prefer_for_regexp_match", &self.prefer_for_regexp_match)
            .field("builtin", &self.builtin)
            .finish()
    }
}
