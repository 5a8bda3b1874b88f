//! The result of expression generation.

use std::fmt::Write as _;

use crate::parameter_type::ParameterType;

/// A piece of a generated expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied verbatim from the sentence.
    Literal(&'a str),
    /// A recognised span replaced by a placeholder.
    Parameter {
        /// The matched text.
        text: &'a str,
        /// Name of the winning parameter type, if any.
        type_name: Option<&'a str>,
    },
}

/// A generated expression: literal text interleaved with placeholders.
///
/// Placeholders are numbered from 1 in left-to-right order when rendered.
/// Literal `{` and `}` are copied through unescaped.
///
/// # Examples
/// ```
/// use cukegen::{ExpressionGenerator, NumberLocale, ParameterTypeRegistry};
/// let registry = ParameterTypeRegistry::with_builtins(&NumberLocale::english());
/// let generated = ExpressionGenerator::new(&registry).generate("I have 3 cukes");
/// assert_eq!(generated.render(false), "I have {arg1} cukes");
/// assert_eq!(generated.render(true), "I have {arg1:int} cukes");
/// assert_eq!(generated.parameter_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GeneratedExpression<'a> {
    segments: Vec<Segment<'a>>,
    parameter_types: Vec<&'a ParameterType>,
}

impl<'a> GeneratedExpression<'a> {
    pub(crate) fn new() -> Self {
        Self {
            segments: Vec::new(),
            parameter_types: Vec::new(),
        }
    }

    /// Append literal text; empty text is ignored.
    pub(crate) fn push_literal(&mut self, text: &'a str) {
        if text.is_empty() {
            return;
        }
        self.segments.push(Segment::Literal(text));
    }

    pub(crate) fn push_parameter(&mut self, text: &'a str, parameter_type: &'a ParameterType) {
        self.segments.push(Segment::Parameter {
            text,
            type_name: parameter_type.name(),
        });
        self.parameter_types.push(parameter_type);
    }

    /// Segments in sentence order.
    #[must_use]
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Parameter types of the placeholders, in placeholder order.
    #[must_use]
    pub fn parameter_types(&self) -> &[&'a ParameterType] {
        &self.parameter_types
    }

    /// Number of placeholders.
    #[must_use]
    pub fn parameter_count(&self) -> usize {
        self.parameter_types.len()
    }

    /// Render the expression as `{argN}` or, with type names, `{argN:name}`.
    ///
    /// Anonymous parameter types render as `{argN}` either way.
    #[must_use]
    pub fn render(&self, use_parameter_type_names: bool) -> String {
        let mut out = String::new();
        let mut index = 0usize;
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Parameter { type_name, .. } => {
                    index += 1;
                    let _ = match type_name {
                        Some(name) if use_parameter_type_names => {
                            write!(out, "{{arg{index}:{name}}}")
                        }
                        _ => write!(out, "{{arg{index}}}"),
                    };
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ty(name: Option<&str>) -> ParameterType {
        let mut builder = ParameterType::builder().pattern("x");
        if let Some(name) = name {
            builder = builder.name(name);
        }
        match builder.build() {
            Ok(ty) => ty,
            Err(err) => panic!("parameter type should build: {err}"),
        }
    }

    #[test]
    fn numbers_placeholders_left_to_right() {
        let colour = ty(Some("colour"));
        let mut generated = GeneratedExpression::new();
        generated.push_literal("a ");
        generated.push_parameter("red", &colour);
        generated.push_literal(" and ");
        generated.push_parameter("blue", &colour);
        assert_eq!(generated.render(false), "a {arg1} and {arg2}");
        assert_eq!(generated.render(true), "a {arg1:colour} and {arg2:colour}");
    }

    #[test]
    fn anonymous_types_render_without_name() {
        let anonymous = ty(None);
        let mut generated = GeneratedExpression::new();
        generated.push_parameter("x", &anonymous);
        assert_eq!(generated.render(true), "{arg1}");
    }

    #[test]
    fn empty_literals_are_dropped() {
        let mut generated = GeneratedExpression::new();
        generated.push_literal("");
        assert!(generated.segments().is_empty());
        assert_eq!(generated.render(true), "");
    }

    #[test]
    fn literal_braces_pass_through() {
        let mut generated = GeneratedExpression::new();
        generated.push_literal("{not a placeholder}");
        assert_eq!(generated.render(true), "{not a placeholder}");
    }
}
