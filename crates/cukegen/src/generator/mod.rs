//! Step-expression inference from example sentences.
//!
//! Every snippet-eligible parameter type contributes candidate matches. The
//! widest candidate wins at each start offset, then a single left-to-right
//! sweep takes the leftmost winner, skips everything it covers and continues.
//! The sweep never backtracks, so an earlier narrow match may block a later
//! wider one.

mod candidate;
mod expression;

use tracing::{debug, trace};

use crate::registry::ParameterTypeRegistry;

use candidate::{discover, winners_by_offset};
pub use expression::{GeneratedExpression, Segment};

/// Generates expressions from sentences using a registry's parameter types.
///
/// # Examples
/// ```
/// use cukegen::{ExpressionGenerator, NumberLocale, ParameterTypeRegistry};
/// let registry = ParameterTypeRegistry::with_builtins(&NumberLocale::english());
/// let generator = ExpressionGenerator::new(&registry);
/// assert_eq!(
///     generator.generate_expression("I have 2 cukes and 1.5 euro", true),
///     "I have {arg1:int} cukes and {arg2:double} euro"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ExpressionGenerator<'r> {
    registry: &'r ParameterTypeRegistry,
}

impl<'r> ExpressionGenerator<'r> {
    /// Create a generator over `registry`.
    #[must_use]
    pub fn new(registry: &'r ParameterTypeRegistry) -> Self {
        Self { registry }
    }

    /// Generate the expression for `text` as a string.
    ///
    /// Placeholders render as `{argN}`, or `{argN:name}` when
    /// `use_parameter_type_names` is set. Text without any match is returned
    /// unchanged.
    #[must_use]
    pub fn generate_expression(&self, text: &str, use_parameter_type_names: bool) -> String {
        self.generate(text).render(use_parameter_type_names)
    }

    /// Generate the structured expression for `text`.
    #[must_use]
    pub fn generate<'a>(&self, text: &'a str) -> GeneratedExpression<'a>
    where
        'r: 'a,
    {
        let candidates = discover(text, self.registry.parameter_types_eligible_for_snippets());
        let candidate_count = candidates.len();
        let mut winners: Vec<_> = winners_by_offset(candidates).into_values().collect();
        winners.sort_unstable_by_key(|candidate| candidate.start);

        let mut generated = GeneratedExpression::new();
        let mut pos = 0usize;
        for winner in winners {
            if winner.start < pos {
                continue;
            }
            let end = winner.start + winner.len;
            generated.push_literal(text.get(pos..winner.start).unwrap_or_default());
            let matched = text.get(winner.start..end).unwrap_or_default();
            trace!(
                start = winner.start,
                matched,
                parameter_type = winner.parameter_type.name().unwrap_or_default(),
                "selected candidate"
            );
            generated.push_parameter(matched, winner.parameter_type);
            pos = end;
        }
        generated.push_literal(text.get(pos..).unwrap_or_default());

        debug!(
            candidates = candidate_count,
            parameters = generated.parameter_count(),
            "generated expression"
        );
        generated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::NumberLocale;
    use crate::parameter_type::ParameterType;
    use rstest::{fixture, rstest};

    #[fixture]
    fn builtins() -> ParameterTypeRegistry {
        ParameterTypeRegistry::with_builtins(&NumberLocale::english())
    }

    fn with_types(types: &[(&str, &str)]) -> ParameterTypeRegistry {
        let mut registry = builtins();
        for &(name, pattern) in types {
            let ty = match ParameterType::builder().name(name).pattern(pattern).build() {
                Ok(ty) => ty,
                Err(err) => panic!("parameter type should build: {err}"),
            };
            if let Err(err) = registry.register(ty) {
                panic!("registration should succeed: {err}");
            }
        }
        registry
    }

    #[rstest]
    fn no_candidates_returns_text(builtins: ParameterTypeRegistry) {
        let generator = ExpressionGenerator::new(&builtins);
        assert_eq!(generator.generate_expression("hello", true), "hello");
    }

    #[test]
    fn empty_registry_returns_text() {
        let registry = ParameterTypeRegistry::new();
        let generator = ExpressionGenerator::new(&registry);
        assert_eq!(generator.generate_expression("I have 2 cukes", true), "I have 2 cukes");
    }

    #[rstest]
    fn single_int_covers_whole_text(builtins: ParameterTypeRegistry) {
        let generator = ExpressionGenerator::new(&builtins);
        assert_eq!(generator.generate_expression("99999", true), "{arg1:int}");
    }

    #[test]
    fn leftmost_beats_later_candidate() {
        let registry = with_types(&[("currency", "cd"), ("date", "bc")]);
        let generator = ExpressionGenerator::new(&registry);
        assert_eq!(generator.generate_expression("abcdefg", true), "a{arg1:date}defg");
    }

    #[test]
    fn widest_wins_at_same_offset() {
        let registry = with_types(&[("currency", "cd"), ("date", "cde")]);
        let generator = ExpressionGenerator::new(&registry);
        assert_eq!(generator.generate_expression("abcdefg", true), "ab{arg1:date}fg");
    }

    #[test]
    fn narrow_early_match_blocks_wider_later_match() {
        let registry = with_types(&[("short", "ab"), ("long", "bcdef")]);
        let generator = ExpressionGenerator::new(&registry);
        assert_eq!(generator.generate_expression("abcdefg", true), "{arg1:short}cdefg");
    }

    #[rstest]
    fn exposes_parameter_types_in_placeholder_order(builtins: ParameterTypeRegistry) {
        let generator = ExpressionGenerator::new(&builtins);
        let generated = generator.generate("I have 2 cukes and 1.5 euro");
        let names: Vec<_> = generated
            .parameter_types()
            .iter()
            .filter_map(|ty| ty.name())
            .collect();
        assert_eq!(names, vec!["int", "double"]);
        assert_eq!(
            generated.segments().first(),
            Some(&Segment::Literal("I have "))
        );
    }

    #[rstest]
    fn multibyte_text_is_preserved(builtins: ParameterTypeRegistry) {
        let generator = ExpressionGenerator::new(&builtins);
        assert_eq!(
            generator.generate_expression("café costs 3 €", true),
            "café costs {arg1:int} €"
        );
    }
}
