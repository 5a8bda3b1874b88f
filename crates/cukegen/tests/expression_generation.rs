//! Behavioural tests for expression generation over a populated registry.
#![expect(clippy::expect_used, reason = "tests build fixtures with descriptive failures")]

use cukegen::{
    ExpressionGenerator, NumberLocale, ParameterType, ParameterTypeRegistry, RegexSource,
};
use rstest::{fixture, rstest};

#[fixture]
fn registry() -> ParameterTypeRegistry {
    ParameterTypeRegistry::with_builtins(&NumberLocale::english())
}

fn add_type(registry: &mut ParameterTypeRegistry, name: &str, pattern: impl Into<RegexSource>) {
    let parameter_type = ParameterType::builder()
        .name(name)
        .pattern(pattern)
        .build()
        .expect("test parameter type should build");
    registry
        .register(parameter_type)
        .expect("test parameter type name should be free");
}

fn assert_typed(registry: &ParameterTypeRegistry, text: &str, expected: &str) {
    let generator = ExpressionGenerator::new(registry);
    assert_eq!(generator.generate_expression(text, true), expected);
}

#[rstest]
fn generates_expression_for_no_args(registry: ParameterTypeRegistry) {
    assert_typed(&registry, "hello", "hello");
}

#[rstest]
fn generates_expression_for_int_double_arg(registry: ParameterTypeRegistry) {
    assert_typed(
        &registry,
        "I have 2 cukes and 1.5 euro",
        "I have {arg1:int} cukes and {arg2:double} euro",
    );
}

#[rstest]
fn generates_expression_for_just_int(registry: ParameterTypeRegistry) {
    assert_typed(&registry, "99999", "{arg1:int}");
}

#[rstest]
fn generates_expression_without_type_names(registry: ParameterTypeRegistry) {
    let generator = ExpressionGenerator::new(&registry);
    assert_eq!(
        generator.generate_expression("I have 2 cukes and 1.5 euro", false),
        "I have {arg1} cukes and {arg2} euro"
    );
}

#[rstest]
fn generates_expression_for_custom_type(mut registry: ParameterTypeRegistry) {
    add_type(&mut registry, "currency", "[A-Z]{3}");
    assert_typed(&registry, "I have a EUR account", "I have a {arg1:currency} account");
}

#[rstest]
fn prefers_leftmost_match_when_there_is_overlap(mut registry: ParameterTypeRegistry) {
    add_type(&mut registry, "currency", "cd");
    add_type(&mut registry, "date", "bc");
    assert_typed(&registry, "abcdefg", "a{arg1:date}defg");
}

#[rstest]
fn prefers_widest_match_when_pos_is_same(mut registry: ParameterTypeRegistry) {
    add_type(&mut registry, "currency", "cd");
    add_type(&mut registry, "date", "cde");
    assert_typed(&registry, "abcdefg", "ab{arg1:date}fg");
}

#[rstest]
fn scoped_inline_flags_apply_to_their_group(mut registry: ParameterTypeRegistry) {
    add_type(&mut registry, "currency", "(?i:eur)");
    assert_typed(&registry, "pay EUR or eur", "pay {arg1:currency} or {arg2:currency}");
}

#[rstest]
#[case("a \"quoted\" word", "a {arg1:string} word")]
#[case("'one' and 'two'", "{arg1:string} and {arg2:string}")]
#[case("-3 below", "{arg1:int} below")]
#[case("rate 0.25 or .5", "rate {arg1:double} or {arg2:double}")]
fn builtins_cover_common_values(
    registry: ParameterTypeRegistry,
    #[case] text: &str,
    #[case] expected: &str,
) {
    assert_typed(&registry, text, expected);
}

#[rstest]
fn numbers_placeholders_by_position(registry: ParameterTypeRegistry) {
    let generator = ExpressionGenerator::new(&registry);
    let generated = generator.generate("1 2 3 4");
    assert_eq!(generated.parameter_count(), 4);
    assert_eq!(
        generated.render(false),
        "{arg1} {arg2} {arg3} {arg4}"
    );
}

#[test]
fn regenerating_a_template_leaves_placeholders_alone() {
    let mut registry = ParameterTypeRegistry::new();
    add_type(&mut registry, "currency", "[A-Z]{3}");
    let generator = ExpressionGenerator::new(&registry);

    let template = generator.generate_expression("I paid in EUR", true);
    assert_eq!(template, "I paid in {arg1:currency}");
    assert_eq!(generator.generate_expression(&template, true), template);
}

#[test]
fn literal_braces_pass_through_unescaped() {
    let mut registry = ParameterTypeRegistry::new();
    add_type(&mut registry, "currency", "[A-Z]{3}");
    let generator = ExpressionGenerator::new(&registry);
    assert_eq!(
        generator.generate_expression("{x} costs USD", true),
        "{x} costs {arg1:currency}"
    );
}

#[test]
fn hidden_types_never_generate_placeholders() {
    let mut registry = ParameterTypeRegistry::new();
    let hidden = ParameterType::builder()
        .name("colour")
        .pattern("red|blue")
        .use_for_snippets(false)
        .build()
        .expect("test parameter type should build");
    registry.register(hidden).expect("name is free");
    let generator = ExpressionGenerator::new(&registry);
    assert_eq!(generator.generate_expression("red car", true), "red car");
}

#[test]
fn preferred_type_wins_tie_against_alphabetically_earlier_type() {
    let mut registry = ParameterTypeRegistry::new();
    add_type(&mut registry, "alpha", "[a-z]+");
    let preferred = ParameterType::builder()
        .name("zulu")
        .pattern("[a-z]+")
        .prefer_for_regexp_match(true)
        .build()
        .expect("test parameter type should build");
    registry.register(preferred).expect("name is free");
    let generator = ExpressionGenerator::new(&registry);
    assert_eq!(generator.generate_expression("go", true), "{arg1:zulu}");
}
