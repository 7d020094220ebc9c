//! End-to-end model construction for the reference grammars.

use parsegen::{ModelError, ValueType, build_model};
use rstest::rstest;

use crate::helpers::grammar_fixtures::{calculator, fixture, lit, r};
use crate::helpers::model_assertions::{assert_subs, assert_supers, get_entity, property_names};

// =============================================================================
// Model rendering
// =============================================================================

#[rstest]
#[case("wrapped_literal", "rule1 ::= rule2 ;\nrule2 ::= rule2@\"a\" ;\n")]
#[case(
    "expression",
    "expr ::= alternative@( identifier | string | number ) ;\n\
     identifier ::= identifier@/[a-zA-Z_][a-zA-Z0-9_]*/ ;\n\
     string ::= string@/\"[^\"]*\"/ ;\n\
     number ::= number@/[0-9]+/ ;\n"
)]
#[case(
    "rules",
    "rules ::= { rule } ;\n\
     rule ::= name@identifier \"::=\" body@identifier \";\" ;\n\
     identifier ::= identifier@/[a-z]+/ ;\n"
)]
fn test_model_display(#[case] grammar: &str, #[case] expected: &str) {
    let model = build_model(&fixture(grammar)).unwrap();
    assert_eq!(model.to_string(), expected);
}

#[test]
fn test_calculator_display() {
    let model = build_model(&calculator()).unwrap();
    let text = model.to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[1], "statement ::= alternative@( assignment | print ) ;");
    assert_eq!(
        lines[2],
        "assignment ::= target@identifier \"=\" value@expression \";\" ;"
    );
    assert_eq!(lines[3], "print ::= keyword@\"print\" expression \";\" ;");
    assert_eq!(lines[4], "expression ::= term0@term { operator term1@term } ;");
    assert_eq!(lines[6], "paren ::= \"(\" expression \")\" ;");
}

// =============================================================================
// Inheritance
// =============================================================================

#[rstest]
#[case("expression", "expr", &["identifier", "string", "number"])]
#[case("rules", "rules", &[])]
#[case("calculator", "statement", &["assignment", "print"])]
#[case("calculator", "term", &["number", "identifier", "paren"])]
#[case("calculator", "paren", &["expression"])]
#[case("calculator", "print", &[])]
fn test_subs(#[case] grammar: &str, #[case] entity: &str, #[case] expected: &[&str]) {
    let model = build_model(&fixture(grammar)).unwrap();
    assert_subs(&model, entity, expected);
}

#[rstest]
#[case("wrapped_literal", "rule1", false)]
#[case("wrapped_literal", "rule2", true)]
#[case("expression", "expr", false)]
#[case("expression", "number", false)]
#[case("rules", "identifier", true)]
#[case("calculator", "statement", true)]
#[case("calculator", "term", true)]
#[case("calculator", "paren", true)]
#[case("calculator", "operator", true)]
#[case("calculator", "identifier", false)]
#[case("calculator", "expression", false)]
fn test_virtual_entities(#[case] grammar: &str, #[case] entity: &str, #[case] expected: bool) {
    let model = build_model(&fixture(grammar)).unwrap();
    assert_eq!(model.is_virtual(entity), expected, "is_virtual({})", entity);
}

#[test]
fn test_wrapped_literal_scenario() {
    let model = build_model(&fixture("wrapped_literal")).unwrap();

    assert_eq!(model.len(), 2);
    assert_eq!(model.root().map(|n| n.as_str()), Some("rule1"));
    assert_eq!(property_names(&model, "rule1"), vec!["rule2"]);
    assert_eq!(model.effective_type("rule2"), ValueType::Text);
    assert!(get_entity(&model, "rule2").subs().is_empty());
    assert_supers(&model, "rule2", &["rule1"]);
    assert_subs(&model, "rule1", &["rule2"]);
}

#[test]
fn test_rules_scenario() {
    let model = build_model(&fixture("rules")).unwrap();

    let property = get_entity(&model, "rules").property("rule").unwrap();
    assert!(model.is_plural(property));
    assert!(!model.property(property).is_proxy());
    assert!(get_entity(&model, "rule").supers().is_empty());
    assert_eq!(
        model.property_type(property),
        Some(ValueType::Entity("rule".into()))
    );
}

#[test]
fn test_calculator_property_types() {
    let model = build_model(&calculator()).unwrap();
    let expression = get_entity(&model, "expression");

    assert_eq!(property_names(&model, "expression"), vec!["term0", "operator", "term1"]);
    let term1 = expression.property("term1").unwrap();
    assert!(model.is_plural(term1));
    assert_eq!(
        model.property_type(term1),
        Some(ValueType::Entity("term".into()))
    );
    let operator = expression.property("operator").unwrap();
    assert_eq!(model.property_type(operator), Some(ValueType::Text));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_unknown_reference_names_rule_and_target() {
    let grammar = parsegen::Grammar::new()
        .with_rule("start", r("middle"))
        .with_rule("middle", lit("(").then(r("end")));
    let err = build_model(&grammar).unwrap_err();

    assert_eq!(err, ModelError::unknown_reference("middle", "end"));
    assert_eq!(
        err.to_string(),
        "Unknown reference: rule `middle` refers to undefined rule `end`"
    );
}
