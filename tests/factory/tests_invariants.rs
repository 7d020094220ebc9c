//! Properties every built model must have, checked over all fixtures.

use parsegen::build_model;
use rstest::rstest;

use crate::helpers::grammar_fixtures::fixture;
use crate::helpers::model_assertions::{assert_acyclic, assert_sound, property_names};

#[rstest]
#[case("wrapped_literal")]
#[case("expression")]
#[case("rules")]
#[case("calculator")]
fn test_model_is_sound(#[case] grammar: &str) {
    let model = build_model(&fixture(grammar)).unwrap();
    assert_sound(&model);
    assert_acyclic(&model);
}

#[rstest]
#[case("wrapped_literal")]
#[case("expression")]
#[case("rules")]
#[case("calculator")]
fn test_build_is_deterministic(#[case] grammar: &str) {
    let first = build_model(&fixture(grammar)).unwrap();
    let second = build_model(&fixture(grammar)).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[rstest]
#[case("expression")]
#[case("calculator")]
fn test_entities_follow_rule_order(#[case] grammar: &str) {
    let grammar = fixture(grammar);
    let model = build_model(&grammar).unwrap();

    let rules: Vec<&str> = grammar.rules().iter().map(|rule| rule.name.as_str()).collect();
    let entities: Vec<&str> = model.entity_names().map(|name| name.as_str()).collect();
    assert_eq!(entities, rules);
    assert_eq!(model.root().map(|n| n.as_str()), rules.first().copied());
}

#[rstest]
#[case("rules")]
#[case("calculator")]
fn test_property_names_are_unique(#[case] grammar: &str) {
    let model = build_model(&fixture(grammar)).unwrap();
    for entity in model.entity_names() {
        let names = property_names(&model, entity);
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), names.len(), "duplicates in {:?}", names);
    }
}

#[rstest]
#[case("expression")]
#[case("calculator")]
fn test_every_reference_resolves(#[case] grammar: &str) {
    let model = build_model(&fixture(grammar)).unwrap();
    for (id, action) in model.actions() {
        if let Some(target) = action.target() {
            assert!(model.contains(target), "{} refers to unknown {}", id, target);
        }
    }
}

#[test]
fn test_collapsed_values_land_in_proxy() {
    let model = build_model(&fixture("expression")).unwrap();
    let proxy = model.entity("expr").unwrap().property("alternative").unwrap();

    for &sub in model.property(proxy).subsumed() {
        assert_eq!(model.assignment_target(model.property(sub).source()), Some(proxy));
    }
}
