#![allow(clippy::unwrap_used)]


use crate::grammar::{Expression, Grammar};
use crate::model::Model;

fn r(target: &str) -> Expression {
    Expression::reference(target)
}

fn lit(text: &str) -> Expression {
    Expression::literal(text)
}

fn pat(pattern: &str) -> Expression {
    Expression::pattern(pattern)
}

fn build(grammar: &Grammar) -> Model {
    super::build_model(grammar).unwrap()
}

/// `expr ::= identifier | string | number ;` plus the three pattern rules.
fn expression_grammar() -> Grammar {
    Grammar::new()
        .with_rule("expr", r("identifier").or(r("string")).or(r("number")))
        .with_rule("identifier", pat("[a-zA-Z_][a-zA-Z0-9_]*"))
        .with_rule("string", pat("\"[^\"]*\""))
        .with_rule("number", pat("[0-9]+"))
}

fn property_names(model: &Model, entity: &str) -> Vec<String> {
    model
        .properties_of(entity)
        .map(|(_, property)| property.name().to_string())
        .collect()
}
