#![allow(clippy::unwrap_used)]


use super::{Instance, Interpreter, RuntimeConfig, RuntimeResult};
use crate::factory::build_model;
use crate::grammar::{Expression, Grammar};

fn r(target: &str) -> Expression {
    Expression::reference(target)
}

fn lit(text: &str) -> Expression {
    Expression::literal(text)
}

fn pat(pattern: &str) -> Expression {
    Expression::pattern(pattern)
}

fn parse_with(grammar: &Grammar, config: RuntimeConfig, text: &str) -> RuntimeResult<Instance> {
    let model = build_model(grammar).unwrap();
    Interpreter::new(&model, config)?.parse(text)
}

fn parse(grammar: &Grammar, text: &str) -> RuntimeResult<Instance> {
    parse_with(grammar, RuntimeConfig::default(), text)
}
