//! Parsing real input with models built from the fixture grammars.

use parsegen::{Interpreter, RuntimeConfig, RuntimeError, Value, build_model};
use rstest::rstest;

use crate::helpers::grammar_fixtures::{calculator, fixture};

fn parse(grammar: &str, input: &str) -> Result<String, RuntimeError> {
    let model = build_model(&fixture(grammar)).unwrap();
    let interpreter = Interpreter::new(&model, RuntimeConfig::default())?;
    interpreter.parse(input).map(|instance| instance.to_string())
}

#[rstest]
#[case("wrapped_literal", "a", "rule1 { rule2: \"a\" }")]
#[case("expression", "x1", "expr { alternative: identifier { identifier: \"x1\" } }")]
#[case("rules", "", "rules { rule: [] }")]
#[case(
    "rules",
    "a ::= b; c ::= d;",
    "rules { rule: [rule { name: \"a\", body: \"b\" }, rule { name: \"c\", body: \"d\" }] }"
)]
#[case(
    "calculator",
    "x = 1 + 2;",
    "program { statement: [assignment { target: identifier { identifier: \"x\" }, \
     value: expression { term0: number { number: \"1\" }, operator: [\"+\"], \
     term1: [number { number: \"2\" }] } }] }"
)]
fn test_parse(#[case] grammar: &str, #[case] input: &str, #[case] expected: &str) {
    assert_eq!(parse(grammar, input).unwrap(), expected);
}

#[test]
fn test_keyword_backtracks_out_of_assignment() {
    let model = build_model(&calculator()).unwrap();
    let interpreter = Interpreter::new(&model, RuntimeConfig::default()).unwrap();
    let program = interpreter.parse("print (a);").unwrap();

    let statements = program.list("statement").unwrap();
    let print = statements[0].as_node().unwrap();
    assert_eq!(print.entity(), "print");
    assert_eq!(print.text("keyword"), Some("print"));

    // Parentheses and terms are virtual: the nested expression is stored directly.
    let outer = print.node("expression").unwrap();
    let inner = outer.node("term0").unwrap();
    assert_eq!(inner.entity(), "expression");
    assert_eq!(
        inner.node("term0").unwrap().text("identifier"),
        Some("a")
    );
    assert_eq!(outer.list("operator"), Some(&[][..]));
}

#[test]
fn test_statements_are_collected_in_order() {
    let model = build_model(&calculator()).unwrap();
    let interpreter = Interpreter::new(&model, RuntimeConfig::default()).unwrap();
    let program = interpreter
        .parse("a = 1;\nprint a * (2 - b);\nb = a;\n")
        .unwrap();

    let kinds: Vec<&str> = program
        .list("statement")
        .unwrap()
        .iter()
        .map(|statement| statement.as_node().unwrap().entity().as_str())
        .collect();
    assert_eq!(kinds, vec!["assignment", "print", "assignment"]);

    let print = program.list("statement").unwrap()[1].as_node().unwrap();
    let operators = print.node("expression").unwrap().list("operator").unwrap();
    assert_eq!(operators, &[Value::Text("*".to_string())]);
}

#[rstest]
#[case("x = ;", 4)]
#[case("x = 1", 5)]
#[case("print 1 +;", 9)]
fn test_syntax_errors_point_at_failure(#[case] input: &str, #[case] offset: u32) {
    match parse("calculator", input) {
        Err(RuntimeError::NoMatch { entity, offset: at, .. }) => {
            assert_eq!(entity, "program");
            assert_eq!(u32::from(at), offset);
        }
        other => panic!("expected a match failure, got {:?}", other),
    }
}
