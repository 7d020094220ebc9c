//! Common grammar fixtures for tests.

use parsegen::{Expression, Grammar};

pub fn r(target: &str) -> Expression {
    Expression::reference(target)
}

pub fn lit(text: &str) -> Expression {
    Expression::literal(text)
}

pub fn pat(pattern: &str) -> Expression {
    Expression::pattern(pattern)
}

/// `rule1 ::= rule2 ; rule2 ::= "a" ;`
pub fn wrapped_literal() -> Grammar {
    Grammar::new()
        .with_rule("rule1", r("rule2"))
        .with_rule("rule2", lit("a"))
}

/// `expr ::= identifier | string | number ;`
pub fn expression() -> Grammar {
    Grammar::new()
        .with_rule("expr", r("identifier").or(r("string")).or(r("number")))
        .with_rule("identifier", pat("[a-zA-Z_][a-zA-Z0-9_]*"))
        .with_rule("string", pat("\"[^\"]*\""))
        .with_rule("number", pat("[0-9]+"))
}

/// `rules ::= { rule } ;`
pub fn rules() -> Grammar {
    Grammar::new()
        .with_rule("rules", Expression::repetition(r("rule")))
        .with_rule(
            "rule",
            r("identifier")
                .labeled("name")
                .then(lit("::="))
                .then(r("identifier").labeled("body"))
                .then(lit(";")),
        )
        .with_rule("identifier", pat("[a-z]+"))
}

/// A small statement language:
///
/// ```text
/// program    ::= { statement } ;
/// statement  ::= assignment | print ;
/// assignment ::= target@identifier "=" value@expression ";" ;
/// print      ::= keyword@"print" expression ";" ;
/// expression ::= term { operator term } ;
/// term       ::= number | identifier | paren ;
/// paren      ::= "(" expression ")" ;
/// ```
pub fn calculator() -> Grammar {
    Grammar::new()
        .with_rule("program", Expression::repetition(r("statement")))
        .with_rule("statement", r("assignment").or(r("print")))
        .with_rule(
            "assignment",
            r("identifier")
                .labeled("target")
                .then(lit("="))
                .then(r("expression").labeled("value"))
                .then(lit(";")),
        )
        .with_rule(
            "print",
            lit("print")
                .labeled("keyword")
                .then(r("expression"))
                .then(lit(";")),
        )
        .with_rule(
            "expression",
            r("term").then(Expression::repetition(r("operator").then(r("term")))),
        )
        .with_rule("term", r("number").or(r("identifier")).or(r("paren")))
        .with_rule("paren", lit("(").then(r("expression")).then(lit(")")))
        .with_rule("identifier", pat("[a-z]+"))
        .with_rule("number", pat("[0-9]+"))
        .with_rule("operator", pat("[-+*/]"))
}

/// Look up a fixture by name, for `#[case]` tables.
pub fn fixture(name: &str) -> Grammar {
    match name {
        "wrapped_literal" => wrapped_literal(),
        "expression" => expression(),
        "rules" => rules(),
        "calculator" => calculator(),
        other => panic!("unknown grammar fixture '{}'", other),
    }
}
