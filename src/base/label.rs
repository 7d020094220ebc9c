//! Label sanitization.
//!
//! Grammar labels and literal texts end up as property names, so they have to
//! be valid identifiers. Punctuation is spelled out as words and the pieces are
//! joined with `_`, e.g. `"<="` becomes `less_than_equals`.

use super::Name;

/// Word used in place of a punctuation character.
fn punctuation_word(c: char) -> Option<&'static str> {
    let word = match c {
        '(' => "open_bracket",
        ')' => "close_bracket",
        '[' => "open_square_bracket",
        ']' => "close_square_bracket",
        '{' => "open_curly_bracket",
        '}' => "close_curly_bracket",
        ':' => "colon",
        '=' => "equals",
        '&' => "ampersand",
        '<' => "less_than",
        '>' => "greater_than",
        '+' => "plus",
        '*' => "star",
        '!' => "exclamation",
        ';' => "semicolon",
        ',' => "comma",
        '.' => "dot",
        '-' => "dash",
        '|' => "pipe",
        '/' => "slash",
        '\\' => "backslash",
        '#' => "hash",
        '@' => "at",
        '?' => "question",
        '%' => "percent",
        '^' => "caret",
        '~' => "tilde",
        '$' => "dollar",
        '\'' => "quote",
        '"' => "double_quote",
        '`' => "backtick",
        _ => return None,
    };
    Some(word)
}

fn is_word_char(c: char) -> bool {
    c == '_' || unicode_ident::is_xid_continue(c)
}

/// Returns true if `name` is usable as an identifier in generated code.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || unicode_ident::is_xid_start(first) => {
            chars.all(unicode_ident::is_xid_continue)
        }
        _ => false,
    }
}

/// Rewrite a label into an identifier.
///
/// Runs of identifier characters are kept as-is, punctuation becomes a word
/// token, whitespace only separates. Anything else is spelled as `u<hex>`.
pub fn sanitize_label(label: &str) -> Name {
    let mut segments: Vec<String> = Vec::new();
    let mut current = String::new();

    for c in label.chars() {
        if is_word_char(c) {
            current.push(c);
            continue;
        }
        if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
        if c.is_whitespace() {
            continue;
        }
        match punctuation_word(c) {
            Some(word) => segments.push(word.to_string()),
            None => segments.push(format!("u{:04x}", c as u32)),
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    let mut name = segments.join("_");
    if name.is_empty() {
        name.push('_');
    } else if !is_identifier(&name) {
        name.insert(0, '_');
    }
    Name::from(name)
}

/// Name of the boolean property that witnesses an optional literal.
pub fn witness_name(text: &str) -> Name {
    sanitize_label(&format!("has {text}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("name", "name")]
    #[case("snake_case", "snake_case")]
    #[case("-", "dash")]
    #[case("(", "open_bracket")]
    #[case("<=", "less_than_equals")]
    #[case("foo-bar", "foo_dash_bar")]
    #[case("a b", "a_b")]
    #[case("::", "colon_colon")]
    #[case("1st", "_1st")]
    #[case("_", "_")]
    #[case("", "_")]
    #[case("§", "u00a7")]
    fn test_sanitize_label(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize_label(input), expected);
        assert!(is_identifier(&sanitize_label(input)));
    }

    #[rstest]
    #[case("public", "has_public")]
    #[case("(", "has_open_bracket")]
    #[case("->", "has_dash_greater_than")]
    fn test_witness_name(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(witness_name(text), expected);
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("abc"));
        assert!(is_identifier("_x1"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1abc"));
        assert!(!is_identifier("a-b"));
    }
}
