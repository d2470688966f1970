use pretty_assertions::assert_eq;
use pricelang::lexer::{LexError, Location, Token, TokenKind, tokenize};

fn summary(tokens: &[Token]) -> Vec<(TokenKind, &str, usize, usize)> {
    tokens
        .iter()
        .map(|t| (t.kind, t.text.as_str(), t.location.line, t.location.column))
        .collect()
}

#[test]
fn lex_every_category_with_locations() {
    let input = "term = )) && oth,er_term $split\nterm 123 123.123 * - + / ! || ( ( <= < > >= != end :";
    let tokens = tokenize(input).expect("lexing failed");

    use TokenKind::*;
    assert_eq!(
        summary(&tokens),
        vec![
            (Id, "term", 1, 0),
            (Symbol, "=", 1, 5),
            (Symbol, ")", 1, 7),
            (Symbol, ")", 1, 8),
            (Symbol, "&&", 1, 10),
            (Id, "oth", 1, 13),
            (Symbol, ",", 1, 16),
            (Id, "er_term", 1, 17),
            (Symbol, "$", 1, 25),
            (Id, "split", 1, 26),
            (Id, "term", 2, 0),
            (Num, "123", 2, 5),
            (Num, "123.123", 2, 9),
            (Symbol, "*", 2, 17),
            (Symbol, "-", 2, 19),
            (Symbol, "+", 2, 21),
            (Symbol, "/", 2, 23),
            (Symbol, "!", 2, 25),
            (Symbol, "||", 2, 27),
            (Symbol, "(", 2, 30),
            (Symbol, "(", 2, 32),
            (Symbol, "<=", 2, 34),
            (Symbol, "<", 2, 37),
            (Symbol, ">", 2, 39),
            (Symbol, ">=", 2, 41),
            (Symbol, "!=", 2, 44),
            (Id, "end", 2, 47),
            (Symbol, ":", 2, 51),
        ]
    );
}

#[test]
fn lex_empty_and_blank_input() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize("  \n\t \n").unwrap().is_empty());
}

#[test]
fn lex_prefers_longest_symbols() {
    let tokens = tokenize("a==b&&c||!d").unwrap();
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "==", "b", "&&", "c", "||", "!", "d"]);
}

#[test]
fn lex_identifier_swallows_trailing_digits() {
    let tokens = tokenize("x1 1x").unwrap();
    assert_eq!(
        summary(&tokens),
        vec![
            (TokenKind::Id, "x1", 1, 0),
            (TokenKind::Num, "1", 1, 3),
            (TokenKind::Id, "x", 1, 4),
        ]
    );
}

#[test]
fn lex_keywords_are_identifiers() {
    let tokens = tokenize("if true then false else x end").unwrap();
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Id));
}

#[test]
fn lex_newline_resets_column() {
    let tokens = tokenize("a\n\n   b").unwrap();
    assert_eq!(tokens[1].location, Location::new(3, 3));
}

#[test]
fn lex_error_reports_location_and_snippet() {
    let err = tokenize("a = 1 # b").unwrap_err();
    assert_eq!(
        err,
        LexError {
            location: Location::new(1, 6),
            snippet: "# b".to_string(),
        }
    );
    assert_eq!(err.to_string(), "Cannot split input, in '# b...', at 1:6");
}

#[test]
fn lex_error_snippet_is_truncated() {
    let input = format!("x = \"{}\"", "y".repeat(50));
    let err = tokenize(&input).unwrap_err();
    assert_eq!(err.location, Location::new(1, 4));
    assert_eq!(err.snippet.chars().count(), 32);
    assert!(err.snippet.starts_with("\"yyy"));
}

#[test]
fn lex_dot_without_fraction_is_an_error() {
    let err = tokenize("price = 1.").unwrap_err();
    assert_eq!(err.location, Location::new(1, 9));
}

#[test]
fn describe_token() {
    let tokens = tokenize("total").unwrap();
    assert_eq!(tokens[0].describe(), "id 'total'");
}
