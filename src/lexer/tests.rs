//! Unit tests for the scanner.

use super::scan;
use crate::token::{Literal, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    scan(source).0.into_iter().map(|t| t.kind).collect()
}

#[test]
fn empty_input_yields_only_eof() {
    let (tokens, has_error) = scan("");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
    assert!(!has_error);
}

#[test]
fn single_char_punctuation() {
    assert_eq!(
        kinds("({*.})"),
        vec![
            TokenKind::LeftParen,
            TokenKind::LeftBrace,
            TokenKind::Star,
            TokenKind::Dot,
            TokenKind::RightBrace,
            TokenKind::RightParen,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn compound_operators_prefer_two_character_form() {
    assert_eq!(
        kinds("= == ! != < <= > >="),
        vec![
            TokenKind::Equal,
            TokenKind::EqualEqual,
            TokenKind::Bang,
            TokenKind::BangEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn line_comment_suppresses_rest_of_line() {
    let (tokens, has_error) = scan("1 // ignored $ junk\n2");
    assert!(!has_error);
    let literals: Vec<_> = tokens
        .iter()
        .filter_map(|t| match &t.literal {
            Literal::Number(n) => Some(*n),
            _ => None,
        })
        .collect();
    assert_eq!(literals, vec![1.0, 2.0]);
}

#[test]
fn bare_slash_is_not_a_comment() {
    assert_eq!(kinds("/"), vec![TokenKind::Slash, TokenKind::Eof]);
}

#[test]
fn string_literal_keeps_quotes_in_lexeme_and_strips_them_in_literal() {
    let (tokens, has_error) = scan(r#""hello world""#);
    assert!(!has_error);
    assert_eq!(tokens[0].lexeme, "\"hello world\"");
    assert_eq!(tokens[0].literal, Literal::Str("hello world".to_string()));
}

#[test]
fn unterminated_string_at_eof_is_an_error() {
    let (tokens, has_error) = scan("\"abc");
    assert!(has_error);
    assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
}

#[test]
fn unterminated_string_at_newline_is_an_error() {
    let (_, has_error) = scan("\"abc\ndef\"");
    assert!(has_error);
}

#[test]
fn integral_number_has_dot_zero_literal() {
    let (tokens, _) = scan("42");
    assert_eq!(tokens[0].lexeme, "42");
    assert_eq!(tokens[0].literal, Literal::Number(42.0));
}

#[test]
fn trailing_dot_without_digit_is_not_consumed() {
    let (tokens, _) = scan("42.");
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::Number, TokenKind::Dot, TokenKind::Eof]
    );
    assert_eq!(tokens[0].literal, Literal::Number(42.0));
}

#[test]
fn fractional_number_literal() {
    let (tokens, _) = scan("3.14");
    assert_eq!(tokens[0].literal, Literal::Number(3.14));
}

#[test]
fn identifier_vs_keyword_classification() {
    let (tokens, _) = scan("var printer = 1;");
    assert_eq!(tokens[0].kind, TokenKind::Var);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].lexeme, "printer");
}

#[test]
fn underscore_starts_an_identifier() {
    let (tokens, _) = scan("_foo");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "_foo");
}

#[test]
fn unexpected_character_is_reported_and_scanning_continues() {
    let (tokens, has_error) = scan("1 @ 2");
    assert!(has_error);
    let literals: Vec<_> = tokens
        .iter()
        .filter_map(|t| match &t.literal {
            Literal::Number(n) => Some(*n),
            _ => None,
        })
        .collect();
    assert_eq!(literals, vec![1.0, 2.0]);
}

#[test]
fn newline_inside_comment_bumps_line_counter() {
    let (tokens, _) = scan("// comment\n1");
    let number = tokens
        .iter()
        .find(|t| matches!(t.literal, Literal::Number(_)))
        .unwrap();
    assert_eq!(number.line, 2);
}

#[test]
fn eof_token_carries_last_seen_line() {
    let (tokens, _) = scan("1\n2\n");
    assert_eq!(tokens.last().unwrap().line, 3);
}

#[test]
fn non_ascii_whitespace_is_an_unexpected_character_not_skipped() {
    // Only ' ', '\t', '\r', '\n' are whitespace per spec.md §4.1; a
    // Unicode space (U+00A0) must be reported, not silently consumed.
    let (tokens, has_error) = scan("1\u{A0}2");
    assert!(has_error);
    let literals: Vec<_> = tokens
        .iter()
        .filter_map(|t| match &t.literal {
            Literal::Number(n) => Some(*n),
            _ => None,
        })
        .collect();
    assert_eq!(literals, vec![1.0, 2.0]);
}

#[test]
fn non_ascii_letter_stops_the_identifier_and_is_reported() {
    // "café": the identifier stops at the ASCII run "caf"; the non-ASCII
    // 'é' is then its own unexpected-character error, not folded into
    // the identifier lexeme.
    let (tokens, has_error) = scan("café");
    assert!(has_error);
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::Identifier, TokenKind::Eof]
    );
    assert_eq!(tokens[0].lexeme, "caf");
}
