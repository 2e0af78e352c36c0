//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - One- and two-character operators
//! - Delimiters and brackets
//! - Illegal characters and end of input

use super::{
    lexer::{tokenize, Lexer},
    tokens::{lookup_ident, TokenKind},
};

fn kinds_and_literals(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source)
        .into_iter()
        .map(|token| (token.kind, token.literal))
        .collect()
}

#[test]
fn test_tokenize_let_statement() {
    let tokens = kinds_and_literals("let five = 5;");

    assert_eq!(
        tokens,
        vec![
            (TokenKind::Let, "let".to_string()),
            (TokenKind::Ident, "five".to_string()),
            (TokenKind::Assign, "=".to_string()),
            (TokenKind::Int, "5".to_string()),
            (TokenKind::Semicolon, ";".to_string()),
            (TokenKind::EOF, "".to_string()),
        ]
    );
}

#[test]
fn test_tokenize_comparison_operators() {
    let tokens = kinds_and_literals("== != ! < >");

    assert_eq!(
        tokens,
        vec![
            (TokenKind::Eq, "==".to_string()),
            (TokenKind::NotEq, "!=".to_string()),
            (TokenKind::Bang, "!".to_string()),
            (TokenKind::Lt, "<".to_string()),
            (TokenKind::Gt, ">".to_string()),
            (TokenKind::EOF, "".to_string()),
        ]
    );
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("fn let if else true false return");

    assert_eq!(tokens[0].kind, TokenKind::Function);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::If);
    assert_eq!(tokens[3].kind, TokenKind::Else);
    assert_eq!(tokens[4].kind, TokenKind::True);
    assert_eq!(tokens[5].kind, TokenKind::False);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar_baz _underscore CamelCase lets");

    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[0].literal, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Ident);
    assert_eq!(tokens[1].literal, "bar_baz");
    assert_eq!(tokens[2].kind, TokenKind::Ident);
    assert_eq!(tokens[2].literal, "_underscore");
    assert_eq!(tokens[3].kind, TokenKind::Ident);
    assert_eq!(tokens[3].literal, "CamelCase");
    // Keywords only match whole words
    assert_eq!(tokens[4].kind, TokenKind::Ident);
    assert_eq!(tokens[4].literal, "lets");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_identifiers_stop_at_digits() {
    let tokens = kinds_and_literals("foo1");

    assert_eq!(
        tokens,
        vec![
            (TokenKind::Ident, "foo".to_string()),
            (TokenKind::Int, "1".to_string()),
            (TokenKind::EOF, "".to_string()),
        ]
    );
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 0 838383 -7");

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].literal, "42");
    assert_eq!(tokens[1].kind, TokenKind::Int);
    assert_eq!(tokens[1].literal, "0");
    assert_eq!(tokens[2].kind, TokenKind::Int);
    assert_eq!(tokens[2].literal, "838383");
    // The sign is a separate operator token
    assert_eq!(tokens[3].kind, TokenKind::Minus);
    assert_eq!(tokens[4].kind, TokenKind::Int);
    assert_eq!(tokens[4].literal, "7");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("= + - * / ! < >");

    assert_eq!(tokens[0].kind, TokenKind::Assign);
    assert_eq!(tokens[1].kind, TokenKind::Plus);
    assert_eq!(tokens[2].kind, TokenKind::Minus);
    assert_eq!(tokens[3].kind, TokenKind::Asterisk);
    assert_eq!(tokens[4].kind, TokenKind::Slash);
    assert_eq!(tokens[5].kind, TokenKind::Bang);
    assert_eq!(tokens[6].kind, TokenKind::Lt);
    assert_eq!(tokens[7].kind, TokenKind::Gt);
    assert_eq!(tokens[8].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = tokenize("( ) { } , ;");

    assert_eq!(tokens[0].kind, TokenKind::LParen);
    assert_eq!(tokens[1].kind, TokenKind::RParen);
    assert_eq!(tokens[2].kind, TokenKind::LBrace);
    assert_eq!(tokens[3].kind, TokenKind::RBrace);
    assert_eq!(tokens[4].kind, TokenKind::Comma);
    assert_eq!(tokens[5].kind, TokenKind::Semicolon);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_two_char_operators_without_spaces() {
    let tokens = kinds_and_literals("a==b!=!c=d");

    assert_eq!(
        tokens,
        vec![
            (TokenKind::Ident, "a".to_string()),
            (TokenKind::Eq, "==".to_string()),
            (TokenKind::Ident, "b".to_string()),
            (TokenKind::NotEq, "!=".to_string()),
            (TokenKind::Bang, "!".to_string()),
            (TokenKind::Ident, "c".to_string()),
            (TokenKind::Assign, "=".to_string()),
            (TokenKind::Ident, "d".to_string()),
            (TokenKind::EOF, "".to_string()),
        ]
    );
}

#[test]
fn test_operator_at_end_of_input() {
    let tokens = kinds_and_literals("x =");

    assert_eq!(
        tokens,
        vec![
            (TokenKind::Ident, "x".to_string()),
            (TokenKind::Assign, "=".to_string()),
            (TokenKind::EOF, "".to_string()),
        ]
    );
}

#[test]
fn test_tokenize_full_program() {
    let source = "let add = fn(x, y) {\n\tx + y;\n};\r\nlet result = add(five, ten);\nif (5 < 10) { return true; } else { return false; }";
    let kinds: Vec<TokenKind> = tokenize(source).into_iter().map(|t| t.kind).collect();

    use TokenKind::*;
    assert_eq!(
        kinds,
        vec![
            Let, Ident, Assign, Function, LParen, Ident, Comma, Ident, RParen, LBrace, Ident,
            Plus, Ident, Semicolon, RBrace, Semicolon, Let, Ident, Assign, Ident, LParen, Ident,
            Comma, Ident, RParen, Semicolon, If, LParen, Int, Lt, Int, RParen, LBrace, Return,
            True, Semicolon, RBrace, Else, LBrace, Return, False, Semicolon, RBrace, EOF,
        ]
    );
}

#[test]
fn test_illegal_characters() {
    let tokens = kinds_and_literals("a @ é #");

    assert_eq!(
        tokens,
        vec![
            (TokenKind::Ident, "a".to_string()),
            (TokenKind::Illegal, "@".to_string()),
            (TokenKind::Illegal, "é".to_string()),
            (TokenKind::Illegal, "#".to_string()),
            (TokenKind::EOF, "".to_string()),
        ]
    );
}

#[test]
fn test_nul_byte_is_illegal_not_eof() {
    let tokens = kinds_and_literals("a\0b");

    assert_eq!(
        tokens,
        vec![
            (TokenKind::Ident, "a".to_string()),
            (TokenKind::Illegal, "\0".to_string()),
            (TokenKind::Ident, "b".to_string()),
            (TokenKind::EOF, "".to_string()),
        ]
    );
}

#[test]
fn test_empty_and_whitespace_only_input() {
    assert_eq!(kinds_and_literals(""), vec![(TokenKind::EOF, "".to_string())]);
    assert_eq!(
        kinds_and_literals(" \t\r\n "),
        vec![(TokenKind::EOF, "".to_string())]
    );
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    for _ in 0..5 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.literal, "");
        assert_eq!(token.span.start.0, 1);
    }
}

#[test]
fn test_iterator_stops_after_eof() {
    let mut lexer = Lexer::new("let x");

    assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Let));
    assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Ident));
    assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::EOF));
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let five == 55;");

    assert_eq!((tokens[0].span.start.0, tokens[0].span.end.0), (0, 3));
    assert_eq!((tokens[1].span.start.0, tokens[1].span.end.0), (4, 8));
    assert_eq!((tokens[2].span.start.0, tokens[2].span.end.0), (9, 11));
    assert_eq!((tokens[3].span.start.0, tokens[3].span.end.0), (12, 14));
    assert_eq!((tokens[4].span.start.0, tokens[4].span.end.0), (14, 15));
    assert_eq!((tokens[5].span.start.0, tokens[5].span.end.0), (15, 15));
}

#[test]
fn test_lookup_ident() {
    assert_eq!(lookup_ident("fn"), TokenKind::Function);
    assert_eq!(lookup_ident("return"), TokenKind::Return);
    assert_eq!(lookup_ident("function"), TokenKind::Ident);
    assert_eq!(lookup_ident("Let"), TokenKind::Ident);
}

#[test]
fn test_token_kind_display_uses_vocabulary_names() {
    assert_eq!(TokenKind::Assign.to_string(), "ASSIGN");
    assert_eq!(TokenKind::NotEq.to_string(), "NOT_EQ");
    assert_eq!(TokenKind::Function.to_string(), "FUNCTION");
    assert_eq!(TokenKind::EOF.to_string(), "EOF");
}
