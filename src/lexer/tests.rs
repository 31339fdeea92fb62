//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Operators and delimiters
//! - Comments and whitespace
//! - Illegal characters and end-of-input behavior

use super::{
    lexer::{tokenize, Lexer},
    source::{TokenSource, TokenStream},
    tokens::TokenKind,
};

#[test]
fn test_tokenize_keywords() {
    let source = "fn let true false if else return".to_string();
    let tokens = tokenize(source, Some("test.mk".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Function);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::True);
    assert_eq!(tokens[3].kind, TokenKind::False);
    assert_eq!(tokens[4].kind, TokenKind::If);
    assert_eq!(tokens[5].kind, TokenKind::Else);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore CamelCase letter".to_string();
    let tokens = tokenize(source, Some("test.mk".to_string()));

    let values: Vec<&str> = tokens[..6].iter().map(|t| t.value.as_str()).collect();
    assert_eq!(values, ["foo", "bar", "baz_123", "_underscore", "CamelCase", "letter"]);
    assert!(tokens[..6].iter().all(|t| t.kind == TokenKind::Ident));
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integers() {
    let source = "5 10 0 8999".to_string();
    let tokens = tokenize(source, Some("test.mk".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].value, "5");
    assert_eq!(tokens[1].value, "10");
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].value, "8999");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    let source = "= + - ! * / < > == !=".to_string();
    let tokens = tokenize(source, Some("test.mk".to_string()));

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Assign,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Bang,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::Eq,
            TokenKind::NotEq,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_delimiters() {
    let source = "( ) { } , ;".to_string();
    let tokens = tokenize(source, Some("test.mk".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::LParen);
    assert_eq!(tokens[1].kind, TokenKind::RParen);
    assert_eq!(tokens[2].kind, TokenKind::LBrace);
    assert_eq!(tokens[3].kind, TokenKind::RBrace);
    assert_eq!(tokens[4].kind, TokenKind::Comma);
    assert_eq!(tokens[5].kind, TokenKind::Semicolon);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_adjacent_operators() {
    let source = "x==!y".to_string();
    let tokens = tokenize(source, Some("test.mk".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[1].kind, TokenKind::Eq);
    assert_eq!(tokens[2].kind, TokenKind::Bang);
    assert_eq!(tokens[3].kind, TokenKind::Ident);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_comments() {
    let source = "let x = 5; // this is a comment\nlet y = 10;".to_string();
    let tokens = tokenize(source, Some("test.mk".to_string()));

    assert_eq!(tokens.len(), 11);
    assert_eq!(tokens[5].kind, TokenKind::Let);
    assert_eq!(tokens[6].value, "y");
    assert_eq!(tokens[10].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_simple_program() {
    let source = "let x = 42;".to_string();
    let tokens = tokenize(source, Some("test.mk".to_string()));

    assert_eq!(tokens.len(), 6); // let, x, =, 42, ;, EOF
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Ident);
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[2].kind, TokenKind::Assign);
    assert_eq!(tokens[3].kind, TokenKind::Int);
    assert_eq!(tokens[3].value, "42");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_token_positions() {
    let source = "let answer = 42;".to_string();
    let tokens = tokenize(source, Some("test.mk".to_string()));

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[1].span.start.0, 4);
    assert_eq!(tokens[1].span.end.0, 10);
    assert_eq!(tokens[3].span.start.0, 13);
    assert_eq!(tokens[5].span.start.0, 16);
    assert_eq!(tokens[0].span.start.1.as_str(), "test.mk");
}

#[test]
fn test_illegal_character_does_not_stop_lexing() {
    let source = "a @ b".to_string();
    let tokens = tokenize(source, None);

    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].value, "@");
    assert_eq!(tokens[2].kind, TokenKind::Ident);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_illegal_multibyte_character() {
    let tokens = tokenize("é1".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].value, "é");
    assert_eq!(tokens[1].kind, TokenKind::Int);
    assert_eq!(tokens[1].span.start.0, 2);
}

#[test]
fn test_empty_source() {
    let tokens = tokenize(String::new(), None);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_lexer_eof_is_idempotent() {
    let mut lexer = Lexer::new("x".to_string(), None);

    assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    for _ in 0..3 {
        assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    }
}

#[test]
fn test_token_stream_synthesizes_eof() {
    let tokens = tokenize("a b".to_string(), None);
    let without_eof: Vec<_> = tokens.into_iter().filter(|t| t.kind != TokenKind::EOF).collect();
    let mut stream = TokenStream::new(without_eof);

    assert_eq!(stream.next_token().value, "a");
    assert_eq!(stream.next_token().value, "b");

    let eof = stream.next_token();
    assert_eq!(eof.kind, TokenKind::EOF);
    assert_eq!(eof.span.start.0, 3);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_token_stream_stops_at_eof() {
    let mut tokens = tokenize("a".to_string(), None);
    tokens.extend(tokenize("b".to_string(), None));
    let mut stream = TokenStream::new(tokens);

    assert_eq!(stream.next_token().value, "a");
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_token_kind_display() {
    assert_eq!(TokenKind::Ident.to_string(), "IDENT");
    assert_eq!(TokenKind::Int.to_string(), "INT");
    assert_eq!(TokenKind::Assign.to_string(), "=");
    assert_eq!(TokenKind::EOF.to_string(), "EOF");
    assert_eq!(TokenKind::Let.to_string(), "LET");
}
