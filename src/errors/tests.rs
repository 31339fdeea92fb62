//! Unit tests for error handling.
//!
//! This module contains tests for error types and diagnostic messages.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

fn unexpected(expected: TokenKind, actual: TokenKind) -> Error {
    Error::new(
        ErrorImpl::UnexpectedToken { expected, actual },
        Position(4, Rc::new("test.mk".to_string())),
    )
}

#[test]
fn test_unexpected_token_message() {
    let error = unexpected(TokenKind::Ident, TokenKind::Int);

    assert_eq!(
        error.to_string(),
        "expected next token to be 'IDENT', got 'INT' instead"
    );
    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_unexpected_operator_message() {
    let error = unexpected(TokenKind::Ident, TokenKind::Assign);

    assert_eq!(
        error.to_string(),
        "expected next token to be 'IDENT', got '=' instead"
    );
}

#[test]
fn test_error_position() {
    let error = unexpected(TokenKind::Assign, TokenKind::EOF);

    assert_eq!(error.get_position().0, 4);
    assert_eq!(error.get_position().1.as_str(), "test.mk");
}

#[test]
fn test_no_prefix_parse_fn_message() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::Semicolon,
        },
        Position::null(),
    );

    assert_eq!(error.to_string(), "no prefix parse function for ';' found");
    assert_eq!(error.get_error_name(), "NoPrefixParseFn");
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_integer_parse_error() {
    let error = Error::new(
        ErrorImpl::IntegerParseError {
            token: "99999999999999999999".to_string(),
        },
        Position::null(),
    );

    assert_eq!(
        error.to_string(),
        "could not parse '99999999999999999999' as integer"
    );
    assert_eq!(error.get_error_name(), "IntegerParseError");
}

#[test]
fn test_nesting_too_deep() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 128 }, Position::null());

    assert_eq!(
        error.to_string(),
        "expression nesting exceeds the limit of 128 levels"
    );
    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_error_tip_display() {
    let tip = unexpected(TokenKind::Ident, TokenKind::Int).get_tip();
    assert_eq!(tip.to_string(), "bindings need a name, e.g. `let x = 5;`");

    let tip = unexpected(TokenKind::Assign, TokenKind::Int).get_tip();
    assert!(matches!(tip, ErrorTip::None));
    assert_eq!(tip.to_string(), "");
}
