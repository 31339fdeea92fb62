use std::collections::HashMap;

use crate::{ast::ast::ExprWrapper, lexer::{source::TokenSource, tokens::TokenKind}};

use super::{expr::*, parser::Parser};

/// Binding strength of operators, weakest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Equals,      // == !=
    LessGreater, // < >
    Sum,         // + -
    Product,     // * /
    Prefix,      // -x !x
    Call,        // f(x)
}

pub type PrefixParseFn<S> = fn(&mut Parser<S>) -> Option<ExprWrapper>;
pub type InfixParseFn<S> = fn(&mut Parser<S>, ExprWrapper) -> Option<ExprWrapper>;

pub fn create_token_lookups<S: TokenSource>(parser: &mut Parser<S>) {
    // Equality and comparison
    parser.register_infix(TokenKind::Eq, Precedence::Equals, parse_infix_expr);
    parser.register_infix(TokenKind::NotEq, Precedence::Equals, parse_infix_expr);
    parser.register_infix(TokenKind::Lt, Precedence::LessGreater, parse_infix_expr);
    parser.register_infix(TokenKind::Gt, Precedence::LessGreater, parse_infix_expr);

    // Additive and multiplicative
    parser.register_infix(TokenKind::Plus, Precedence::Sum, parse_infix_expr);
    parser.register_infix(TokenKind::Minus, Precedence::Sum, parse_infix_expr);
    parser.register_infix(TokenKind::Asterisk, Precedence::Product, parse_infix_expr);
    parser.register_infix(TokenKind::Slash, Precedence::Product, parse_infix_expr);

    parser.register_infix(TokenKind::LParen, Precedence::Call, parse_call_expr);

    // Literals and symbols
    parser.register_prefix(TokenKind::Ident, parse_identifier);
    parser.register_prefix(TokenKind::Int, parse_integer_literal);
    parser.register_prefix(TokenKind::True, parse_boolean);
    parser.register_prefix(TokenKind::False, parse_boolean);
    parser.register_prefix(TokenKind::Bang, parse_prefix_expr);
    parser.register_prefix(TokenKind::Minus, parse_prefix_expr);
    parser.register_prefix(TokenKind::LParen, parse_grouped_expr);
}

// Lookup tables inside parser struct, so it's easier
pub type PrefixLookup<S> = HashMap<TokenKind, PrefixParseFn<S>>;
pub type InfixLookup<S> = HashMap<TokenKind, InfixParseFn<S>>;
pub type PrecedenceLookup = HashMap<TokenKind, Precedence>;
