use crate::{
    ast::{
        ast::{Expr, ExprWrapper},
        expressions::{BooleanLiteral, CallExpr, Identifier, InfixExpr, IntegerLiteral, PrefixExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{source::TokenSource, tokens::TokenKind},
    Span,
};

use super::{lookups::Precedence, parser::Parser};

/// Pratt loop: parses the operand the current token starts, then keeps
/// folding infix operators into it while they bind tighter than `precedence`.
///
/// On return the current token is the last token of the expression.
pub fn parse_expr<S: TokenSource>(parser: &mut Parser<S>, precedence: Precedence) -> Option<ExprWrapper> {
    if !parser.enter_nesting() {
        return None;
    }

    let expr = parse_nested_expr(parser, precedence);
    parser.exit_nesting();

    expr
}

fn parse_nested_expr<S: TokenSource>(parser: &mut Parser<S>, precedence: Precedence) -> Option<ExprWrapper> {
    let token_kind = parser.current_token_kind();
    let Some(prefix) = parser.get_prefix_lookup().get(&token_kind).copied() else {
        parser.no_prefix_parse_fn_error(token_kind);
        return None;
    };

    let mut left = prefix(parser)?;

    while !parser.peek_token_is(TokenKind::Semicolon) && precedence < parser.peek_precedence() {
        let peek_kind = parser.peek_token().kind;
        let Some(infix) = parser.get_infix_lookup().get(&peek_kind).copied() else {
            return Some(left);
        };

        parser.advance();
        left = infix(parser, left)?;
    }

    Some(left)
}

pub fn parse_identifier<S: TokenSource>(parser: &mut Parser<S>) -> Option<ExprWrapper> {
    let token = parser.current_token().clone();

    Some(ExprWrapper::new(Identifier {
        value: token.value.clone(),
        token,
    }))
}

pub fn parse_integer_literal<S: TokenSource>(parser: &mut Parser<S>) -> Option<ExprWrapper> {
    let token = parser.current_token().clone();

    match token.value.parse::<i64>() {
        Ok(value) => Some(ExprWrapper::new(IntegerLiteral { token, value })),
        Err(_) => {
            parser.push_error(Error::new(
                ErrorImpl::IntegerParseError {
                    token: token.value.clone(),
                },
                token.span.start.clone(),
            ));
            None
        }
    }
}

pub fn parse_boolean<S: TokenSource>(parser: &mut Parser<S>) -> Option<ExprWrapper> {
    let token = parser.current_token().clone();

    Some(ExprWrapper::new(BooleanLiteral {
        value: token.kind == TokenKind::True,
        token,
    }))
}

pub fn parse_prefix_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<ExprWrapper> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, Precedence::Prefix)?;

    Some(ExprWrapper::new(PrefixExpr {
        span: Span {
            start: operator_token.span.start.clone(),
            end: right.get_span().end.clone(),
        },
        operator: operator_token.value.clone(),
        token: operator_token,
        right,
    }))
}

pub fn parse_infix_expr<S: TokenSource>(parser: &mut Parser<S>, left: ExprWrapper) -> Option<ExprWrapper> {
    let operator_token = parser.current_token().clone();
    let precedence = parser.current_precedence();
    parser.advance();

    // Same precedence on the right keeps operators left-associative.
    let right = parse_expr(parser, precedence)?;

    Some(ExprWrapper::new(InfixExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        operator: operator_token.value.clone(),
        token: operator_token,
        left,
        right,
    }))
}

pub fn parse_grouped_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<ExprWrapper> {
    parser.advance();
    let expr = parse_expr(parser, Precedence::Lowest)?;

    if !parser.expect_peek(TokenKind::RParen) {
        return None;
    }

    Some(expr)
}

pub fn parse_call_expr<S: TokenSource>(parser: &mut Parser<S>, function: ExprWrapper) -> Option<ExprWrapper> {
    let token = parser.current_token().clone();
    let arguments = parse_call_arguments(parser)?;

    Some(ExprWrapper::new(CallExpr {
        span: Span {
            start: function.get_span().start.clone(),
            end: parser.current_token().span.end.clone(),
        },
        token,
        function,
        arguments,
    }))
}

fn parse_call_arguments<S: TokenSource>(parser: &mut Parser<S>) -> Option<Vec<ExprWrapper>> {
    let mut args = vec![];

    if parser.peek_token_is(TokenKind::RParen) {
        parser.advance();
        return Some(args);
    }

    parser.advance();
    args.push(parse_expr(parser, Precedence::Lowest)?);

    while parser.peek_token_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        args.push(parse_expr(parser, Precedence::Lowest)?);
    }

    if !parser.expect_peek(TokenKind::RParen) {
        return None;
    }

    Some(args)
}
