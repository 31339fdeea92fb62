use log::trace;

use crate::{
    ast::{
        ast::{Expr, ExprWrapper, StmtWrapper},
        expressions::Identifier,
        statements::{ExpressionStmt, LetStmt, ReturnStmt},
    },
    lexer::{source::TokenSource, tokens::TokenKind},
    parser::{expr::parse_expr, lookups::Precedence},
    Span,
};

use super::parser::Parser;

/// Parses the statement starting at the current token.
///
/// On success the current token is the statement's last token (its `;` when
/// present). On failure no node is produced and the window is left wherever
/// the failed attempt stopped.
pub fn parse_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Option<StmtWrapper> {
    match parser.current_token_kind() {
        TokenKind::Let => parse_let_stmt(parser).map(StmtWrapper::new),
        TokenKind::Return => parse_return_stmt(parser).map(StmtWrapper::new),
        _ => parse_expression_stmt(parser).map(StmtWrapper::new),
    }
}

pub fn parse_let_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Option<LetStmt> {
    let start_token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Ident) {
        return None;
    }

    let name_token = parser.current_token().clone();
    let name = Identifier {
        value: name_token.value.clone(),
        token: name_token,
    };

    if !parser.expect_peek(TokenKind::Assign) {
        return None;
    }

    parser.advance();
    let value = parse_stmt_value(parser);

    trace!("let {}", name.value);

    Some(LetStmt {
        span: Span {
            start: start_token.span.start.clone(),
            end: parser.current_token().span.end.clone(),
        },
        token: start_token,
        name,
        value,
    })
}

pub fn parse_return_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Option<ReturnStmt> {
    let start_token = parser.current_token().clone();
    parser.advance();

    let value;
    if parser.current_token_is(TokenKind::Semicolon) || parser.current_token_is(TokenKind::EOF) {
        value = None;
    } else {
        value = parse_stmt_value(parser);
    }

    Some(ReturnStmt {
        span: Span {
            start: start_token.span.start.clone(),
            end: parser.current_token().span.end.clone(),
        },
        token: start_token,
        value,
    })
}

/// Parses the value of a `let` or `return` and consumes an optional `;`.
///
/// A value that does not parse leaves the statement without one: the rest of
/// it is skipped up to its `;` so the statement itself still counts.
fn parse_stmt_value<S: TokenSource>(parser: &mut Parser<S>) -> Option<ExprWrapper> {
    let Some(value) = parse_expr(parser, Precedence::Lowest) else {
        trace!("unparsed value at '{}', skipping to ';'", parser.current_token_kind());
        parser.skip_to_terminator();
        return None;
    };

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(value)
}

pub fn parse_expression_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Option<ExpressionStmt> {
    let start_token = parser.current_token().clone();
    let expression = parse_expr(parser, Precedence::Lowest)?;

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(ExpressionStmt {
        span: Span {
            start: start_token.span.start.clone(),
            end: expression.get_span().end.clone(),
        },
        token: start_token,
        expression,
    })
}
