//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the top-level parse loop.
//! The parser reads tokens lazily through a two-token window (`current` and
//! `peek`) and never holds the whole token stream.
//!
//! It maintains lookup tables for:
//! - Prefix parse functions, keyed by the token that starts an expression
//! - Infix parse functions, keyed by the operator token
//! - Operator precedence

use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        source::TokenSource,
        tokens::{Token, TokenKind},
    },
};

use super::{
    config::{ParserConfig, Recovery},
    lookups::{
        create_token_lookups, InfixLookup, InfixParseFn, Precedence, PrecedenceLookup,
        PrefixLookup, PrefixParseFn,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// A parser is bound to one token source and is meant to be used for a
/// single `parse_program` call.
pub struct Parser<S: TokenSource> {
    /// Where tokens come from
    source: S,
    /// The token being parsed
    current_token: Token,
    /// One token of lookahead
    peek_token: Token,
    /// Diagnostics in the order they were found
    errors: Vec<Error>,
    /// Lookup table for prefix expression handlers
    prefix_lookup: PrefixLookup<S>,
    /// Lookup table for infix expression handlers
    infix_lookup: InfixLookup<S>,
    /// Lookup table for operator precedence
    precedence_lookup: PrecedenceLookup,
    /// How many `parse_expr` calls are active
    depth: usize,
    config: ParserConfig,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a parser with the default configuration.
    pub fn new(source: S) -> Self {
        Parser::with_config(source, ParserConfig::default())
    }

    /// Creates a parser, primes the lookahead window with the first two
    /// tokens and installs the expression lookup tables.
    pub fn with_config(mut source: S, config: ParserConfig) -> Self {
        let current_token = source.next_token();
        let peek_token = source.next_token();

        let mut parser = Parser {
            source,
            current_token,
            peek_token,
            errors: vec![],
            prefix_lookup: HashMap::new(),
            infix_lookup: HashMap::new(),
            precedence_lookup: HashMap::new(),
            depth: 0,
            config,
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    /// Shifts the lookahead into the current slot and pulls a new lookahead
    /// from the source.
    pub fn advance(&mut self) {
        let next = self.source.next_token();
        self.current_token = std::mem::replace(&mut self.peek_token, next);
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current_token.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Advances if the lookahead is of the expected kind.
    ///
    /// Otherwise records an unexpected-token diagnostic and leaves the
    /// window where it is.
    pub fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.advance();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected,
                actual: self.peek_token.kind,
            },
            self.peek_token.span.start.clone(),
        );
        self.push_error(error);
    }

    /// Called when the current token cannot start an expression.
    ///
    /// Only recorded as a diagnostic when the configuration asks for it;
    /// by default the statement is dropped silently.
    pub fn no_prefix_parse_fn_error(&mut self, kind: TokenKind) {
        if self.config.report_missing_prefix {
            let error = Error::new(
                ErrorImpl::NoPrefixParseFn { kind },
                self.current_token.span.start.clone(),
            );
            self.push_error(error);
        } else {
            debug!("no prefix parse function for '{}', dropping statement", kind);
        }
    }

    /// Enters one level of expression nesting.
    ///
    /// Past the configured limit this records a diagnostic, skips the rest
    /// of the statement and returns false; the caller must not recurse.
    pub fn enter_nesting(&mut self) -> bool {
        if self.depth >= self.config.max_nesting_depth {
            let error = Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: self.config.max_nesting_depth,
                },
                self.current_token.span.start.clone(),
            );
            self.push_error(error);
            self.skip_to_terminator();
            return false;
        }

        self.depth += 1;
        true
    }

    pub fn exit_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Advances until the current token is `;` or end-of-input.
    pub fn skip_to_terminator(&mut self) {
        while !self.current_token_is(TokenKind::Semicolon) && !self.current_token_is(TokenKind::EOF) {
            self.advance();
        }
    }

    pub fn push_error(&mut self, error: Error) {
        debug!("{} ({})", error, error.get_position().0);
        self.errors.push(error);
    }

    /// The diagnostics recorded so far, in order.
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    /// The diagnostics recorded so far, as messages.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Returns a reference to the prefix lookup table.
    pub fn get_prefix_lookup(&self) -> &PrefixLookup<S> {
        &self.prefix_lookup
    }

    /// Returns a reference to the infix lookup table.
    pub fn get_infix_lookup(&self) -> &InfixLookup<S> {
        &self.infix_lookup
    }

    /// Returns a reference to the precedence lookup table.
    pub fn get_precedence_lookup(&self) -> &PrecedenceLookup {
        &self.precedence_lookup
    }

    fn precedence_of(&self, kind: TokenKind) -> Precedence {
        self.precedence_lookup
            .get(&kind)
            .copied()
            .unwrap_or(Precedence::Lowest)
    }

    pub fn peek_precedence(&self) -> Precedence {
        self.precedence_of(self.peek_token.kind)
    }

    pub fn current_precedence(&self) -> Precedence {
        self.precedence_of(self.current_token.kind)
    }

    /// Registers a prefix handler for a token. A later registration for the
    /// same kind replaces the earlier one.
    pub fn register_prefix(&mut self, kind: TokenKind, prefix_fn: PrefixParseFn<S>) {
        if self.prefix_lookup.insert(kind, prefix_fn).is_some() {
            debug!("prefix parse function for '{}' replaced", kind);
        }
    }

    /// Registers an infix handler and its precedence for an operator token.
    /// A later registration for the same kind replaces the earlier one.
    pub fn register_infix(
        &mut self,
        kind: TokenKind,
        precedence: Precedence,
        infix_fn: InfixParseFn<S>,
    ) {
        self.precedence_lookup.insert(kind, precedence);
        if self.infix_lookup.insert(kind, infix_fn).is_some() {
            debug!("infix parse function for '{}' replaced", kind);
        }
    }

    /// Parses statements until end-of-input.
    ///
    /// A statement that fails to parse contributes no node; the loop always
    /// steps past the current token afterwards, so it cannot stall.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_token_is(TokenKind::EOF) {
            trace!("statement at '{}'", self.current_token.kind);

            match parse_stmt(self) {
                Some(stmt) => program.statements.push(stmt),
                None if self.config.recovery == Recovery::Synchronize => self.synchronize(),
                None => {}
            }

            self.advance();
        }

        debug!(
            "parsed {} statements with {} diagnostics",
            program.statements.len(),
            self.errors.len()
        );

        program
    }

    /// Skips to the end of a broken statement: its `;`, end-of-input, or the
    /// token before the next `let` / `return`.
    fn synchronize(&mut self) {
        while !self.current_token_is(TokenKind::Semicolon)
            && !self.current_token_is(TokenKind::EOF)
            && !self.peek_token_is(TokenKind::Let)
            && !self.peek_token_is(TokenKind::Return)
        {
            self.advance();
        }
    }
}

/// Parses a whole token source into a program.
///
/// This is the main entry point for parsing. It creates a parser with the
/// default configuration, runs it to end-of-input and discards it.
///
/// # Returns
///
/// A tuple containing the program and the diagnostics found along the way.
pub fn parse<S: TokenSource>(source: S) -> (Program, Vec<Error>) {
    parse_with_config(source, ParserConfig::default())
}

/// Like `parse`, with explicit parser options.
pub fn parse_with_config<S: TokenSource>(source: S, config: ParserConfig) -> (Program, Vec<Error>) {
    let mut parser = Parser::with_config(source, config);
    let program = parser.parse_program();

    (program, parser.errors)
}
