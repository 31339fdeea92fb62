use std::rc::Rc;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::{
    source::TokenSource,
    tokens::{Token, TokenKind},
};

/// Builds a token from the matched text, or returns `None` for skipped input.
pub type RegexHandler = fn(&mut Lexer, &str) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(pattern).expect("token patterns are valid regexes"),
            handler,
        }
    }
}

lazy_static! {
    // Patterns are tried in order and anchored at the cursor, so longer
    // operators must come before their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new("^\\s+", skip_handler),
        RegexPattern::new("^//[^\n]*", skip_handler),
        RegexPattern::new("^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        RegexPattern::new("^[0-9]+", number_handler),
        RegexPattern::new("^==", MK_DEFAULT_HANDLER!(TokenKind::Eq, "==")),
        RegexPattern::new("^!=", MK_DEFAULT_HANDLER!(TokenKind::NotEq, "!=")),
        RegexPattern::new("^=", MK_DEFAULT_HANDLER!(TokenKind::Assign, "=")),
        RegexPattern::new("^!", MK_DEFAULT_HANDLER!(TokenKind::Bang, "!")),
        RegexPattern::new("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        RegexPattern::new("^-", MK_DEFAULT_HANDLER!(TokenKind::Minus, "-")),
        RegexPattern::new("^\\*", MK_DEFAULT_HANDLER!(TokenKind::Asterisk, "*")),
        RegexPattern::new("^/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
        RegexPattern::new("^<", MK_DEFAULT_HANDLER!(TokenKind::Lt, "<")),
        RegexPattern::new("^>", MK_DEFAULT_HANDLER!(TokenKind::Gt, ">")),
        RegexPattern::new("^,", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        RegexPattern::new("^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        RegexPattern::new("^\\(", MK_DEFAULT_HANDLER!(TokenKind::LParen, "(")),
        RegexPattern::new("^\\)", MK_DEFAULT_HANDLER!(TokenKind::RParen, ")")),
        RegexPattern::new("^\\{", MK_DEFAULT_HANDLER!(TokenKind::LBrace, "{")),
        RegexPattern::new("^\\}", MK_DEFAULT_HANDLER!(TokenKind::RBrace, "}")),
    ];
}

/// A lazy lexer: each call to `next_token` scans just far enough to produce
/// one token.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// The span covering the next `len` bytes.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    fn eof_token(&self) -> Token {
        MK_TOKEN!(TokenKind::EOF, String::new(), Span::at(self.position()))
    }

    fn illegal_token(&mut self, ch: char) -> Token {
        let span = self.span_of(ch.len_utf8());
        self.advance_n(ch.len_utf8());
        MK_TOKEN!(TokenKind::Illegal, ch.to_string(), span)
    }
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Token {
        loop {
            let Some(ch) = self.remainder().chars().next() else {
                return self.eof_token();
            };

            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(self.remainder())
                    .map(|found| (pattern.handler, found.as_str().to_string()))
            });

            let token = match matched {
                Some((handler, text)) => handler(self, &text),
                None => Some(self.illegal_token(ch)),
            };

            if let Some(token) = token {
                trace!("lexed {} {:?} at {}", token.kind, token.value, token.span.start.0);
                return token;
            }
        }
    }
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    let span = lexer.span_of(matched.len());
    lexer.advance_n(matched.len());
    Some(MK_TOKEN!(TokenKind::Int, matched.to_string(), span))
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    lexer.advance_n(matched.len());
    None
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    let span = lexer.span_of(matched.len());
    lexer.advance_n(matched.len());
    Some(MK_TOKEN!(
        TokenKind::lookup_ident(matched),
        matched.to_string(),
        span
    ))
}

/// Tokenizes a whole source string, including the trailing `EOF` token.
///
/// The parser pulls from a `Lexer` directly; this is for callers that want
/// the token list itself.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
