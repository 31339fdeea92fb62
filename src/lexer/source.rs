//! The pull-based boundary between token producers and the parser.

use std::rc::Rc;

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{Token, TokenKind};

/// Anything that can hand the parser one token at a time.
///
/// Implementations must eventually return an `EOF` token and keep returning
/// one on every later call.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

impl<T: TokenSource + ?Sized> TokenSource for &mut T {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

impl<T: TokenSource + ?Sized> TokenSource for Box<T> {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

/// Adapts an iterator of already-built tokens into a `TokenSource`.
///
/// Once the iterator is exhausted (or after it yields `EOF`) the stream keeps
/// answering with an `EOF` token positioned after the last token seen.
pub struct TokenStream<I: Iterator<Item = Token>> {
    tokens: I,
    end: Option<Token>,
    last_position: Position,
}

impl<I: Iterator<Item = Token>> TokenStream<I> {
    pub fn new<T: IntoIterator<IntoIter = I>>(tokens: T) -> Self {
        TokenStream {
            tokens: tokens.into_iter(),
            end: None,
            last_position: Position(0, Rc::new(String::from("<stream>"))),
        }
    }
}

impl<I: Iterator<Item = Token>> TokenSource for TokenStream<I> {
    fn next_token(&mut self) -> Token {
        if let Some(end) = &self.end {
            return end.clone();
        }

        match self.tokens.next() {
            Some(token) if token.kind == TokenKind::EOF => {
                self.end = Some(token.clone());
                token
            }
            Some(token) => {
                self.last_position = token.span.end.clone();
                token
            }
            None => {
                let eof = MK_TOKEN!(
                    TokenKind::EOF,
                    String::new(),
                    Span::at(self.last_position.clone())
                );
                self.end = Some(eof.clone());
                eof
            }
        }
    }
}
