//! Lexical analysis module for the front-end.
//!
//! This module contains the token model and the lexer that converts source
//! code into tokens on demand. It handles:
//!
//! - The token kind catalog and reserved words
//! - The pull-based `TokenSource` boundary the parser reads from
//! - Lazy tokenization of source code using regex patterns
//! - Token position tracking for diagnostics

pub mod lexer;
pub mod source;
pub mod tokens;

#[cfg(test)]
mod tests;
