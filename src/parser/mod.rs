//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens into
//! a `Program`. Statements are parsed by recursive descent; expressions use a
//! Pratt parser driven by lookup tables:
//!
//! - Statement parsing (`let`, `return`, expression statements)
//! - Expression parsing (prefix and infix operators, grouping, calls)
//! - Diagnostic collection and statement-local error recovery
//!
//! Prefix parse functions handle a token that starts an expression; infix
//! parse functions extend an already parsed left operand. Operator
//! precedence decides how far each infix loop reaches.

pub mod config;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
