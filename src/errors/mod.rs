//! Error types and error handling for the front-end.
//!
//! This module defines the diagnostics the parser records. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each kind of syntax problem
//! - Error formatting and display functionality
//! - Helpful suggestions for each diagnostic

pub mod errors;

#[cfg(test)]
mod tests;
