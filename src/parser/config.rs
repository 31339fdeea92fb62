//! Parser options.
//!
//! The defaults reproduce the classic behavior exactly. The other settings
//! change how many diagnostics and statements a malformed input produces.

/// What the parser does after a statement fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Recovery {
    /// Drop the statement and step one token forward. Tokens left over from
    /// the failed statement are parsed as if they started new statements.
    #[default]
    Statement,
    /// Drop the statement and skip to its `;`, or to just before the next
    /// `let` / `return`, before stepping forward.
    Synchronize,
}

/// Expression nesting allowed before the parser gives up on a statement.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    pub recovery: Recovery,
    /// Record a diagnostic when a token has no prefix parse function instead
    /// of silently dropping the statement.
    pub report_missing_prefix: bool,
    /// Deepest expression nesting parsed before recording a diagnostic.
    pub max_nesting_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            recovery: Recovery::default(),
            report_missing_prefix: false,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl ParserConfig {
    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    pub fn with_recovery(mut self, recovery: Recovery) -> Self {
        self.recovery = recovery;
        self
    }

    pub fn with_missing_prefix_reports(mut self, report: bool) -> Self {
        self.report_missing_prefix = report;
        self
    }
}
