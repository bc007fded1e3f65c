//! Demo error types.
//!
//! Two kinds exist: invalid-input errors (a value outside a demo's tiny
//! closed domain) and reporter write failures. Neither is ever recovered
//! from locally -- the first error aborts the whole run.

use thiserror::Error;

/// Errors a demo unit can surface while running.
#[derive(Debug, Error)]
pub enum DemoError {
    /// An arithmetic demo was given an operator outside `+`/`-`.
    #[error("unknown operator {token:?} (expected \"+\" or \"-\")")]
    UnknownOperator { token: String },

    /// The flyweight factory was asked for a key outside its closed set.
    #[error("unknown symbol key {key} (expected 0-3)")]
    UnknownSymbol { key: u8 },

    /// An expression did not split into `<left> <operator> <right>`.
    #[error("malformed expression {expr:?} (expected \"<left> <op> <right>\")")]
    MalformedExpression { expr: String },

    /// Writing a narration line to the reporter failed.
    #[error("reporter write failed: {0}")]
    Io(#[from] std::io::Error),
}

impl DemoError {
    /// Whether this error came from a value outside a demo's closed input
    /// domain, as opposed to a reporter write failure.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            DemoError::UnknownOperator { .. }
                | DemoError::UnknownSymbol { .. }
                | DemoError::MalformedExpression { .. }
        )
    }
}
