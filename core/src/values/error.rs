//! Error payload carried by [`Value::Error`](super::Value::Error).
//!
//! Errors are ordinary values: once produced they are never re-evaluated,
//! only forwarded to the top of the expression and printed.

use core::fmt;

/// What went wrong. The message for each kind is fixed and user-visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// `/` or `%` with a zero right operand.
    DivisionByZero,
    /// A symbol outside the operator set in operator position.
    BadOperator,
    /// A literal that does not fit in a signed 64-bit integer.
    BadNumber,
    /// An arithmetic result that does not fit in a signed 64-bit integer.
    Overflow,
    /// The value tree is nested deeper than the evaluator allows.
    DepthExceeded,
}

impl ErrorKind {
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::DivisionByZero => "Division by Zero!",
            ErrorKind::BadOperator => "Invalid Operator!",
            ErrorKind::BadNumber => "Invalid Number!",
            ErrorKind::Overflow => "Integer Overflow!",
            ErrorKind::DepthExceeded => "Nesting Too Deep!",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A language-level error.
///
/// The kind is private: every error is built by the constructor named after
/// it, never from a loose tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    kind: ErrorKind,
}

impl EvalError {
    pub fn division_by_zero() -> Self {
        Self {
            kind: ErrorKind::DivisionByZero,
        }
    }

    pub fn bad_operator() -> Self {
        Self {
            kind: ErrorKind::BadOperator,
        }
    }

    pub fn bad_number() -> Self {
        Self {
            kind: ErrorKind::BadNumber,
        }
    }

    pub fn overflow() -> Self {
        Self {
            kind: ErrorKind::Overflow,
        }
    }

    pub fn depth_exceeded() -> Self {
        Self {
            kind: ErrorKind::DepthExceeded,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}
