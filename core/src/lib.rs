#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Core of the Lispy prefix-arithmetic language.
//!
//! A line of input flows through four stages, each a separate module:
//!
//! 1. [`parser`] matches the text against the grammar and builds a [`parser::ParseTree`].
//! 2. [`reader`] turns the parse tree into a [`Value`] tree.
//! 3. [`evaluator`] folds the value tree down to a number or an error.
//! 4. [`values::render`] prints the result.
//!
//! [`session`] wires the stages together behind a line source and a line sink.
//!
//! ```
//! use lispy_core::{evaluator, parser, reader, values::render};
//!
//! let tree = parser::parse("+ 1 (* 2 3)").unwrap();
//! let value = reader::read(&tree);
//! assert_eq!(render(&evaluator::eval(&value)), "7");
//! ```

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{boxed::Box, format, string::String, string::ToString, vec, vec::Vec};

pub mod evaluator;
pub mod parser;
pub mod reader;
pub mod session;
pub mod values;

pub use evaluator::{EvaluatorOptions, eval};
pub use parser::{ParseError, ParseTree, ParserOptions, parse};
pub use reader::read;
pub use session::{LineSink, LineSource, Session, SessionOptions};
pub use values::{ErrorKind, EvalError, Value, render};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_fold() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
