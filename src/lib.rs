//! Lispy - a prefix arithmetic language
//!
//! # Overview
//!
//! Lispy reads one line of operator-first arithmetic, such as `+ 1 (* 2 3)`,
//! and reduces it to a number or an error. Every line stands alone: there are
//! no variables, no functions and no state shared between lines.
//!
//! # Quick Start
//!
//! ```
//! use lispy::{Session, render};
//!
//! let session = Session::default();
//! let value = session.interpret("+ 1 (* 2 3)").unwrap();
//! assert_eq!(render(&value), "7");
//!
//! let value = session.interpret("/ 1 0").unwrap();
//! assert_eq!(render(&value), "Error: Division by Zero!");
//! ```
//!
//! # Errors
//!
//! Lines that do not match the grammar fail with a [`ParseError`]; use
//! [`render_error_to_string`] for a report that points at the offending
//! position. Arithmetic failures are ordinary values of the
//! [`Value::Error`] variant.

// Re-export public API from lispy_core
pub use lispy_core::evaluator::{self, Evaluator, EvaluatorOptions, eval};
pub use lispy_core::parser::{self, ParseError, ParseErrorKind, ParseTree, ParserOptions, parse};
pub use lispy_core::reader::{self, read};
pub use lispy_core::session::{self, LineSink, LineSource, Session, SessionOptions, SessionStats};
pub use lispy_core::values::{self, ErrorKind, EvalError, Value, render};

mod error_renderer;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
