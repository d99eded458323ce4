//! Tree-walking evaluator for Lispy value trees.
//!
//! The evaluator reduces a [`Value`] tree produced by the reader to a
//! terminal value: a number or an error.
//!
//! ## Design Principles
//!
//! - **Total**: every input produces a value; failures are `Value::Error`, never a panic
//! - **Stack-safe**: Depth tracking bounds recursion on deeply nested trees
//! - **Pure**: the input tree is borrowed and never modified
//!
//! ## Example
//!
//! ```
//! use lispy_core::{evaluator, parser, reader, values::render};
//!
//! let tree = parser::parse("/ 10 (- 5 5)").unwrap();
//! let result = evaluator::eval(&reader::read(&tree));
//! assert_eq!(render(&result), "Error: Division by Zero!");
//! ```

mod eval;
mod operators;


pub use crate::values::{ErrorKind, EvalError};
pub use eval::Evaluator;

use crate::values::Value;

/// Configuration options for evaluation.
///
/// # Example
///
/// ```
/// use lispy_core::evaluator::EvaluatorOptions;
///
/// let options = EvaluatorOptions { max_depth: 500 };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatorOptions {
    /// Maximum evaluation stack depth (for recursion protection).
    ///
    /// Default: 1000
    pub max_depth: usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self { max_depth: 1000 }
    }
}

/// Evaluate a value tree with default limits.
///
/// Uses default stack depth limit of 1000.
pub fn eval(value: &Value) -> Value {
    eval_with_options(value, EvaluatorOptions::default())
}

/// Evaluate a value tree with a custom depth limit.
///
/// ## Example
///
/// ```
/// use lispy_core::{Value, evaluator::eval_with_limits};
///
/// let value = Value::expression([Value::symbol("+"), Value::number(1), Value::number(2)]);
/// assert_eq!(eval_with_limits(&value, 1).as_number(), None);
/// assert_eq!(eval_with_limits(&value, 2).as_number(), Some(3));
/// ```
pub fn eval_with_limits(value: &Value, max_depth: usize) -> Value {
    eval_with_options(value, EvaluatorOptions { max_depth })
}

pub fn eval_with_options(value: &Value, options: EvaluatorOptions) -> Value {
    Evaluator::new(options).eval(value)
}
