//! Core evaluation logic.

use tracing::{debug, trace};

use crate::{
    evaluator::{
        EvaluatorOptions,
        operators::{apply_binary, apply_unary},
    },
    values::{EvalError, Value},
};

/// Evaluator for value trees.
///
/// Holds no state between calls apart from the current recursion depth.
#[derive(Debug)]
pub struct Evaluator {
    options: EvaluatorOptions,
    depth: usize,
}

impl Evaluator {
    /// Create a new evaluator with the given options.
    pub fn new(options: EvaluatorOptions) -> Self {
        Self { options, depth: 0 }
    }

    /// Evaluate a value tree to a number or an error.
    ///
    /// The input is only borrowed; the result is a fresh value.
    pub fn eval(&mut self, value: &Value) -> Value {
        Value::from(self.eval_value(value))
    }

    /// Evaluate a node, tracking recursion depth.
    fn eval_value(&mut self, value: &Value) -> Result<i64, EvalError> {
        // Check depth before recursing
        if self.depth >= self.options.max_depth {
            debug!(max_depth = self.options.max_depth, "evaluation depth exceeded");
            return Err(EvalError::depth_exceeded());
        }

        self.depth += 1;
        let result = self.eval_value_inner(value);
        self.depth -= 1;

        result
    }

    /// Inner evaluation logic (no depth tracking).
    fn eval_value_inner(&mut self, value: &Value) -> Result<i64, EvalError> {
        match value {
            Value::Number(n) => Ok(*n),
            // Errors are terminal: forward as-is
            Value::Error(err) => Err(err.clone()),
            // An operator with nothing to apply to
            Value::Symbol(symbol) => {
                debug!(%symbol, "bare symbol in value position");
                Err(EvalError::bad_operator())
            }
            Value::Expression(items) => self.eval_expression(items),
        }
    }

    /// Fold `[op, a0, a1, ..., an]` from left to right.
    ///
    /// The operator is only resolved once both operands of a step are
    /// numbers, so an error in an operand wins over an unknown operator.
    fn eval_expression(&mut self, items: &[Value]) -> Result<i64, EvalError> {
        let Some((head, args)) = items.split_first() else {
            debug!("empty expression");
            return Err(EvalError::bad_operator());
        };
        let Some(symbol) = head.as_symbol() else {
            debug!(%head, "expression without an operator");
            return Err(EvalError::bad_operator());
        };
        let Some((first, rest)) = args.split_first() else {
            debug!(%symbol, "operator without arguments");
            return Err(EvalError::bad_operator());
        };

        let mut acc = self.eval_value(first);
        if rest.is_empty() {
            return acc.and_then(|value| apply_unary(symbol, value));
        }

        for arg in rest {
            let right = self.eval_value(arg);
            // The left side's error wins over the right side's
            let left = acc?;
            let right = right?;
            acc = apply_binary(symbol, left, right);
            trace!(%symbol, left, right, result = ?acc, "fold step");
        }

        acc
    }
}
