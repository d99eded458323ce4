//! Integer operator implementations.

use tracing::debug;

use crate::{parser::Operator, values::EvalError};

/// Apply the operator named by `symbol` to two numbers.
///
/// A symbol outside the operator set is [`ErrorKind::BadOperator`].
///
/// [`ErrorKind::BadOperator`]: crate::values::ErrorKind::BadOperator
pub(super) fn apply_binary(symbol: &str, left: i64, right: i64) -> Result<i64, EvalError> {
    let Some(op) = Operator::from_symbol(symbol) else {
        debug!(symbol, "unknown operator");
        return Err(EvalError::bad_operator());
    };
    eval_binary_int(op, left, right)
}

/// Apply the operator named by `symbol` to its only argument.
///
/// `-` negates. Every other symbol, known or not, leaves the argument
/// unchanged, since no operation takes place.
pub(super) fn apply_unary(symbol: &str, value: i64) -> Result<i64, EvalError> {
    match Operator::from_symbol(symbol) {
        Some(op) => eval_unary_int(op, value),
        None => Ok(value),
    }
}

/// Evaluate a binary operation on two integers.
///
/// Uses checked arithmetic: a result outside `i64` is an overflow error.
/// Division and remainder by zero return an error.
fn eval_binary_int(op: Operator, left: i64, right: i64) -> Result<i64, EvalError> {
    match op {
        Operator::Add => left.checked_add(right).ok_or_else(EvalError::overflow),
        Operator::Sub => left.checked_sub(right).ok_or_else(EvalError::overflow),
        Operator::Mul => left.checked_mul(right).ok_or_else(EvalError::overflow),
        Operator::Div => {
            if right == 0 {
                Err(EvalError::division_by_zero())
            } else {
                // Only i64::MIN / -1 can fail here
                left.checked_div(right).ok_or_else(EvalError::overflow)
            }
        }
        Operator::Rem => {
            if right == 0 {
                Err(EvalError::division_by_zero())
            } else if right == -1 {
                // i64::MIN % -1 overflows in hardware but is mathematically 0
                Ok(0)
            } else {
                Ok(left % right)
            }
        }
        Operator::Pow => eval_pow_int(left, right),
    }
}

/// Evaluate an operator applied to a single argument.
///
/// `-` negates; every other operator returns its argument unchanged.
fn eval_unary_int(op: Operator, value: i64) -> Result<i64, EvalError> {
    match op {
        Operator::Sub => value.checked_neg().ok_or_else(EvalError::overflow),
        _ => Ok(value),
    }
}

/// Integer power, truncated toward zero for negative exponents.
fn eval_pow_int(base: i64, exponent: i64) -> Result<i64, EvalError> {
    if exponent < 0 {
        return match base {
            0 => Err(EvalError::division_by_zero()),
            1 => Ok(1),
            -1 if exponent % 2 == 0 => Ok(1),
            -1 => Ok(-1),
            // |base| >= 2 gives a fraction strictly between -1 and 1
            _ => Ok(0),
        };
    }

    match u32::try_from(exponent) {
        Ok(exponent) => base.checked_pow(exponent).ok_or_else(EvalError::overflow),
        // Exponents this large only stay in range for 0, 1 and -1
        Err(_) => match base {
            0 | 1 => Ok(base),
            -1 if exponent % 2 == 0 => Ok(1),
            -1 => Ok(-1),
            _ => Err(EvalError::overflow()),
        },
    }
}
