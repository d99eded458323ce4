use crate::values::EvalError;
use crate::{String, Vec};

/// A node of the value tree.
///
/// Every `Expression` owns its children outright, so a tree is released as a
/// whole when its root is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Number(i64),
    /// Operator token text, unvalidated.
    Symbol(String),
    Error(EvalError),
    /// Children in source order.
    Expression(Vec<Value>),
}

impl Value {
    pub fn number(n: i64) -> Self {
        Value::Number(n)
    }

    pub fn symbol(text: impl Into<String>) -> Self {
        Value::Symbol(text.into())
    }

    pub fn expression(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Expression(items.into_iter().collect())
    }

    pub fn division_by_zero() -> Self {
        Value::Error(EvalError::division_by_zero())
    }

    pub fn bad_operator() -> Self {
        Value::Error(EvalError::bad_operator())
    }

    pub fn bad_number() -> Self {
        Value::Error(EvalError::bad_number())
    }

    pub fn overflow() -> Self {
        Value::Error(EvalError::overflow())
    }

    pub fn depth_exceeded() -> Self {
        Value::Error(EvalError::depth_exceeded())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&EvalError> {
        match self {
            Value::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Children of an expression; empty for leaves.
    pub fn children(&self) -> &[Value] {
        match self {
            Value::Expression(items) => items,
            _ => &[],
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<EvalError> for Value {
    fn from(err: EvalError) -> Self {
        Value::Error(err)
    }
}

impl From<Result<i64, EvalError>> for Value {
    fn from(result: Result<i64, EvalError>) -> Self {
        match result {
            Ok(n) => Value::Number(n),
            Err(err) => Value::Error(err),
        }
    }
}
