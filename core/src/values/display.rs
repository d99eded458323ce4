//! Printing values back to text.

use core::fmt;

use crate::values::Value;
use crate::{String, ToString};

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Symbol(text) => f.write_str(text),
            Value::Error(err) => write!(f, "Error: {}", err),
            Value::Expression(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Render a value as the text shown to the user.
pub fn render(value: &Value) -> String {
    value.to_string()
}
