//! Turns a parse tree into a value tree.
//!
//! Reading is purely structural: nothing is evaluated and operators are not
//! checked. The only error raised here is [`ErrorKind::BadNumber`] for a
//! literal that does not fit in an `i64`.
//!
//! [`ErrorKind::BadNumber`]: crate::values::ErrorKind::BadNumber

use tracing::{debug, trace};

use crate::Vec;
use crate::parser::{Node, NodeKind, ParseTree};
use crate::values::Value;

/// Read a whole parse tree. The root always becomes an `Expression`.
pub fn read(tree: &ParseTree) -> Value {
    let value = read_node(&tree.root).unwrap_or_else(|| Value::Expression(Vec::new()));
    trace!(value = %value, "read");
    value
}

/// Read a single node; `None` for syntax-only nodes.
pub fn read_node(node: &Node) -> Option<Value> {
    match node.kind {
        NodeKind::Number => Some(read_number(&node.text)),
        NodeKind::Operator | NodeKind::Symbol => Some(Value::symbol(node.text.as_str())),
        NodeKind::Root | NodeKind::Sexpr => Some(Value::Expression(
            node.children.iter().filter_map(read_node).collect(),
        )),
        NodeKind::Punct => None,
    }
}

fn read_number(text: &str) -> Value {
    match text.parse::<i64>() {
        Ok(n) => Value::Number(n),
        Err(err) => {
            debug!(text, error = %err, "invalid number literal");
            Value::bad_number()
        }
    }
}
