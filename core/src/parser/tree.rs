//! The rule-tagged parse tree produced by [`parse`](super::parse).
//!
//! Every node records which grammar rule matched it and the exact text it
//! covers. Punctuation stays in the tree as [`NodeKind::Punct`] leaves so the
//! tree mirrors the source one-to-one; the reader drops them.

use core::fmt;

use pest::iterators::Pair;

use crate::parser::{ParseError, ParseErrorKind, Rule, Span};
use crate::{String, ToString, Vec, format};

/// The grammar rule a node was matched by.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The whole line (`main`).
    Root,
    /// A parenthesised form.
    Sexpr,
    /// An integer literal, sign included.
    Number,
    /// One of the fixed operators.
    Operator,
    /// Any other punctuation in operator position.
    Symbol,
    /// Syntax-only token such as `(` or `)`.
    Punct,
}

impl NodeKind {
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Sexpr => "sexpr",
            NodeKind::Number => "number",
            NodeKind::Operator => "operator",
            NodeKind::Symbol => "symbol",
            NodeKind::Punct => "char",
        }
    }

    fn from_rule(rule: Rule) -> Option<Self> {
        match rule {
            Rule::main => Some(NodeKind::Root),
            Rule::sexpr => Some(NodeKind::Sexpr),
            Rule::number => Some(NodeKind::Number),
            Rule::operator => Some(NodeKind::Operator),
            Rule::symbol => Some(NodeKind::Symbol),
            Rule::lparen | Rule::rparen => Some(NodeKind::Punct),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
    /// The matched source text.
    pub text: String,
    pub children: Vec<Node>,
}

impl Node {
    pub fn leaf(kind: NodeKind, span: Span, text: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            text: text.into(),
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        write!(f, "{:indent$}{}", "", self.kind.name(), indent = indent * 2)?;
        if self.is_leaf() {
            write!(f, " '{}'", self.text)?;
        }
        write!(f, " @{}..{}", self.span.0.start, self.span.0.end)?;
        for child in &self.children {
            writeln!(f)?;
            child.fmt_indented(f, indent + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

/// Result of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTree {
    pub source: String,
    pub root: Node,
}

impl fmt::Display for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt(f)
    }
}

/// Convert a pest pair into an owned node.
pub(super) fn build_node(pair: Pair<'_, Rule>, source: &str) -> Result<Node, ParseError> {
    let span = Span::from(pair.as_span());
    let rule = pair.as_rule();
    let Some(kind) = NodeKind::from_rule(rule) else {
        return Err(ParseError::new(
            ParseErrorKind::Other {
                message: format!("Unhandled rule: {:?}", rule),
            },
            source.to_string(),
            span,
        ));
    };

    let text = pair.as_str().to_string();
    let children = pair
        .into_inner()
        .filter(|inner| inner.as_rule() != Rule::EOI)
        .map(|inner| build_node(inner, source))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Node {
        kind,
        span,
        text,
        children,
    })
}
