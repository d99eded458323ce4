mod syntax;
mod tree;
pub mod error;
pub mod parser;

// Re-export the parser and rule enum for external use
pub use parser::LispyParser;
pub use parser::Rule;
pub use parser::{DEFAULT_MAX_DEPTH, ParserOptions, parse, parse_with_max_depth, parse_with_options};

pub use error::{Diagnostic, ParseError, ParseErrorKind};
pub use syntax::{Operator, Span};
pub use tree::{Node, NodeKind, ParseTree};
