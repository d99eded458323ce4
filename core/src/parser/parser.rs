use pest::Parser;
use pest_derive::Parser;
use tracing::{debug, trace};

use crate::ToString;
use crate::parser::error::convert_pest_error;
use crate::parser::tree::{ParseTree, build_node};
use crate::parser::{ParseError, ParseErrorKind, Span};

#[derive(Parser)]
#[grammar = "parser/lispy.pest"]
pub struct LispyParser;

/// Default limit on parenthesis nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options controlling the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum parenthesis nesting accepted on one line.
    ///
    /// Default: 256
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parse one line with the default nesting limit.
pub fn parse(source: &str) -> Result<ParseTree, ParseError> {
    parse_with_max_depth(source, DEFAULT_MAX_DEPTH)
}

pub fn parse_with_options(source: &str, options: &ParserOptions) -> Result<ParseTree, ParseError> {
    parse_with_max_depth(source, options.max_depth)
}

/// Parse one line, rejecting input nested deeper than `max_depth`.
///
/// The nesting check runs before the grammar so that no later stage ever
/// recurses deeper than the limit.
pub fn parse_with_max_depth(source: &str, max_depth: usize) -> Result<ParseTree, ParseError> {
    check_depth(source, max_depth)?;

    let mut pairs = LispyParser::parse(Rule::main, source).map_err(|err| {
        let err = convert_pest_error(err, source);
        debug!(error = %err, "parse failed");
        err
    })?;
    let Some(pair) = pairs.next() else {
        return Err(ParseError::new(
            ParseErrorKind::Other {
                message: "missing expected pair in rule".to_string(),
            },
            source.to_string(),
            Span::new(0, source.len()),
        ));
    };

    let root = build_node(pair, source)?;
    trace!(tree = %root, "parsed");
    Ok(ParseTree {
        source: source.to_string(),
        root,
    })
}

fn check_depth(source: &str, max_depth: usize) -> Result<(), ParseError> {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut first_excess = None;

    for (pos, byte) in source.bytes().enumerate() {
        match byte {
            b'(' => {
                depth += 1;
                if depth > max_depth && first_excess.is_none() {
                    first_excess = Some(pos);
                }
                deepest = deepest.max(depth);
            }
            b')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    match first_excess {
        Some(pos) => Err(ParseError::new(
            ParseErrorKind::MaxDepthExceeded {
                depth: deepest,
                max_depth,
            },
            source.to_string(),
            Span::new(pos, pos + 1),
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tree::{Node, NodeKind};
    use crate::{String, format, vec};
    use pretty_assertions::assert_eq;

    fn leaf(kind: NodeKind, start: usize, text: &str) -> Node {
        Node::leaf(kind, Span::new(start, start + text.len()), text)
    }

    #[test]
    fn test_simple_form() {
        let tree = parse("+ 1 2").unwrap();
        assert_eq!(
            tree.root,
            Node {
                kind: NodeKind::Root,
                span: Span::new(0, 5),
                text: "+ 1 2".into(),
                children: vec![
                    leaf(NodeKind::Operator, 0, "+"),
                    leaf(NodeKind::Number, 2, "1"),
                    leaf(NodeKind::Number, 4, "2"),
                ],
            }
        );
    }

    #[test]
    fn test_nested_form_keeps_parens() {
        let tree = parse("+ 1 (* 2 3)").unwrap();
        let sexpr = &tree.root.children[2];
        assert_eq!(sexpr.kind, NodeKind::Sexpr);
        assert_eq!(sexpr.text, "(* 2 3)");
        assert_eq!(
            sexpr.children,
            vec![
                leaf(NodeKind::Punct, 4, "("),
                leaf(NodeKind::Operator, 5, "*"),
                leaf(NodeKind::Number, 7, "2"),
                leaf(NodeKind::Number, 9, "3"),
                leaf(NodeKind::Punct, 10, ")"),
            ]
        );
    }

    #[test]
    fn test_unknown_symbol_is_accepted() {
        let tree = parse("$ 1 2").unwrap();
        assert_eq!(tree.root.children[0], leaf(NodeKind::Symbol, 0, "$"));
    }

    #[test]
    fn test_operator_glued_to_punctuation_is_a_symbol() {
        let tree = parse("+- 1 2").unwrap();
        assert_eq!(tree.root.children[0], leaf(NodeKind::Symbol, 0, "+-"));
    }

    #[test]
    fn test_negative_literal() {
        let tree = parse("- -5 3").unwrap();
        assert_eq!(tree.root.children[1], leaf(NodeKind::Number, 2, "-5"));
    }

    #[test]
    fn test_operator_directly_followed_by_digit() {
        // `-1 2` reads as the operator `-` applied to 1 and 2.
        let tree = parse("-1 2").unwrap();
        assert_eq!(tree.root.children[0], leaf(NodeKind::Operator, 0, "-"));
        assert_eq!(tree.root.children[1], leaf(NodeKind::Number, 1, "1"));
    }

    #[test]
    fn test_surrounding_whitespace() {
        let tree = parse("  \t+ 1 2  ").unwrap();
        assert_eq!(tree.root.children.len(), 3);
        assert_eq!(tree.root.children[0].span, Span::new(3, 4));
    }

    #[test]
    fn test_display_tree() {
        let tree = parse("+ 1 (- 2)").unwrap();
        let expected = [
            "root @0..9",
            "  operator '+' @0..1",
            "  number '1' @2..3",
            "  sexpr @4..9",
            "    char '(' @4..5",
            "    operator '-' @5..6",
            "    number '2' @7..8",
            "    char ')' @8..9",
        ]
        .join("\n");
        assert_eq!(format!("{}", tree), expected);
    }

    #[test]
    fn test_rejects_invalid_lines() {
        for input in ["", "   ", "abc", "1 2", "+", "+ 1 (", "+ 1 )", "(+ 1 2)", "+ ()", "+ (+) 1", "+ 1 2 x"] {
            assert!(parse(input).is_err(), "expected '{}' to be rejected", input);
        }
    }

    #[test]
    fn test_depth_limit() {
        let nested = format!("+ {}1{}", "(+ ".repeat(4), ")".repeat(4));
        assert!(parse_with_max_depth(&nested, 4).is_ok());

        let err = parse_with_max_depth(&nested, 3).unwrap_err();
        match err.kind {
            ParseErrorKind::MaxDepthExceeded { depth, max_depth } => {
                assert_eq!(depth, 4);
                assert_eq!(max_depth, 3);
            }
            other => panic!("Expected MaxDepthExceeded, got {:?}", other),
        }
        assert_eq!(err.span, Span::new(11, 12));
    }

    #[test]
    fn test_deep_input_does_not_overflow() {
        let depth = 100_000;
        let mut input = String::from("+ ");
        for _ in 0..depth {
            input.push_str("(+ ");
        }
        input.push('1');
        for _ in 0..depth {
            input.push(')');
        }
        assert!(matches!(
            parse(&input).unwrap_err().kind,
            ParseErrorKind::MaxDepthExceeded { .. }
        ));
    }
}
