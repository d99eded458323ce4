#![allow(dead_code)]

use lispy::{ParseError, ParseTree, parse, read, render};
use pretty_assertions::assert_eq;

/// One input line and everything the pipeline produces for it.
pub struct Case {
    pub input: &'static str,
    pub parsed: Result<ParseTree, ParseError>,
}

impl Case {
    pub fn new(input: &'static str) -> Self {
        Self {
            input,
            parsed: parse(input),
        }
    }

    fn tree(&self) -> &ParseTree {
        match &self.parsed {
            Ok(tree) => tree,
            Err(err) => panic!("'{}' failed to parse: {}", self.input, err),
        }
    }

    /// The parse tree, printed one node per line.
    pub fn parse_tree(&self, expected: &str) {
        assert_eq!(
            self.tree().to_string(),
            expected.trim_end(),
            "parse tree of '{}'",
            self.input
        );
    }

    /// The value tree before evaluation.
    pub fn read(&self, expected: &str) {
        assert_eq!(
            render(&read(self.tree())),
            expected,
            "value tree of '{}'",
            self.input
        );
    }

    /// The printed result.
    pub fn result(&self, expected: &str) {
        assert_eq!(
            render(&lispy::eval(&read(self.tree()))),
            expected,
            "result of '{}'",
            self.input
        );
    }

    /// The start of the one-line parse error message.
    pub fn parse_error(&self, expected: &str) {
        match &self.parsed {
            Ok(tree) => panic!("'{}' should not parse, got:\n{}", self.input, tree),
            Err(err) => {
                let message = err.to_string();
                assert!(
                    message.starts_with(expected),
                    "error for '{}': {}",
                    self.input,
                    message
                );
            }
        }
    }
}

/// Declare a test over one input line.
///
/// Every field after `input` names a [`Case`] check:
///
/// ```ignore
/// test_case!(
///     nested,
///     input: "+ 1 (* 2 3)",
///     read: "(+ 1 (* 2 3))",
///     result: "7",
/// );
/// ```
macro_rules! test_case {
    ($name:ident, input: $input:expr, $($field:ident: $value:expr),+ $(,)?) => {
        #[test]
        fn $name() {
            let case = $crate::cases::Case::new($input);
            $( case.$field($value); )+
        }
    };
}
