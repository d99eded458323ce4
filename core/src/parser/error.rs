use crate::parser::{Rule, Span};
use crate::{String, ToString, Vec, format, vec};

/// Parser error with context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub source: String,
    pub span: Span,
}

/// Specific kinds of parse errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The grammar could not continue at `span`.
    UnexpectedToken { expected: Vec<Rule>, found: String },
    /// Maximum nesting depth exceeded
    MaxDepthExceeded { depth: usize, max_depth: usize },
    /// Other parse errors (catch-all for Pest errors we don't specifically handle)
    Other { message: String },
}

/// A renderer-agnostic description of a parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub span: Span,
    pub help: Vec<String>,
    pub code: Option<&'static str>,
}

impl ParseError {
    /// Create a new ParseError
    pub fn new(kind: ParseErrorKind, source: String, span: Span) -> Self {
        Self { kind, source, span }
    }

    /// One-based line and column where the parser gave up.
    pub fn line_col(&self) -> (usize, usize) {
        self.span.line_col(&self.source)
    }

    /// The rules the grammar would have accepted at the failure position.
    pub fn expected(&self) -> &[Rule] {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, .. } => expected,
            _ => &[],
        }
    }

    pub fn message(&self) -> String {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, found } => {
                format!("expected {}, found {}", format_expected_rules(expected), found)
            }
            ParseErrorKind::MaxDepthExceeded { max_depth, .. } => format!(
                "expression nesting depth exceeds maximum of {} levels",
                max_depth
            ),
            ParseErrorKind::Other { message } => message.clone(),
        }
    }

    /// Convert to a Diagnostic for rich rendering
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (code, help) = match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, .. } => {
                let help = if expected.contains(&Rule::operator) {
                    vec![
                        "Every form starts with an operator: + - * / % ^".to_string(),
                    ]
                } else {
                    vec![]
                };
                (Some("P001"), help)
            }
            ParseErrorKind::MaxDepthExceeded { .. } => (
                Some("P002"),
                vec!["Reduce nesting or simplify the expression".to_string()],
            ),
            ParseErrorKind::Other { .. } => (Some("P999"), vec![]),
        };

        Diagnostic {
            message: self.message(),
            span: self.span.clone(),
            help,
            code,
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let (line, column) = self.line_col();
        write!(
            f,
            "Parse error at line {}, column {}: {}",
            line,
            column,
            self.message()
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Convert Pest error to human-readable ParseError
pub fn convert_pest_error(err: pest::error::Error<Rule>, source: &str) -> ParseError {
    use pest::error::ErrorVariant;

    let span = match err.location {
        pest::error::InputLocation::Pos(pos) => Span(pos..pos),
        pest::error::InputLocation::Span((start, end)) => Span(start..end),
    };

    let kind = match err.variant {
        ErrorVariant::ParsingError {
            positives,
            negatives,
        } => {
            let mut expected = Vec::new();
            for rule in positives {
                if !expected.contains(&rule) {
                    expected.push(rule);
                }
            }
            let found = format_found(&negatives, source, span.0.start);
            ParseErrorKind::UnexpectedToken { expected, found }
        }
        ErrorVariant::CustomError { message } => ParseErrorKind::Other { message },
    };

    ParseError::new(kind, source.to_string(), span)
}

/// Format expected rules in a human-readable way
fn format_expected_rules(rules: &[Rule]) -> String {
    let mut concepts: Vec<&str> = Vec::new();

    for rule in rules {
        let concept = match rule {
            Rule::operator | Rule::symbol => "operator",
            Rule::number => "number",
            Rule::lparen | Rule::sexpr => "'('",
            Rule::rparen => "')'",
            Rule::EOI => "end of input",
            _ => "expression",
        };
        if !concepts.contains(&concept) {
            concepts.push(concept);
        }
    }

    match concepts.pop() {
        None => "something else".to_string(),
        Some(last) if concepts.is_empty() => last.to_string(),
        Some(last) => format!("{} or {}", concepts.join(", "), last),
    }
}

/// Describe what sits at the failure position.
fn format_found(negatives: &[Rule], source: &str, pos: usize) -> String {
    if let Some(rule) = negatives.first() {
        return format!("{:?}", rule);
    }
    match source.get(pos..).and_then(|rest| rest.chars().next()) {
        Some(c) => format!("'{}'", c),
        None => "end of input".to_string(),
    }
}
