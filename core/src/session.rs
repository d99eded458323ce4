//! The read-evaluate-print cycle, independent of any terminal.
//!
//! A [`Session`] pulls lines from a [`LineSource`], runs each one through the
//! parser, reader and evaluator, and pushes the rendered result to a
//! [`LineSink`]. Every line is handled in isolation: its text and value tree
//! are owned by the cycle that reads it and dropped before the next line is
//! requested.

use tracing::{debug, info};

use crate::evaluator::{EvaluatorOptions, eval_with_options};
use crate::parser::{ParseError, ParserOptions, parse_with_options};
use crate::reader::read;
use crate::values::Value;
use crate::{String, ToString};

/// Supplies input lines, typically from a line editor or a pipe.
pub trait LineSource {
    /// Read one line without its trailing newline. `None` ends the session.
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

/// Receives output lines.
pub trait LineSink {
    fn write_line(&mut self, line: &str);

    /// Report a line that failed to parse.
    ///
    /// Defaults to the one-line message; terminals may override this with a
    /// richer report.
    fn write_parse_error(&mut self, error: &ParseError) {
        self.write_line(&error.to_string());
    }
}

/// Configuration options for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Prompt passed to the line source.
    ///
    /// Default: `"lispy> "`
    pub prompt: String,
    pub parser: ParserOptions,
    pub evaluator: EvaluatorOptions,
    /// Write the parse tree of each line before its result.
    pub echo_parse_tree: bool,
    /// Write the unevaluated value tree of each line before its result.
    pub echo_value_tree: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            prompt: "lispy> ".to_string(),
            parser: ParserOptions::default(),
            evaluator: EvaluatorOptions::default(),
            echo_parse_tree: false,
            echo_value_tree: false,
        }
    }
}

/// Counters for a finished [`Session::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Lines that parsed and produced a value.
    pub evaluated: usize,
    /// Evaluated lines whose value is an error.
    pub errors: usize,
    /// Lines that failed to parse.
    pub parse_errors: usize,
    /// Blank lines that were skipped.
    pub skipped: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    options: SessionOptions,
}

impl Session {
    pub fn new(options: SessionOptions) -> Self {
        Self { options }
    }

    /// Parse, read and evaluate a single line.
    pub fn interpret(&self, line: &str) -> Result<Value, ParseError> {
        let tree = parse_with_options(line, &self.options.parser)?;
        let value = read(&tree);
        Ok(eval_with_options(&value, self.options.evaluator.clone()))
    }

    /// Handle one line, writing everything it produces to `sink`.
    ///
    /// Returns the result, or `None` if the line failed to parse.
    pub fn process_line<K: LineSink + ?Sized>(&self, line: &str, sink: &mut K) -> Option<Value> {
        let tree = match parse_with_options(line, &self.options.parser) {
            Ok(tree) => tree,
            Err(err) => {
                sink.write_parse_error(&err);
                return None;
            }
        };
        if self.options.echo_parse_tree {
            write_lines(sink, &tree.to_string());
        }

        let value = read(&tree);
        if self.options.echo_value_tree {
            sink.write_line(&value.to_string());
        }

        let result = eval_with_options(&value, self.options.evaluator.clone());
        debug!(input = line, result = %result, "evaluated");
        sink.write_line(&result.to_string());
        Some(result)
    }

    /// Run until the source is exhausted.
    pub fn run<S, K>(&self, source: &mut S, sink: &mut K) -> SessionStats
    where
        S: LineSource + ?Sized,
        K: LineSink + ?Sized,
    {
        let mut stats = SessionStats::default();

        while let Some(line) = source.read_line(&self.options.prompt) {
            if line.trim().is_empty() {
                stats.skipped += 1;
                continue;
            }
            match self.process_line(&line, sink) {
                Some(result) => {
                    stats.evaluated += 1;
                    if result.is_error() {
                        stats.errors += 1;
                    }
                }
                None => stats.parse_errors += 1,
            }
        }

        info!(
            evaluated = stats.evaluated,
            errors = stats.errors,
            parse_errors = stats.parse_errors,
            "session finished"
        );
        stats
    }
}

fn write_lines<K: LineSink + ?Sized>(sink: &mut K, text: &str) {
    for line in text.lines() {
        sink.write_line(line);
    }
}
