mod highlighter;
mod lexer;

use std::borrow::Cow;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use clap::Parser;
use lispy::{
    EvaluatorOptions, LineSink, LineSource, ParseError, ParserOptions, Session, SessionOptions,
};
use miette::{IntoDiagnostic, Result};
use reedline::{
    FileBackedHistory, Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus,
    Reedline, Signal,
};
use tracing::warn;

use crate::highlighter::Highlighter;

const HISTORY_SIZE: usize = 1000;

/// Lispy - prefix arithmetic on the command line
#[derive(Parser, Debug)]
#[command(name = "lispy")]
#[command(about = "Evaluate Lispy expressions", long_about = None)]
struct Args {
    /// Print the parse tree of each line (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Print the unevaluated value tree of each line (for debugging)
    #[arg(long)]
    debug_read: bool,

    /// Maximum nesting depth accepted by the parser and the evaluator
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Disable colored error reports
    #[arg(long)]
    no_color: bool,

    /// Do not load or save line history
    #[arg(long)]
    no_history: bool,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

impl Args {
    fn session_options(&self) -> SessionOptions {
        let mut options = SessionOptions {
            echo_parse_tree: self.debug_parse,
            echo_value_tree: self.debug_read,
            ..SessionOptions::default()
        };
        if let Some(max_depth) = self.max_depth {
            options.parser = ParserOptions { max_depth };
            options.evaluator = EvaluatorOptions { max_depth };
        }
        options
    }
}

struct LispyPrompt<'a> {
    text: &'a str,
}

impl Prompt for LispyPrompt<'_> {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.text)
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("... ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!(
            "({}reverse-search: {}) ",
            prefix, history_search.term
        ))
    }
}

/// Lines typed at the terminal.
struct EditorSource {
    editor: Reedline,
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        match self.editor.read_line(&LispyPrompt { text: prompt }) {
            Ok(Signal::Success(buffer)) => Some(buffer),
            Ok(Signal::CtrlC) | Ok(Signal::CtrlD) => None,
            Err(e) => {
                eprintln!("Reedline error: {e}");
                None
            }
        }
    }
}

/// Lines piped through stdin.
struct PipeSource<R> {
    reader: R,
}

impl<R: BufRead> LineSource for PipeSource<R> {
    fn read_line(&mut self, _prompt: &str) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                let trimmed = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(trimmed);
                Some(line)
            }
            Err(e) => {
                eprintln!("Error reading line from stdin: {}", e);
                None
            }
        }
    }
}

/// Writes results to stdout. With `rich` set, parse errors get a full
/// report pointing into the line instead of the one-line message.
struct TerminalSink {
    rich: bool,
    color: bool,
}

impl LineSink for TerminalSink {
    fn write_line(&mut self, line: &str) {
        println!("{}", line);
    }

    fn write_parse_error(&mut self, error: &ParseError) {
        if !self.rich {
            self.write_line(&error.to_string());
            return;
        }
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = lispy::render_error_to(error, &mut stdout, self.color) {
            warn!(error = %e, "failed to render parse error");
        }
        stdout.flush().ok();
    }
}

fn history_path() -> Option<PathBuf> {
    let dir = dirs::data_dir()?.join("lispy");
    if let Err(e) = std::fs::create_dir_all(&dir) {
        warn!(path = %dir.display(), error = %e, "cannot create history directory");
        return None;
    }
    Some(dir.join("history.txt"))
}

fn setup_reedline(use_history: bool) -> Result<Reedline> {
    let mut line_editor = Reedline::create().with_highlighter(Box::new(Highlighter));

    if let Some(path) = use_history.then(history_path).flatten() {
        let history = FileBackedHistory::with_file(HISTORY_SIZE, path).into_diagnostic()?;
        line_editor = line_editor.with_history(Box::new(history));
    }

    Ok(line_editor)
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    // Use LISPY_LOG or RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_env("LISPY_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let session = Session::new(args.session_options());
    let color = !args.no_color && atty::is(atty::Stream::Stdout);

    // Check if we have a direct expression argument
    if let Some(expr) = &args.expression {
        let mut sink = TerminalSink { rich: true, color };
        session.process_line(expr, &mut sink);
        return Ok(());
    }

    // Otherwise, check if we're in interactive or pipe mode
    if atty::is(atty::Stream::Stdin) {
        let mut source = EditorSource {
            editor: setup_reedline(!args.no_history)?,
        };
        let mut sink = TerminalSink { rich: true, color };

        println!("Lispy Version 0.0.0.0.1");
        println!("Press Ctrl+C to exit\n");

        session.run(&mut source, &mut sink);
    } else {
        let stdin = std::io::stdin();
        let mut source = PipeSource {
            reader: BufReader::new(stdin.lock()),
        };
        let mut sink = TerminalSink { rich: false, color };

        session.run(&mut source, &mut sink);
    }

    Ok(())
}
