//! Interactive read-dispatch-print loop.

use std::io::{self, IsTerminal, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{debug, info, warn};

use crate::ai::Assistant;
use crate::config::ShellConfig;
use crate::dispatch::Dispatcher;
use crate::history::HistoryStore;
use crate::shell::SystemShell;

pub const BANNER: &str = "AI Shell ready. Type 'exit' to quit.";
pub const PROMPT: &str = ">> ";
pub const FAREWELL: &str = "\nExiting shell.";
pub const EXIT_COMMAND: &str = "exit";

/// One read attempt from the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadEvent {
    Line(String),
    /// End of input (Ctrl-D or closed stdin)
    Eof,
    /// Ctrl-C
    Interrupted,
}

/// Source of input lines (allows scripted input in tests)
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadEvent>;

    /// Offer a submitted line to the reader's recall buffer
    fn remember(&mut self, _line: &str) {}
}

/// Records Ctrl-C pressed while a command or AI request is running
///
/// At the prompt rustyline reports Ctrl-C itself as [`ReadEvent::Interrupted`];
/// outside of it the SIGINT handler raises this flag instead of killing the
/// process, and the loop ends once the running line finishes.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag(Arc<AtomicBool>);

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a flag raised by the process SIGINT handler
    ///
    /// Failing to install the handler is logged; Ctrl-C then keeps its default action.
    pub fn install() -> Self {
        let flag = Self::new();
        let handle = flag.clone();
        if let Err(e) = ctrlc::set_handler(move || handle.raise()) {
            warn!(error = %e, "Failed to install Ctrl-C handler");
        }
        flag
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Return whether the flag was raised, clearing it
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }
}

/// Line editor with in-memory recall, backed by rustyline
pub struct EditorReader {
    editor: DefaultEditor,
    // rustyline writes no prompt when stdin is not a terminal
    echo_prompt: bool,
}

impl EditorReader {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().context("Failed to initialize line editor")?;
        Ok(Self { editor, echo_prompt: !io::stdin().is_terminal() })
    }

    /// Preload recall with lines from earlier sessions
    pub fn seed(&mut self, entries: &[String]) {
        for entry in entries.iter().filter(|e| !e.trim().is_empty()) {
            self.remember(entry);
        }
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadEvent> {
        let prompt = if self.echo_prompt {
            let mut stdout = io::stdout();
            write!(stdout, "{}", prompt)?;
            stdout.flush()?;
            ""
        } else {
            prompt
        };

        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadEvent::Line(line)),
            Err(ReadlineError::Eof) => Ok(ReadEvent::Eof),
            Err(ReadlineError::Interrupted) => Ok(ReadEvent::Interrupted),
            Err(e) => Err(e).context("Failed to read input"),
        }
    }

    fn remember(&mut self, line: &str) {
        if let Err(e) = self.editor.add_history_entry(line) {
            debug!(error = %e, "Failed to add line to recall buffer");
        }
    }
}

/// Drive the loop until `exit`, end of input or interrupt
///
/// Each non-empty line other than `exit` is appended to history, dispatched,
/// and its non-empty result printed. A failed history append is logged and
/// does not stop the loop. When `interrupt` is raised while a line is being
/// handled, its result is discarded and the loop ends with the farewell.
pub fn run_session(
    reader: &mut dyn LineReader,
    dispatcher: &Dispatcher<'_>,
    history: &HistoryStore,
    interrupt: &InterruptFlag,
    out: &mut dyn Write,
) -> Result<()> {
    writeln!(out, "{}", BANNER)?;

    loop {
        out.flush()?;
        let line = match reader.read_line(PROMPT)? {
            ReadEvent::Line(line) => line,
            ReadEvent::Eof | ReadEvent::Interrupted => {
                writeln!(out, "{}", FAREWELL)?;
                break;
            }
        };
        if interrupt.take() {
            writeln!(out, "{}", FAREWELL)?;
            break;
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == EXIT_COMMAND {
            break;
        }

        reader.remember(input);
        if let Err(e) = history.append(input) {
            warn!(error = %format!("{:#}", e), "Failed to record history");
        }

        let output = dispatcher.dispatch(input);
        if interrupt.take() {
            writeln!(out, "{}", FAREWELL)?;
            break;
        }
        if !output.is_empty() {
            writeln!(out, "{}", output)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Start an interactive shell on the terminal
///
/// # Errors
///
/// Returns an error if the history directory cannot be created, the line
/// editor cannot be initialized, or reading from or writing to the terminal fails.
pub fn run(config: &ShellConfig) -> Result<()> {
    let history = HistoryStore::new(&config.history_path);
    history.ensure_parent_dir()?;
    let interrupt = InterruptFlag::install();

    let ai = Assistant::connect(config);
    let shell = SystemShell;
    let dispatcher = Dispatcher::new(&ai, &shell, &history);

    let mut reader = EditorReader::new()?;
    match history.entries() {
        Ok(entries) => reader.seed(&entries),
        Err(e) => warn!(error = %format!("{:#}", e), "Failed to load history for recall"),
    }

    info!(history = %history.path().display(), model = ai.model(), "starting shell");
    run_session(&mut reader, &dispatcher, &history, &interrupt, &mut io::stdout())
}
