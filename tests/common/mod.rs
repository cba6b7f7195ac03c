//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use ai_shell::ai::{AiError, Assistant, TextGenerator};
use ai_shell::history::HistoryStore;
use ai_shell::repl::{LineReader, ReadEvent};
use ai_shell::shell::{CommandOutput, CommandRunner};
use tempfile::TempDir;

pub const MODEL: &str = "gemini-2.5-flash";

/// Prompts seen by a [`MockGenerator`], shared with the test body
pub type PromptLog = Rc<RefCell<Vec<String>>>;

/// Text generator returning a fixed reply and recording every prompt
pub struct MockGenerator {
    prompts: PromptLog,
    reply: Result<String, AiError>,
}

impl MockGenerator {
    pub fn replying(reply: &str) -> (Self, PromptLog) {
        Self::with_result(Ok(reply.to_string()))
    }

    pub fn failing(error: AiError) -> (Self, PromptLog) {
        Self::with_result(Err(error))
    }

    fn with_result(reply: Result<String, AiError>) -> (Self, PromptLog) {
        let prompts = Rc::new(RefCell::new(Vec::new()));
        (Self { prompts: Rc::clone(&prompts), reply }, prompts)
    }
}

impl TextGenerator for MockGenerator {
    fn generate(&self, _model: &str, prompt: &str) -> Result<String, AiError> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.reply.clone()
    }
}

/// Shell with canned results; unknown commands fail to spawn
#[derive(Default)]
pub struct MockShell {
    outputs: Vec<(String, CommandOutput)>,
    pub calls: RefCell<Vec<String>>,
}

impl MockShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn succeeds(mut self, command: &str, stdout: &str) -> Self {
        self.outputs.push((
            command.to_string(),
            CommandOutput { stdout: stdout.to_string(), stderr: String::new(), code: Some(0) },
        ));
        self
    }

    pub fn fails(mut self, command: &str, stderr: &str, code: i32) -> Self {
        self.outputs.push((
            command.to_string(),
            CommandOutput { stdout: String::new(), stderr: stderr.to_string(), code: Some(code) },
        ));
        self
    }
}

impl CommandRunner for MockShell {
    fn run(&self, command: &str) -> io::Result<CommandOutput> {
        self.calls.borrow_mut().push(command.to_string());
        self.outputs
            .iter()
            .find(|(cmd, _)| cmd == command)
            .map(|(_, out)| out.clone())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "mock spawn failure"))
    }
}

/// Reader replaying scripted lines, then end of input
pub struct ScriptedReader {
    events: VecDeque<ReadEvent>,
}

impl ScriptedReader {
    pub fn lines(lines: &[&str]) -> Self {
        Self { events: lines.iter().map(|l| ReadEvent::Line(l.to_string())).collect() }
    }

    pub fn then(mut self, event: ReadEvent) -> Self {
        self.events.push_back(event);
        self
    }
}

impl LineReader for ScriptedReader {
    fn read_line(&mut self, _prompt: &str) -> anyhow::Result<ReadEvent> {
        Ok(self.events.pop_front().unwrap_or(ReadEvent::Eof))
    }
}

/// Temporary home directory holding a history file
pub struct TestHome {
    temp_dir: TempDir,
}

impl TestHome {
    pub fn new() -> Self {
        Self { temp_dir: TempDir::new().expect("Failed to create temp dir") }
    }

    pub fn path(&self) -> &std::path::Path {
        self.temp_dir.path()
    }

    pub fn history_path(&self) -> PathBuf {
        self.temp_dir.path().join(".ai_shell_history")
    }

    pub fn history(&self) -> HistoryStore {
        HistoryStore::new(self.history_path())
    }

    /// Pre-populate the history file with the given lines
    pub fn with_history(self, lines: &[&str]) -> Self {
        let store = self.history();
        for line in lines {
            store.append(line).expect("Failed to write history");
        }
        self
    }
}

impl Default for TestHome {
    fn default() -> Self {
        Self::new()
    }
}

/// Assistant backed by a mock that answers every prompt with `reply`
pub fn replying_assistant(reply: &str) -> (Assistant, PromptLog) {
    let (generator, prompts) = MockGenerator::replying(reply);
    (Assistant::new(generator, MODEL), prompts)
}
