use std::path::Path;

use anyhow::Result;

use super::prompts;
use crate::ai::Assistant;
use crate::history::HistoryStore;
use crate::shell::CommandRunner;
use crate::utils::read_text_file;

pub const CHAT_USAGE: &str = "Enter something after 'gemini' to chat with Gemini.";

/// The directive handlers, sharing one assistant, shell and history store
pub struct Handlers<'a> {
    ai: &'a Assistant,
    shell: &'a dyn CommandRunner,
    history: &'a HistoryStore,
}

impl<'a> Handlers<'a> {
    pub fn new(ai: &'a Assistant, shell: &'a dyn CommandRunner, history: &'a HistoryStore) -> Self {
        Self { ai, shell, history }
    }

    pub fn explain(&self, command: &str) -> Result<String> {
        Ok(self.ai.ask_text(&prompts::explain(command)))
    }

    pub fn natural_language(&self, instruction: &str) -> Result<String> {
        Ok(self.ai.ask_text(&prompts::natural_language(instruction)))
    }

    pub fn history_search(&self, term: &str) -> Result<String> {
        Ok(self.history.search(term)?.to_string())
    }

    /// Run the command; only a failing run is sent for diagnosis
    pub fn debug(&self, command: &str) -> Result<String> {
        match self.shell.run(command) {
            Ok(output) if output.success() => Ok(output.stdout),
            Ok(output) => Ok(self.ai.ask_text(&prompts::debug(command, &output.stderr))),
            Err(e) => Ok(format!("Error running debug: {}", e)),
        }
    }

    pub fn doc(&self, path: &str) -> Result<String> {
        let file = Path::new(path);
        if !file.exists() {
            return Ok(format!("File {} not found.", path));
        }

        let code = read_text_file(file)?;
        Ok(self.ai.ask_text(&prompts::doc(&code)))
    }

    /// Suggest a single command without running it
    pub fn hybrid(&self, instruction: &str) -> Result<String> {
        Ok(format!("$ {}", self.ai.ask_text(&prompts::hybrid(instruction))))
    }

    pub fn summarize(&self, command: &str) -> Result<String> {
        match self.shell.run(command) {
            Ok(output) => Ok(self.ai.ask_text(&prompts::summarize(&output.stdout))),
            Err(e) => Ok(e.to_string()),
        }
    }

    pub fn plan(&self, task: &str) -> Result<String> {
        Ok(self.ai.ask_text(&prompts::plan(task)))
    }

    /// Direct chat: the trimmed text is sent as-is
    pub fn chat(&self, text: &str) -> Result<String> {
        let prompt = text.trim();
        if prompt.is_empty() {
            return Ok(CHAT_USAGE.to_string());
        }
        Ok(self.ai.ask_text(prompt))
    }

    /// Plain shell execution, with a suggested fix when the command fails
    pub fn fallback(&self, command: &str) -> Result<String> {
        match self.shell.run(command) {
            Ok(output) if output.success() => Ok(output.stdout),
            Ok(output) => {
                let fix = self.ai.ask_text(&prompts::fix(command, &output.stderr));
                Ok(format!("Error:\n{}\nDid you mean:\n{}\n", output.stderr, fix))
            }
            Err(e) => Ok(e.to_string()),
        }
    }
}
