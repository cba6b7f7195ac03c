//! AI Shell - an interactive shell with AI-assisted commands
//!
//! Every input line is either run by the system shell or turned into a prompt
//! for a Gemini model:
//!
//! - `cmd?` explains a command
//! - `nl <text>` translates an instruction into a command
//! - `history search <term>` searches earlier input
//! - `debug <cmd>` runs a command and explains its failure
//! - `doc <path>` generates documentation for a file
//! - `ai <text>` suggests a single command without running it
//! - `<cmd> | ai summarize` summarizes a command's output
//! - `plan <text>` turns a task into a sequence of commands
//! - `gemini <text>` chats with the model directly
//!
//! Any other line runs in the shell; when it fails, the model suggests a fix.
//!
//! # Example
//!
//! ```no_run
//! use ai_shell::{Assistant, Dispatcher, HistoryStore, SystemShell};
//!
//! let ai = Assistant::unavailable("gemini-2.5-flash");
//! let history = HistoryStore::new("/tmp/.ai_shell_history");
//! let dispatcher = Dispatcher::new(&ai, &SystemShell, &history);
//! println!("{}", dispatcher.dispatch("echo hello"));
//! ```

pub mod ai;
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod handlers;
pub mod history;
pub mod repl;
pub mod shell;
pub mod utils;

// Re-export commonly used types
pub use ai::{AiError, Assistant, TextGenerator};
pub use config::ShellConfig;
pub use dispatch::{Directive, Dispatcher, route};
pub use history::{HistoryStore, SearchOutcome};
pub use shell::{CommandOutput, CommandRunner, SystemShell};
