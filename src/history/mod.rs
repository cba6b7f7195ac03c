//! Persistent shell history.
//!
//! Every submitted line (except `exit` and blank input) is appended to a flat
//! text file, by default `~/.ai_shell_history`. The file has no header or
//! metadata, so it stays readable with ordinary tools.

pub mod store;

pub use store::{HistoryStore, SearchOutcome};
