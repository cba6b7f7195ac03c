//! Directive handlers.
//!
//! Each handler turns the payload of one directive into the text printed to
//! the user, usually by filling a prompt template and asking the assistant.
//! Handlers return `anyhow::Result`; the dispatcher renders any error as text.

pub mod features;
pub mod prompts;

pub use features::{CHAT_USAGE, Handlers};
