//! Adapter around the remote text-generation service.
//!
//! Calls return a typed [`AiError`] on failure; [`render_reply`] turns an
//! outcome into the text the shell prints, so no AI failure ever escapes as a
//! fault.

pub mod client;
pub mod error;
pub mod gemini;

pub use client::{Assistant, TextGenerator, UNAVAILABLE_MESSAGE, render_reply};
pub use error::AiError;
pub use gemini::GeminiClient;
