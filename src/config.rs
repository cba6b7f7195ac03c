//! Runtime configuration resolved once at startup.
//!
//! Precedence for every setting: command-line flag, then environment variable,
//! then built-in default.

use std::fmt;
use std::path::PathBuf;

use anyhow::Result;

use crate::utils::{get_history_path, non_empty_var};

/// Model used when neither `--model` nor `AI_SHELL_MODEL` is given
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
/// Public Gemini API endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const API_KEY_FALLBACK_ENV: &str = "GOOGLE_API_KEY";
pub const MODEL_ENV: &str = "AI_SHELL_MODEL";
pub const HISTORY_ENV: &str = "AI_SHELL_HISTORY";
pub const BASE_URL_ENV: &str = "GEMINI_BASE_URL";
pub const LOG_ENV: &str = "AI_SHELL_LOG";

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub model: Option<String>,
    pub history_file: Option<PathBuf>,
}

#[derive(Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub model: String,
    pub history_path: PathBuf,
    pub api_key: Option<String>,
    pub base_url: String,
}

impl ShellConfig {
    /// Resolve the configuration from flags, environment and defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no history path was given and the home directory
    /// cannot be determined.
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self> {
        let model = overrides
            .model
            .filter(|m| !m.trim().is_empty())
            .or_else(|| non_empty_var(MODEL_ENV))
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let history_path = match overrides
            .history_file
            .or_else(|| non_empty_var(HISTORY_ENV).map(PathBuf::from))
        {
            Some(path) => path,
            None => get_history_path()?,
        };

        let api_key = non_empty_var(API_KEY_ENV).or_else(|| non_empty_var(API_KEY_FALLBACK_ENV));

        let base_url = non_empty_var(BASE_URL_ENV)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self { model, history_path, api_key, base_url })
    }
}

// Keeps the API key out of debug logs
impl fmt::Debug for ShellConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShellConfig")
            .field("model", &self.model)
            .field("history_path", &self.history_path)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}
