use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// File name of the shell history inside the home directory
pub const HISTORY_FILE_NAME: &str = ".ai_shell_history";

/// Get the user's home directory, preferring `$HOME` over the platform lookup
pub fn get_home_dir() -> Result<PathBuf> {
    match env::var_os("HOME") {
        Some(home) if !home.is_empty() => Ok(PathBuf::from(home)),
        _ => dirs::home_dir().context("HOME environment variable not set"),
    }
}

/// Get the default history file path (~/.ai_shell_history)
pub fn get_history_path() -> Result<PathBuf> {
    Ok(get_home_dir()?.join(HISTORY_FILE_NAME))
}

/// Read an environment variable, treating empty values as unset
pub fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
