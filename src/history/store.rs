use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const NO_HISTORY_MESSAGE: &str = "No history yet.\n";
const NO_MATCHES_MESSAGE: &str = "No matches found.\n";

/// Result of a substring search over the history file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The history file does not exist yet
    NoHistory,
    /// The file exists but no line contains the term
    NoMatches,
    /// Matching lines in file order
    Matches(Vec<String>),
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::NoHistory => f.write_str(NO_HISTORY_MESSAGE),
            SearchOutcome::NoMatches => f.write_str(NO_MATCHES_MESSAGE),
            SearchOutcome::Matches(lines) => f.write_str(&lines.join("\n")),
        }
    }
}

/// Append-only plain-text log of submitted input lines, one per line
///
/// No locking: concurrent shells appending to the same file are not coordinated.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the parent directory of the history file if it is missing
    pub fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create history directory: {}", parent.display())
            })?;
        }
        Ok(())
    }

    /// Append one line, creating the file (and its directory) on first use
    pub fn append(&self, line: &str) -> Result<()> {
        self.ensure_parent_dir()?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open history file: {}", self.path.display()))?;

        writeln!(file, "{}", line)
            .with_context(|| format!("Failed to write history file: {}", self.path.display()))?;

        Ok(())
    }

    /// All stored lines in append order; empty when the file does not exist
    pub fn entries(&self) -> Result<Vec<String>> {
        match self.read_contents()? {
            Some(contents) => Ok(contents.lines().map(str::to_string).collect()),
            None => Ok(Vec::new()),
        }
    }

    /// Lines containing `term` as a literal substring, trimmed, in file order
    pub fn search(&self, term: &str) -> Result<SearchOutcome> {
        let Some(contents) = self.read_contents()? else {
            return Ok(SearchOutcome::NoHistory);
        };

        let matches: Vec<String> = contents
            .split_inclusive('\n')
            .filter(|line| line.contains(term))
            .map(|line| line.trim().to_string())
            .collect();

        if matches.is_empty() {
            Ok(SearchOutcome::NoMatches)
        } else {
            Ok(SearchOutcome::Matches(matches))
        }
    }

    fn read_contents(&self) -> Result<Option<String>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read history file: {}", self.path.display())),
        }
    }
}
