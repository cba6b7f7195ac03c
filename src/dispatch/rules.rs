//! Ordered routing table.
//!
//! Rules are checked top to bottom and the first match wins. The order is
//! part of the shell's observable behaviour: the `?` suffix rule comes first,
//! so `nl list files?` is explained rather than translated.

/// What an input line asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Explain,
    NaturalLanguage,
    HistorySearch,
    Debug,
    Doc,
    Hybrid,
    Summarize,
    Plan,
    Chat,
    /// No rule matched: run the line as a shell command
    Shell,
}

/// How a rule recognizes a line and extracts its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Line ends with the text; payload is everything before it
    Suffix(&'static str),
    /// Line starts with the text; payload is everything after it
    Prefix(&'static str),
    /// Line contains the text; payload is everything before its first occurrence
    Contains(&'static str),
}

impl Pattern {
    pub fn extract<'a>(&self, line: &'a str) -> Option<&'a str> {
        match *self {
            Pattern::Suffix(suffix) => line.strip_suffix(suffix),
            Pattern::Prefix(prefix) => line.strip_prefix(prefix),
            Pattern::Contains(marker) => line.split_once(marker).map(|(before, _)| before),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub directive: Directive,
    pub pattern: Pattern,
}

pub const SUMMARIZE_MARKER: &str = "| ai summarize";

/// Routing rules in priority order
pub const RULES: &[Rule] = &[
    Rule { directive: Directive::Explain, pattern: Pattern::Suffix("?") },
    Rule { directive: Directive::NaturalLanguage, pattern: Pattern::Prefix("nl ") },
    Rule { directive: Directive::HistorySearch, pattern: Pattern::Prefix("history search ") },
    Rule { directive: Directive::Debug, pattern: Pattern::Prefix("debug ") },
    Rule { directive: Directive::Doc, pattern: Pattern::Prefix("doc ") },
    Rule { directive: Directive::Hybrid, pattern: Pattern::Prefix("ai ") },
    Rule { directive: Directive::Summarize, pattern: Pattern::Contains(SUMMARIZE_MARKER) },
    Rule { directive: Directive::Plan, pattern: Pattern::Prefix("plan ") },
    Rule { directive: Directive::Chat, pattern: Pattern::Prefix("gemini") },
];

/// A routed input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route<'a> {
    pub directive: Directive,
    pub payload: &'a str,
}

/// Route a line through [`RULES`], falling back to [`Directive::Shell`]
pub fn route(line: &str) -> Route<'_> {
    RULES
        .iter()
        .find_map(|rule| {
            rule.pattern.extract(line).map(|payload| Route { directive: rule.directive, payload })
        })
        .unwrap_or(Route { directive: Directive::Shell, payload: line })
}
