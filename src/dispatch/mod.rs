//! Input routing.
//!
//! [`rules::route`] is a pure lookup over an ordered rule table; the
//! [`Dispatcher`] runs the matching handler and renders any failure as text.

pub mod rules;

use tracing::{debug, warn};

pub use rules::{Directive, RULES, Route, route};

use crate::ai::Assistant;
use crate::handlers::Handlers;
use crate::history::HistoryStore;
use crate::shell::CommandRunner;

pub struct Dispatcher<'a> {
    handlers: Handlers<'a>,
}

impl<'a> Dispatcher<'a> {
    pub fn new(ai: &'a Assistant, shell: &'a dyn CommandRunner, history: &'a HistoryStore) -> Self {
        Self { handlers: Handlers::new(ai, shell, history) }
    }

    /// Route one input line and produce the text to print
    ///
    /// Never fails: handler errors are returned as their description.
    pub fn dispatch(&self, line: &str) -> String {
        let Route { directive, payload } = route(line.trim());
        debug!(?directive, payload, "dispatching input");

        let h = &self.handlers;
        let result = match directive {
            Directive::Explain => h.explain(payload),
            Directive::NaturalLanguage => h.natural_language(payload),
            Directive::HistorySearch => h.history_search(payload),
            Directive::Debug => h.debug(payload),
            Directive::Doc => h.doc(payload),
            Directive::Hybrid => h.hybrid(payload),
            Directive::Summarize => h.summarize(payload),
            Directive::Plan => h.plan(payload),
            Directive::Chat => h.chat(payload),
            Directive::Shell => h.fallback(payload),
        };

        result.unwrap_or_else(|e| {
            warn!(?directive, error = %e, "handler failed");
            format!("{:#}", e)
        })
    }
}
