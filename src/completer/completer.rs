use rustyline::{
    Helper, completion::{Completer, Pair}, highlight::Highlighter, hint::Hinter, validate::Validator
};
use tracing::warn;

use crate::history::{HistoryStore, reverse_values};

/// Line editor helper that completes and hints from stored history values.
pub struct HistoryCompleter {
    store: HistoryStore,
}

impl HistoryCompleter {
    pub fn new(store: HistoryStore) -> Self {
        Self { store }
    }

    /// Stored values starting with `prefix`, newest first.
    fn candidates(&self, prefix: &str) -> Vec<String> {
        match self.store.filtered_values(|value| value.starts_with(prefix)) {
            Ok(values) => reverse_values(&values),
            Err(e) => {
                warn!(error = %e, "history unavailable for completion");
                Vec::new()
            }
        }
    }

    fn suggest(&self, line: &str) -> Option<String> {
        if line.is_empty() {
            return None;
        }

        self.candidates(line)
            .into_iter()
            .find(|value| value.len() > line.len())
            .map(|value| value[line.len()..].to_string())
    }
}

impl Completer for HistoryCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let matches: Vec<Pair> = self
            .candidates(&line[..pos])
            .into_iter()
            .map(|value| Pair {
                display: value.clone(),
                replacement: value,
            })
            .collect();

        Ok((0, matches))
    }
}

impl Hinter for HistoryCompleter {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<Self::Hint> {
        if pos < line.len() {
            return None;
        }
        self.suggest(line)
    }
}

impl Highlighter for HistoryCompleter {}
impl Validator for HistoryCompleter {}
impl Helper for HistoryCompleter {}
