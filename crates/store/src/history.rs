use serde::{Deserialize, Serialize};

pub const HISTORY_LIMIT: usize = 10;

/// Recently searched ingredients, newest first.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct SearchHistory(Vec<String>);

impl SearchHistory {
    /// Remember `term` at the front. Terms already known stay where they are.
    /// Returns whether the history changed.
    pub fn record(&mut self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() || self.0.iter().any(|known| known == term) {
            return false;
        }

        self.0.insert(0, term.to_owned());
        self.0.truncate(HISTORY_LIMIT);

        true
    }

    pub fn terms(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
