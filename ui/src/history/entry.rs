use serde::{Deserialize, Serialize};

use crate::core::{format, timing};
use crate::deck::Flashcard;

/// One stored deck. `id` is the creation time in Unix milliseconds and is
/// unique within a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub date: String,
    pub filename: String,
    pub flashcards: Vec<Flashcard>,
}

impl HistoryEntry {
    /// Entry stamped with the current time.
    pub fn now(filename: impl Into<String>, flashcards: Vec<Flashcard>) -> Self {
        Self {
            id: timing::unix_millis(),
            date: format::format_history_date(format::local_now()),
            filename: filename.into(),
            flashcards: flashcards.into_iter().map(Flashcard::hidden).collect(),
        }
    }

    pub fn card_count(&self) -> usize {
        self.flashcards.len()
    }

    /// Copy of the cards with every answer hidden.
    pub fn fresh_cards(&self) -> Vec<Flashcard> {
        self.flashcards.iter().cloned().map(Flashcard::hidden).collect()
    }
}
