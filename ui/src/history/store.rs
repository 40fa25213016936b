//! Most-recent-first history, capped at [`HISTORY_LIMIT`] entries and written
//! through to a [`StorageBackend`] after every change.
//!
//! Storage problems never reach the session: a missing or corrupt blob starts
//! an empty history, and a failed write is logged and leaves the store working
//! from memory for the rest of the run.

use tracing::{debug, info, warn};

use crate::core::storage::{StorageBackend, StorageError};
use crate::deck::Flashcard;

use super::HistoryEntry;

pub const HISTORY_LIMIT: usize = 10;

#[derive(Debug)]
pub struct HistoryStore<B> {
    backend: B,
    entries: Vec<HistoryEntry>,
    persist_error: Option<StorageError>,
}

impl<B: StorageBackend> HistoryStore<B> {
    /// Read the persisted list once.
    pub fn open(backend: B) -> Self {
        let entries = match backend.get() {
            None => {
                debug!("no stored history");
                Vec::new()
            }
            Some(raw) => match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
                Ok(mut entries) => {
                    entries.truncate(HISTORY_LIMIT);
                    info!(count = entries.len(), "history loaded");
                    entries
                }
                Err(err) => {
                    warn!("stored history is malformed, starting empty: {err}");
                    Vec::new()
                }
            },
        };

        Self {
            backend,
            entries,
            persist_error: None,
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Last write failure, if the store is currently only in memory.
    pub fn persist_error(&self) -> Option<&StorageError> {
        self.persist_error.as_ref()
    }

    /// Prepend `entry`, evicting the oldest beyond the limit. Returns the id
    /// the entry was stored under, bumped past the newest existing id if the
    /// clock hasn't moved on.
    pub fn append(&mut self, mut entry: HistoryEntry) -> i64 {
        if let Some(newest) = self.entries.first() {
            if entry.id <= newest.id {
                entry.id = newest
                    .id
                    .checked_add(1)
                    .filter(|next| self.get(*next).is_none())
                    .unwrap_or_else(|| self.unused_id_below(newest.id));
            }
        }
        let id = entry.id;

        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_LIMIT);
        self.persist();
        id
    }

    /// Largest id under `start` that no entry uses. Only reached when the
    /// id after the newest is out of range or taken.
    fn unused_id_below(&self, start: i64) -> i64 {
        // At most HISTORY_LIMIT ids are taken, so one of the next
        // HISTORY_LIMIT + 1 candidates is free.
        (1..=HISTORY_LIMIT as i64 + 1)
            .filter_map(|step| start.checked_sub(step))
            .find(|candidate| self.get(*candidate).is_none())
            .unwrap_or(start)
    }

    /// Cards of entry `id`, every answer hidden.
    pub fn load(&self, id: i64) -> Option<Vec<Flashcard>> {
        self.get(id).map(HistoryEntry::fresh_cards)
    }

    /// Drop entry `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        let removed = self.entries.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    fn persist(&mut self) {
        let serialized = match serde_json::to_string(&self.entries) {
            Ok(json) => json,
            Err(err) => {
                warn!("failed to serialise history: {err}");
                return;
            }
        };

        match self.backend.set(&serialized) {
            Ok(()) => self.persist_error = None,
            Err(err) => {
                warn!("failed to persist history, keeping it in memory: {err}");
                self.persist_error = Some(err);
            }
        }
    }
}
