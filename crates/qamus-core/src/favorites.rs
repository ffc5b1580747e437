use std::sync::Arc;

use qamus_types::{SavedWord, WordResult};

use crate::storage::{KeyValueStore, StorageError};

/// Result of a favorite toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle {
    Added(String),
    Removed,
}

/// Ordered favorites, mirrored to a key-value store after every change
pub struct FavoritesStore {
    items: Vec<SavedWord>,
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl FavoritesStore {
    /// Load persisted favorites. Missing or unreadable data yields an empty list
    pub fn restore(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();

        let items = match store.read(&key) {
            Ok(Some(data)) => match serde_json::from_str::<Vec<SavedWord>>(&data) {
                Ok(items) => items,
                Err(e) => {
                    tracing::error!("Failed to parse saved favorites: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::error!("Failed to read saved favorites: {}", e);
                Vec::new()
            }
        };

        tracing::info!("Restored {} favorites", items.len());

        Self { items, store, key }
    }

    pub fn items(&self) -> &[SavedWord] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_favorite(&self, original: &str) -> bool {
        self.items.iter().any(|f| f.word.same_word(original))
    }

    /// Save `current` or, if a favorite with the same word exists, remove it.
    /// No-op without a current result
    pub fn toggle(&mut self, current: Option<&WordResult>) -> Result<Option<Toggle>, StorageError> {
        let Some(word) = current else {
            return Ok(None);
        };

        let previous = self.items.clone();
        let toggle = if self.is_favorite(&word.original) {
            self.items.retain(|f| !f.word.same_word(&word.original));
            Toggle::Removed
        } else {
            let timestamp = chrono::Utc::now().timestamp_millis();
            let id = self.next_id(timestamp);
            self.items.push(SavedWord {
                id: id.clone(),
                timestamp,
                word: word.clone(),
            });
            Toggle::Added(id)
        };

        if let Err(e) = self.persist() {
            self.items = previous;
            return Err(e);
        }
        Ok(Some(toggle))
    }

    /// Remove by exact id. Returns whether anything was removed
    pub fn remove(&mut self, id: &str) -> Result<bool, StorageError> {
        let Some(index) = self.items.iter().position(|f| f.id == id) else {
            return Ok(false);
        };

        let removed = self.items.remove(index);
        if let Err(e) = self.persist() {
            self.items.insert(index, removed);
            return Err(e);
        }
        Ok(true)
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.store.clear(&self.key)?;
        self.items.clear();
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&SavedWord> {
        self.items.iter().find(|f| f.id == id)
    }

    /// Millisecond id, bumped past every numeric id already present.
    /// After a bump the id no longer equals the entry's timestamp
    fn next_id(&self, now_millis: i64) -> String {
        let max_existing = self
            .items
            .iter()
            .filter_map(|f| f.id.parse::<i64>().ok())
            .max();

        match max_existing {
            Some(max) if max >= now_millis => (max + 1).to_string(),
            _ => now_millis.to_string(),
        }
    }

    fn persist(&self) -> Result<(), StorageError> {
        let data = serde_json::to_string(&self.items)?;
        self.store.write(&self.key, &data)
    }
}
