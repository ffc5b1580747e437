use qamus_types::Theme;

use crate::storage::{KeyValueStore, StorageError};

/// Saved theme, `Theme::default()` when absent or unreadable
pub fn restore_theme(store: &dyn KeyValueStore, key: &str) -> Theme {
    match store.read(key) {
        Ok(Some(value)) => Theme::parse(&value).unwrap_or_else(|| {
            tracing::warn!("Ignoring unknown theme value {:?}", value);
            Theme::default()
        }),
        Ok(None) => Theme::default(),
        Err(e) => {
            tracing::error!("Failed to read theme: {}", e);
            Theme::default()
        }
    }
}

pub fn save_theme(store: &dyn KeyValueStore, key: &str, theme: Theme) -> Result<(), StorageError> {
    store.write(key, theme.as_str())
}
