use std::sync::Arc;

use kanal::AsyncSender;
use qamus_core::favorites::Toggle;
use qamus_types::AppEvent;

use crate::state::AppState;

pub async fn handle_toggle(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let current = state.lookup.current_result().await;
    let outcome = state.favorites.write().await.toggle(current.as_ref());

    let notice = match outcome {
        Ok(Some(Toggle::Added(id))) => {
            tracing::info!("Saved favorite {}", id);
            format!("❤️  Saved to your treasures (id {})", id)
        }
        Ok(Some(Toggle::Removed)) => "Removed from your treasures".to_string(),
        Ok(None) => "Look up a word first".to_string(),
        Err(e) => {
            tracing::error!("Failed to persist favorites: {}", e);
            "Could not save your treasures".to_string()
        }
    };

    app_to_ui_tx.send(AppEvent::Notice(notice)).await?;
    app_to_ui_tx.send(AppEvent::FavoritesChanged).await?;
    // Card's favorite marker
    app_to_ui_tx.send(AppEvent::SessionChanged).await?;
    Ok(())
}

pub async fn handle_remove(
    state: Arc<AppState>,
    id: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let removed = state.favorites.write().await.remove(&id);

    match removed {
        Ok(true) => {
            app_to_ui_tx.send(AppEvent::FavoritesChanged).await?;
            app_to_ui_tx.send(AppEvent::SessionChanged).await?;
        }
        Ok(false) => tracing::debug!("No favorite with id {}", id),
        Err(e) => tracing::error!("Failed to persist favorites: {}", e),
    }

    Ok(())
}

pub async fn handle_open(
    state: Arc<AppState>,
    id: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let saved = state.favorites.read().await.get(&id).cloned();

    match saved {
        Some(saved) => {
            tracing::info!("Opening favorite {}", id);
            state.lookup.show_saved(saved.word).await;
        }
        None => {
            app_to_ui_tx
                .send(AppEvent::Notice(format!("No saved word with id {}", id)))
                .await?;
        }
    }

    Ok(())
}

pub async fn handle_clear(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if let Err(e) = state.favorites.write().await.clear() {
        tracing::error!("Failed to clear favorites: {}", e);
    }

    app_to_ui_tx.send(AppEvent::FavoritesChanged).await?;
    app_to_ui_tx.send(AppEvent::SessionChanged).await?;
    Ok(())
}

pub async fn handle_list(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let items = state.favorites.read().await.items().to_vec();
    app_to_ui_tx.send(AppEvent::ShowFavorites(items)).await?;
    Ok(())
}
