use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use qamus_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod favorite;
pub mod quote;
pub mod search;
pub mod speech;
pub mod text_input;
pub mod theme;

use favorite::{handle_clear, handle_list, handle_open, handle_remove, handle_toggle};
use quote::handle_quote_refresh;
use search::{handle_retry, handle_search, handle_topic};
use speech::handle_speech;
use text_input::parse_input;
use theme::handle_theme_toggle;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            event = ui_to_app_rx.recv() => event?,
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                return Ok(());
            }
        };

        let event = match event {
            AppEvent::TextInput(line) => match parse_input(&line) {
                Some(event) => event,
                None => continue,
            },
            other => other,
        };

        if matches!(event, AppEvent::Quit) {
            tracing::info!("[EVENT_LOOP] Quit requested");
            cancel.cancel();
            return Ok(());
        }

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );
        handle_events(state.clone(), &app_to_ui_tx, event).await?;
    }
}

pub(crate) async fn handle_events(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::Search(query) => {
            handle_search(state, query);
        }
        AppEvent::Retry => {
            handle_retry(state, app_to_ui_tx).await?;
        }
        AppEvent::Topic(topic) => {
            handle_topic(state, topic, app_to_ui_tx).await?;
        }
        AppEvent::Reset => {
            state.lookup.reset().await;
        }
        AppEvent::ToggleFavorite => {
            handle_toggle(state, app_to_ui_tx).await?;
        }
        AppEvent::RemoveFavorite(id) => {
            handle_remove(state, id, app_to_ui_tx).await?;
        }
        AppEvent::OpenFavorite(id) => {
            handle_open(state, id, app_to_ui_tx).await?;
        }
        AppEvent::ClearFavorites => {
            handle_clear(state, app_to_ui_tx).await?;
        }
        AppEvent::ListFavorites => {
            handle_list(state, app_to_ui_tx).await?;
        }
        AppEvent::Speak(target) => {
            handle_speech(state, target, app_to_ui_tx).await?;
        }
        AppEvent::RefreshQuote => {
            handle_quote_refresh(state, app_to_ui_tx.clone());
        }
        AppEvent::ToggleTheme => {
            handle_theme_toggle(state, app_to_ui_tx).await?;
        }
        AppEvent::Help | AppEvent::Notice(_) => {
            // Rendered by the UI as is
            app_to_ui_tx.send(event).await?;
        }
        AppEvent::TextInput(_) | AppEvent::Quit => {
            // Resolved in event_loop
        }
        AppEvent::SessionChanged
        | AppEvent::FavoritesChanged
        | AppEvent::ShowFavorites(_)
        | AppEvent::ShowQuote(_)
        | AppEvent::ThemeChanged(_) => {
            // UI-only events, ignore in backend
        }
    }

    Ok(())
}
