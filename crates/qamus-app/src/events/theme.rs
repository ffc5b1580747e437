use std::sync::Arc;

use kanal::AsyncSender;
use qamus_core::theme::save_theme;
use qamus_types::AppEvent;

use crate::state::AppState;

pub async fn handle_theme_toggle(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let theme = {
        let mut theme = state.theme.write().await;
        *theme = theme.toggled();
        *theme
    };

    let key = state.config.read().await.storage.theme_key.clone();
    if let Err(e) = save_theme(state.store.as_ref(), &key, theme) {
        tracing::error!("Failed to save theme: {}", e);
    }

    app_to_ui_tx.send(AppEvent::ThemeChanged(theme)).await?;
    Ok(())
}
