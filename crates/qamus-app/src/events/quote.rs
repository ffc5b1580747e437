use std::sync::Arc;

use kanal::AsyncSender;
use qamus_core::quote::fetch_motivational_quote;
use qamus_types::AppEvent;

use crate::state::AppState;

/// Fetch a quote in the background; never blocks the event loop
pub fn handle_quote_refresh(state: Arc<AppState>, app_to_ui_tx: AsyncSender<AppEvent>) {
    tokio::spawn(async move {
        let quote = fetch_motivational_quote(state.service.as_ref()).await;
        *state.quote.write().await = quote.clone();

        if let Err(e) = app_to_ui_tx.send(AppEvent::ShowQuote(quote)).await {
            tracing::debug!("Quote not delivered: {}", e);
        }
    });
}
