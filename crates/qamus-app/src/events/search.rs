use std::sync::Arc;

use kanal::AsyncSender;
use qamus_core::lookup::LookupOutcome;
use qamus_core::topics::pick_suggestion;
use qamus_types::AppEvent;

use crate::state::AppState;

/// Run the lookup on its own task so a newer search can supersede it
pub fn handle_search(state: Arc<AppState>, query: String) {
    let lookup = state.lookup.clone();
    tokio::spawn(async move {
        match lookup.perform_lookup(&query).await {
            LookupOutcome::Skipped => tracing::debug!("Ignoring blank query"),
            LookupOutcome::Found { token, .. } => {
                tracing::debug!("Lookup {} found '{}'", token, query)
            }
            LookupOutcome::Failed(kind) => {
                tracing::debug!("Lookup of '{}' failed: {:?}", query, kind)
            }
            LookupOutcome::Superseded => {
                tracing::debug!("Lookup of '{}' superseded", query)
            }
        }
    });
}

pub async fn handle_retry(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let query = state.lookup.session().await.query;
    if query.trim().is_empty() {
        app_to_ui_tx
            .send(AppEvent::Notice("Nothing to retry yet".to_string()))
            .await?;
        return Ok(());
    }

    handle_search(state, query);
    Ok(())
}

pub async fn handle_topic(
    state: Arc<AppState>,
    topic: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match pick_suggestion(&topic) {
        Some(word) => {
            tracing::info!("Topic '{}' picked '{}'", topic, word);
            handle_search(state, word.to_string());
        }
        None => {
            app_to_ui_tx
                .send(AppEvent::Notice(format!(
                    "Unknown topic '{}', try school, tech, travel or emotions",
                    topic
                )))
                .await?;
        }
    }

    Ok(())
}
