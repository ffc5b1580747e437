use std::sync::Arc;

use kanal::AsyncSender;
use qamus_core::speech::SpeechOutcome;
use qamus_types::{AppEvent, SpeechTarget};

use crate::state::AppState;

/// Speak part of the current card. Fire-and-forget; a request made while
/// another is playing is dropped
pub async fn handle_speech(
    state: Arc<AppState>,
    target: SpeechTarget,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(word) = state.lookup.current_result().await else {
        app_to_ui_tx
            .send(AppEvent::Notice("Look up a word first".to_string()))
            .await?;
        return Ok(());
    };

    let text = word.speech_text(target).to_string();
    let language = target.language();
    let speaker = state.speaker.clone();

    tokio::spawn(async move {
        match speaker.request_speech(&text, language).await {
            SpeechOutcome::Played => tracing::debug!("Spoke '{}' ({})", text, language),
            SpeechOutcome::Busy => tracing::debug!("Speaker busy, dropped '{}'", text),
            SpeechOutcome::Failed => {}
        }
    });

    Ok(())
}
