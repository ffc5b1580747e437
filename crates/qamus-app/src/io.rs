use std::io::BufRead;

use kanal::AsyncSender;
use qamus_types::AppEvent;
use tokio_util::sync::CancellationToken;

/// Forward typed lines to the app until cancelled. End of input quits.
///
/// Reading happens on a plain thread: a blocked stdin read must not hold up
/// runtime shutdown.
pub async fn watch_stdin(
    event_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let tx = event_tx.clone_sync();

    std::thread::Builder::new()
        .name("qamus-stdin".to_string())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(AppEvent::TextInput(line)).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        tracing::error!("Failed to read input: {}", e);
                        break;
                    }
                }
            }

            tracing::info!("Input closed");
            let _ = tx.send(AppEvent::Quit);
        })?;

    cancel.cancelled().await;
    tracing::info!("Input watcher stopping");
    Ok(())
}
