use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use qamus_audio::{AudioSink, WavFileSink};
use qamus_config::Config;
use qamus_core::storage::{FileStore, KeyValueStore, MemoryStore};
use qamus_genai::{GeminiClient, WordService};
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod io;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::{AppController, ChannelSet};
use self::state::AppState;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

/// Kids' dictionary: translate, explain, illustrate and speak words
#[derive(Debug, Parser)]
#[command(name = "qamus", version)]
struct Cli {
    /// JSON profile overriding the environment
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where favorites and preferences are kept
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Keep favorites in memory only
    #[arg(long)]
    ephemeral: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Word to look up right away
    word: Option<String>,
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[cfg(feature = "playback")]
fn live_sink() -> Option<Arc<dyn AudioSink>> {
    Some(Arc::new(qamus_audio::RodioSink))
}

#[cfg(not(feature = "playback"))]
fn live_sink() -> Option<Arc<dyn AudioSink>> {
    None
}

fn build_sink(config: &Config) -> Arc<dyn AudioSink> {
    if config.audio.live_playback {
        match live_sink() {
            Some(sink) => return sink,
            None => tracing::warn!("Live playback needs the `playback` feature, writing clips to disk"),
        }
    }
    Arc::new(WavFileSink::new(config.audio_dir()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::new(),
    };
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = dir;
    }

    let service: Arc<dyn WordService> = Arc::new(GeminiClient::new(config.genai.clone())?);
    let metadata = service.metadata();
    tracing::info!("Using {} backend", metadata.name);
    if metadata.requires_api_key && !config.genai.has_api_key() {
        tracing::warn!("No API key set (GEMINI_API_KEY), lookups will fail until one is provided");
    }

    let store: Arc<dyn KeyValueStore> = if cli.ephemeral {
        Arc::new(MemoryStore::new())
    } else {
        tracing::info!("Data directory: {}", config.storage.data_dir.display());
        Arc::new(FileStore::new(config.storage.data_dir.clone()))
    };
    let sink = build_sink(&config);

    let channels = ChannelSet::new();
    let state = Arc::new(AppState::new(
        config,
        service,
        store,
        sink,
        channels.app_to_ui.0.clone(),
    ));

    let controller = AppController::new(state, channels);
    let mut tasks = controller.spawn_tasks();
    controller.startup(cli.word).await?;

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("Task finished, shutting down"),
                Some(Ok(Err(e))) => tracing::error!("Task failed: {e}"),
                Some(Err(e)) => tracing::error!("Task panicked: {e}"),
                None => {}
            }
        }
    }

    controller.shutdown();
    tasks.shutdown().await;

    Ok(())
}
