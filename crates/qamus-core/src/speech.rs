use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use qamus_audio::{AudioError, AudioSink, decode_pcm16};
use qamus_genai::{ServiceError, WordService};
use qamus_types::Language;

/// Admits one speech request at a time. Requests made while busy are dropped
#[derive(Debug, Default)]
pub struct SpeechGate {
    busy: AtomicBool,
}

impl SpeechGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_acquire(&self) -> Option<SpeechPermit<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SpeechPermit { gate: self })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Releases the gate on drop
pub struct SpeechPermit<'a> {
    gate: &'a SpeechGate,
}

impl Drop for SpeechPermit<'_> {
    fn drop(&mut self) {
        self.gate.busy.store(false, Ordering::Release);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechOutcome {
    Played,
    /// Another request was in flight
    Busy,
    /// Logged and swallowed
    Failed,
}

#[derive(Debug, thiserror::Error)]
enum SpeechError {
    #[error("service: {0}")]
    Service(#[from] ServiceError),

    #[error("no audio in response")]
    NoAudio,

    #[error("audio: {0}")]
    Audio(#[from] AudioError),

    #[error("playback task: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub struct Speaker {
    service: Arc<dyn WordService>,
    sink: Arc<dyn AudioSink>,
    gate: SpeechGate,
    sample_rate: u32,
    channels: u16,
}

impl Speaker {
    pub fn new(
        service: Arc<dyn WordService>,
        sink: Arc<dyn AudioSink>,
        sample_rate: u32,
        channels: u16,
    ) -> Self {
        Self {
            service,
            sink,
            gate: SpeechGate::new(),
            sample_rate,
            channels,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.gate.is_busy()
    }

    /// Synthesize `text` and play it. Never surfaces an error
    pub async fn request_speech(&self, text: &str, language: Language) -> SpeechOutcome {
        let Some(_permit) = self.gate.try_acquire() else {
            tracing::debug!("Speech already in flight, ignoring request");
            return SpeechOutcome::Busy;
        };

        match self.speak(text, language).await {
            Ok(()) => SpeechOutcome::Played,
            Err(e) => {
                tracing::error!("Speech for '{}' ({}) failed: {}", text, language, e);
                SpeechOutcome::Failed
            }
        }
    }

    async fn speak(&self, text: &str, language: Language) -> Result<(), SpeechError> {
        let bytes = self
            .service
            .synthesize_speech(text, language)
            .await?
            .ok_or(SpeechError::NoAudio)?;

        let buffer = decode_pcm16(&bytes, self.sample_rate, self.channels)?;
        tracing::debug!("Decoded {} frames of speech", buffer.frames());

        let sink = self.sink.clone();
        tokio::task::spawn_blocking(move || sink.play(&buffer)).await??;

        Ok(())
    }
}
