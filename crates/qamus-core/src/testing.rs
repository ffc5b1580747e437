//! In-memory doubles for the generative backend and the audio output

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use qamus_audio::{AudioBuffer, AudioError, AudioSink};
use qamus_genai::{ProviderMetadata, ServiceError, WordService};
use qamus_types::{Language, WordResult};

use crate::storage::{KeyValueStore, MemoryStore, StorageError};
use tokio::sync::Notify;

pub(crate) fn word(original: &str) -> WordResult {
    WordResult {
        original: original.to_string(),
        translation: format!("{original}-ar"),
        part_of_speech: "Noun".to_string(),
        example_ar: format!("مثال {original}"),
        example_en: format!("An example with {original}."),
        definition: format!("What {original} means"),
        image_url: None,
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum LookupMode {
    Ok,
    Quota,
    QuotaMessage,
    Generic,
    Malformed,
}

pub(crate) struct FakeService {
    lookup_mode: Mutex<LookupMode>,
    lookup_gates: Mutex<HashMap<String, Arc<Notify>>>,
    lookup_started: Notify,
    lookup_calls: AtomicUsize,

    image_gates: Mutex<HashMap<String, Arc<Notify>>>,
    images_fail: AtomicBool,
    illustrated: Mutex<Vec<String>>,

    speech_audio: Mutex<Option<Vec<u8>>>,
    speech_fail: AtomicBool,
    speech_gate: Mutex<Option<Arc<Notify>>>,
    speech_started: Notify,
    speech_calls: AtomicUsize,

    quote: Mutex<Option<String>>,
    quote_fail: AtomicBool,
}

impl FakeService {
    pub fn new() -> Self {
        Self {
            lookup_mode: Mutex::new(LookupMode::Ok),
            lookup_gates: Mutex::new(HashMap::new()),
            lookup_started: Notify::new(),
            lookup_calls: AtomicUsize::new(0),
            image_gates: Mutex::new(HashMap::new()),
            images_fail: AtomicBool::new(false),
            illustrated: Mutex::new(Vec::new()),
            speech_audio: Mutex::new(Some(vec![0x00, 0x40, 0x00, 0xC0])),
            speech_fail: AtomicBool::new(false),
            speech_gate: Mutex::new(None),
            speech_started: Notify::new(),
            speech_calls: AtomicUsize::new(0),
            quote: Mutex::new(None),
            quote_fail: AtomicBool::new(false),
        }
    }

    pub fn set_lookup_mode(&self, mode: LookupMode) {
        *self.lookup_mode.lock().unwrap() = mode;
    }

    /// Lookups of `query` wait until the returned gate is notified
    pub fn hold_lookup(&self, query: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.lookup_gates
            .lock()
            .unwrap()
            .insert(query.to_string(), gate.clone());
        gate
    }

    /// Resolves once a held lookup is waiting on its gate
    pub async fn wait_lookup_started(&self) {
        self.lookup_started.notified().await;
    }

    pub fn lookup_calls(&self) -> usize {
        self.lookup_calls.load(Ordering::SeqCst)
    }

    /// Illustrations of `subject` wait until the returned gate is notified
    pub fn hold_image(&self, subject: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.image_gates
            .lock()
            .unwrap()
            .insert(subject.to_string(), gate.clone());
        gate
    }

    pub fn fail_images(&self) {
        self.images_fail.store(true, Ordering::SeqCst);
    }

    pub fn illustrated(&self) -> Vec<String> {
        self.illustrated.lock().unwrap().clone()
    }

    pub fn set_speech_audio(&self, audio: Option<Vec<u8>>) {
        *self.speech_audio.lock().unwrap() = audio;
    }

    pub fn fail_speech(&self, fail: bool) {
        self.speech_fail.store(fail, Ordering::SeqCst);
    }

    /// Speech requests wait until the returned gate is notified
    pub fn hold_speech(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.speech_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    pub fn release_speech(&self) {
        if let Some(gate) = self.speech_gate.lock().unwrap().take() {
            gate.notify_one();
        }
    }

    pub async fn wait_speech_started(&self) {
        self.speech_started.notified().await;
    }

    pub fn speech_calls(&self) -> usize {
        self.speech_calls.load(Ordering::SeqCst)
    }

    pub fn set_quote(&self, quote: Option<&str>) {
        *self.quote.lock().unwrap() = quote.map(str::to_string);
    }

    pub fn fail_quote(&self) {
        self.quote_fail.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl WordService for FakeService {
    async fn lookup_word(&self, query: &str) -> Result<WordResult, ServiceError> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);

        let gate = self.lookup_gates.lock().unwrap().get(query).cloned();
        if let Some(gate) = gate {
            self.lookup_started.notify_one();
            gate.notified().await;
        }

        let mode = *self.lookup_mode.lock().unwrap();
        match mode {
            LookupMode::Ok => Ok(word(query)),
            LookupMode::Quota => Err(ServiceError::QuotaExceeded),
            LookupMode::QuotaMessage => Err(ServiceError::ApiError(
                "HTTP 400: Quota exceeded for requests".to_string(),
            )),
            LookupMode::Generic => Err(ServiceError::ApiError("HTTP 500".to_string())),
            LookupMode::Malformed => Err(ServiceError::InvalidResponse(
                "missing field `definition`".to_string(),
            )),
        }
    }

    async fn illustrate(&self, subject: &str) -> Result<Option<String>, ServiceError> {
        self.illustrated.lock().unwrap().push(subject.to_string());

        let gate = self.image_gates.lock().unwrap().get(subject).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        if self.images_fail.load(Ordering::SeqCst) {
            return Err(ServiceError::ApiError("HTTP 503".to_string()));
        }
        Ok(Some(format!("data:image/png;base64,{subject}")))
    }

    async fn synthesize_speech(
        &self,
        _text: &str,
        _language: Language,
    ) -> Result<Option<Vec<u8>>, ServiceError> {
        self.speech_calls.fetch_add(1, Ordering::SeqCst);

        let gate = self.speech_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            self.speech_started.notify_one();
            gate.notified().await;
        }

        if self.speech_fail.load(Ordering::SeqCst) {
            return Err(ServiceError::ApiError("HTTP 500".to_string()));
        }
        Ok(self.speech_audio.lock().unwrap().clone())
    }

    async fn motivational_quote(&self) -> Result<Option<String>, ServiceError> {
        if self.quote_fail.load(Ordering::SeqCst) {
            return Err(ServiceError::QuotaExceeded);
        }
        Ok(self.quote.lock().unwrap().clone())
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "fake".to_string(),
            requires_api_key: false,
        }
    }
}

/// Records every clip instead of playing it
#[derive(Default)]
pub(crate) struct RecordingSink {
    played: Mutex<Vec<AudioBuffer>>,
    fail: AtomicBool,
}

impl RecordingSink {
    pub fn played(&self) -> Vec<AudioBuffer> {
        self.played.lock().unwrap().clone()
    }

    pub fn fail(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }
}

impl AudioSink for RecordingSink {
    fn play(&self, buffer: &AudioBuffer) -> Result<(), AudioError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AudioError::Playback("no output device".to_string()));
        }
        self.played.lock().unwrap().push(buffer.clone());
        Ok(())
    }
}

/// Memory store whose writes start failing once `fail_writes` is called
#[derive(Default)]
pub(crate) struct FailingStore {
    inner: MemoryStore,
    failing: AtomicBool,
}

impl FailingStore {
    pub fn fail_writes(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::IoError(std::io::Error::other("disk full")));
        }
        Ok(())
    }
}

impl KeyValueStore for FailingStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        self.inner.write(key, value)
    }

    fn clear(&self, key: &str) -> Result<(), StorageError> {
        self.check()?;
        self.inner.clear(key)
    }
}
