mod render_tests;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use qamus_audio::{AudioBuffer, AudioError, AudioSink};
use qamus_genai::{ProviderMetadata, ServiceError, WordService};
use qamus_types::{Language, WordResult};

pub(crate) fn word(original: &str) -> WordResult {
    WordResult {
        original: original.to_string(),
        translation: format!("{original}-ar"),
        part_of_speech: "Noun".to_string(),
        example_ar: "مثال".to_string(),
        example_en: format!("I like {original}."),
        definition: format!("What {original} means"),
        image_url: None,
    }
}

/// Answers every lookup; words starting with "quota" hit the usage limit
pub(crate) struct StubService;

#[async_trait]
impl WordService for StubService {
    async fn lookup_word(&self, query: &str) -> Result<WordResult, ServiceError> {
        if query.to_lowercase().starts_with("quota") {
            return Err(ServiceError::QuotaExceeded);
        }
        Ok(word(query))
    }

    async fn illustrate(&self, _word: &str) -> Result<Option<String>, ServiceError> {
        Ok(None)
    }

    async fn synthesize_speech(
        &self,
        _text: &str,
        _language: Language,
    ) -> Result<Option<Vec<u8>>, ServiceError> {
        Ok(Some(vec![0, 0, 0, 0x40]))
    }

    async fn motivational_quote(&self) -> Result<Option<String>, ServiceError> {
        Ok(Some("العلم نور".to_string()))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "stub".to_string(),
            requires_api_key: false,
        }
    }
}

#[derive(Default)]
pub(crate) struct CountingSink {
    pub plays: AtomicUsize,
}

impl AudioSink for CountingSink {
    fn play(&self, _buffer: &AudioBuffer) -> Result<(), AudioError> {
        self.plays.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub(crate) fn stub_service() -> Arc<dyn WordService> {
    Arc::new(StubService)
}
