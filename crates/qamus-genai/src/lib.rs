use qamus_types::{FailureKind, Language, WordResult};

mod gemini;
mod wire;

pub use gemini::GeminiClient;

/// Generative backend used by the lookup flow
#[async_trait::async_trait]
pub trait WordService: Send + Sync {
    /// Translate and explain a word. All text fields are required
    async fn lookup_word(&self, query: &str) -> Result<WordResult, ServiceError>;

    /// Illustration for a word as a `data:` URL, if the model produced one
    async fn illustrate(&self, word: &str) -> Result<Option<String>, ServiceError>;

    /// Raw 16-bit little-endian PCM, mono, 24kHz
    async fn synthesize_speech(
        &self,
        text: &str,
        language: Language,
    ) -> Result<Option<Vec<u8>>, ServiceError>;

    /// Short wisdom line for the start screen
    async fn motivational_quote(&self) -> Result<Option<String>, ServiceError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Quota exceeded")]
    QuotaExceeded,

    #[error("Authentication error")]
    AuthenticationError,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ServiceError {
    pub fn is_quota(&self) -> bool {
        match self {
            ServiceError::QuotaExceeded => true,
            ServiceError::ApiError(message) => mentions_quota(message),
            _ => false,
        }
    }

    /// How a failed lookup is shown to the user
    pub fn failure_kind(&self) -> FailureKind {
        if self.is_quota() {
            FailureKind::Quota
        } else {
            FailureKind::Generic
        }
    }
}

pub(crate) fn mentions_quota(message: &str) -> bool {
    message.to_lowercase().contains("quota")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_detection() {
        assert_eq!(ServiceError::QuotaExceeded.failure_kind(), FailureKind::Quota);
        assert_eq!(
            ServiceError::ApiError("You exceeded your current Quota".into()).failure_kind(),
            FailureKind::Quota
        );
        assert_eq!(
            ServiceError::ApiError("HTTP 500".into()).failure_kind(),
            FailureKind::Generic
        );
        assert_eq!(
            ServiceError::InvalidResponse("missing field".into()).failure_kind(),
            FailureKind::Generic
        );
        assert_eq!(
            ServiceError::AuthenticationError.failure_kind(),
            FailureKind::Generic
        );
    }
}
