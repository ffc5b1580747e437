use std::time::Duration;

use async_trait::async_trait;
use qamus_config::genai::GenAiConfig;
use qamus_types::{Language, WordResult};
use reqwest::StatusCode;
use serde_json::json;

use crate::wire::{self, ErrorEnvelope, GenerateRequest, GenerateResponse};
use crate::{ProviderMetadata, ServiceError, WordService, mentions_quota};

const QUOTE_PROMPT: &str = "أعطني حكمة عربية قصيرة جداً ومبهجة للأطفال عن العلم بأسلوب الجد الحكيم.";

fn lookup_prompt(query: &str) -> String {
    format!(
        "You are a friendly, expert teacher for kids aged 8-14.\n\
         Translate the word/phrase: \"{query}\".\n\
         Respond ONLY with a JSON object containing:\n\
         - original (the input word)\n\
         - translation (Arabic translation)\n\
         - partOfSpeech (Noun, Verb, etc.)\n\
         - exampleAr (A simple Arabic sentence with the word, using Harakat)\n\
         - exampleEn (A simple English sentence with the word)\n\
         - definition (A very simple explanation for a child)"
    )
}

fn illustration_prompt(word: &str) -> String {
    format!(
        "A vibrant, friendly 3D cartoon illustration for children representing the word: \"{word}\". \
         Pixar style, soft lighting, cheerful atmosphere. \
         IMPORTANT: NO TEXT, NO LETTERS, NO WORDS, NO WRITING AT ALL IN THE IMAGE. \
         Just a clean visual drawing without any language or characters."
    )
}

/// Gemini `generateContent` client
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    config: GenAiConfig,
}

impl GeminiClient {
    pub fn new(config: GenAiConfig) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { client, config })
    }

    fn voice_for(&self, language: Language) -> &str {
        match language {
            Language::Arabic => &self.config.primary_voice,
            Language::English => &self.config.secondary_voice,
        }
    }

    async fn generate(
        &self,
        model: &str,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, ServiceError> {
        if !self.config.has_api_key() {
            return Err(ServiceError::AuthenticationError);
        }

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.api_url.trim_end_matches('/'),
            model
        );

        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_failure(status, &body));
        }

        response
            .json::<GenerateResponse>()
            .await
            .map_err(|e| ServiceError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }
}

/// Map a non-success reply to an error. Quota is recognised by status 429 or
/// by the word "quota" anywhere in the error message.
pub(crate) fn classify_failure(status: StatusCode, body: &str) -> ServiceError {
    let (message, api_status) = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => (envelope.error.message, envelope.error.status),
        Err(_) => (body.to_string(), String::new()),
    };

    if status == StatusCode::TOO_MANY_REQUESTS
        || api_status == "RESOURCE_EXHAUSTED"
        || mentions_quota(&message)
    {
        return ServiceError::QuotaExceeded;
    }

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return ServiceError::AuthenticationError;
    }

    if message.is_empty() {
        ServiceError::ApiError(format!("HTTP {}", status))
    } else {
        ServiceError::ApiError(format!("HTTP {}: {}", status, message))
    }
}

#[async_trait]
impl WordService for GeminiClient {
    async fn lookup_word(&self, query: &str) -> Result<WordResult, ServiceError> {
        let request = GenerateRequest::prompt(lookup_prompt(query)).with_config(wire::word_schema());
        let response = self.generate(&self.config.text_model, &request).await?;

        let text = response
            .text()
            .ok_or_else(|| ServiceError::InvalidResponse("No text in response".to_string()))?;

        wire::parse_word(&text)
    }

    async fn illustrate(&self, word: &str) -> Result<Option<String>, ServiceError> {
        let request = GenerateRequest::prompt(illustration_prompt(word))
            .with_config(json!({ "imageConfig": { "aspectRatio": "1:1" } }));
        let response = self.generate(&self.config.image_model, &request).await?;

        Ok(response.first_inline_data().map(wire::image_data_url))
    }

    async fn synthesize_speech(
        &self,
        text: &str,
        language: Language,
    ) -> Result<Option<Vec<u8>>, ServiceError> {
        let request = GenerateRequest::prompt(text).with_config(json!({
            "responseModalities": ["AUDIO"],
            "speechConfig": {
                "voiceConfig": {
                    "prebuiltVoiceConfig": { "voiceName": self.voice_for(language) }
                }
            }
        }));
        let response = self.generate(&self.config.speech_model, &request).await?;

        response
            .first_inline_data()
            .map(wire::decode_audio)
            .transpose()
    }

    async fn motivational_quote(&self) -> Result<Option<String>, ServiceError> {
        let request = GenerateRequest::prompt(QUOTE_PROMPT);
        let response = self.generate(&self.config.text_model, &request).await?;

        Ok(response
            .text()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty()))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Gemini".to_string(),
            requires_api_key: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_many_requests_is_quota() {
        assert!(matches!(
            classify_failure(StatusCode::TOO_MANY_REQUESTS, ""),
            ServiceError::QuotaExceeded
        ));
    }

    #[test]
    fn quota_message_is_quota_regardless_of_status() {
        let body = r#"{"error":{"code":400,"message":"You exceeded your current QUOTA","status":"FAILED_PRECONDITION"}}"#;
        assert!(matches!(
            classify_failure(StatusCode::BAD_REQUEST, body),
            ServiceError::QuotaExceeded
        ));
    }

    #[test]
    fn resource_exhausted_is_quota() {
        let body = r#"{"error":{"code":429,"message":"slow down","status":"RESOURCE_EXHAUSTED"}}"#;
        assert!(matches!(
            classify_failure(StatusCode::BAD_REQUEST, body),
            ServiceError::QuotaExceeded
        ));
    }

    #[test]
    fn forbidden_is_authentication() {
        assert!(matches!(
            classify_failure(StatusCode::FORBIDDEN, "{}"),
            ServiceError::AuthenticationError
        ));
    }

    #[test]
    fn other_failures_keep_message() {
        let body = r#"{"error":{"code":500,"message":"internal","status":"INTERNAL"}}"#;
        match classify_failure(StatusCode::INTERNAL_SERVER_ERROR, body) {
            ServiceError::ApiError(msg) => assert!(msg.contains("internal")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_key_fails_without_network() {
        let client = GeminiClient::new(GenAiConfig::default()).unwrap();
        assert!(matches!(
            client.lookup_word("Robot").await,
            Err(ServiceError::AuthenticationError)
        ));
        assert!(client.motivational_quote().await.is_err());
    }

    #[test]
    fn voices_follow_language() {
        let client = GeminiClient::new(GenAiConfig::default()).unwrap();
        assert_eq!(client.voice_for(Language::Arabic), "Kore");
        assert_eq!(client.voice_for(Language::English), "Puck");
    }

    #[test]
    fn lookup_prompt_quotes_query() {
        assert!(lookup_prompt("Brave").contains("\"Brave\""));
        assert!(illustration_prompt("شجاع").contains("NO TEXT"));
    }
}
