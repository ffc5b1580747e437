//! Request and response shapes of the `generateContent` endpoint

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use qamus_types::WordResult;

use crate::ServiceError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<Value>,
}

impl GenerateRequest {
    pub fn prompt(text: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(text.into()),
                    inline_data: None,
                }],
            }],
            generation_config: None,
        }
    }

    pub fn with_config(mut self, config: Value) -> Self {
        self.generation_config = Some(config);
        self
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InlineData {
    #[serde(default)]
    pub mime_type: Option<String>,
    pub data: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}

impl GenerateResponse {
    fn parts(&self) -> impl Iterator<Item = &Part> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.iter())
            .into_iter()
            .flatten()
    }

    /// Concatenated text parts of the first candidate
    pub fn text(&self) -> Option<String> {
        let text: String = self.parts().filter_map(|p| p.text.as_deref()).collect();
        if text.is_empty() { None } else { Some(text) }
    }

    pub fn first_inline_data(&self) -> Option<&InlineData> {
        self.parts().find_map(|p| p.inline_data.as_ref())
    }
}

/// Word card exactly as the model must return it
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WordPayload {
    original: String,
    translation: String,
    part_of_speech: String,
    example_ar: String,
    example_en: String,
    definition: String,
}

impl From<WordPayload> for WordResult {
    fn from(p: WordPayload) -> Self {
        WordResult {
            original: p.original,
            translation: p.translation,
            part_of_speech: p.part_of_speech,
            example_ar: p.example_ar,
            example_en: p.example_en,
            definition: p.definition,
            image_url: None,
        }
    }
}

/// Parse the lookup model's JSON answer. Any shape mismatch is an error
pub(crate) fn parse_word(text: &str) -> Result<WordResult, ServiceError> {
    let body = strip_code_fence(text);
    let payload: WordPayload = serde_json::from_str(body)
        .map_err(|e| ServiceError::InvalidResponse(format!("Malformed word payload: {}", e)))?;
    Ok(payload.into())
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed)
}

pub(crate) fn image_data_url(data: &InlineData) -> String {
    let mime = data.mime_type.as_deref().unwrap_or("image/png");
    format!("data:{};base64,{}", mime, data.data)
}

pub(crate) fn decode_audio(data: &InlineData) -> Result<Vec<u8>, ServiceError> {
    STANDARD
        .decode(data.data.as_bytes())
        .map_err(|e| ServiceError::InvalidResponse(format!("Bad audio payload: {}", e)))
}

pub(crate) fn word_schema() -> Value {
    let string = json!({ "type": "STRING" });
    json!({
        "responseMimeType": "application/json",
        "responseSchema": {
            "type": "OBJECT",
            "properties": {
                "original": string,
                "translation": string,
                "partOfSpeech": string,
                "exampleAr": string,
                "exampleEn": string,
                "definition": string,
            },
            "required": ["original", "translation", "partOfSpeech", "exampleAr", "exampleEn", "definition"],
        }
    })
}
