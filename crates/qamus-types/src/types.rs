use std::fmt;

use serde::{Deserialize, Serialize};

/// Word card produced by a lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordResult {
    pub original: String,
    pub translation: String,
    pub part_of_speech: String,
    pub example_ar: String,
    pub example_en: String,
    pub definition: String,
    /// `data:` URL, filled in once the illustration arrives
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl WordResult {
    /// Case-insensitive comparison on the looked-up text
    pub fn same_word(&self, original: &str) -> bool {
        self.original.to_lowercase() == original.to_lowercase()
    }

    /// Text spoken for a given part of the card
    pub fn speech_text(&self, target: SpeechTarget) -> &str {
        match target {
            SpeechTarget::Original => &self.original,
            SpeechTarget::Translation => &self.translation,
            SpeechTarget::ExampleAr => &self.example_ar,
            SpeechTarget::ExampleEn => &self.example_en,
        }
    }
}

/// A favorite, as persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedWord {
    pub id: String,
    /// Unix millis at save time
    pub timestamp: i64,
    #[serde(flatten)]
    pub word: WordResult,
}

/// Speech languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Arabic,
    English,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Arabic => "ar",
            Language::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Which text of the current card to speak
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechTarget {
    Original,
    Translation,
    ExampleAr,
    ExampleEn,
}

impl SpeechTarget {
    pub fn language(&self) -> Language {
        match self {
            SpeechTarget::Translation | SpeechTarget::ExampleAr => Language::Arabic,
            SpeechTarget::Original | SpeechTarget::ExampleEn => Language::English,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Unknown values are treated as absent
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Lookup failures visible to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Rate or usage limit reached
    Quota,
    Generic,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Raw line typed by the user
    TextInput(String),
    Search(String),
    /// Repeat the last query
    Retry,
    Topic(String),
    Reset,
    ToggleFavorite,
    RemoveFavorite(String),
    /// Show a saved word as the current card
    OpenFavorite(String),
    ClearFavorites,
    ListFavorites,
    Speak(SpeechTarget),
    RefreshQuote,
    ToggleTheme,
    Help,
    Quit,

    // Backend -> renderer
    SessionChanged,
    FavoritesChanged,
    ShowFavorites(Vec<SavedWord>),
    ShowQuote(String),
    ThemeChanged(Theme),
    Notice(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn robot() -> WordResult {
        WordResult {
            original: "Robot".into(),
            translation: "رجل آلي".into(),
            part_of_speech: "Noun".into(),
            example_ar: "صنعنا رجلاً آلياً.".into(),
            example_en: "We built a robot.".into(),
            definition: "A machine that can do jobs by itself.".into(),
            image_url: None,
        }
    }

    #[test]
    fn word_result_uses_camel_case_fields() {
        let json = serde_json::to_value(robot()).unwrap();
        assert_eq!(json["partOfSpeech"], "Noun");
        assert_eq!(json["exampleEn"], "We built a robot.");
        assert!(json.get("imageUrl").is_none());
    }

    #[test]
    fn saved_word_flattens_result() {
        let saved = SavedWord {
            id: "1700000000000".into(),
            timestamp: 1_700_000_000_000,
            word: robot(),
        };
        let json = serde_json::to_value(&saved).unwrap();
        assert_eq!(json["original"], "Robot");
        assert_eq!(json["id"], "1700000000000");

        let back: SavedWord = serde_json::from_value(json).unwrap();
        assert_eq!(back, saved);
    }

    #[test]
    fn same_word_ignores_case() {
        assert!(robot().same_word("robot"));
        assert!(robot().same_word("ROBOT"));
        assert!(!robot().same_word("robots"));
    }

    #[test]
    fn theme_parse_rejects_unknown() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("sepia"), None);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn speech_target_languages() {
        assert_eq!(SpeechTarget::Translation.language(), Language::Arabic);
        assert_eq!(SpeechTarget::ExampleEn.language(), Language::English);
        assert_eq!(Language::Arabic.to_string(), "ar");
    }
}
