use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::audio::AudioConfig;
use self::genai::GenAiConfig;
use self::storage::StorageConfig;
use self::ui::UiConfig;

pub mod audio;
pub mod genai;
pub mod storage;
pub mod ui;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub genai: GenAiConfig,
    pub storage: StorageConfig,
    pub audio: AudioConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Build config from environment variables
    pub fn new() -> Self {
        Config {
            genai: GenAiConfig::new(),
            storage: StorageConfig::new(),
            audio: AudioConfig::new(),
            ui: UiConfig::default(),
        }
    }

    /// Load a JSON profile. Sections and fields missing from the file keep their
    /// defaults; an empty api key is taken from the environment.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let mut config: Config =
            serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        if !config.genai.has_api_key() {
            config.genai.api_key = GenAiConfig::new().api_key;
        }

        Ok(config)
    }

    pub fn audio_dir(&self) -> PathBuf {
        self.audio
            .output_dir
            .clone()
            .unwrap_or_else(|| self.storage.data_dir.join("audio"))
    }
}
