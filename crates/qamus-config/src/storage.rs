use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_data_dir() -> PathBuf {
    PathBuf::from(".qamus")
}

fn default_favorites_key() -> String {
    "qamus_favorites".to_string()
}

fn default_theme_key() -> String {
    "qamus_theme".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_favorites_key")]
    pub favorites_key: String,
    #[serde(default = "default_theme_key")]
    pub theme_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            favorites_key: default_favorites_key(),
            theme_key: default_theme_key(),
        }
    }
}

impl StorageConfig {
    pub fn new() -> Self {
        let data_dir = env::var("QAMUS_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        Self {
            data_dir,
            ..Self::default()
        }
    }
}
