use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_sample_rate() -> u32 {
    24000
}

fn default_channels() -> u16 {
    1
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AudioConfig {
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    #[serde(default = "default_channels")]
    pub channels: u16,
    /// Where spoken clips are written when live playback is off.
    /// Defaults to `<data_dir>/audio`
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub live_playback: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            channels: default_channels(),
            output_dir: None,
            live_playback: false,
        }
    }
}

impl AudioConfig {
    pub fn new() -> Self {
        let output_dir = env::var("QAMUS_AUDIO_DIR").ok().map(PathBuf::from);
        let live_playback = env::var("QAMUS_LIVE_PLAYBACK")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);

        Self {
            output_dir,
            live_playback,
            ..Self::default()
        }
    }
}
