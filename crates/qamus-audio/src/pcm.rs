use std::time::Duration;

use crate::AudioError;

/// Decoded audio, interleaved f32 samples in [-1.0, 1.0)
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    pub sample_rate: u32,
    pub channels: u16,
    pub samples: Vec<f32>,
}

impl AudioBuffer {
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.frames() as f64 / self.sample_rate as f64)
    }
}

/// Decode signed 16-bit little-endian PCM. Each sample is divided by 32768.0;
/// a trailing partial frame is dropped.
pub fn decode_pcm16(bytes: &[u8], sample_rate: u32, channels: u16) -> Result<AudioBuffer, AudioError> {
    if channels == 0 || sample_rate == 0 {
        return Err(AudioError::InvalidFormat(format!(
            "{} channels at {} Hz",
            channels, sample_rate
        )));
    }

    if bytes.is_empty() {
        return Err(AudioError::Empty);
    }

    if bytes.len() % 2 != 0 {
        return Err(AudioError::OddLength(bytes.len()));
    }

    let frame_count = bytes.len() / 2 / channels as usize;
    let samples = bytes
        .chunks_exact(2)
        .take(frame_count * channels as usize)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32 / 32768.0)
        .collect();

    Ok(AudioBuffer {
        sample_rate,
        channels,
        samples,
    })
}
