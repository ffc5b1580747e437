use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{AudioBuffer, AudioError};

/// Destination for synthesized speech. `play` may block until the clip is done
pub trait AudioSink: Send + Sync {
    fn play(&self, buffer: &AudioBuffer) -> Result<(), AudioError>;
}

/// Writes each clip to `<dir>/speech-<millis>.wav` as 16-bit PCM
pub struct WavFileSink {
    dir: PathBuf,
}

impl WavFileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn clip_path(&self) -> PathBuf {
        let mut millis = chrono::Utc::now().timestamp_millis();
        loop {
            let path = self.dir.join(format!("speech-{}.wav", millis));
            if !path.exists() {
                return path;
            }
            millis += 1;
        }
    }
}

impl AudioSink for WavFileSink {
    fn play(&self, buffer: &AudioBuffer) -> Result<(), AudioError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.clip_path();
        let mut file = fs::File::create(&path)?;
        write_wav(&mut file, buffer)?;
        tracing::info!(
            "Speech saved to {} ({:.1}s)",
            path.display(),
            buffer.duration().as_secs_f32()
        );
        Ok(())
    }
}

pub(crate) fn write_wav<W: Write>(out: &mut W, buffer: &AudioBuffer) -> Result<(), AudioError> {
    let bytes_per_sample = 2u16;
    let block_align = buffer.channels * bytes_per_sample;
    let byte_rate = buffer.sample_rate * block_align as u32;
    let data_len = (buffer.samples.len() * bytes_per_sample as usize) as u32;

    out.write_all(b"RIFF")?;
    out.write_all(&(36 + data_len).to_le_bytes())?;
    out.write_all(b"WAVE")?;

    out.write_all(b"fmt ")?;
    out.write_all(&16u32.to_le_bytes())?;
    out.write_all(&1u16.to_le_bytes())?; // PCM
    out.write_all(&buffer.channels.to_le_bytes())?;
    out.write_all(&buffer.sample_rate.to_le_bytes())?;
    out.write_all(&byte_rate.to_le_bytes())?;
    out.write_all(&block_align.to_le_bytes())?;
    out.write_all(&(bytes_per_sample * 8).to_le_bytes())?;

    out.write_all(b"data")?;
    out.write_all(&data_len.to_le_bytes())?;
    for sample in &buffer.samples {
        let value = (sample * 32768.0).clamp(i16::MIN as f32, i16::MAX as f32) as i16;
        out.write_all(&value.to_le_bytes())?;
    }

    Ok(())
}

/// Plays through the default output device
#[cfg(feature = "playback")]
pub struct RodioSink;

#[cfg(feature = "playback")]
impl AudioSink for RodioSink {
    fn play(&self, buffer: &AudioBuffer) -> Result<(), AudioError> {
        let (_stream, handle) = rodio::OutputStream::try_default()
            .map_err(|e| AudioError::Playback(e.to_string()))?;
        let sink = rodio::Sink::try_new(&handle).map_err(|e| AudioError::Playback(e.to_string()))?;

        sink.append(rodio::buffer::SamplesBuffer::new(
            buffer.channels,
            buffer.sample_rate,
            buffer.samples.clone(),
        ));
        sink.sleep_until_end();

        Ok(())
    }
}
