mod pcm;
mod sink;

pub use pcm::{AudioBuffer, decode_pcm16};
#[cfg(feature = "playback")]
pub use sink::RodioSink;
pub use sink::{AudioSink, WavFileSink};

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("Empty audio payload")]
    Empty,

    #[error("PCM payload has odd length {0}")]
    OddLength(usize),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Playback error: {0}")]
    Playback(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
