use std::path::{Path, PathBuf};

use thiserror::Error;

use super::audio_segment::AudioSegment;

#[derive(Error, Debug)]
pub enum AudioReadError {
    #[error("failed to open audio file {path}: {message}")]
    Open { path: PathBuf, message: String },
    #[error("unsupported sample rate: expected {expected} Hz, got {actual} Hz")]
    UnsupportedSampleRate { expected: u32, actual: u32 },
    #[error("failed to decode audio samples: {0}")]
    Decode(String),
    #[error("audio file {path} contains no samples")]
    Empty { path: PathBuf },
}

/// Domain interface for decoding an extracted audio file.
pub trait AudioReader: Send {
    /// Decode a PCM WAV file to a normalized mono AudioSegment.
    fn read_audio(&self, path: &Path) -> Result<AudioSegment, AudioReadError>;
}
