use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranscriptWriteError {
    #[error("failed to write transcript to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Domain interface for persisting a finished transcript.
pub trait TranscriptWriter: Send {
    /// Write the transcription text verbatim to `path` as UTF-8.
    /// An existing file at `path` is replaced.
    fn write_transcript(&self, path: &Path, text: &str) -> Result<(), TranscriptWriteError>;
}
