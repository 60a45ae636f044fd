use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("failed to run {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },
    #[error("audio extraction failed ({status}): {stderr}")]
    CommandFailed { status: ExitStatus, stderr: String },
}

/// Domain interface for demuxing a video's audio track into a PCM WAV file.
pub trait AudioExtractor: Send {
    /// True if the underlying extraction tool can be invoked at all.
    /// Any spawn failure, including permission problems, counts as absent.
    fn is_available(&self) -> bool;

    /// Name of the external tool, for diagnostics.
    fn binary_name(&self) -> &str;

    /// Derived output path: same stem as the video, `.wav` extension.
    /// Deterministic, so the caller can arm cleanup before extraction runs.
    fn audio_path_for(&self, video_path: &Path, output_dir: &Path) -> PathBuf {
        let stem = video_path
            .file_stem()
            .unwrap_or_else(|| OsStr::new("audio"));
        output_dir.join(stem).with_extension("wav")
    }

    /// Demux and resample the video's audio into `audio_path_for`'s result.
    /// Returns the path of the file written. A stale file of the same name
    /// is overwritten.
    fn extract(&self, video_path: &Path, output_dir: &Path) -> Result<PathBuf, ExtractionError>;
}
