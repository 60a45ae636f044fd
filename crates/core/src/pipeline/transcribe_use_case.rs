use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::audio::domain::audio_reader::{AudioReadError, AudioReader};
use crate::audio::domain::speech_recognizer::{SpeechRecognizer, TranscriptionError};
use crate::extraction::domain::audio_extractor::{AudioExtractor, ExtractionError};
use crate::pipeline::cleanup_guard::CleanupGuard;
use crate::shared::constants::TRANSCRIPT_SUFFIX;
use crate::transcript::domain::transcript_writer::{TranscriptWriteError, TranscriptWriter};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("input video not found: {path}")]
    Validation { path: PathBuf },
    #[error("could not create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{binary} was not found on the system path; install it first")]
    Dependency { binary: String },
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error(transparent)]
    Transcription(#[from] TranscriptionError),
    #[error(transparent)]
    TranscriptWrite(#[from] TranscriptWriteError),
}

impl From<AudioReadError> for PipelineError {
    fn from(e: AudioReadError) -> Self {
        Self::Transcription(TranscriptionError::Audio(e))
    }
}

/// Linear video-to-transcript pipeline: preflight, extract, transcribe,
/// write, cleanup.
///
/// The intermediate WAV is owned by a single run and removed on every exit
/// path once extraction has produced it.
pub struct TranscribeUseCase {
    extractor: Box<dyn AudioExtractor>,
    reader: Box<dyn AudioReader>,
    recognizer: Box<dyn SpeechRecognizer>,
    writer: Box<dyn TranscriptWriter>,
}

impl TranscribeUseCase {
    pub fn new(
        extractor: Box<dyn AudioExtractor>,
        reader: Box<dyn AudioReader>,
        recognizer: Box<dyn SpeechRecognizer>,
        writer: Box<dyn TranscriptWriter>,
    ) -> Self {
        Self {
            extractor,
            reader,
            recognizer,
            writer,
        }
    }

    /// Derived transcript path: audio stem plus suffix, `.txt` extension.
    pub fn transcript_path_for(audio_path: &Path, output_dir: &Path) -> PathBuf {
        let stem = audio_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio".to_string());
        output_dir.join(format!("{stem}{TRANSCRIPT_SUFFIX}.txt"))
    }

    /// Run the pipeline against one video. Returns the transcript path.
    ///
    /// `video_path` must exist and `output_dir` must already be created;
    /// the caller validates both before any side effect occurs.
    pub fn run(&self, video_path: &Path, output_dir: &Path) -> Result<PathBuf, PipelineError> {
        if !self.extractor.is_available() {
            return Err(PipelineError::Dependency {
                binary: self.extractor.binary_name().to_string(),
            });
        }

        // Armed before extraction so a partially written WAV from a failed
        // ffmpeg run is removed too.
        let _audio_guard =
            CleanupGuard::new(self.extractor.audio_path_for(video_path, output_dir));

        log::info!("Extracting audio from {}", video_path.display());
        let audio_path = self.extractor.extract(video_path, output_dir)?;

        log::info!("Starting transcription process");
        let audio = self.reader.read_audio(&audio_path)?;
        let text = self.recognizer.transcribe(&audio)?;

        let transcript_path = Self::transcript_path_for(&audio_path, output_dir);
        self.writer.write_transcript(&transcript_path, &text)?;
        log::info!("Transcription saved to {}", transcript_path.display());

        Ok(transcript_path)
    }
}
