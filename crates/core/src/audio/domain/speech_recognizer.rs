use thiserror::Error;

use super::audio_reader::AudioReadError;
use super::audio_segment::AudioSegment;
use crate::shared::model_resolver::ModelResolveError;

#[derive(Error, Debug)]
pub enum TranscriptionError {
    #[error("could not fetch speech model: {0}")]
    ModelFetch(#[from] ModelResolveError),
    #[error("could not load speech model: {0}")]
    ModelLoad(String),
    #[error("speech inference failed: {0}")]
    Inference(String),
    #[error("could not read extracted audio: {0}")]
    Audio(#[from] AudioReadError),
}

/// Domain interface for speech-to-text transcription.
///
/// Implementations run a pretrained model over the whole segment and return
/// the plain transcription text, without timestamps or post-processing.
pub trait SpeechRecognizer: Send {
    fn transcribe(&self, audio: &AudioSegment) -> Result<String, TranscriptionError>;
}
