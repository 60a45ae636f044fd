use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::audio::domain::audio_segment::AudioSegment;
use crate::audio::domain::speech_recognizer::{SpeechRecognizer, TranscriptionError};
use crate::shared::model_resolver::{self, ProgressFn};

/// Speech recognizer using whisper.cpp via whisper-rs.
///
/// The ggml weights are resolved (and downloaded on first use) when
/// `transcribe` runs, then the model is loaded and run over the full
/// segment in one pass. Loading the large model takes seconds to minutes.
pub struct WhisperRecognizer {
    model_name: String,
    model_url: String,
    progress: Option<Box<ProgressFn>>,
}

impl WhisperRecognizer {
    pub fn new(model_name: impl Into<String>, model_url: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            model_url: model_url.into(),
            progress: None,
        }
    }

    /// Report model download progress through `progress`.
    pub fn with_progress(mut self, progress: Box<ProgressFn>) -> Self {
        self.progress = Some(progress);
        self
    }
}

impl SpeechRecognizer for WhisperRecognizer {
    fn transcribe(&self, audio: &AudioSegment) -> Result<String, TranscriptionError> {
        let model_path =
            model_resolver::resolve(&self.model_name, &self.model_url, self.progress.as_deref())?;

        log::info!("Loading speech model from {}", model_path.display());
        let ctx = WhisperContext::new_with_params(
            model_path
                .to_str()
                .ok_or_else(|| TranscriptionError::ModelLoad("invalid model path".to_string()))?,
            WhisperContextParameters::default(),
        )
        .map_err(|e| TranscriptionError::ModelLoad(e.to_string()))?;

        let mut state = ctx
            .create_state()
            .map_err(|e| TranscriptionError::ModelLoad(e.to_string()))?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
        params.set_language(Some("auto"));
        params.set_translate(false);
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        params.set_n_threads(num_cpus().min(8) as i32);

        log::info!("Transcribing {:.1}s of audio", audio.duration());
        state
            .full(params, audio.samples())
            .map_err(|e| TranscriptionError::Inference(e.to_string()))?;

        let mut text = String::new();
        let num_segments = state.full_n_segments();
        for seg_idx in 0..num_segments {
            let segment = match state.get_segment(seg_idx) {
                Some(s) => s,
                None => continue,
            };

            let n_tokens = segment.n_tokens();
            for tok_idx in 0..n_tokens {
                let token = match segment.get_token(tok_idx) {
                    Some(t) => t,
                    None => continue,
                };

                let piece = match token.to_str() {
                    Ok(t) => t,
                    Err(_) => continue,
                };

                // Skip special tokens like [_BEG_] and <|endoftext|>
                let trimmed = piece.trim();
                if trimmed.is_empty() || trimmed.starts_with('[') || trimmed.starts_with('<') {
                    continue;
                }

                text.push_str(piece);
            }
        }

        Ok(text.trim().to_string())
    }
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
