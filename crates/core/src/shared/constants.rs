pub const WHISPER_MODEL_NAME: &str = "ggml-large-v3.bin";
pub const WHISPER_MODEL_URL: &str =
    "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/ggml-large-v3.bin";

/// Sample rate Whisper models are trained on.
pub const WHISPER_SAMPLE_RATE: u32 = 16000;

pub const FFMPEG_BINARY: &str = "ffmpeg";

/// Appended to the audio stem to form the transcript file name.
pub const TRANSCRIPT_SUFFIX: &str = "_transcript";

pub const DEFAULT_OUTPUT_DIR: &str = "output";
