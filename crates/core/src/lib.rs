//! Video-to-transcript pipeline: ffmpeg audio extraction, Whisper speech
//! recognition, plain-text transcript output.

pub mod audio;
pub mod extraction;
pub mod pipeline;
pub mod shared;
pub mod transcript;
