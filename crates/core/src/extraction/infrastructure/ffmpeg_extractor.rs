use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::extraction::domain::audio_extractor::{AudioExtractor, ExtractionError};
use crate::shared::constants::{FFMPEG_BINARY, WHISPER_SAMPLE_RATE};

/// Extracts audio by shelling out to the system `ffmpeg` binary.
///
/// The output format is fixed to what the speech recognizer expects:
/// PCM S16LE, 16 kHz, mono.
pub struct FfmpegExtractor {
    binary: String,
}

impl FfmpegExtractor {
    pub fn new() -> Self {
        Self {
            binary: FFMPEG_BINARY.to_string(),
        }
    }

    /// Use a different binary name or path (non-standard installs, tests).
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for FfmpegExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioExtractor for FfmpegExtractor {
    fn is_available(&self) -> bool {
        Command::new(&self.binary)
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }

    fn binary_name(&self) -> &str {
        &self.binary
    }

    fn extract(&self, video_path: &Path, output_dir: &Path) -> Result<PathBuf, ExtractionError> {
        let audio_path = self.audio_path_for(video_path, output_dir);
        if audio_path.exists() {
            log::info!("Overwriting existing audio file {}", audio_path.display());
        }

        let output = Command::new(&self.binary)
            .arg("-i")
            .arg(video_path)
            .arg("-vn")
            .arg("-acodec")
            .arg("pcm_s16le")
            .arg("-ar")
            .arg(WHISPER_SAMPLE_RATE.to_string())
            .arg("-ac")
            .arg("1")
            .arg("-y")
            .arg(&audio_path)
            .output()
            .map_err(|e| ExtractionError::Spawn {
                binary: self.binary.clone(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(ExtractionError::CommandFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        log::info!("Audio extracted to {}", audio_path.display());
        Ok(audio_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain_stem("lecture.mkv", "output", "output/lecture.wav")]
    #[case::dotted_name("talk.2024.mp4", "/tmp/out", "/tmp/out/talk.2024.wav")]
    #[case::no_extension("recording", "output", "output/recording.wav")]
    fn test_audio_path_derivation(
        #[case] video: &str,
        #[case] out_dir: &str,
        #[case] expected: &str,
    ) {
        let path = FfmpegExtractor::new().audio_path_for(Path::new(video), Path::new(out_dir));
        assert_eq!(path, Path::new(expected));
    }

    #[test]
    fn test_missing_binary_is_unavailable() {
        let extractor = FfmpegExtractor::with_binary("vidscribe-no-such-binary");
        assert!(!extractor.is_available());
    }

    #[test]
    fn test_missing_binary_extract_is_spawn_error() {
        let extractor = FfmpegExtractor::with_binary("vidscribe-no-such-binary");
        let err = extractor
            .extract(Path::new("in.mkv"), Path::new("/tmp"))
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_command_failure() {
        let extractor = FfmpegExtractor::with_binary("false");
        assert!(extractor.is_available());

        let err = extractor
            .extract(Path::new("in.mkv"), Path::new("/tmp"))
            .unwrap_err();
        match err {
            ExtractionError::CommandFailed { status, .. } => assert!(!status.success()),
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }
}
