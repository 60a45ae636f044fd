use std::path::Path;

use crate::audio::domain::audio_reader::{AudioReadError, AudioReader};
use crate::audio::domain::audio_segment::AudioSegment;
use crate::shared::constants::WHISPER_SAMPLE_RATE;

/// Decodes PCM WAV files using hound.
///
/// Integer samples are normalized to [-1.0, 1.0]; multi-channel audio is
/// downmixed to mono by averaging.
pub struct WavAudioReader;

impl AudioReader for WavAudioReader {
    fn read_audio(&self, path: &Path) -> Result<AudioSegment, AudioReadError> {
        let reader = hound::WavReader::open(path).map_err(|e| AudioReadError::Open {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let spec = reader.spec();
        log::debug!(
            "WAV: {} channels, {} Hz, {:?}",
            spec.channels,
            spec.sample_rate,
            spec.sample_format
        );

        if spec.sample_rate != WHISPER_SAMPLE_RATE {
            return Err(AudioReadError::UnsupportedSampleRate {
                expected: WHISPER_SAMPLE_RATE,
                actual: spec.sample_rate,
            });
        }

        let samples: Vec<f32> = match spec.sample_format {
            hound::SampleFormat::Int => {
                let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
                reader
                    .into_samples::<i32>()
                    .map(|s| s.map(|v| v as f32 / max_val))
                    .collect::<Result<_, _>>()
                    .map_err(|e| AudioReadError::Decode(e.to_string()))?
            }
            hound::SampleFormat::Float => reader
                .into_samples::<f32>()
                .collect::<Result<_, _>>()
                .map_err(|e| AudioReadError::Decode(e.to_string()))?,
        };

        let mono = downmix(samples, spec.channels);
        if mono.is_empty() {
            return Err(AudioReadError::Empty {
                path: path.to_path_buf(),
            });
        }

        Ok(AudioSegment::new(mono, spec.sample_rate))
    }
}

fn downmix(samples: Vec<f32>, channels: u16) -> Vec<f32> {
    if channels <= 1 {
        return samples;
    }
    samples
        .chunks(channels as usize)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_wav(path: &Path, channels: u16, sample_rate: u32, samples: &[i16]) {
        let spec = hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for &s in samples {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn test_read_mono_i16_normalizes_samples() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("mono.wav");
        write_wav(&path, 1, 16000, &[0, 16384, -16384, 32767]);

        let seg = WavAudioReader.read_audio(&path).unwrap();
        assert_eq!(seg.sample_rate(), 16000);
        assert_eq!(seg.samples().len(), 4);
        assert!((seg.samples()[1] - 0.5).abs() < 1e-4);
        assert!((seg.samples()[2] + 0.5).abs() < 1e-4);
        assert!(seg.samples().iter().all(|s| (-1.0..=1.0).contains(s)));
    }

    #[test]
    fn test_read_stereo_downmixes_to_mono() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("stereo.wav");
        // Interleaved L/R frames: (16384, 0) and (0, 16384)
        write_wav(&path, 2, 16000, &[16384, 0, 0, 16384]);

        let seg = WavAudioReader.read_audio(&path).unwrap();
        assert_eq!(seg.samples().len(), 2);
        assert!((seg.samples()[0] - 0.25).abs() < 1e-4);
        assert!((seg.samples()[1] - 0.25).abs() < 1e-4);
    }

    #[test]
    fn test_read_wrong_sample_rate_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("fast.wav");
        write_wav(&path, 1, 44100, &[0; 32]);

        let err = WavAudioReader.read_audio(&path).unwrap_err();
        assert!(matches!(
            err,
            AudioReadError::UnsupportedSampleRate { actual: 44100, .. }
        ));
    }

    #[test]
    fn test_read_empty_file_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("empty.wav");
        write_wav(&path, 1, 16000, &[]);

        let err = WavAudioReader.read_audio(&path).unwrap_err();
        assert!(matches!(err, AudioReadError::Empty { .. }));
    }

    #[test]
    fn test_read_missing_file_is_open_error() {
        let err = WavAudioReader
            .read_audio(Path::new("/nonexistent/audio.wav"))
            .unwrap_err();
        assert!(matches!(err, AudioReadError::Open { .. }));
    }
}
