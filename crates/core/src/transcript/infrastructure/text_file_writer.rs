use std::fs;
use std::path::Path;

use crate::transcript::domain::transcript_writer::{TranscriptWriteError, TranscriptWriter};

/// Writes transcripts as UTF-8 text files.
///
/// The text lands in a `.part` sibling first and is renamed into place, so
/// an interrupted run never leaves a partial transcript behind.
pub struct TextFileWriter;

impl TranscriptWriter for TextFileWriter {
    fn write_transcript(&self, path: &Path, text: &str) -> Result<(), TranscriptWriteError> {
        if path.exists() {
            log::info!("Overwriting existing transcript {}", path.display());
        }

        let temp_path = path.with_extension("part");
        fs::write(&temp_path, text).map_err(|e| TranscriptWriteError::Write {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            TranscriptWriteError::Write {
                path: path.to_path_buf(),
                source: e,
            }
        })
    }
}
