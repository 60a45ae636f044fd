use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use vidscribe_core::audio::infrastructure::wav_audio_reader::WavAudioReader;
use vidscribe_core::audio::infrastructure::whisper_recognizer::WhisperRecognizer;
use vidscribe_core::extraction::infrastructure::ffmpeg_extractor::FfmpegExtractor;
use vidscribe_core::pipeline::transcribe_use_case::{PipelineError, TranscribeUseCase};
use vidscribe_core::shared::constants::{
    DEFAULT_OUTPUT_DIR, WHISPER_MODEL_NAME, WHISPER_MODEL_URL,
};
use vidscribe_core::transcript::infrastructure::text_file_writer::TextFileWriter;

/// Transcribe a video file with Whisper speech recognition.
#[derive(Parser)]
#[command(name = "vidscribe")]
struct Cli {
    /// Input video file.
    video_path: PathBuf,

    /// Directory for the transcript (and transient audio) files.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{e}");
        process::exit(1);
    }
}

fn run() -> Result<(), PipelineError> {
    let cli = Cli::parse();

    if !cli.video_path.exists() {
        return Err(PipelineError::Validation {
            path: cli.video_path,
        });
    }
    fs::create_dir_all(&cli.output_dir).map_err(|source| PipelineError::OutputDir {
        path: cli.output_dir.clone(),
        source,
    })?;

    let recognizer = WhisperRecognizer::new(WHISPER_MODEL_NAME, WHISPER_MODEL_URL)
        .with_progress(Box::new(download_progress));

    let use_case = TranscribeUseCase::new(
        Box::new(FfmpegExtractor::new()),
        Box::new(WavAudioReader),
        Box::new(recognizer),
        Box::new(TextFileWriter),
    );

    let transcript_path = use_case.run(&cli.video_path, &cli.output_dir)?;
    log::info!(
        "Process completed, transcript saved to {}",
        transcript_path.display()
    );
    Ok(())
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading speech model... {pct}%");
        if downloaded >= total {
            eprintln!();
        }
    } else {
        eprint!("\rDownloading speech model... {downloaded} bytes");
    }
}
