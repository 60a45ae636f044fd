pub mod wav_audio_reader;
pub mod whisper_recognizer;
