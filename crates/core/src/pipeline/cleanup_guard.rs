use std::fs;
use std::path::{Path, PathBuf};

/// Deletes an intermediate file when dropped.
///
/// The extracted WAV must never outlive a single run; holding one of these
/// across the transcription steps removes it on success and on early error
/// returns alike.
pub struct CleanupGuard {
    path: PathBuf,
}

impl CleanupGuard {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        if !self.path.exists() {
            return;
        }
        match fs::remove_file(&self.path) {
            Ok(()) => log::info!("Removed intermediate audio file {}", self.path.display()),
            Err(e) => log::warn!(
                "Could not remove intermediate audio file {}: {e}",
                self.path.display()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_drop_removes_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("audio.wav");
        fs::write(&path, b"pcm").unwrap();

        let guard = CleanupGuard::new(path.clone());
        assert!(path.exists());
        drop(guard);
        assert!(!path.exists());
    }

    #[test]
    fn test_drop_tolerates_missing_file() {
        let tmp = TempDir::new().unwrap();
        let guard = CleanupGuard::new(tmp.path().join("never-created.wav"));
        drop(guard);
        // No panic = success
    }

    #[test]
    fn test_drop_runs_on_early_return() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("audio.wav");
        fs::write(&path, b"pcm").unwrap();

        fn fails_midway(path: PathBuf) -> Result<(), String> {
            let _guard = CleanupGuard::new(path);
            Err("inference failed".to_string())
        }

        assert!(fails_midway(path.clone()).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_path_accessor() {
        let guard = CleanupGuard::new(PathBuf::from("/tmp/a.wav"));
        assert_eq!(guard.path(), Path::new("/tmp/a.wav"));
    }
}
