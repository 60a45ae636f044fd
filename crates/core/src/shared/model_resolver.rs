use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelResolveError {
    #[error("failed to create model cache directory: {0}")]
    CacheDir(#[source] std::io::Error),
    #[error("download failed for {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to write model to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not determine cache directory")]
    NoCacheDir,
}

/// Progress callback: `(bytes_downloaded, total_bytes)`.
/// `total_bytes` is 0 if the server didn't provide Content-Length.
pub type ProgressFn = dyn Fn(u64, u64) + Send + Sync;

/// Resolve a model file by name, downloading it to the cache on first use.
///
/// A cached copy is returned as-is; otherwise the weights are fetched from
/// `url` into the user cache directory.
pub fn resolve(
    name: &str,
    url: &str,
    progress: Option<&ProgressFn>,
) -> Result<PathBuf, ModelResolveError> {
    let cache_dir = model_cache_dir()?;
    let cached_path = cache_dir.join(name);
    if cached_path.exists() {
        log::debug!("Using cached model at {}", cached_path.display());
        return Ok(cached_path);
    }

    fs::create_dir_all(&cache_dir).map_err(ModelResolveError::CacheDir)?;
    log::info!("Model {name} not cached, downloading from {url}");
    download(url, &cached_path, progress)?;
    Ok(cached_path)
}

/// Platform-specific model cache directory.
///
/// - Linux: `$XDG_CACHE_HOME/vidscribe/models/` or `~/.cache/vidscribe/models/`
/// - macOS: `~/Library/Caches/vidscribe/models/`
/// - Windows: `%LOCALAPPDATA%/vidscribe/models/`
pub fn model_cache_dir() -> Result<PathBuf, ModelResolveError> {
    dirs::cache_dir()
        .map(|d| d.join("vidscribe").join("models"))
        .ok_or(ModelResolveError::NoCacheDir)
}

fn download(url: &str, dest: &Path, progress: Option<&ProgressFn>) -> Result<(), ModelResolveError> {
    let mut response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(|e| ModelResolveError::Download {
            url: url.to_string(),
            source: e,
        })?;

    let total = response.content_length().unwrap_or(0);
    let mut downloaded: u64 = 0;

    // Write to a temp file first, then rename for atomicity
    let temp_path = dest.with_extension("part");
    let result = (|| {
        let mut file = fs::File::create(&temp_path).map_err(|e| ModelResolveError::Write {
            path: temp_path.clone(),
            source: e,
        })?;

        // Stream in 1 MiB chunks; model weights can be several GiB
        let mut buf = vec![0u8; 1024 * 1024];
        loop {
            let n = response.read(&mut buf).map_err(|e| ModelResolveError::Write {
                path: temp_path.clone(),
                source: e,
            })?;
            if n == 0 {
                break;
            }
            file.write_all(&buf[..n])
                .map_err(|e| ModelResolveError::Write {
                    path: temp_path.clone(),
                    source: e,
                })?;
            downloaded += n as u64;
            if let Some(cb) = progress {
                cb(downloaded, total);
            }
        }

        file.flush().map_err(|e| ModelResolveError::Write {
            path: temp_path.clone(),
            source: e,
        })?;
        drop(file);

        fs::rename(&temp_path, dest).map_err(|e| ModelResolveError::Write {
            path: dest.to_path_buf(),
            source: e,
        })
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}
