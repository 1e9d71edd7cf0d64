//! Dataset acquisition.
//!
//! Downloads the compressed DB-IP dataset when the local file is missing,
//! decompresses it to the configured path, and removes the compressed
//! artifact. Acquisition failure is fatal for the whole run: without the
//! dataset no lookups are possible.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use flate2::read::GzDecoder;
use log::{info, warn};

use crate::config::{DATASET_URL, DOWNLOAD_TIMEOUT_SECS, MAX_DOWNLOAD_RETRIES};
use crate::error_handling::DatasetError;

/// Makes sure the dataset file exists at `path`, downloading it if absent.
///
/// # Errors
///
/// Returns [`DatasetError`] if the download fails after all retries, or if
/// decompression or any filesystem step fails.
pub async fn ensure_dataset(path: &Path) -> Result<(), DatasetError> {
    if path.exists() {
        return Ok(());
    }

    info!("Dataset not found at {}. Downloading...", path.display());
    let bytes = download_with_retries(DATASET_URL).await?;

    let archive_path = archive_path_for(path);
    tokio::fs::write(&archive_path, &bytes)
        .await
        .map_err(|source| DatasetError::Io {
            path: archive_path.clone(),
            source,
        })?;

    info!("Extracting dataset...");
    decompress(&archive_path, path)?;

    tokio::fs::remove_file(&archive_path)
        .await
        .map_err(|source| DatasetError::Io {
            path: archive_path.clone(),
            source,
        })?;

    info!("Dataset ready at {}", path.display());
    Ok(())
}

/// Downloads the compressed dataset, retrying with exponential backoff.
async fn download_with_retries(url: &str) -> Result<Vec<u8>, DatasetError> {
    let mut last_error = None;
    for attempt in 1..=MAX_DOWNLOAD_RETRIES {
        match download(url).await {
            Ok(bytes) => return Ok(bytes),
            Err(e) => {
                last_error = Some(e);
                if attempt < MAX_DOWNLOAD_RETRIES {
                    warn!(
                        "Failed to download dataset from {} (attempt {}/{}), retrying...",
                        url, attempt, MAX_DOWNLOAD_RETRIES
                    );
                    // Exponential backoff: 2s, 4s, 8s (longer for large files)
                    tokio::time::sleep(Duration::from_secs(2 << (attempt - 1))).await;
                }
            }
        }
    }
    // The loop always records an error before falling through.
    Err(last_error.unwrap_or_else(|| DatasetError::DownloadStatus {
        url: url.to_string(),
        status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
    }))
}

async fn download(url: &str) -> Result<Vec<u8>, DatasetError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(DOWNLOAD_TIMEOUT_SECS))
        .build()
        .map_err(|source| DatasetError::Download {
            url: url.to_string(),
            source,
        })?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| DatasetError::Download {
            url: url.to_string(),
            source,
        })?;

    if !response.status().is_success() {
        return Err(DatasetError::DownloadStatus {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|source| DatasetError::Download {
            url: url.to_string(),
            source,
        })?;
    Ok(bytes.to_vec())
}

/// Gunzips `archive` into `target`.
fn decompress(archive: &Path, target: &Path) -> Result<(), DatasetError> {
    let compressed = File::open(archive).map_err(|source| DatasetError::Io {
        path: archive.to_path_buf(),
        source,
    })?;
    let mut decoder = GzDecoder::new(compressed);
    let mut output = File::create(target).map_err(|source| DatasetError::Io {
        path: target.to_path_buf(),
        source,
    })?;
    io::copy(&mut decoder, &mut output).map_err(|source| DatasetError::Decompress {
        path: archive.to_path_buf(),
        source,
    })?;
    Ok(())
}

fn archive_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".gz");
    PathBuf::from(name)
}
