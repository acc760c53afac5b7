//! Streaming file transfer for the media storage endpoints.
//!
//! Bodies move between disk and socket in small chunks so peak memory stays
//! bounded by the chunk size, whatever the file size. The file handle is
//! scoped to the transfer and closed on every exit path, including errors
//! and cancellation; an aborted download leaves the partial file in place.

use crate::error::SdkError;
use crate::http::classify::classify;
use crate::http::client::CrescendoHttp;
use crate::http::request::RequestSpec;
use crate::http::retry::RetryPolicy;

use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Log transfer progress once per this many bytes, not per chunk.
const PROGRESS_LOG_BYTES: u64 = 10 * 1024 * 1024;

/// Chunk/byte accounting for one streaming transfer.
#[derive(Debug, Default)]
pub(crate) struct TransferProgress {
    pub(crate) chunks: u64,
    pub(crate) bytes: u64,
}

impl TransferProgress {
    /// Record one chunk; true when the total crossed a log boundary.
    pub(crate) fn record(&mut self, len: usize) -> bool {
        let boundary = self.bytes / PROGRESS_LOG_BYTES;
        self.chunks += 1;
        self.bytes += len as u64;
        self.bytes / PROGRESS_LOG_BYTES > boundary
    }

    pub(crate) fn megabytes(&self) -> f64 {
        self.bytes as f64 / (1024.0 * 1024.0)
    }
}

impl CrescendoHttp {
    /// Download a response body to `destination`, chunk by chunk.
    pub async fn download(&self, spec: RequestSpec, destination: &Path) -> Result<(), SdkError> {
        let mut response = self.execute_raw(spec, RetryPolicy::Transient).await?;

        let mut file = tokio::fs::File::create(destination).await?;
        let mut progress = TransferProgress::default();

        while let Some(chunk) = response.chunk().await? {
            if progress.record(chunk.len()) {
                tracing::debug!(
                    "downloading {} - {:.1} MB",
                    destination.display(),
                    progress.megabytes()
                );
            }
            file.write_all(&chunk).await?;
        }
        file.flush().await?;

        tracing::debug!(
            "downloaded {} - {:.1} MB",
            destination.display(),
            progress.megabytes()
        );
        Ok(())
    }

    /// Upload a local file as the PUT body of a pre-signed URL.
    ///
    /// The destination is provider storage, not the rate-limited API, so the
    /// request goes out without the limiter or a retry policy. The body is
    /// streamed from the open file, never buffered whole.
    pub async fn upload(&self, url: &str, source: &Path) -> Result<(), SdkError> {
        tracing::debug!("PUT {}", url);

        let file = tokio::fs::File::open(source).await?;
        let length = file.metadata().await?.len();

        let response = self
            .client
            .put(url)
            .header(CONTENT_TYPE, "application/octet-stream")
            .header(CONTENT_LENGTH, length)
            .body(reqwest::Body::from(file))
            .send()
            .await?;

        let status = response.status().as_u16();
        if status >= 400 {
            let url = response.url().to_string();
            let body = response.bytes().await.ok();
            return Err(classify(status, &url, body.as_deref()).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_counts_chunks_and_bytes() {
        let mut progress = TransferProgress::default();
        for _ in 0..500 {
            progress.record(1024);
        }
        assert_eq!(progress.chunks, 500);
        assert_eq!(progress.bytes, 500 * 1024);
    }

    #[test]
    fn test_progress_logs_once_per_interval() {
        let mut progress = TransferProgress::default();

        // 500 MB of 1 KiB chunks crosses the 10 MB boundary 50 times.
        let boundaries = (0..512_000)
            .filter(|_| progress.record(1024))
            .count();
        assert_eq!(boundaries, 50);
        assert_eq!(progress.bytes, 500 * 1024 * 1024);
    }

    #[test]
    fn test_progress_megabytes() {
        let mut progress = TransferProgress::default();
        progress.record(3 * 1024 * 1024);
        assert!((progress.megabytes() - 3.0).abs() < f64::EPSILON);
    }
}
