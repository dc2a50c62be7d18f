//! Fetches a single remote file to disk, skipping it if it is already there.

use std::{
    ffi::OsString,
    io,
    path::{Path, PathBuf},
    time::Duration,
};

use async_trait::async_trait;
use futures::StreamExt;
use indicatif::{MultiProgress, ProgressBar};
use reqwest::Client;
use thiserror::Error;
use tokio::{fs::File, io::AsyncWriteExt, process::Command};
use tracing::{debug, warn};

use crate::cli::create_byte_progress_bar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Downloaded { bytes: u64 },
    /// The destination already existed.
    Skipped,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server returned {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("file system error: {0}")]
    Io(#[from] io::Error),

    #[error("could not start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{program}` exited with {}", exit_description(.code))]
    ToolFailed { program: String, code: Option<i32> },
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

/// Something that can copy a URL to a local path.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(
        &self,
        url: &str,
        destination: &Path,
        skip_if_exists: bool,
    ) -> Result<FetchOutcome, FetchError>;
}

/// Downloads with the built-in HTTP client.
pub struct HttpFetcher {
    client: Client,
    progress: Option<MultiProgress>,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(30))
            .build()?;

        Ok(HttpFetcher {
            client,
            progress: None,
        })
    }

    /// Shows a byte progress bar per file inside `progress`.
    pub fn with_progress(mut self, progress: MultiProgress) -> Self {
        self.progress = Some(progress);
        self
    }

    fn create_bar(&self, destination: &Path, total_size: Option<u64>) -> ProgressBar {
        let name = destination
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        match &self.progress {
            Some(multi) => multi.add(create_byte_progress_bar(total_size.unwrap_or(0), name)),
            None => ProgressBar::hidden(),
        }
    }

    async fn stream_to_file(
        &self,
        response: reqwest::Response,
        file_path: &Path,
        bar: &ProgressBar,
    ) -> Result<u64, FetchError> {
        let mut file = File::create(file_path).await?;
        let mut downloaded = 0u64;
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            downloaded += chunk.len() as u64;
            bar.set_position(downloaded);
        }
        file.flush().await?;

        Ok(downloaded)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(
        &self,
        url: &str,
        destination: &Path,
        skip_if_exists: bool,
    ) -> Result<FetchOutcome, FetchError> {
        if skip_if_exists && destination.exists() {
            debug!(destination = %destination.display(), "already present");
            return Ok(FetchOutcome::Skipped);
        }

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bar = self.create_bar(destination, response.content_length());
        let part_path = part_path(destination);

        // Only a complete body is renamed into place.
        let result = self.stream_to_file(response, &part_path, &bar).await;
        bar.finish_and_clear();
        let bytes = match result {
            Ok(bytes) => bytes,
            Err(e) => {
                if let Err(remove_err) = tokio::fs::remove_file(&part_path).await {
                    warn!(path = %part_path.display(), "could not remove partial file: {}", remove_err);
                }
                return Err(e);
            }
        };
        tokio::fs::rename(&part_path, destination).await?;

        Ok(FetchOutcome::Downloaded { bytes })
    }
}

fn part_path(destination: &Path) -> PathBuf {
    let mut name = destination.as_os_str().to_os_string();
    name.push(".part");
    PathBuf::from(name)
}

/// Delegates to the external `wget` tool.
pub struct WgetFetcher {
    program: String,
}

impl WgetFetcher {
    pub fn with_program(program: impl Into<String>) -> Self {
        WgetFetcher {
            program: program.into(),
        }
    }
}

impl Default for WgetFetcher {
    fn default() -> Self {
        WgetFetcher::with_program("wget")
    }
}

fn wget_args(url: &str, destination: &Path, skip_if_exists: bool) -> Vec<OsString> {
    let mut args = Vec::new();
    if skip_if_exists {
        args.push(OsString::from("-nc"));
    }
    args.push(OsString::from(url));
    args.push(OsString::from("-O"));
    args.push(destination.as_os_str().to_os_string());

    args
}

#[async_trait]
impl Fetcher for WgetFetcher {
    async fn fetch(
        &self,
        url: &str,
        destination: &Path,
        skip_if_exists: bool,
    ) -> Result<FetchOutcome, FetchError> {
        let already_present = skip_if_exists && destination.exists();

        let status = Command::new(&self.program)
            .args(wget_args(url, destination, skip_if_exists))
            .status()
            .await
            .map_err(|source| FetchError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // wget -nc does not agree across versions on the exit status of a no-op.
        if already_present {
            debug!(destination = %destination.display(), ?status, "already present");
            return Ok(FetchOutcome::Skipped);
        }

        if !status.success() {
            // wget -O creates the destination before transferring anything.
            if let Err(e) = tokio::fs::remove_file(destination).await {
                if e.kind() != io::ErrorKind::NotFound {
                    warn!(path = %destination.display(), "could not remove partial file: {}", e);
                }
            }
            return Err(FetchError::ToolFailed {
                program: self.program.clone(),
                code: status.code(),
            });
        }

        let bytes = tokio::fs::metadata(destination).await?.len();

        Ok(FetchOutcome::Downloaded { bytes })
    }
}

// -- Tests -------------------------------------------------------------------
