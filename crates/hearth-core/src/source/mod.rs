//! Content sources: where hunt documents come from.
//!
//! A source lists the markdown files in a named directory and fetches the raw
//! text of one file. It performs no transformation.

pub mod github;
pub mod local;
#[cfg(test)]
pub(crate) mod memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use github::GithubSource;
pub use local::LocalSource;

/// One markdown file as listed by a source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteFile {
    /// File name including extension
    pub name: String,
    /// Path relative to the repository root
    pub path: String,
    /// Where the raw text can be fetched from (URL or filesystem path)
    pub download_url: String,
}

impl RemoteFile {
    /// File name without its `.md` extension
    pub fn stem(&self) -> &str {
        self.name
            .strip_suffix(crate::constants::MARKDOWN_EXTENSION)
            .unwrap_or(&self.name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Unexpected response from {url}: {reason}")]
    Decode { url: String, reason: String },

    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Markdown files directly under `directory`, in listing order
    async fn list_markdown(&self, directory: &str) -> Result<Vec<RemoteFile>, FetchError>;

    /// Raw text of one listed file
    async fn fetch_raw(&self, file: &RemoteFile) -> Result<String, FetchError>;
}

pub(crate) fn is_markdown(name: &str) -> bool {
    name.ends_with(crate::constants::MARKDOWN_EXTENSION)
}
