//! In-memory source used by tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{ContentSource, FetchError, RemoteFile};

#[derive(Default)]
pub(crate) struct MemorySource {
    /// directory -> (file name, content); a `None` content fails the fetch
    directories: BTreeMap<String, Vec<(String, Option<String>)>>,
    /// Directories whose listing fails
    broken: Vec<String>,
    list_calls: AtomicUsize,
}

impl MemorySource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_file(mut self, directory: &str, name: &str, content: &str) -> Self {
        self.directories
            .entry(directory.to_string())
            .or_default()
            .push((name.to_string(), Some(content.to_string())));
        self
    }

    pub(crate) fn with_unreadable_file(mut self, directory: &str, name: &str) -> Self {
        self.directories
            .entry(directory.to_string())
            .or_default()
            .push((name.to_string(), None));
        self
    }

    pub(crate) fn with_broken_directory(mut self, directory: &str) -> Self {
        self.broken.push(directory.to_string());
        self
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentSource for MemorySource {
    async fn list_markdown(&self, directory: &str) -> Result<Vec<RemoteFile>, FetchError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        if self.broken.iter().any(|d| d == directory) {
            return Err(FetchError::Status {
                url: directory.to_string(),
                status: 500,
                body: "boom".to_string(),
            });
        }

        Ok(self
            .directories
            .get(directory)
            .map(|files| {
                files
                    .iter()
                    .filter(|(name, _)| super::is_markdown(name))
                    .map(|(name, _)| RemoteFile {
                        name: name.clone(),
                        path: format!("{}/{}", directory, name),
                        download_url: format!("{}/{}", directory, name),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn fetch_raw(&self, file: &RemoteFile) -> Result<String, FetchError> {
        let (directory, name) = file
            .download_url
            .split_once('/')
            .unwrap_or(("", file.download_url.as_str()));

        self.directories
            .get(directory)
            .and_then(|files| files.iter().find(|(n, _)| n == name))
            .and_then(|(_, content)| content.clone())
            .ok_or_else(|| FetchError::Decode {
                url: file.download_url.clone(),
                reason: "unreadable".to_string(),
            })
    }
}
