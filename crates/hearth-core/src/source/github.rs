//! GitHub contents API source.
//!
//! Lists a directory with `GET /repos/{owner}/{repo}/contents/{dir}` and
//! downloads each file through its `download_url`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{is_markdown, ContentSource, FetchError, RemoteFile};
use crate::config::SourceConfig;

const ACCEPT_JSON: &str = "application/vnd.github+json";

/// Entry of a contents API directory listing
#[derive(Debug, Deserialize)]
struct ContentEntry {
    name: String,
    path: String,
    download_url: Option<String>,
}

pub struct GithubSource {
    config: SourceConfig,
    client: Client,
}

impl GithubSource {
    pub fn new(config: SourceConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { config, client })
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self.client.get(url);
        match &self.config.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl ContentSource for GithubSource {
    async fn list_markdown(&self, directory: &str) -> Result<Vec<RemoteFile>, FetchError> {
        let url = self.config.contents_url(directory);
        tracing::debug!(%url, "listing directory");

        let response = self.get(&url).header("Accept", ACCEPT_JSON).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { url, status, body });
        }

        let listing: serde_json::Value = response.json().await?;
        parse_listing(listing).map_err(|reason| FetchError::Decode { url, reason })
    }

    async fn fetch_raw(&self, file: &RemoteFile) -> Result<String, FetchError> {
        let response = self.get(&file.download_url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                url: file.download_url.clone(),
                status,
                body,
            });
        }

        Ok(response.text().await?)
    }
}

/// Markdown files with a download URL from a contents API response.
///
/// The API returns an object instead of an array when the path is a file;
/// that is treated as an empty listing.
fn parse_listing(listing: serde_json::Value) -> Result<Vec<RemoteFile>, String> {
    if !listing.is_array() {
        return Ok(Vec::new());
    }

    let entries: Vec<ContentEntry> = serde_json::from_value(listing).map_err(|e| e.to_string())?;

    Ok(entries
        .into_iter()
        .filter(|entry| is_markdown(&entry.name))
        .filter_map(|entry| {
            let download_url = entry.download_url?;
            Some(RemoteFile {
                name: entry.name,
                path: entry.path,
                download_url,
            })
        })
        .collect())
}
