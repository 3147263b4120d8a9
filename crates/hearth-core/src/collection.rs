//! Collection service: fetch every hunt document, parse it and query the
//! resulting list.
//!
//! Nothing here is fatal. A directory that cannot be listed contributes zero
//! files, a file that cannot be fetched or parsed is skipped, and both are
//! logged. Every call refetches the whole source set.

use async_trait::async_trait;

use crate::config::SourceConfig;
use crate::frontmatter::strip_front_matter;
use crate::models::{DocumentRef, Hunt};
use crate::parser::parse_hunt_table;
use crate::search;
use crate::source::{ContentSource, RemoteFile};

#[async_trait]
pub trait HuntRepository: Send + Sync {
    /// Every valid hunt, in source enumeration order
    async fn get_all(&self) -> Vec<Hunt>;

    /// Hunts whose hypothesis, content, notes or any tag contain `query`,
    /// ignoring case
    async fn search(&self, query: &str) -> Vec<Hunt> {
        search::filter_hunts(self.get_all().await, query)
    }

    /// First hunt with exactly this id
    async fn get_by_id(&self, id: &str) -> Option<Hunt> {
        self.get_all().await.into_iter().find(|hunt| hunt.id == id)
    }
}

pub struct HuntCollection<S> {
    source: S,
    directories: Vec<String>,
}

impl<S: ContentSource> HuntCollection<S> {
    pub fn new(source: S, config: &SourceConfig) -> Self {
        Self {
            source,
            directories: config.directories.clone(),
        }
    }

    /// Raw documents of one directory; listing and fetch failures are logged
    async fn collect_directory(&self, directory: &str) -> Vec<(DocumentRef, String)> {
        let files = match self.source.list_markdown(directory).await {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!(directory, error = %e, "Error reading directory");
                return Vec::new();
            }
        };

        let mut documents = Vec::with_capacity(files.len());
        for file in files {
            if let Some(text) = self.fetch_document(&file).await {
                documents.push((DocumentRef::new(directory, file.stem()), text));
            }
        }
        documents
    }

    async fn fetch_document(&self, file: &RemoteFile) -> Option<String> {
        match self.source.fetch_raw(file).await {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::warn!(path = %file.path, error = %e, "Error fetching file content");
                None
            }
        }
    }
}

/// Turn one raw document into a hunt, or log why it was excluded
pub fn build_hunt(source: DocumentRef, text: &str) -> Option<Hunt> {
    let body = strip_front_matter(text);

    let fields = match parse_hunt_table(body) {
        Ok(fields) => fields,
        Err(e) => {
            tracing::warn!(document = %source, error = %e, "Failed to parse hunt data");
            return None;
        }
    };

    let hunt = Hunt::from_fields(fields, body, source.clone());
    if hunt.is_none() {
        tracing::warn!(document = %source, "Hunt has no hypothesis");
    }
    hunt
}

#[async_trait]
impl<S: ContentSource> HuntRepository for HuntCollection<S> {
    async fn get_all(&self) -> Vec<Hunt> {
        let mut hunts = Vec::new();
        for directory in &self.directories {
            for (source, text) in self.collect_directory(directory).await {
                hunts.extend(build_hunt(source, &text));
            }
        }
        tracing::info!(count = hunts.len(), "Collected hunts");
        hunts
    }
}
