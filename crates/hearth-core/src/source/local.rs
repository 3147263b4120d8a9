//! Reads hunt documents from a local checkout of the repository.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{is_markdown, ContentSource, FetchError, RemoteFile};

pub struct LocalSource {
    root: PathBuf,
}

impl LocalSource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

fn io_error(path: &Path, source: std::io::Error) -> FetchError {
    FetchError::Io {
        path: path.display().to_string(),
        source,
    }
}

#[async_trait]
impl ContentSource for LocalSource {
    async fn list_markdown(&self, directory: &str) -> Result<Vec<RemoteFile>, FetchError> {
        let dir = self.root.join(directory);
        let mut entries = tokio::fs::read_dir(&dir)
            .await
            .map_err(|e| io_error(&dir, e))?;

        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| io_error(&dir, e))? {
            let file_type = entry.file_type().await.map_err(|e| io_error(&dir, e))?;
            if !file_type.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if !is_markdown(&name) {
                continue;
            }
            files.push(RemoteFile {
                path: format!("{}/{}", directory, name),
                download_url: entry.path().display().to_string(),
                name,
            });
        }

        // read_dir order is platform dependent; the contents API sorts by name
        files.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(files)
    }

    async fn fetch_raw(&self, file: &RemoteFile) -> Result<String, FetchError> {
        let path = Path::new(&file.download_url);
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| io_error(path, e))
    }
}
