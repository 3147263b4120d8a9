//! Wiring a configured repository for the binaries.

use std::path::Path;
use std::sync::Arc;

use crate::cache::CachedRepository;
use crate::collection::{HuntCollection, HuntRepository};
use crate::config::SourceConfig;
use crate::source::{ContentSource, FetchError, GithubSource, LocalSource};

/// GitHub by default, a local checkout when `local` is given; wrapped in a
/// cache when the config sets a TTL.
pub fn open_repository(
    config: SourceConfig,
    local: Option<&Path>,
) -> Result<Arc<dyn HuntRepository>, FetchError> {
    match local {
        Some(root) => {
            tracing::info!(root = %root.display(), "Reading hunts from local checkout");
            Ok(wrap(LocalSource::new(root), &config))
        }
        None => {
            tracing::info!(owner = %config.owner, repo = %config.repo, "Reading hunts from GitHub");
            let source = GithubSource::new(config.clone())?;
            Ok(wrap(source, &config))
        }
    }
}

fn wrap<S: ContentSource + 'static>(source: S, config: &SourceConfig) -> Arc<dyn HuntRepository> {
    let collection = HuntCollection::new(source, config);
    match config.cache_ttl() {
        Some(ttl) => {
            tracing::debug!(ttl_secs = ttl.as_secs(), "Caching hunt list");
            Arc::new(CachedRepository::new(collection, ttl))
        }
        None => Arc::new(collection),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const DOC: &str = "| Hunt # | Idea / Hypothesis | Tactic | Notes | Tags | Submitter |\n\
|---|---|---|---|---|---|\n\
| H001 | Odd DNS volume | Exfiltration | Check resolvers | #dns | [Alice](http://x) |\n";

    fn checkout() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("Flames")).unwrap();
        fs::write(dir.path().join("Flames").join("H001.md"), DOC).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_local_checkout() {
        let dir = checkout();
        let repo = open_repository(SourceConfig::default(), Some(dir.path())).unwrap();

        let hunts = repo.get_all().await;
        assert_eq!(hunts.len(), 1);
        assert_eq!(hunts[0].id, "H001");
        assert_eq!(hunts[0].source.directory, "Flames");
    }

    #[tokio::test]
    async fn test_cached_when_ttl_set() {
        let dir = checkout();
        let config = SourceConfig {
            cache_ttl_secs: Some(300),
            ..SourceConfig::default()
        };
        let repo = open_repository(config, Some(dir.path())).unwrap();

        assert_eq!(repo.get_all().await.len(), 1);
        fs::remove_file(dir.path().join("Flames").join("H001.md")).unwrap();
        assert_eq!(repo.get_all().await.len(), 1);
    }

    #[tokio::test]
    async fn test_uncached_refetches() {
        let dir = checkout();
        let repo = open_repository(SourceConfig::default(), Some(dir.path())).unwrap();

        assert_eq!(repo.get_all().await.len(), 1);
        fs::remove_file(dir.path().join("Flames").join("H001.md")).unwrap();
        assert!(repo.get_all().await.is_empty());
    }
}
