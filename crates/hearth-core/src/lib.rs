//! Core library for browsing the HEARTH threat-hunting collection.
//!
//! Fetches hunt write-ups from a content source, parses the table embedded in
//! each markdown document and exposes an in-memory query layer on top.

pub mod cache;
pub mod collection;
pub mod config;
pub mod constants;
pub mod frontmatter;
pub mod models;
pub mod parser;
pub mod query;
pub mod repository;
pub mod search;
pub mod source;
pub mod tracing_setup;

pub use cache::CachedRepository;
pub use collection::{HuntCollection, HuntRepository};
pub use config::{ConfigError, SourceConfig};
pub use models::{DocumentRef, Hunt, HuntFields, Submitter};
pub use parser::{parse_hunt_table, ParseError};
pub use repository::open_repository;
pub use source::{ContentSource, FetchError, GithubSource, LocalSource, RemoteFile};
