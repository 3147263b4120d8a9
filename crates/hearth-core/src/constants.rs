//! Application-wide constants
//!
//! Centralized location for the repository identity and the markers the
//! parser looks for in community-authored documents.

/// Owner of the upstream hunt repository
pub const REPO_OWNER: &str = "triw0lf";

/// Name of the upstream hunt repository
pub const REPO_NAME: &str = "HEARTH";

/// Directories that hold hunt documents, in enumeration order
pub const HUNT_DIRECTORIES: [&str; 3] = ["Alchemy", "Embers", "Flames"];

/// GitHub REST API base URL
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// GitHub rejects API requests without a User-Agent
pub const DEFAULT_USER_AGENT: &str = concat!("hearth-browser/", env!("CARGO_PKG_VERSION"));

/// Extension of the documents we consider
pub const MARKDOWN_EXTENSION: &str = ".md";

/// Literal tokens that identify the header row of a hunt table
pub const HEADER_MARKERS: [&str; 2] = ["Hunt #", "| Idea"];

/// Prefix that marks a token in the tags cell as a tag
pub const TAG_MARKER: char = '#';

/// Minimum number of non-empty cells a data row must carry
pub const MIN_COLUMNS: usize = 5;

/// Characters allowed in a hunt identifier besides ASCII digits
pub const ID_LETTERS: [char; 3] = ['H', 'M', 'B'];

/// Pseudo-tag that clears the tag filter
pub const ALL_TAGS: &str = "all";

/// Links shown in the UI chrome
pub mod links {
    pub const SUBMIT_HUNT: &str = "https://github.com/triw0lf/HEARTH/issues/new/choose";
    pub const FORGE: &str = "https://github.com/triw0lf/HEARTH/blob/main/Forge/Forge.md";
    pub const RESOURCES: &str = "https://github.com/triw0lf/HEARTH/blob/main/Kindling/Resources.md";
}
