// crates/hearth-core/src/models/hunt.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Who submitted a hunt, taken from a markdown link in the last table cell.
/// Both fields are empty when the cell is missing or not a link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submitter {
    pub name: String,
    pub link: String,
}

impl Submitter {
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.link.is_empty()
    }
}

/// Where a hunt document lives in the source repository
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentRef {
    /// Source directory, e.g. `Flames`
    pub directory: String,
    /// File name without the `.md` extension
    pub name: String,
}

impl DocumentRef {
    pub fn new(directory: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.directory, self.name)
    }
}

/// The columns extracted from a hunt table's data row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HuntFields {
    pub id: String,
    pub hypothesis: String,
    pub tactic: String,
    pub notes: Option<String>,
    pub tags: Vec<String>,
    pub submitter: Submitter,
}

/// A single threat-hunting idea sourced from one markdown document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunt {
    pub id: String,
    pub hypothesis: String,
    pub tactic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub tags: Vec<String>,
    pub submitter: Submitter,
    /// Document body after front matter is stripped, kept verbatim
    pub content: String,
    pub source: DocumentRef,
}

impl Hunt {
    /// Assemble a hunt from parsed table fields and the document it came from.
    /// Returns None when the hypothesis is empty.
    pub fn from_fields(fields: HuntFields, content: impl Into<String>, source: DocumentRef) -> Option<Self> {
        if fields.hypothesis.trim().is_empty() {
            return None;
        }

        Some(Self {
            id: fields.id,
            hypothesis: fields.hypothesis,
            tactic: fields.tactic,
            notes: fields.notes,
            tags: fields.tags,
            submitter: fields.submitter,
            content: content.into(),
            source,
        })
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Tags joined for single-line display
    pub fn tags_display(&self) -> String {
        self.tags
            .iter()
            .map(|t| format!("#{}", t))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
