use hearth_core::query::{SortColumn, SortDirection};
use serde::{Deserialize, Serialize};

/// Envelope printed for every command
#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub code: String,
    pub message: String,
}

impl Response {
    pub fn success(result: serde_json::Value) -> Self {
        Self {
            result: Some(result),
            error: None,
        }
    }

    pub fn error(code: &str, message: &str) -> Self {
        Self {
            result: None,
            error: Some(ErrorInfo {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Post-processing shared by `list` and `search`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub tag: Option<String>,
    pub sort: Option<SortColumn>,
    pub direction: SortDirection,
    /// Include the full markdown body of each hunt
    pub with_content: bool,
}

/// A command parsed from arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Every hunt
    List(ListOptions),
    /// Hunts matching a free-text query
    Search { query: String, options: ListOptions },
    /// One hunt by id, with content
    Show { id: String },
    /// Every tag with the number of hunts carrying it
    Tags,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_omits_error() {
        let json = Response::success(serde_json::json!([1, 2])).to_json(false).unwrap();
        assert_eq!(json, r#"{"result":[1,2]}"#);
    }

    #[test]
    fn test_error_omits_result() {
        let response = Response::error("NOT_FOUND", "No hunt with id H999");
        assert!(response.is_error());
        let json = response.to_json(false).unwrap();
        assert_eq!(
            json,
            r#"{"error":{"code":"NOT_FOUND","message":"No hunt with id H999"}}"#
        );
    }
}
