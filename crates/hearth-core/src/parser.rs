//! Extraction of hunt fields from the pipe table in a document body.
//!
//! Each hunt document carries a single table: a header row, a separator row
//! and one data row with the columns id, hypothesis, tactic, notes, tags and
//! submitter link, in that order.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{HEADER_MARKERS, ID_LETTERS, MIN_COLUMNS, TAG_MARKER};
use crate::models::{HuntFields, Submitter};

/// `[name](url)`
static MARKDOWN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));

/// Lines between the header row and the data row (the separator row)
const DATA_ROW_OFFSET: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("No header row found")]
    MissingHeader,

    #[error("No data row found below header on line {header_line}")]
    MissingDataRow { header_line: usize },

    #[error("Not enough columns found: {found} (need at least {})", MIN_COLUMNS)]
    TooFewColumns { found: usize },
}

/// Parse the hunt table in a document body (front matter already stripped).
pub fn parse_hunt_table(body: &str) -> Result<HuntFields, ParseError> {
    let lines: Vec<&str> = body.lines().collect();

    let header_index = lines
        .iter()
        .position(|line| is_header_line(line))
        .ok_or(ParseError::MissingHeader)?;

    let data_row = lines
        .get(header_index + DATA_ROW_OFFSET)
        .ok_or(ParseError::MissingDataRow {
            header_line: header_index + 1,
        })?;

    let columns = split_row(data_row);
    tracing::trace!(?columns, "parsed table columns");

    if columns.len() < MIN_COLUMNS {
        return Err(ParseError::TooFewColumns {
            found: columns.len(),
        });
    }

    let notes = columns[3].to_string();

    Ok(HuntFields {
        id: clean_id(columns[0]),
        hypothesis: columns[1].to_string(),
        tactic: columns[2].to_string(),
        notes: (!notes.is_empty()).then_some(notes),
        tags: parse_tags(columns[4]),
        submitter: columns
            .get(5)
            .map(|cell| parse_submitter(cell))
            .unwrap_or_default(),
    })
}

fn is_header_line(line: &str) -> bool {
    HEADER_MARKERS.iter().any(|marker| line.contains(marker))
}

/// Split a table row on `|`, trimming cells and dropping empty ones.
///
/// Dropping empties tolerates leading and trailing pipes, and also collapses
/// genuinely empty cells so later columns shift left.
pub fn split_row(row: &str) -> Vec<&str> {
    row.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect()
}

/// Keep only the characters a hunt identifier may contain
pub fn clean_id(cell: &str) -> String {
    cell.chars()
        .filter(|c| c.is_ascii_digit() || ID_LETTERS.contains(c))
        .collect()
}

/// Tokens in the tags cell that start with `#`, marker stripped, in order
/// of first appearance.
pub fn parse_tags(cell: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for token in cell.split(|c: char| c.is_whitespace() || c == ',') {
        let Some(tag) = token.trim().strip_prefix(TAG_MARKER) else {
            continue;
        };
        if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// First markdown link in the cell, or an empty submitter
pub fn parse_submitter(cell: &str) -> Submitter {
    MARKDOWN_LINK
        .captures(cell)
        .map(|caps| Submitter::new(&caps[1], &caps[2]))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "| Hunt # | Idea / Hypothesis | Tactic | Notes | Tags | Submitter |";
    const SEPARATOR: &str = "|--------|-------------------|--------|-------|------|-----------|";

    fn document(row: &str) -> String {
        format!("# H001\n\n{}\n{}\n{}\n\n## Why\n- because\n", HEADER, SEPARATOR, row)
    }

    #[test]
    fn test_well_formed_row() {
        let body = document(
            "| H001 | Hypothesis text | Tactic X | Some note | #tag1 #tag2 | [Alice](http://x) |",
        );
        let fields = parse_hunt_table(&body).unwrap();
        assert_eq!(fields.id, "H001");
        assert_eq!(fields.hypothesis, "Hypothesis text");
        assert_eq!(fields.tactic, "Tactic X");
        assert_eq!(fields.notes.as_deref(), Some("Some note"));
        assert_eq!(fields.tags, vec!["tag1", "tag2"]);
        assert_eq!(fields.submitter, Submitter::new("Alice", "http://x"));
    }

    #[test]
    fn test_missing_header() {
        let body = "# Title\n\n| a | b | c | d | e |\n|---|---|---|---|---|\n| 1 | 2 | 3 | 4 | 5 |\n";
        assert_eq!(parse_hunt_table(body), Err(ParseError::MissingHeader));
        assert_eq!(parse_hunt_table(""), Err(ParseError::MissingHeader));
    }

    #[test]
    fn test_idea_header_marker() {
        let body = "| Idea | Hypothesis | Tactic | Notes | Tags |\n|---|---|---|---|---|\n| M001 | Beaconing | C2 | - | #dns |\n";
        let fields = parse_hunt_table(body).unwrap();
        assert_eq!(fields.id, "M001");
        assert_eq!(fields.hypothesis, "Beaconing");
        assert_eq!(fields.tags, vec!["dns"]);
        assert!(fields.submitter.is_empty());
    }

    #[test]
    fn test_missing_data_row() {
        let body = format!("{}\n{}", HEADER, SEPARATOR);
        assert_eq!(
            parse_hunt_table(&body),
            Err(ParseError::MissingDataRow { header_line: 1 })
        );
    }

    #[test]
    fn test_too_few_columns() {
        let body = document("| H001 | Hypothesis | Tactic | Notes |");
        assert_eq!(
            parse_hunt_table(&body),
            Err(ParseError::TooFewColumns { found: 4 })
        );
    }

    #[test]
    fn test_empty_cells_collapse() {
        // The empty notes cell disappears and the tags shift into the notes slot
        let body = document("| H002 | Hypothesis | Tactic |   | #a #b | [Bob](http://b) |");
        let fields = parse_hunt_table(&body).unwrap();
        assert_eq!(fields.notes.as_deref(), Some("#a #b"));
        assert!(fields.tags.is_empty());
        assert!(fields.submitter.is_empty());
    }

    #[test]
    fn test_row_without_outer_pipes() {
        let body = document("B003 | Baseline logons | Discovery | Quiet hours | #baseline");
        let fields = parse_hunt_table(&body).unwrap();
        assert_eq!(fields.id, "B003");
        assert_eq!(fields.tags, vec!["baseline"]);
    }

    #[test]
    fn test_clean_id() {
        assert_eq!(clean_id("H001"), "H001");
        assert_eq!(clean_id("**H-001**"), "H001");
        assert_eq!(clean_id("B 12"), "B12");
        assert_eq!(clean_id("h001"), "001");
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags("#a, #b,#c"), vec!["a", "b", "c"]);
        assert_eq!(parse_tags("#a #b #a"), vec!["a", "b"]);
        assert_eq!(parse_tags("plain # #ok"), vec!["ok"]);
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn test_parse_submitter() {
        assert_eq!(
            parse_submitter("by [Sydney Marrone](https://x.com/letswastetime)"),
            Submitter::new("Sydney Marrone", "https://x.com/letswastetime")
        );
        assert!(parse_submitter("Sydney").is_empty());
        assert!(parse_submitter("[](http://x)").is_empty());
    }

    #[test]
    fn test_header_is_first_match() {
        let body = format!(
            "{}\n{}\n| H001 | First | T | N | #x |\n\n{}\n{}\n| H002 | Second | T | N | #y |\n",
            HEADER, SEPARATOR, HEADER, SEPARATOR
        );
        assert_eq!(parse_hunt_table(&body).unwrap().hypothesis, "First");
    }
}
