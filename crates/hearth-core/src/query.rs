//! Pure reordering and filtering of an already-loaded hunt list.
//!
//! Nothing here fetches; the presentation layer applies these to the list it
//! currently holds.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::Hunt;

/// Hunts carrying exactly `tag`, preserving order
pub fn filter_by_tag(hunts: &[Hunt], tag: &str) -> Vec<Hunt> {
    hunts.iter().filter(|hunt| hunt.has_tag(tag)).cloned().collect()
}

/// Sorted, de-duplicated tags of the given hunts
pub fn available_tags(hunts: &[Hunt]) -> Vec<String> {
    hunts
        .iter()
        .flat_map(|hunt| hunt.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    Id,
    Hypothesis,
    Tactic,
    Submitter,
    Source,
}

impl SortColumn {
    pub const ALL: [SortColumn; 5] = [
        SortColumn::Id,
        SortColumn::Hypothesis,
        SortColumn::Tactic,
        SortColumn::Submitter,
        SortColumn::Source,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Id => "Hunt #",
            SortColumn::Hypothesis => "Idea / Hypothesis",
            SortColumn::Tactic => "Tactic",
            SortColumn::Submitter => "Submitter",
            SortColumn::Source => "Source",
        }
    }

    /// The string a hunt is compared by for this column
    pub fn value<'a>(&self, hunt: &'a Hunt) -> &'a str {
        match self {
            SortColumn::Id => &hunt.id,
            SortColumn::Hypothesis => &hunt.hypothesis,
            SortColumn::Tactic => &hunt.tactic,
            SortColumn::Submitter => &hunt.submitter.name,
            SortColumn::Source => &hunt.source.directory,
        }
    }

    /// Next column, wrapping around
    pub fn next(&self) -> SortColumn {
        let index = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortColumn::Id => "id",
            SortColumn::Hypothesis => "hypothesis",
            SortColumn::Tactic => "tactic",
            SortColumn::Submitter => "submitter",
            SortColumn::Source => "source",
        };
        f.write_str(name)
    }
}

impl FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|column| column.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<String> = Self::ALL.iter().map(|c| c.to_string()).collect();
                format!("unknown column '{}', expected one of: {}", s, names.join(", "))
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Which column the table is sorted by, if any
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub column: Option<SortColumn>,
    pub direction: SortDirection,
}

impl SortState {
    /// Sorting by the active column flips direction; a new column starts ascending
    pub fn toggle(&mut self, column: SortColumn) {
        if self.column == Some(column) {
            self.direction = self.direction.flipped();
        } else {
            self.column = Some(column);
            self.direction = SortDirection::Ascending;
        }
    }

    pub fn is_sorted_by(&self, column: SortColumn) -> bool {
        self.column == Some(column)
    }
}

/// Case-insensitive comparison with the raw strings as a tiebreak
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Stable in-place sort; a state without a column leaves the order untouched
pub fn sort_hunts(hunts: &mut [Hunt], state: SortState) {
    let Some(column) = state.column else {
        return;
    };

    hunts.sort_by(|a, b| {
        let ordering = compare_text(column.value(a), column.value(b));
        match state.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DocumentRef, Submitter};

    fn hunt(id: &str, hypothesis: &str, tactic: &str, tags: &[&str]) -> Hunt {
        Hunt {
            id: id.to_string(),
            hypothesis: hypothesis.to_string(),
            tactic: tactic.to_string(),
            notes: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            submitter: Submitter::new(format!("user-{}", id), ""),
            content: format!("content {}", id),
            source: DocumentRef::new("Flames", id),
        }
    }

    fn sample() -> Vec<Hunt> {
        vec![
            hunt("H002", "beta", "Persistence", &["registry", "windows"]),
            hunt("H001", "Alpha", "Discovery", &["dns"]),
            hunt("H003", "alpha", "Persistence", &["windows"]),
        ]
    }

    fn ids(hunts: &[Hunt]) -> Vec<&str> {
        hunts.iter().map(|h| h.id.as_str()).collect()
    }

    #[test]
    fn test_filter_by_tag() {
        let hunts = sample();
        assert_eq!(ids(&filter_by_tag(&hunts, "windows")), vec!["H002", "H003"]);
        assert!(filter_by_tag(&hunts, "Windows").is_empty());
        assert!(filter_by_tag(&hunts, "missing").is_empty());
    }

    #[test]
    fn test_available_tags_sorted_unique() {
        assert_eq!(available_tags(&sample()), vec!["dns", "registry", "windows"]);
        assert!(available_tags(&[]).is_empty());
    }

    #[test]
    fn test_toggle_direction() {
        let mut state = SortState::default();
        assert_eq!(state.column, None);

        state.toggle(SortColumn::Id);
        assert_eq!(state.direction, SortDirection::Ascending);
        state.toggle(SortColumn::Id);
        assert_eq!(state.direction, SortDirection::Descending);
        state.toggle(SortColumn::Id);
        assert_eq!(state.direction, SortDirection::Ascending);

        state.toggle(SortColumn::Id);
        state.toggle(SortColumn::Tactic);
        assert!(state.is_sorted_by(SortColumn::Tactic));
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_sort_by_id_both_directions() {
        let mut hunts = sample();
        let mut state = SortState::default();

        state.toggle(SortColumn::Id);
        sort_hunts(&mut hunts, state);
        assert_eq!(ids(&hunts), vec!["H001", "H002", "H003"]);

        state.toggle(SortColumn::Id);
        sort_hunts(&mut hunts, state);
        assert_eq!(ids(&hunts), vec!["H003", "H002", "H001"]);
    }

    #[test]
    fn test_sort_is_stable_and_preserves_records() {
        let original = sample();
        let mut hunts = original.clone();
        let mut state = SortState::default();
        state.toggle(SortColumn::Tactic);
        sort_hunts(&mut hunts, state);

        // Equal tactics keep their relative order
        assert_eq!(ids(&hunts), vec!["H001", "H002", "H003"]);
        assert_eq!(hunts.len(), original.len());
        for hunt in &original {
            assert!(hunts.contains(hunt));
        }
    }

    #[test]
    fn test_sort_case_insensitive_with_tiebreak() {
        let mut hunts = sample();
        let mut state = SortState::default();
        state.toggle(SortColumn::Hypothesis);
        sort_hunts(&mut hunts, state);
        assert_eq!(ids(&hunts), vec!["H001", "H003", "H002"]);
    }

    #[test]
    fn test_no_column_keeps_order() {
        let mut hunts = sample();
        sort_hunts(&mut hunts, SortState::default());
        assert_eq!(ids(&hunts), vec!["H002", "H001", "H003"]);
    }

    #[test]
    fn test_column_from_str() {
        assert_eq!("tactic".parse::<SortColumn>(), Ok(SortColumn::Tactic));
        assert_eq!(" ID ".parse::<SortColumn>(), Ok(SortColumn::Id));
        assert!("tags".parse::<SortColumn>().is_err());
        for column in SortColumn::ALL {
            assert_eq!(column.to_string().parse::<SortColumn>(), Ok(column));
        }
    }

    #[test]
    fn test_column_cycle() {
        assert_eq!(SortColumn::Id.next(), SortColumn::Hypothesis);
        assert_eq!(SortColumn::Source.next(), SortColumn::Id);
    }
}
