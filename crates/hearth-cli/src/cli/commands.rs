use std::collections::BTreeMap;

use hearth_core::query::{filter_by_tag, sort_hunts, SortState};
use hearth_core::{Hunt, HuntRepository};
use serde_json::{json, Value};

use super::protocol::{CliCommand, ListOptions, Response};

/// Run one command against the repository
pub async fn execute(repository: &dyn HuntRepository, command: CliCommand) -> Response {
    match command {
        CliCommand::List(options) => {
            let hunts = repository.get_all().await;
            Response::success(list(hunts, &options))
        }
        CliCommand::Search { query, options } => {
            let hunts = repository.search(&query).await;
            tracing::debug!(query = %query, count = hunts.len(), "Search finished");
            Response::success(list(hunts, &options))
        }
        CliCommand::Show { id } => match repository.get_by_id(&id).await {
            Some(hunt) => Response::success(json!(hunt)),
            None => Response::error("NOT_FOUND", &format!("No hunt with id {}", id)),
        },
        CliCommand::Tags => {
            let hunts = repository.get_all().await;
            Response::success(json!(tag_counts(&hunts)))
        }
    }
}

fn list(hunts: Vec<Hunt>, options: &ListOptions) -> Value {
    let mut hunts = match &options.tag {
        Some(tag) => filter_by_tag(&hunts, tag),
        None => hunts,
    };
    let state = SortState {
        column: options.sort,
        direction: options.direction,
    };
    sort_hunts(&mut hunts, state);

    let items: Vec<Value> = hunts
        .iter()
        .map(|hunt| summary(hunt, options.with_content))
        .collect();
    json!(items)
}

fn summary(hunt: &Hunt, with_content: bool) -> Value {
    let mut value = json!({
        "id": hunt.id,
        "hypothesis": hunt.hypothesis,
        "tactic": hunt.tactic,
        "notes": hunt.notes,
        "tags": hunt.tags,
        "submitter": hunt.submitter,
        "source": hunt.source,
    });
    if with_content {
        value["content"] = json!(hunt.content);
    }
    value
}

fn tag_counts(hunts: &[Hunt]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for tag in hunts.iter().flat_map(|h| h.tags.iter()) {
        *counts.entry(tag.as_str()).or_insert(0) += 1;
    }
    counts
}
