//! Front matter stripping for markdown documents.
//!
//! A document carries front matter when its first line opens with `---`
//! (optionally followed by a language such as `yaml`) and a later line is
//! `---`. Trailing whitespace on either fence is ignored. Everything between
//! the two fences is the front matter block; everything after the closing
//! fence is the body.

const FENCE: &str = "---";

/// Split a document into its optional front matter block and its body.
///
/// Documents without a complete fence pair are returned whole as the body.
pub fn split_front_matter(text: &str) -> (Option<&str>, &str) {
    let Some(after_open) = strip_fence_line(text) else {
        return (None, text);
    };

    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            let front = after_open[..offset].trim_end_matches(['\n', '\r']);
            let body = &after_open[offset + line.len()..];
            return (Some(front), body);
        }
        offset += line.len();
    }

    (None, text)
}

/// Body of a document with front matter removed
pub fn strip_front_matter(text: &str) -> &str {
    split_front_matter(text).1
}

/// Returns the remainder after an opening `---` line, if the text starts with one
fn strip_fence_line(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(FENCE)?;
    // `----` is a rule, not a fence
    if rest.starts_with('-') {
        return None;
    }
    let (_, after) = rest.split_once('\n')?;
    Some(after)
}
