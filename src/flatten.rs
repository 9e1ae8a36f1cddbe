//! Namespace Flattening
//!
//! Rebuilds a nested tree from flat colon-delimited tag names, for card
//! types whose schema is not published:
//!
//! ```html
//! <meta name="twitter:player" content="https://example.com/embed">
//! <meta name="twitter:player:width" content="480">
//! <meta name="twitter:text:subtitle" content="Live now">
//! ```
//!
//! becomes
//!
//! ```json
//! { "player": { "value": "https://example.com/embed", "width": 480 },
//!   "text": { "subtitle": "Live now" } }
//! ```
//!
//! A name used both as a leaf and as a prefix keeps its own content under
//! a `value` entry next to the deeper keys.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Number;

use crate::tags::TagSet;

/// Entry holding the content of a segment that is also a namespace.
pub const VALUE_KEY: &str = "value";

/// Nested tags keyed by path segment.
pub type TagTree = BTreeMap<String, TagValue>;

/// A flattened tag: coerced scalar or nested namespace.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TagValue {
    Bool(bool),
    Number(Number),
    Text(String),
    Tree(TagTree),
}

impl TagValue {
    /// Coerce tag content: `true`/`false` to booleans, numeric text to numbers.
    ///
    /// ```
    /// use twitter_cards::flatten::TagValue;
    ///
    /// assert_eq!(TagValue::coerce("false"), TagValue::Bool(false));
    /// assert_eq!(TagValue::coerce(" 42 "), TagValue::Number(42.into()));
    /// assert_eq!(TagValue::coerce("live"), TagValue::Text("live".to_string()));
    /// ```
    #[must_use]
    pub fn coerce(content: &str) -> Self {
        let text = content.trim();
        match text {
            "true" => TagValue::Bool(true),
            "false" => TagValue::Bool(false),
            _ => parse_number(text).map_or_else(|| TagValue::Text(text.to_string()), TagValue::Number),
        }
    }

    /// Follow `path` through nested trees.
    #[must_use]
    pub fn get_path(&self, path: &[&str]) -> Option<&TagValue> {
        match path.split_first() {
            None => Some(self),
            Some((head, rest)) => match self {
                TagValue::Tree(tree) => tree.get(*head)?.get_path(rest),
                _ => None,
            },
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TagValue::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TagValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TagValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_tree(&self) -> Option<&TagTree> {
        match self {
            TagValue::Tree(tree) => Some(tree),
            _ => None,
        }
    }
}

// Integers keep full precision; ids such as 745291183405076480 exceed f64.
// Non-finite floats (`inf`, `NaN`) stay text.
fn parse_number(text: &str) -> Option<Number> {
    if text.is_empty() {
        return None;
    }
    if let Ok(n) = text.parse::<i64>() {
        return Some(n.into());
    }
    if let Ok(n) = text.parse::<u64>() {
        return Some(n.into());
    }
    text.parse::<f64>().ok().and_then(Number::from_f64)
}

/// Collect every tag whose name starts with `prefix` into a tree.
///
/// The remainder of each name is split on `:` and `.`. The first
/// declaration of a path wins; later duplicates are ignored.
#[must_use]
pub fn flatten_namespace(tags: &TagSet, prefix: &str) -> TagTree {
    let mut root = TagTree::new();

    for (key, content) in tags.with_prefix(prefix) {
        let path: Vec<&str> = key[prefix.len()..]
            .split([':', '.'])
            .filter(|segment| !segment.is_empty())
            .collect();

        if path.is_empty() {
            tracing::debug!(key, "skipping tag with empty path");
            continue;
        }

        insert(&mut root, &path, TagValue::coerce(content));
    }

    root
}

fn insert(tree: &mut TagTree, path: &[&str], value: TagValue) {
    let Some((head, rest)) = path.split_first() else {
        return;
    };

    if rest.is_empty() {
        if !tree.contains_key(*head) {
            tree.insert((*head).to_string(), value);
        } else if let Some(TagValue::Tree(namespace)) = tree.get_mut(*head) {
            namespace.entry(VALUE_KEY.to_string()).or_insert(value);
        } else {
            tracing::debug!(segment = *head, "duplicate tag ignored");
        }
        return;
    }

    let slot = tree
        .entry((*head).to_string())
        .or_insert_with(|| TagValue::Tree(TagTree::new()));

    if !matches!(slot, TagValue::Tree(_)) {
        let leaf = std::mem::replace(slot, TagValue::Tree(TagTree::new()));
        if let TagValue::Tree(namespace) = slot {
            namespace.insert(VALUE_KEY.to_string(), leaf);
        }
    }

    if let TagValue::Tree(namespace) = slot {
        insert(namespace, rest, value);
    }
}
