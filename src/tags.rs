//! Meta Tag Collection
//!
//! Flattens every `<meta>` element of a document into an ordered list.
//! Twitter reads card tags from anywhere in the page, not only `<head>`,
//! so the collection walks the whole tree.

use dom_query::{Document, Selection};

/// A single `<meta>` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    /// The `name` attribute.
    pub name: Option<String>,
    /// The `property` attribute.
    pub property: Option<String>,
    /// `content`, or `value` when `content` is missing or empty; trimmed.
    pub content: String,
}

impl MetaTag {
    /// Whether this tag is declared under `key` by either attribute.
    #[must_use]
    pub fn matches(&self, key: &str) -> bool {
        self.name.as_deref() == Some(key) || self.property.as_deref() == Some(key)
    }

    /// The declared key if it starts with `prefix`, `name` taking precedence.
    #[must_use]
    pub fn key_with_prefix(&self, prefix: &str) -> Option<&str> {
        [self.name.as_deref(), self.property.as_deref()]
            .into_iter()
            .flatten()
            .find(|key| key.starts_with(prefix))
    }
}

/// Meta tags of a document in document order.
///
/// Duplicates are kept; lookups return the first declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<MetaTag>,
}

impl TagSet {
    /// Collect all `<meta>` elements of a parsed document.
    #[must_use]
    pub fn from_document(doc: &Document) -> Self {
        let tags = doc
            .select("meta")
            .nodes()
            .iter()
            .map(|node| {
                let meta = Selection::from(*node);
                MetaTag {
                    name: attribute(&meta, "name"),
                    property: attribute(&meta, "property"),
                    content: meta_content(&meta),
                }
            })
            .collect();

        Self { tags }
    }

    /// Parse `html` and collect its meta tags.
    #[must_use]
    pub fn from_html(html: &str) -> Self {
        Self::from_document(&Document::from(html))
    }

    /// First tag declared under `key`.
    #[must_use]
    pub fn first(&self, key: &str) -> Option<&MetaTag> {
        self.tags.iter().find(|tag| tag.matches(key))
    }

    /// Content of the first tag declared under `key`.
    #[must_use]
    pub fn content(&self, key: &str) -> Option<&str> {
        self.first(key).map(|tag| tag.content.as_str())
    }

    /// `(key, content)` of every tag whose key starts with `prefix`, in document order.
    pub fn with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.tags
            .iter()
            .filter_map(move |tag| tag.key_with_prefix(prefix).map(|key| (key, tag.content.as_str())))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl FromIterator<MetaTag> for TagSet {
    fn from_iter<I: IntoIterator<Item = MetaTag>>(iter: I) -> Self {
        Self { tags: iter.into_iter().collect() }
    }
}

fn attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

fn meta_content(sel: &Selection) -> String {
    attribute(sel, "content")
        .filter(|c| !c.is_empty())
        .or_else(|| attribute(sel, "value"))
        .map(|c| c.trim().to_string())
        .unwrap_or_default()
}
