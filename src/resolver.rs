//! Card Tag Resolution
//!
//! Looks up logical card fields in the `twitter:` namespace. A lookup can
//! fall back to another namespace (`og:` for title, description and image),
//! accept the `:id` form of a field, and be required or optional.
//!
//! Resolution order is fixed:
//! 1. `twitter:<field>`
//! 2. `<fallback namespace>:<fallback field>` if configured
//! 3. `twitter:<field>:id` if the identifier form is allowed
//! 4. `MissingRequiredField` if required, absent otherwise
//!
//! Only the first declaration of a tag in document order is ever read.

use std::collections::BTreeMap;

use crate::card::ValueOrId;
use crate::error::{Error, Result};
use crate::tags::TagSet;

/// Namespace every card field lives in.
pub const TWITTER_NAMESPACE: &str = "twitter";

/// Generic page metadata namespace used as the fallback.
pub const OPEN_GRAPH_NAMESPACE: &str = "og";

/// Alternate location of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fallback<'a> {
    pub namespace: &'a str,
    pub field: &'a str,
}

/// How a single field is looked up.
///
/// ```
/// use twitter_cards::resolver::LookupOptions;
///
/// let title = LookupOptions::required().with_open_graph("title");
/// assert!(title.required);
/// assert_eq!(title.fallback.map(|f| f.namespace), Some("og"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupOptions<'a> {
    /// Where to look when the `twitter:` tag is absent.
    pub fallback: Option<Fallback<'a>>,
    /// Accept `twitter:<field>:id` as an identifier.
    pub allow_id: bool,
    /// Fail instead of resolving to absence.
    pub required: bool,
}

impl<'a> LookupOptions<'a> {
    /// Optional field, no fallback, no identifier form.
    #[must_use]
    pub fn optional() -> Self {
        Self::default()
    }

    /// Required field, no fallback, no identifier form.
    #[must_use]
    pub fn required() -> Self {
        Self { required: true, ..Self::default() }
    }

    /// Fall back to `og:<field>`.
    #[must_use]
    pub fn with_open_graph(self, field: &'a str) -> Self {
        self.with_fallback(OPEN_GRAPH_NAMESPACE, field)
    }

    #[must_use]
    pub fn with_fallback(self, namespace: &'a str, field: &'a str) -> Self {
        Self { fallback: Some(Fallback { namespace, field }), ..self }
    }

    /// Accept the `:id` form.
    #[must_use]
    pub fn with_id(self) -> Self {
        Self { allow_id: true, ..self }
    }
}

fn twitter_key(field: &str) -> String {
    format!("{TWITTER_NAMESPACE}:{field}")
}

/// Resolve a field to its literal value or identifier.
///
/// # Errors
///
/// Returns `Error::MissingRequiredField` when `options.required` is set and
/// no tag was found.
pub fn resolve_field(tags: &TagSet, field: &str, options: LookupOptions<'_>) -> Result<Option<ValueOrId>> {
    let primary = twitter_key(field);
    if let Some(content) = tags.content(&primary) {
        return Ok(Some(ValueOrId::Value(content.to_string())));
    }

    if let Some(Fallback { namespace, field }) = options.fallback {
        if let Some(content) = tags.content(&format!("{namespace}:{field}")) {
            return Ok(Some(ValueOrId::Value(content.to_string())));
        }
    }

    if options.allow_id {
        if let Some(content) = tags.content(&format!("{primary}:id")) {
            return Ok(Some(ValueOrId::Id(content.to_string())));
        }
    }

    if options.required {
        return Err(Error::missing_tag(&primary));
    }

    Ok(None)
}

/// Resolve a field to its literal value; the identifier form is never used.
///
/// # Errors
///
/// Same as [`resolve_field`].
pub fn resolve_scalar(tags: &TagSet, field: &str, options: LookupOptions<'_>) -> Result<Option<String>> {
    let options = LookupOptions { allow_id: false, ..options };
    Ok(resolve_field(tags, field, options)?.and_then(ValueOrId::into_value))
}

/// Resolve a field that must be present to its literal value.
///
/// `options.required` is implied.
///
/// # Errors
///
/// Returns `Error::MissingRequiredField` when no tag was found.
pub fn resolve_required(tags: &TagSet, field: &str, options: LookupOptions<'_>) -> Result<String> {
    let options = LookupOptions { required: true, ..options };
    resolve_scalar(tags, field, options)?.ok_or_else(|| Error::missing_tag(&twitter_key(field)))
}

/// Look up `twitter:<prefix>:<key>` for each of `keys`.
///
/// Absent keys are left out of the returned map. When every key is absent
/// the result is `None`, or an error if `required` is set.
///
/// # Errors
///
/// Returns `Error::MissingRequiredField` when `required` is set and none of
/// the keys is present.
pub fn resolve_key_set<'k>(
    tags: &TagSet,
    keys: &[&'k str],
    prefix: &str,
    required: bool,
) -> Result<Option<BTreeMap<&'k str, String>>> {
    let mut found = BTreeMap::new();
    for &key in keys {
        if let Some(value) = resolve_scalar(tags, &format!("{prefix}:{key}"), LookupOptions::optional())? {
            found.insert(key, value);
        }
    }

    if !found.is_empty() {
        return Ok(Some(found));
    }
    if required {
        return Err(Error::MissingRequiredField(format!(
            "At least one of '{}:{{{}}}' should exist but found nothing",
            twitter_key(prefix),
            keys.join(",")
        )));
    }
    Ok(None)
}
