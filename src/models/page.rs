//! Pagination envelope shared by every listing endpoint
//!
//! The catalog wraps listings as `{count, next, previous, results}`.

use serde::Deserialize;

/// One page of a paginated listing.
///
/// `next` and `previous` are cursor URLs. The API sends `null` at either
/// end of the listing; some mirrors send an empty string instead, so both
/// are treated as "no page".
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    /// Total number of items across all pages
    #[serde(default)]
    pub count: u64,
    /// URL of the following page
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the preceding page
    #[serde(default)]
    pub previous: Option<String>,
    /// Items on this page
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Returns true if the listing continues after this page.
    pub fn has_next(&self) -> bool {
        is_cursor(self.next.as_deref())
    }

    /// Returns true if the listing has a page before this one.
    pub fn has_previous(&self) -> bool {
        is_cursor(self.previous.as_deref())
    }
}

fn is_cursor(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// A `{name, url}` reference to another resource.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}
