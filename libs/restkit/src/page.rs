//! Page-number pagination: a fixed page size, a 1-indexed `page` query
//! parameter, and an envelope reporting the total count plus next/previous
//! page links rebuilt from the request URI.

use axum::http::Uri;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// The requested `page` value could not be resolved to an available page.
///
/// Covers non-numeric input, zero, and pages past the end of the result
/// set. The paginator owns the `page` parameter, so all of these surface
/// the same way (the HTTP layer maps this to 404).
#[derive(Debug, Error)]
#[error("Invalid page: {0}")]
pub struct InvalidPage(pub String);

/// A validated page request: 1-indexed page number and fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub number: u64,
    pub size: u64,
}

impl PageRequest {
    /// Parse the raw `page` query value. A missing parameter means page 1.
    pub fn parse(raw: Option<&str>, size: u64) -> Result<Self, InvalidPage> {
        debug_assert!(size > 0);
        let number = match raw.map(str::trim) {
            None | Some("") => 1,
            Some(s) => s
                .parse::<u64>()
                .ok()
                .filter(|n| *n >= 1)
                .ok_or_else(|| InvalidPage(format!("'{s}' is not a valid page number")))?,
        };
        Ok(Self { number, size })
    }

    pub fn offset(&self) -> u64 {
        (self.number - 1) * self.size
    }

    pub fn limit(&self) -> u64 {
        self.size
    }

    /// Number of pages a result set of `count` rows occupies.
    ///
    /// An empty set still has one (empty) page, so page 1 is always valid.
    pub fn total_pages(count: u64, size: u64) -> u64 {
        if count == 0 {
            1
        } else {
            count.div_ceil(size)
        }
    }

    /// Reject page numbers past the end of the result set.
    pub fn ensure_in_range(&self, count: u64) -> Result<(), InvalidPage> {
        let total = Self::total_pages(count, self.size);
        if self.number > total {
            return Err(InvalidPage(format!(
                "page {} is out of range (last page is {total})",
                self.number
            )));
        }
        Ok(())
    }
}

/// Pagination envelope returned by list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Page<T> {
    /// Total number of rows matching the query, before slicing.
    pub count: u64,
    /// Link to the next page, or null on the last page.
    pub next: Option<String>,
    /// Link to the previous page, or null on the first page.
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Assemble the envelope for one page slice, deriving next/previous
    /// links from the request URI.
    pub fn from_slice(count: u64, results: Vec<T>, req: &PageRequest, uri: &Uri) -> Self {
        let total = PageRequest::total_pages(count, req.size);
        let next = (req.number < total).then(|| page_link(uri, req.number + 1));
        let previous = (req.number > 1).then(|| page_link(uri, req.number - 1));
        Self {
            count,
            next,
            previous,
            results,
        }
    }

    /// Map items while preserving the envelope (domain → DTO convenience).
    pub fn map_items<U>(self, mut f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            count: self.count,
            next: self.next,
            previous: self.previous,
            results: self.results.into_iter().map(&mut f).collect(),
        }
    }
}

/// Rebuild the request URI pointing at `page`, keeping every other query
/// parameter intact. Page 1 drops the parameter entirely so the first-page
/// link is canonical.
pub fn page_link(uri: &Uri, page: u64) -> String {
    let mut pairs: Vec<(String, String)> = uri
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .filter(|(k, _)| k != "page")
                .collect()
        })
        .unwrap_or_default();
    if page > 1 {
        pairs.push(("page".to_string(), page.to_string()));
    }
    if pairs.is_empty() {
        uri.path().to_string()
    } else {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish();
        format!("{}?{query}", uri.path())
    }
}
