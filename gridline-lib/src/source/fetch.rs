//! Page fetch contract

use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

use crate::error::SourceError;

/// A navigation intent the data-fetch collaborator must honor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    /// Zero-based page to fetch.
    pub index: usize,
    /// Rows per page.
    pub size: usize,
}

/// Pagination metadata as reported by the backend.
///
/// Backends report pages one-based (`currentPage`, `lastPage`); the grid
/// works zero-based via [`page_index`](PageMeta::page_index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// One-based current page.
    pub current_page: usize,
    /// One-based last page.
    pub last_page: usize,
    /// Rows per page.
    pub per_page: usize,
    /// Total rows across all pages.
    pub total: usize,
}

impl PageMeta {
    /// Returns the zero-based index of the reported page.
    pub fn page_index(&self) -> usize {
        self.current_page.saturating_sub(1)
    }
}

/// What one load supplies: rows, plus pagination metadata in server mode.
#[derive(Debug, Clone, PartialEq)]
pub struct SourcePage<R> {
    /// The fetched rows.
    pub rows: Vec<R>,
    /// Pagination metadata, when the backend pages.
    pub meta: Option<PageMeta>,
}

impl<R> SourcePage<R> {
    /// Creates a page without pagination metadata.
    pub fn new(rows: Vec<R>) -> Self {
        Self { rows, meta: None }
    }

    /// Attaches pagination metadata.
    pub fn with_meta(mut self, meta: PageMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Returns the number of rows in this page.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if this page has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The data-fetch collaborator contract.
///
/// Implementations own all transport concerns: HTTP wiring, the bearer
/// credential from [`SourceConfig`](super::SourceConfig), decoding. The grid
/// only ever sees resolved [`SourcePage`]s or an opaque [`SourceError`].
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use gridline_lib::error::SourceError;
/// use gridline_lib::source::{PageQuery, PageSource, SourcePage};
///
/// struct RestSource {
///     // http client, SourceConfig, endpoint path ...
/// }
///
/// #[async_trait]
/// impl PageSource<Course> for RestSource {
///     async fn fetch_page(&self, query: PageQuery) -> Result<SourcePage<Course>, SourceError> {
///         // GET {base_url}/courses?page={query.index + 1}&perPage={query.size}
///         todo!()
///     }
/// }
/// ```
#[async_trait]
pub trait PageSource<R>: Send + Sync {
    /// Fetches one page of rows.
    async fn fetch_page(&self, query: PageQuery) -> Result<SourcePage<R>, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_wire_form() {
        let json = r#"{"currentPage":2,"lastPage":5,"perPage":10,"total":47}"#;
        let meta: PageMeta = serde_json::from_str(json).unwrap();
        assert_eq!(meta.current_page, 2);
        assert_eq!(meta.page_index(), 1);
        assert_eq!(meta.total, 47);
    }

    #[test]
    fn test_meta_page_index_saturates() {
        let meta = PageMeta {
            current_page: 0,
            last_page: 1,
            per_page: 10,
            total: 0,
        };
        assert_eq!(meta.page_index(), 0);
    }
}
