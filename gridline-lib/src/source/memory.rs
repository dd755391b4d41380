//! In-memory page source

use async_trait::async_trait;

use super::fetch::PageMeta;
use super::fetch::PageQuery;
use super::fetch::PageSource;
use super::fetch::SourcePage;
use crate::error::SourceError;

/// A [`PageSource`] serving pages out of an in-memory collection.
///
/// Useful for tests, demos and offline fixtures; it reports the same
/// pagination metadata a paging backend would.
///
/// # Example
///
/// ```
/// use gridline_lib::source::MemorySource;
/// use gridline_lib::source::PageQuery;
/// use gridline_lib::source::PageSource;
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let source = MemorySource::new((1..=25).collect::<Vec<i32>>());
/// let page = source
///     .fetch_page(PageQuery { index: 2, size: 10 })
///     .await
///     .unwrap();
/// assert_eq!(page.len(), 5);
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct MemorySource<R> {
    rows: Vec<R>,
}

impl<R> MemorySource<R> {
    /// Creates a source over the given rows.
    pub fn new(rows: Vec<R>) -> Self {
        Self { rows }
    }

    /// Returns the total number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the source holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[async_trait]
impl<R: Clone + Send + Sync> PageSource<R> for MemorySource<R> {
    async fn fetch_page(&self, query: PageQuery) -> Result<SourcePage<R>, SourceError> {
        if query.size == 0 {
            return Err(SourceError::http(400, "page size must be positive"));
        }

        let total = self.rows.len();
        let pages = total.div_ceil(query.size).max(1);
        if query.index >= pages {
            return Err(SourceError::http(404, "page out of range"));
        }

        let start = query.index * query.size;
        let end = (start + query.size).min(total);
        let rows = self.rows[start..end].to_vec();

        Ok(SourcePage::new(rows).with_meta(PageMeta {
            current_page: query.index + 1,
            last_page: pages,
            per_page: query.size,
            total,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pages_reconstruct_collection() {
        let source = MemorySource::new((0..25).collect::<Vec<i32>>());
        let mut seen = Vec::new();
        for index in 0..3 {
            let page = source
                .fetch_page(PageQuery { index, size: 10 })
                .await
                .unwrap();
            seen.extend(page.rows);
        }
        assert_eq!(seen, (0..25).collect::<Vec<i32>>());
    }

    #[tokio::test]
    async fn test_out_of_range_page_is_an_error() {
        let source = MemorySource::new(vec![1, 2, 3]);
        let err = source
            .fetch_page(PageQuery { index: 5, size: 10 })
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), Some(404));
    }

    #[tokio::test]
    async fn test_empty_source_serves_one_empty_page() {
        let source = MemorySource::new(Vec::<i32>::new());
        let page = source
            .fetch_page(PageQuery { index: 0, size: 10 })
            .await
            .unwrap();
        assert!(page.is_empty());
        assert_eq!(page.meta.unwrap().last_page, 1);
    }
}
