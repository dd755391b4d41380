use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering;
use std::time::Duration;

use gridline_lib::error::SourceError;
use gridline_lib::grid::Column;
use gridline_lib::grid::Grid;
use gridline_lib::grid::LoadOutcome;
use gridline_lib::grid::LoadState;
use gridline_lib::grid::Navigation;
use gridline_lib::grid::PageMode;
use gridline_lib::model::CellValue;
use gridline_lib::model::RowKey;
use gridline_lib::model::TableRow;
use gridline_lib::source::MemorySource;
use gridline_lib::source::PageSource;
use gridline_lib::source::RetryPolicy;
use gridline_lib::source::with_retry;

#[derive(Debug, Clone, PartialEq)]
struct Course {
    id: i64,
    title: String,
}

impl TableRow for Course {
    fn key(&self) -> RowKey {
        self.id.into()
    }
}

fn catalog(count: i64) -> Vec<Course> {
    (1..=count)
        .map(|n| Course {
            id: n,
            title: format!("course-{:02}", n),
        })
        .collect()
}

fn server_grid(page_size: usize) -> Grid<Course> {
    Grid::builder()
        .column(
            Column::new("title", "Title", |c: &Course| {
                CellValue::from(c.title.as_str())
            })
            .sortable()
            .filterable(),
        )
        .page_mode(PageMode::Server)
        .page_size(page_size)
        .build()
        .unwrap()
}

fn first_id(grid: &Grid<Course>) -> i64 {
    match &grid.visible_rows()[0].key {
        RowKey::Int(n) => *n,
        other => panic!("unexpected key {:?}", other),
    }
}

#[tokio::test]
async fn test_server_fetch_round_trip() {
    let source = MemorySource::new(catalog(25));
    let mut grid = server_grid(10);

    let Navigation::Fetch(query) = grid.go_to_page(0) else {
        panic!("expected fetch intent");
    };
    assert_eq!(grid.load_state(), LoadState::Loading { page: 0 });

    let page = source.fetch_page(query).await.unwrap();
    assert_eq!(grid.complete_load(query.index, page), LoadOutcome::Applied);
    assert_eq!(grid.load_state(), LoadState::Idle);
    assert_eq!(grid.visible_rows().len(), 10);
    assert_eq!(grid.page_count(), 3);
    assert_eq!(grid.page_state().total, Some(25));
}

#[tokio::test]
async fn test_stale_response_does_not_overwrite_newer_page() {
    let source = MemorySource::new(catalog(30));
    let mut grid = server_grid(10);

    // Load page 0 to learn the page bounds.
    let Navigation::Fetch(query) = grid.go_to_page(0) else {
        panic!("expected fetch intent");
    };
    let page = source.fetch_page(query).await.unwrap();
    grid.complete_load(query.index, page);

    // Navigate to page 1; before it resolves, navigate on to page 2.
    let Navigation::Fetch(query_one) = grid.go_to_page(1) else {
        panic!("expected fetch intent");
    };
    let Navigation::Fetch(query_two) = grid.go_to_page(2) else {
        panic!("expected fetch intent");
    };

    // Page 2 resolves first and is applied.
    let page_two = source.fetch_page(query_two).await.unwrap();
    assert_eq!(grid.complete_load(2, page_two), LoadOutcome::Applied);
    assert_eq!(first_id(&grid), 21);

    // The late page-1 response is stale and must not overwrite the view.
    let page_one = source.fetch_page(query_one).await.unwrap();
    assert_eq!(grid.complete_load(1, page_one), LoadOutcome::Stale);
    assert_eq!(first_id(&grid), 21);
    assert_eq!(grid.page_state().index, 2);
}

#[tokio::test]
async fn test_failed_fetch_then_renavigation_retries() {
    let source = MemorySource::new(catalog(25));
    let mut grid = server_grid(10);

    let Navigation::Fetch(query) = grid.go_to_page(0) else {
        panic!("expected fetch intent");
    };
    assert_eq!(grid.fail_load(query.index), LoadOutcome::Applied);
    assert_eq!(grid.load_state(), LoadState::Failed { page: 0 });

    // Re-navigation is the retry.
    let Navigation::Fetch(query) = grid.go_to_page(0) else {
        panic!("expected fetch intent");
    };
    let page = source.fetch_page(query).await.unwrap();
    assert_eq!(grid.complete_load(query.index, page), LoadOutcome::Applied);
    assert_eq!(grid.load_state(), LoadState::Idle);
}

#[tokio::test]
async fn test_stale_failure_is_dropped() {
    let source = MemorySource::new(catalog(25));
    let mut grid = server_grid(10);

    let Navigation::Fetch(_) = grid.go_to_page(0) else {
        panic!("expected fetch intent");
    };
    let Navigation::Fetch(query) = grid.go_to_page(1) else {
        panic!("expected fetch intent");
    };

    // The abandoned page-0 fetch fails; the grid stays loading page 1.
    assert_eq!(grid.fail_load(0), LoadOutcome::Stale);
    assert_eq!(grid.load_state(), LoadState::Loading { page: 1 });

    let page = source.fetch_page(query).await.unwrap();
    assert_eq!(grid.complete_load(1, page), LoadOutcome::Applied);
}

#[tokio::test]
async fn test_server_grid_filters_loaded_page_locally() {
    let source = MemorySource::new(catalog(25));
    let mut grid = server_grid(10);

    let Navigation::Fetch(query) = grid.go_to_page(0) else {
        panic!("expected fetch intent");
    };
    let page = source.fetch_page(query).await.unwrap();
    grid.complete_load(query.index, page);

    grid.set_filter_value("title", "course-0").unwrap();
    assert_eq!(grid.visible_rows().len(), 9);
}

#[tokio::test]
async fn test_with_retry_recovers_from_transient_errors() {
    let policy = RetryPolicy::default()
        .max_retries(3)
        .initial_delay(Duration::from_millis(1));
    let attempts = AtomicU32::new(0);

    let result = with_retry(&policy, || {
        let n = attempts.fetch_add(1, Ordering::SeqCst);
        async move {
            if n < 2 {
                Err(SourceError::http(503, "unavailable"))
            } else {
                Ok("loaded")
            }
        }
    })
    .await;

    assert_eq!(result.unwrap(), "loaded");
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_with_retry_gives_up_on_client_errors() {
    let policy = RetryPolicy::default().initial_delay(Duration::from_millis(1));
    let attempts = AtomicU32::new(0);

    let result: Result<(), SourceError> = with_retry(&policy, || {
        attempts.fetch_add(1, Ordering::SeqCst);
        async { Err(SourceError::http(404, "not found")) }
    })
    .await;

    assert_eq!(result.unwrap_err().status_code(), Some(404));
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_with_retry_exhausts_attempts() {
    let policy = RetryPolicy::default()
        .max_retries(2)
        .initial_delay(Duration::from_millis(1));
    let attempts = AtomicU32::new(0);

    let result: Result<(), SourceError> = with_retry(&policy, || {
        attempts.fetch_add(1, Ordering::SeqCst);
        async { Err(SourceError::network("connection reset")) }
    })
    .await;

    assert!(result.is_err());
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}
