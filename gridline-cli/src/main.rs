//! Demo: a server-paged course roster driven through the grid.

use std::time::Duration;

use gridline_lib::error::SourceError;
use gridline_lib::grid::Column;
use gridline_lib::grid::Direction;
use gridline_lib::grid::Grid;
use gridline_lib::grid::Navigation;
use gridline_lib::grid::PageMode;
use gridline_lib::grid::SelectionMode;
use gridline_lib::model::BadgeTone;
use gridline_lib::model::CellDisplay;
use gridline_lib::model::CellValue;
use gridline_lib::model::RowKey;
use gridline_lib::model::TableRow;
use gridline_lib::source::MemorySource;
use gridline_lib::source::PageSource;
use gridline_lib::source::RetryPolicy;
use gridline_lib::source::SourceConfig;
use gridline_lib::source::with_retry;
use simplelog::ColorChoice;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::TermLogger;
use simplelog::TerminalMode;
use url::Url;

#[derive(Debug, Clone)]
struct Enrollment {
    id: i64,
    student: String,
    course: String,
    score: i64,
    active: bool,
}

impl TableRow for Enrollment {
    fn key(&self) -> RowKey {
        self.id.into()
    }
}

fn seed() -> Vec<Enrollment> {
    let students = [
        "Ali", "Alina", "Bob", "Carol", "Dina", "Elias", "Farah", "George", "Hana", "Idris",
        "Jana", "Karim", "Lena", "Marwan", "Nora", "Omar", "Petra", "Qusai", "Rania", "Sami",
        "Tala", "Usman", "Vera", "Walid", "Yara",
    ];
    let courses = ["Algebra", "Biology", "Chemistry", "Drawing", "English"];

    students
        .iter()
        .enumerate()
        .map(|(i, student)| Enrollment {
            id: (i + 1) as i64,
            student: student.to_string(),
            course: courses[i % courses.len()].to_string(),
            score: ((i as i64 * 13) % 51) + 50,
            active: i % 4 != 0,
        })
        .collect()
}

fn build_grid() -> Grid<Enrollment> {
    Grid::builder()
        .column(
            Column::new("student", "Student", |e: &Enrollment| {
                CellValue::from(e.student.as_str())
            })
            .sortable()
            .filterable(),
        )
        .column(
            Column::new("course", "Course", |e: &Enrollment| {
                CellValue::from(e.course.as_str())
            })
            .sortable()
            .filterable(),
        )
        .column(Column::new("score", "Score", |e: &Enrollment| e.score.into()).sortable())
        .column(
            Column::new("active", "Status", |e: &Enrollment| e.active.into()).render(
                |value, _| match value {
                    CellValue::Bool(true) => CellDisplay::badge("active", BadgeTone::Success),
                    _ => CellDisplay::badge("inactive", BadgeTone::Danger),
                },
            ),
        )
        .action("edit", "Edit")
        .action("delete", "Delete")
        .selection_mode(SelectionMode::Global)
        .page_mode(PageMode::Server)
        .page_size(10)
        .build()
        .expect("grid configuration is static")
}

fn print_grid(grid: &Grid<Enrollment>) {
    let headers = grid.header_groups().remove(0).headers;
    let rows = grid.visible_rows();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.title.len()).collect();
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            row.cells
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    let text = cell.content.plain_text();
                    widths[i] = widths[i].max(text.len());
                    text
                })
                .collect()
        })
        .collect();

    let titles: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let marker = match h.sort {
                Some(Direction::Asc) => " ^",
                Some(Direction::Desc) => " v",
                None => "",
            };
            format!("{:<width$}", format!("{}{}", h.title, marker), width = widths[i] + 2)
        })
        .collect();
    println!("   {}", titles.join(" "));

    for (row, line) in rows.iter().zip(&cells) {
        let mark = if row.selected { "[x]" } else { "[ ]" };
        let body: Vec<String> = line
            .iter()
            .enumerate()
            .map(|(i, text)| format!("{:<width$}", text, width = widths[i] + 2))
            .collect();
        println!("{} {}", mark, body.join(" "));
    }

    let page = grid.page_state();
    println!(
        "   page {}/{} ({} total)\n",
        page.index + 1,
        grid.page_count(),
        page.total.map(|t| t.to_string()).unwrap_or_else(|| "?".to_string()),
    );
}

async fn navigate(
    grid: &mut Grid<Enrollment>,
    source: &MemorySource<Enrollment>,
    policy: &RetryPolicy,
    page: usize,
) -> Result<(), SourceError> {
    let Navigation::Fetch(query) = grid.go_to_page(page) else {
        log::warn!("page {} is out of range", page + 1);
        return Ok(());
    };

    match with_retry(policy, || source.fetch_page(query)).await {
        Ok(data) => {
            grid.complete_load(query.index, data);
            Ok(())
        }
        Err(error) => {
            grid.fail_load(query.index);
            Err(error)
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), SourceError> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .expect("Failed to initialize logger");

    // Connection settings are injected here, at the composition root; the
    // real deployment would read them from the environment.
    let config = SourceConfig::builder()
        .base_url(Url::parse("https://api.example.edu").expect("static url"))
        .credential("demo-token")
        .timeout(Duration::from_secs(30))
        .build();
    log::info!("backend: {}", config.base_url());

    let source = MemorySource::new(seed());
    let policy = RetryPolicy::default().initial_delay(Duration::from_millis(200));
    let mut grid = build_grid();

    println!("== first page ==");
    navigate(&mut grid, &source, &policy, 0).await?;
    print_grid(&grid);

    println!("== sorted by score, descending ==");
    grid.set_sort("score", Direction::Desc).expect("score is sortable");
    print_grid(&grid);

    println!("== filtered to students containing \"al\" ==");
    grid.set_filter_value("student", "al").expect("student is filterable");
    print_grid(&grid);

    println!("== select all visible, then dispatch a bulk action ==");
    grid.set_filter_value("student", "").expect("student is filterable");
    grid.toggle_all_visible();
    print_grid(&grid);
    let selected = grid.take_bulk_selection();
    log::info!("bulk delete would target {} rows", selected.len());

    println!("== next page ==");
    navigate(&mut grid, &source, &policy, 1).await?;
    print_grid(&grid);

    Ok(())
}
