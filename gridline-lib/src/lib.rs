//! Tabular data-grid view model for admin dashboards
//!
//! A synchronous, render-agnostic grid controller composing a declarative
//! column model, case-insensitive substring filtering, stable single-column
//! sorting, row selection and client- or server-mode pagination, plus the
//! boundary contracts its owner wires to a REST backend (page source trait,
//! injected connection config, retry policy).

pub mod error;
pub mod forms;
pub mod grid;
pub mod model;
pub mod source;

pub use grid::Grid;
pub use grid::GridBuilder;
pub use model::RowKey;
pub use model::TableRow;
