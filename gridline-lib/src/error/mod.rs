//! Error types

mod grid;
mod source;
mod validation;

pub use grid::GridError;
pub use source::SourceError;
pub use validation::ValidationError;
