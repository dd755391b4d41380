//! Boundary contracts for the data-fetch collaborator.
//!
//! The grid never performs I/O. This module defines what it expects from the
//! collaborator that does: a [`PageSource`] serving [`SourcePage`]s for
//! [`PageQuery`] navigation intents, constructed from an injected
//! [`SourceConfig`] and wrapped in a [`RetryPolicy`] for transient failures.

mod config;
mod fetch;
mod memory;
mod retry;

pub use config::Missing;
pub use config::Set;
pub use config::SourceConfig;
pub use config::SourceConfigBuilder;
pub use fetch::PageMeta;
pub use fetch::PageQuery;
pub use fetch::PageSource;
pub use fetch::SourcePage;
pub use memory::MemorySource;
pub use retry::RetryPolicy;
pub use retry::with_retry;
