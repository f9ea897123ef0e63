//! Domain types shared by the portfolio widgets and their hosts.

pub mod catalog;
pub mod domain;
pub mod error;
pub mod query;

pub use catalog::Catalog;
pub use domain::{ProjectRecord, Tag};
pub use query::{QueryState, SortOrder, TagFilter, ViewMode};
