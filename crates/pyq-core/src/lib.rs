//! Filtering, sorting and row derivation for the chapter dashboard.
//!
//! The architecture separates concerns into:
//!
//! - **Catalogue**: validated, load-ordered chapter records
//! - **ChapterStore**: selection state (subject, filters, sort) and the
//!   filtered-chapters query
//! - **Rows**: the pure transform from filtered chapters to display rows
//! - **Intent**: discrete user actions a view dispatches into the store
//!
//! Views own a [`ChapterStore`], dispatch [`Intent`]s into it and render
//! [`ChapterStore::rows`]. Nothing here performs I/O except
//! [`Catalogue::read`].

pub mod catalogue;
pub mod error;
pub mod filters;
pub mod intent;
pub mod rows;
pub mod store;
pub mod summary;

pub use catalogue::Catalogue;
pub use error::{CatalogueError, Result};
pub use filters::{StatusFilter, ToggleOutcome, ValueFilter};
pub use intent::Intent;
pub use rows::{
    ChapterIcon, DisplayRow, IconAssignment, SortDirection, SortKey, Trend, derive_rows,
};
pub use store::{ChapterStore, StoreSettings, ViewSignal};
pub use summary::FilterSummary;
