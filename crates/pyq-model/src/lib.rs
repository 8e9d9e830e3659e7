//! Data model for the chapter-wise previous-year-questions catalogue.
//!
//! Records arrive in their wire shape ([`RawChapter`]) and are promoted to
//! [`ChapterRecord`] only after validation, so a record with an incomplete
//! year table never reaches the store.

pub mod chapter;
pub mod enums;
pub mod error;
pub mod years;

pub use chapter::{ChapterRecord, RawChapter};
pub use enums::{ChapterStatus, Subject};
pub use error::{ModelError, Result, ValidationError};
pub use years::{FIRST_YEAR, LAST_YEAR, LATEST_YEAR, PREVIOUS_YEAR, YEAR_SPAN, YearCounts};
