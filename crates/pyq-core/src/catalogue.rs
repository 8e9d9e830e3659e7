//! Validated chapter catalogue.
//!
//! A [`Catalogue`] is all-or-nothing: either every record passed
//! validation and ids are unique, or construction fails and the caller
//! keeps whatever it had before.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use pyq_model::{ChapterRecord, RawChapter, Subject, ValidationError};
use tracing::debug;

use crate::error::{CatalogueError, Result};

/// Chapter data bundled with the binary, used when no file is given.
const SAMPLE_CATALOGUE: &str = include_str!("../data/sample_catalogue.json");

/// Load-ordered, validated chapter records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    chapters: Vec<ChapterRecord>,
}

impl Catalogue {
    /// Validate raw records, preserving their order.
    pub fn from_raw(records: Vec<RawChapter>) -> std::result::Result<Self, ValidationError> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut chapters = Vec::with_capacity(records.len());
        for (index, raw) in records.into_iter().enumerate() {
            if raw.id.trim().is_empty() {
                return Err(ValidationError::EmptyId { index });
            }
            if !seen.insert(raw.id.clone()) {
                return Err(ValidationError::DuplicateId { id: raw.id });
            }
            chapters.push(ChapterRecord::try_from(raw)?);
        }
        Ok(Self { chapters })
    }

    /// Parse a JSON array of chapters and validate it.
    pub fn parse(json: &str) -> Result<Self> {
        let records: Vec<RawChapter> = serde_json::from_str(json)?;
        let catalogue = Self::from_raw(records)?;
        debug!(chapters = catalogue.len(), "parsed catalogue");
        Ok(catalogue)
    }

    /// Read and validate a catalogue file.
    pub fn read(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| CatalogueError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&json)
    }

    /// The catalogue bundled with the crate.
    pub fn sample() -> Result<Self> {
        Self::parse(SAMPLE_CATALOGUE)
    }

    pub fn chapters(&self) -> &[ChapterRecord] {
        &self.chapters
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Chapters of one subject, in load order.
    pub fn for_subject(&self, subject: Subject) -> impl Iterator<Item = &ChapterRecord> {
        self.chapters
            .iter()
            .filter(move |chapter| chapter.subject == subject)
    }
}
