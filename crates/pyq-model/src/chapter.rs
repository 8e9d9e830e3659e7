//! Chapter records: the wire shape and the validated catalogue entry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::enums::{ChapterStatus, Subject};
use crate::error::{Result, ValidationError};
use crate::years::YearCounts;

/// A chapter as it appears in catalogue JSON.
///
/// Field names follow the dashboard's data files (`chapter`,
/// `isWeakChapter`, `yearWiseQuestionCount`, ...). Unknown keys are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawChapter {
    #[serde(alias = "_id")]
    pub id: String,
    pub subject: Subject,
    /// Human-readable chapter title.
    #[serde(rename = "chapter")]
    pub display_name: String,
    pub class: String,
    pub unit: String,
    pub status: ChapterStatus,
    #[serde(rename = "isWeakChapter", default)]
    pub is_weak: bool,
    #[serde(rename = "yearWiseQuestionCount")]
    pub year_counts: BTreeMap<String, u32>,
    #[serde(rename = "questionSolved", default)]
    pub solved_count: u32,
}

/// Immutable catalogue entry with a complete year table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterRecord {
    pub id: String,
    pub subject: Subject,
    pub class: String,
    pub unit: String,
    pub status: ChapterStatus,
    pub is_weak: bool,
    pub year_counts: YearCounts,
    pub solved_count: u32,
    pub display_name: String,
}

impl ChapterRecord {
    /// Parse and validate a single chapter from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawChapter = serde_json::from_str(json)?;
        Ok(Self::try_from(raw)?)
    }
}

impl TryFrom<RawChapter> for ChapterRecord {
    type Error = ValidationError;

    fn try_from(raw: RawChapter) -> std::result::Result<Self, Self::Error> {
        let year_counts = YearCounts::from_map(&raw.id, &raw.year_counts)?;
        Ok(Self {
            id: raw.id,
            subject: raw.subject,
            class: raw.class,
            unit: raw.unit,
            status: raw.status,
            is_weak: raw.is_weak,
            year_counts,
            solved_count: raw.solved_count,
            display_name: raw.display_name,
        })
    }
}
