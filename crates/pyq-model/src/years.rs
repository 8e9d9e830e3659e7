//! Per-year question counts over the fixed exam year range.

use serde::ser::{Serialize, Serializer};
use std::collections::BTreeMap;

use crate::error::ValidationError;

/// First year with recorded questions.
pub const FIRST_YEAR: u16 = 2019;
/// Last (most recent) year with recorded questions.
pub const LAST_YEAR: u16 = 2025;
/// Number of years in the range.
pub const YEAR_SPAN: usize = (LAST_YEAR - FIRST_YEAR + 1) as usize;
/// Most recent year, shown as its own column.
pub const LATEST_YEAR: u16 = LAST_YEAR;
/// Year before [`LATEST_YEAR`], used for trend comparison.
pub const PREVIOUS_YEAR: u16 = LAST_YEAR - 1;

/// Question counts with exactly one entry per year in
/// `FIRST_YEAR..=LAST_YEAR`.
///
/// Only constructible from a complete table, so lookups inside the range
/// never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct YearCounts {
    counts: [u32; YEAR_SPAN],
}

impl YearCounts {
    /// Build from counts ordered oldest year first.
    pub fn from_counts(counts: [u32; YEAR_SPAN]) -> Self {
        Self { counts }
    }

    /// Validate a wire-format year table (`"2019" -> 4`, ...).
    ///
    /// Keys outside the range and keys naming an already seen year are
    /// rejected before missing years are reported.
    pub fn from_map(chapter: &str, map: &BTreeMap<String, u32>) -> Result<Self, ValidationError> {
        let mut slots: [Option<u32>; YEAR_SPAN] = [None; YEAR_SPAN];
        for (key, count) in map {
            let (year, index) = key
                .trim()
                .parse::<u16>()
                .ok()
                .and_then(|year| Self::index_of(year).map(|index| (year, index)))
                .ok_or_else(|| ValidationError::UnknownYear {
                    chapter: chapter.to_string(),
                    key: key.clone(),
                })?;
            if slots[index].replace(*count).is_some() {
                return Err(ValidationError::DuplicateYear {
                    chapter: chapter.to_string(),
                    year,
                });
            }
        }

        let mut counts = [0u32; YEAR_SPAN];
        for (index, (slot, year)) in slots.iter().zip(Self::years()).enumerate() {
            counts[index] = slot.ok_or_else(|| ValidationError::MissingYear {
                chapter: chapter.to_string(),
                year,
            })?;
        }
        Ok(Self { counts })
    }

    /// Years covered by every table, oldest first.
    pub fn years() -> impl Iterator<Item = u16> {
        FIRST_YEAR..=LAST_YEAR
    }

    fn index_of(year: u16) -> Option<usize> {
        (FIRST_YEAR..=LAST_YEAR)
            .contains(&year)
            .then(|| usize::from(year - FIRST_YEAR))
    }

    /// Count for `year`, or `None` outside the range.
    pub fn get(&self, year: u16) -> Option<u32> {
        Self::index_of(year).map(|index| self.counts[index])
    }

    pub fn latest(&self) -> u32 {
        self.counts[YEAR_SPAN - 1]
    }

    pub fn previous(&self) -> u32 {
        self.counts[YEAR_SPAN - 2]
    }

    /// Sum over every year in the range.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|count| u64::from(*count)).sum()
    }

    /// `(year, count)` pairs, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u32)> + '_ {
        Self::years().zip(self.counts.iter().copied())
    }
}

impl Serialize for YearCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(year, count)| (year.to_string(), count)))
    }
}
