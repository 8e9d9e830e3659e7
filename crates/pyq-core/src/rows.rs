//! Presentation transform: filtered chapters to ordered display rows.
//!
//! [`derive_rows`] is pure. Rows are built in input order, then stably
//! sorted when a [`SortKey`] is given; equal rows keep their input order
//! in both directions.

use std::cmp::Ordering;
use std::fmt;

use pyq_model::{ChapterRecord, LATEST_YEAR, PREVIOUS_YEAR};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

// ============================================================================
// Icons
// ============================================================================

/// Icon shown next to a chapter row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChapterIcon {
    Zap,
    TrendingUp,
    Circle,
    ArrowLeft,
    ArrowRight,
}

impl ChapterIcon {
    /// Fixed palette rows draw from.
    pub const PALETTE: [ChapterIcon; 5] = [
        ChapterIcon::Zap,
        ChapterIcon::TrendingUp,
        ChapterIcon::Circle,
        ChapterIcon::ArrowLeft,
        ChapterIcon::ArrowRight,
    ];

    /// Lucide icon name, for icon-font renderers.
    pub fn lucide_name(&self) -> &'static str {
        match self {
            ChapterIcon::Zap => "zap",
            ChapterIcon::TrendingUp => "trending-up",
            ChapterIcon::Circle => "circle",
            ChapterIcon::ArrowLeft => "arrow-left",
            ChapterIcon::ArrowRight => "arrow-right",
        }
    }

    /// Plain-text stand-in for terminals.
    pub fn glyph(&self) -> &'static str {
        match self {
            ChapterIcon::Zap => "⚡",
            ChapterIcon::TrendingUp => "↗",
            ChapterIcon::Circle => "○",
            ChapterIcon::ArrowLeft => "←",
            ChapterIcon::ArrowRight => "→",
        }
    }
}

/// How a row's icon is chosen from [`ChapterIcon::PALETTE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconAssignment {
    /// Hash of the chapter id; an icon follows its chapter through
    /// re-filtering and re-sorting.
    #[default]
    StableById,
    /// Position in the unsorted input (`index mod 5`). Icons shift when the
    /// list changes.
    Positional,
}

impl IconAssignment {
    pub fn icon_for(self, position: usize, chapter: &ChapterRecord) -> ChapterIcon {
        let slot = match self {
            IconAssignment::Positional => position,
            IconAssignment::StableById => {
                usize::from(Sha256::digest(chapter.id.as_bytes())[0])
            }
        };
        ChapterIcon::PALETTE[slot % ChapterIcon::PALETTE.len()]
    }
}

// ============================================================================
// Trend
// ============================================================================

/// Direction of the question count from the previous year to the latest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    pub fn from_counts(latest: u32, previous: u32) -> Self {
        match latest.cmp(&previous) {
            Ordering::Greater => Trend::Up,
            Ordering::Less => Trend::Down,
            Ordering::Equal => Trend::Neutral,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Neutral => "–",
        }
    }
}

// ============================================================================
// Sorting
// ============================================================================

/// Column the row list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Chapter title.
    #[serde(rename = "title")]
    Title,
    /// Questions across every year (not solved questions).
    #[serde(rename = "questions")]
    QuestionsTotal,
    /// Questions in [`LATEST_YEAR`].
    #[serde(rename = "latest-year")]
    LatestYear,
    /// Questions in [`PREVIOUS_YEAR`].
    #[serde(rename = "previous-year")]
    PreviousYear,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Title,
        SortKey::QuestionsTotal,
        SortKey::LatestYear,
        SortKey::PreviousYear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::QuestionsTotal => "questions",
            SortKey::LatestYear => "latest-year",
            SortKey::PreviousYear => "previous-year",
        }
    }

    /// Resolve a sort key by name.
    ///
    /// Accepts the canonical names plus `year<YYYY>` for the two most
    /// recent years. Unknown names give `None`, which leaves rows in input
    /// order.
    pub fn from_name(name: &str) -> Option<SortKey> {
        let name = name.trim();
        if let Some(key) = SortKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(name))
        {
            return Some(key);
        }
        let year = name
            .strip_prefix("year")
            .and_then(|year| year.parse::<u16>().ok())?;
        match year {
            LATEST_YEAR => Some(SortKey::LatestYear),
            PREVIOUS_YEAR => Some(SortKey::PreviousYear),
            _ => None,
        }
    }

    /// Menu label.
    pub fn label(&self) -> String {
        match self {
            SortKey::Title => "Chapter Name".to_string(),
            SortKey::QuestionsTotal => "Total Questions".to_string(),
            SortKey::LatestYear => format!("{LATEST_YEAR} Questions"),
            SortKey::PreviousYear => format!("{PREVIOUS_YEAR} Questions"),
        }
    }

    fn compare(self, a: &DisplayRow, b: &DisplayRow) -> Ordering {
        match self {
            SortKey::Title => collate(&a.title, &b.title),
            SortKey::QuestionsTotal => a.total_questions.cmp(&b.total_questions),
            SortKey::LatestYear => a.latest_count.cmp(&b.latest_count),
            SortKey::PreviousYear => a.previous_count.cmp(&b.previous_count),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc", alias = "ascending")]
    Ascending,
    #[serde(rename = "desc", alias = "descending")]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Locale-style title order: base letters first, ignoring accents and
/// case, then unaccented before accented, then lowercase before uppercase.
fn collate(a: &str, b: &str) -> Ordering {
    fold(a)
        .cmp(&fold(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Lowercase with combining marks stripped after NFD decomposition.
fn fold(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

// ============================================================================
// Rows
// ============================================================================

/// One rendered line of the chapter list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub id: String,
    pub icon: ChapterIcon,
    pub title: String,
    /// `"<n>Qs"` for [`LATEST_YEAR`].
    pub latest_year_label: String,
    /// `"<n>Qs"` for [`PREVIOUS_YEAR`].
    pub previous_year_label: String,
    /// `"<solved>/<total> Qs"`.
    pub total_label: String,
    pub trend: Trend,
    pub latest_count: u32,
    pub previous_count: u32,
    pub total_questions: u64,
    pub solved: u32,
}

impl DisplayRow {
    fn from_chapter(position: usize, chapter: &ChapterRecord, icons: IconAssignment) -> Self {
        let counts = &chapter.year_counts;
        let latest = counts.latest();
        let previous = counts.previous();
        let total = counts.total();
        Self {
            id: chapter.id.clone(),
            icon: icons.icon_for(position, chapter),
            title: chapter.display_name.clone(),
            latest_year_label: format!("{latest}Qs"),
            previous_year_label: format!("{previous}Qs"),
            total_label: format!("{}/{total} Qs", chapter.solved_count),
            trend: Trend::from_counts(latest, previous),
            latest_count: latest,
            previous_count: previous,
            total_questions: total,
            solved: chapter.solved_count,
        }
    }
}

/// Map chapters to display rows and order them.
///
/// Icons are assigned before sorting, from the input position when
/// `icons` is [`IconAssignment::Positional`]. With no `sort_key` the
/// input order is kept.
pub fn derive_rows<'a, I>(
    chapters: I,
    sort_key: Option<SortKey>,
    direction: SortDirection,
    icons: IconAssignment,
) -> Vec<DisplayRow>
where
    I: IntoIterator<Item = &'a ChapterRecord>,
{
    let mut rows: Vec<DisplayRow> = chapters
        .into_iter()
        .enumerate()
        .map(|(position, chapter)| DisplayRow::from_chapter(position, chapter, icons))
        .collect();

    if let Some(key) = sort_key {
        rows.sort_by(|a, b| direction.apply(key.compare(a, b)));
    }
    rows
}
