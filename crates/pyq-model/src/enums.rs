//! Closed vocabularies used by catalogue records.
//!
//! The wire format spells these the way the dashboard displays them
//! (`"Not Started"`, `"Physics"`); parsing is lenient about case and
//! separators so CLI input like `in-progress` works too.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Exam subject a chapter belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum Subject {
    #[default]
    Physics,
    Chemistry,
    Mathematics,
}

impl Subject {
    /// All subjects in sidebar order.
    pub const ALL: [Subject; 3] = [Subject::Physics, Subject::Chemistry, Subject::Mathematics];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Mathematics => "Mathematics",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Subject {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PHYSICS" => Ok(Subject::Physics),
            "CHEMISTRY" => Ok(Subject::Chemistry),
            "MATHEMATICS" | "MATHS" | "MATH" => Ok(Subject::Mathematics),
            _ => Err(format!("Unknown subject: {s}")),
        }
    }
}

/// Study progress of a chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChapterStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl ChapterStatus {
    pub const ALL: [ChapterStatus; 3] = [
        ChapterStatus::NotStarted,
        ChapterStatus::InProgress,
        ChapterStatus::Completed,
    ];

    /// Returns the label used by the dashboard and the wire format.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChapterStatus::NotStarted => "Not Started",
            ChapterStatus::InProgress => "In Progress",
            ChapterStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for ChapterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChapterStatus {
    type Err = String;

    /// Accepts the display label as well as kebab/snake spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_uppercase();

        match normalized.as_str() {
            "NOTSTARTED" => Ok(ChapterStatus::NotStarted),
            "INPROGRESS" => Ok(ChapterStatus::InProgress),
            "COMPLETED" | "DONE" => Ok(ChapterStatus::Completed),
            _ => Err(format!("Unknown chapter status: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_parses_case_insensitively() {
        assert_eq!("physics".parse::<Subject>(), Ok(Subject::Physics));
        assert_eq!(" Maths ".parse::<Subject>(), Ok(Subject::Mathematics));
        assert!("Biology".parse::<Subject>().is_err());
    }

    #[test]
    fn status_accepts_separators() {
        assert_eq!("Not Started".parse::<ChapterStatus>(), Ok(ChapterStatus::NotStarted));
        assert_eq!("in-progress".parse::<ChapterStatus>(), Ok(ChapterStatus::InProgress));
        assert_eq!("in_progress".parse::<ChapterStatus>(), Ok(ChapterStatus::InProgress));
        assert_eq!("COMPLETED".parse::<ChapterStatus>(), Ok(ChapterStatus::Completed));
    }

    #[test]
    fn status_serializes_with_display_label() {
        let json = serde_json::to_string(&ChapterStatus::NotStarted).unwrap();
        assert_eq!(json, "\"Not Started\"");
        let back: ChapterStatus = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(back, ChapterStatus::InProgress);
    }
}
