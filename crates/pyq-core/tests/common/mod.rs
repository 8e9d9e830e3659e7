//! Shared fixtures for pyq-core integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;

use pyq_model::{ChapterStatus, RawChapter, Subject, YearCounts};

/// Raw chapter with 1 question in every year except the two latest.
#[allow(clippy::too_many_arguments)]
pub fn raw(
    id: &str,
    subject: Subject,
    class: &str,
    unit: &str,
    status: ChapterStatus,
    is_weak: bool,
    previous: u32,
    latest: u32,
    solved: u32,
) -> RawChapter {
    let year_counts: BTreeMap<String, u32> = YearCounts::years()
        .map(|year| {
            let count = match year {
                2024 => previous,
                2025 => latest,
                _ => 1,
            };
            (year.to_string(), count)
        })
        .collect();
    RawChapter {
        id: id.to_string(),
        subject,
        display_name: format!("Chapter {id}"),
        class: class.to_string(),
        unit: unit.to_string(),
        status,
        is_weak,
        year_counts,
        solved_count: solved,
    }
}

/// The two-chapter Physics catalogue plus one Chemistry chapter.
pub fn small_catalogue() -> Vec<RawChapter> {
    vec![
        raw(
            "mech",
            Subject::Physics,
            "11",
            "Mechanics",
            ChapterStatus::NotStarted,
            false,
            4,
            6,
            2,
        ),
        raw(
            "optics",
            Subject::Physics,
            "12",
            "Optics",
            ChapterStatus::Completed,
            true,
            5,
            5,
            5,
        ),
        raw(
            "mole",
            Subject::Chemistry,
            "11",
            "Physical",
            ChapterStatus::InProgress,
            true,
            3,
            9,
            1,
        ),
    ]
}
