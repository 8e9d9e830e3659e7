//! Tests for pyq-model types.

use proptest::prelude::*;
use pyq_model::{
    ChapterRecord, ChapterStatus, ModelError, RawChapter, Subject, ValidationError, YearCounts,
};

const GRAVITATION: &str = r#"{
    "_id": "phy-grav",
    "subject": "Physics",
    "chapter": "Gravitation",
    "class": "Class 11",
    "unit": "Mechanics 2",
    "status": "In Progress",
    "isWeakChapter": true,
    "yearWiseQuestionCount": {
        "2019": 2, "2020": 3, "2021": 4, "2022": 1, "2023": 0, "2024": 7, "2025": 10
    },
    "questionSolved": 9,
    "title": "ignored extra key"
}"#;

#[test]
fn parses_wire_shape() {
    let chapter = ChapterRecord::from_json(GRAVITATION).expect("valid chapter");
    assert_eq!(chapter.id, "phy-grav");
    assert_eq!(chapter.subject, Subject::Physics);
    assert_eq!(chapter.display_name, "Gravitation");
    assert_eq!(chapter.status, ChapterStatus::InProgress);
    assert!(chapter.is_weak);
    assert_eq!(chapter.solved_count, 9);
    assert_eq!(chapter.year_counts.latest(), 10);
    assert_eq!(chapter.year_counts.previous(), 7);
    assert_eq!(chapter.year_counts.total(), 27);
}

#[test]
fn missing_year_names_the_chapter() {
    let json = GRAVITATION.replace(r#""2021": 4, "#, "");
    let err = ChapterRecord::from_json(&json).unwrap_err();
    match err {
        ModelError::Validation(ValidationError::MissingYear { chapter, year }) => {
            assert_eq!(chapter, "phy-grav");
            assert_eq!(year, 2021);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_subject_is_a_json_error() {
    let json = GRAVITATION.replace("\"Physics\"", "\"Biology\"");
    assert!(matches!(
        ChapterRecord::from_json(&json),
        Err(ModelError::Json(_))
    ));
}

#[test]
fn weak_flag_and_solved_default_when_absent() {
    let mut value: serde_json::Value = serde_json::from_str(GRAVITATION).unwrap();
    let fields = value.as_object_mut().unwrap();
    fields.remove("isWeakChapter");
    fields.remove("questionSolved");
    let record = ChapterRecord::from_json(&value.to_string()).unwrap();
    assert!(!record.is_weak);
    assert_eq!(record.solved_count, 0);
}

#[test]
fn conflicting_year_keys_are_rejected() {
    let json = GRAVITATION.replace(r#""2025": "#, r#"" 2025": 99, "2025": "#);
    assert!(json.contains(r#"" 2025": 99"#));
    let err = ChapterRecord::from_json(&json).unwrap_err();
    assert!(matches!(
        err,
        ModelError::Validation(ValidationError::DuplicateYear { year: 2025, .. })
    ));
}

#[test]
fn validation_error_messages() {
    let err = ValidationError::MissingYear {
        chapter: "c1".to_string(),
        year: 2020,
    };
    assert_eq!(err.to_string(), "chapter 'c1' has no question count for 2020");
    let err = ValidationError::DuplicateId {
        id: "c1".to_string(),
    };
    assert_eq!(err.to_string(), "duplicate chapter id 'c1'");
}

proptest! {
    #[test]
    fn total_is_sum_of_every_year(counts in proptest::array::uniform7(0u32..10_000)) {
        let table = YearCounts::from_counts(counts);
        let expected: u64 = counts.iter().map(|c| u64::from(*c)).sum();
        prop_assert_eq!(table.total(), expected);
        prop_assert_eq!(table.latest(), counts[6]);
        prop_assert_eq!(table.previous(), counts[5]);
    }
}
