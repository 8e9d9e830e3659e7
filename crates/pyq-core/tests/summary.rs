//! Filter bar labels.

mod common;

use pyq_core::ChapterStore;
use pyq_model::ChapterStatus;

#[test]
fn labels_for_unfiltered_store() {
    let mut store = ChapterStore::new();
    store.load_catalogue(common::small_catalogue()).unwrap();
    let summary = store.summary();
    assert!(!summary.is_filtered());
    insta::assert_snapshot!(summary.class_label(), @"All Classes");
    insta::assert_snapshot!(summary.unit_label(), @"All Units");
    insta::assert_snapshot!(summary.showing_label(), @"Showing all chapters (2)");
}

#[test]
fn labels_after_narrowing() {
    let mut store = ChapterStore::new();
    store.load_catalogue(common::small_catalogue()).unwrap();
    store.toggle_class_filter("12");
    store.toggle_status_filter(ChapterStatus::NotStarted);
    let summary = store.summary();
    assert!(summary.is_filtered());
    insta::assert_snapshot!(summary.class_label(), @"1 Classes");
    insta::assert_snapshot!(summary.unit_label(), @"All Units");
    insta::assert_snapshot!(summary.showing_label(), @"Showing all chapters (1)");
}

#[test]
fn summary_serializes() {
    let mut store = ChapterStore::new();
    store.load_catalogue(common::small_catalogue()).unwrap();
    store.toggle_weak_only();
    insta::assert_json_snapshot!(store.summary(), @r#"
    {
      "subject": "Physics",
      "selected_classes": 2,
      "available_classes": 2,
      "selected_units": 2,
      "available_units": 2,
      "statuses": 0,
      "weak_only": true,
      "shown": 1
    }
    "#);
}
