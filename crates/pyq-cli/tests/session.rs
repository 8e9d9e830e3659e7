use std::fs;
use std::path::{Path, PathBuf};

use pyq_cli::session::{Selection, load_catalogue, open_store, read_intents, replay};
use pyq_cli::settings::Settings;
use pyq_core::{Intent, SortKey, ViewSignal};
use pyq_model::{ChapterStatus, Subject};

/// Fresh directory per test under the system temp dir.
fn temp_dir(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pyq-cli-{}-{test}", std::process::id()));
    if dir.exists() {
        fs::remove_dir_all(&dir).expect("clear stale dir");
    }
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write temp file");
    path
}

fn titles(store: &pyq_core::ChapterStore) -> Vec<String> {
    store.rows().into_iter().map(|row| row.title).collect()
}

#[test]
fn selection_orders_subject_toggles_then_sorts() {
    let selection = Selection {
        subject: Some(Subject::Chemistry),
        class_toggles: vec!["Class 12".to_string()],
        unit_toggles: vec!["Organic Chemistry".to_string()],
        status_toggles: vec![ChapterStatus::InProgress],
        weak_only: true,
        sort_clicks: vec![SortKey::LatestYear, SortKey::LatestYear],
        clear_sort: false,
    };
    assert_eq!(
        selection.intents(),
        vec![
            Intent::SetSubject(Subject::Chemistry),
            Intent::ToggleClass("Class 12".to_string()),
            Intent::ToggleUnit("Organic Chemistry".to_string()),
            Intent::ToggleStatus(ChapterStatus::InProgress),
            Intent::ToggleWeakOnly,
            Intent::SetSort(SortKey::LatestYear),
            Intent::SetSort(SortKey::LatestYear),
        ]
    );
}

#[test]
fn empty_selection_dispatches_nothing() {
    assert!(Selection::default().intents().is_empty());
}

#[test]
fn default_session_lists_physics_by_title() {
    let store = open_store(&Settings::default(), load_catalogue(None).unwrap());
    assert_eq!(store.subject(), Subject::Physics);
    let titles = titles(&store);
    assert_eq!(titles.len(), 10);
    assert_eq!(
        titles.first().map(String::as_str),
        Some("Centre of Mass Equilibrium and Momentum")
    );
    assert_eq!(titles.last().map(String::as_str), Some("Units and Dimensions"));
}

#[test]
fn weak_chemistry_chapters() {
    let mut store = open_store(&Settings::default(), load_catalogue(None).unwrap());
    let selection = Selection {
        subject: Some(Subject::Chemistry),
        weak_only: true,
        ..Selection::default()
    };
    replay(&mut store, selection.intents());
    assert_eq!(titles(&store), ["Chemical Reactions", "General Organic Chemistry"]);
}

#[test]
fn settings_choose_subject_and_initial_order() {
    let mut settings = Settings::default();
    settings.general.default_subject = Subject::Mathematics;
    settings.display.default_sort = None;
    let store = open_store(&settings, load_catalogue(None).unwrap());
    assert_eq!(
        titles(&store),
        [
            "Sets and Relations",
            "Quadratic Equations",
            "Limits and Continuity",
            "Definite Integration",
            "Vector Algebra",
        ]
    );
}

#[test]
fn replayed_intents_report_signals() {
    let dir = temp_dir("replay");
    let path = write_file(
        &dir,
        "intents.json",
        r#"[
            {"type": "set-subject", "value": "Mathematics"},
            {"type": "toggle-class", "value": "Class 13"},
            {"type": "set-sort", "value": "questions"},
            {"type": "clear-all-filters"}
        ]"#,
    );
    let intents = read_intents(&path).unwrap();
    let mut store = open_store(&Settings::default(), load_catalogue(None).unwrap());
    let signals = replay(&mut store, intents);
    assert_eq!(
        signals,
        [
            ViewSignal::CloseFilterMenus,
            ViewSignal::Unchanged,
            ViewSignal::Changed,
            ViewSignal::Unchanged,
        ]
    );
    assert_eq!(store.sort_key(), Some(SortKey::QuestionsTotal));

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn malformed_intents_are_an_error() {
    let dir = temp_dir("bad-intents");
    let path = write_file(&dir, "intents.json", r#"[{"type": "launch-rocket"}]"#);
    let error = read_intents(&path).unwrap_err();
    assert!(format!("{error:#}").contains("parse intents"));

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn missing_catalogue_names_the_file() {
    let error = load_catalogue(Some(Path::new("/nonexistent/catalogue.json"))).unwrap_err();
    assert!(format!("{error:#}").contains("/nonexistent/catalogue.json"));
}

#[test]
fn catalogue_file_is_used_when_given() {
    let dir = temp_dir("catalogue");
    let path = write_file(
        &dir,
        "catalogue.json",
        r#"[{
            "_id": "only",
            "subject": "Physics",
            "chapter": "Only Chapter",
            "class": "Class 11",
            "unit": "Mechanics",
            "status": "Not Started",
            "yearWiseQuestionCount": {
                "2019": 1, "2020": 1, "2021": 1, "2022": 1,
                "2023": 1, "2024": 2, "2025": 3
            },
            "questionSolved": 4
        }]"#,
    );
    let store = open_store(&Settings::default(), load_catalogue(Some(path.as_path())).unwrap());
    let rows = store.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].total_label, "4/10 Qs");
    assert_eq!(rows[0].latest_year_label, "3Qs");

    fs::remove_dir_all(&dir).expect("cleanup");
    assert!(!dir.exists());
}
