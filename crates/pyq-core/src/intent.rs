//! User intents a view dispatches into the store.

use pyq_model::{ChapterStatus, Subject};
use serde::{Deserialize, Serialize};

use crate::rows::SortKey;

/// One discrete user action.
///
/// Serialized adjacently tagged, e.g. `{"type": "toggle-class", "value": "Class 11"}`
/// or `{"type": "toggle-weak-only"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum Intent {
    SetSubject(Subject),
    ToggleClass(String),
    ToggleUnit(String),
    ToggleStatus(ChapterStatus),
    ToggleWeakOnly,
    /// Sort-header click: same key flips direction, new key sorts ascending.
    SetSort(SortKey),
    ClearSort,
    ClearAllFilters,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intents_deserialize_from_tagged_json() {
        let json = r#"[
            {"type": "set-subject", "value": "Chemistry"},
            {"type": "toggle-class", "value": "Class 12"},
            {"type": "toggle-status", "value": "In Progress"},
            {"type": "toggle-weak-only"},
            {"type": "set-sort", "value": "questions"},
            {"type": "clear-all-filters"}
        ]"#;
        let intents: Vec<Intent> = serde_json::from_str(json).unwrap();
        assert_eq!(
            intents,
            vec![
                Intent::SetSubject(Subject::Chemistry),
                Intent::ToggleClass("Class 12".to_string()),
                Intent::ToggleStatus(ChapterStatus::InProgress),
                Intent::ToggleWeakOnly,
                Intent::SetSort(SortKey::QuestionsTotal),
                Intent::ClearAllFilters,
            ]
        );
    }
}
