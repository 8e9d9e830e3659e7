//! Filter bar labels derived from store state.

use pyq_model::Subject;
use serde::Serialize;

/// Snapshot of how narrow the current selection is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSummary {
    pub subject: Subject,
    pub selected_classes: usize,
    pub available_classes: usize,
    pub selected_units: usize,
    pub available_units: usize,
    pub statuses: usize,
    pub weak_only: bool,
    /// Chapters passing every filter.
    pub shown: usize,
}

impl FilterSummary {
    /// `"All Classes"` or `"<n> Classes"`.
    pub fn class_label(&self) -> String {
        if self.selected_classes == self.available_classes {
            "All Classes".to_string()
        } else {
            format!("{} Classes", self.selected_classes)
        }
    }

    /// `"All Units"` or `"<n> Units"`.
    pub fn unit_label(&self) -> String {
        if self.selected_units == self.available_units {
            "All Units".to_string()
        } else {
            format!("{} Units", self.selected_units)
        }
    }

    pub fn showing_label(&self) -> String {
        format!("Showing all chapters ({})", self.shown)
    }

    /// Whether any filter excludes something.
    pub fn is_filtered(&self) -> bool {
        self.selected_classes != self.available_classes
            || self.selected_units != self.available_units
            || self.statuses > 0
            || self.weak_only
    }
}
