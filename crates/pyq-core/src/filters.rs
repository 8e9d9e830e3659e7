//! Multi-select filters for class, unit and status.
//!
//! Class and unit filters never go empty: deselecting the last value
//! selects every available value again, so "nothing selected" and
//! "everything selected" mean the same thing. The status filter is an
//! ordinary set where empty means "no restriction".

use std::collections::BTreeSet;

use pyq_model::ChapterStatus;

/// Result of toggling a filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The value was added to the selection.
    Added,
    /// The value was removed from the selection.
    Removed,
    /// The last selected value was removed; the selection was refilled
    /// with every available value.
    ResetToAll,
    /// The value is not available for the current subject; nothing changed.
    Ignored,
}

impl ToggleOutcome {
    /// Whether the toggle mutated the selection.
    pub fn changed(self) -> bool {
        !matches!(self, ToggleOutcome::Ignored)
    }
}

/// Class or unit selection scoped to the values present for one subject.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueFilter {
    available: BTreeSet<String>,
    selected: BTreeSet<String>,
}

impl ValueFilter {
    /// Build a filter over `values` with everything selected.
    pub fn all_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let available: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        Self {
            selected: available.clone(),
            available,
        }
    }

    /// Select every available value.
    pub fn select_all(&mut self) {
        self.selected = self.available.clone();
    }

    /// Symmetric-difference toggle of `value`.
    pub fn toggle(&mut self, value: &str) -> ToggleOutcome {
        if !self.available.contains(value) {
            return ToggleOutcome::Ignored;
        }
        if !self.selected.remove(value) {
            self.selected.insert(value.to_string());
            return ToggleOutcome::Added;
        }
        if self.selected.is_empty() {
            self.select_all();
            ToggleOutcome::ResetToAll
        } else {
            ToggleOutcome::Removed
        }
    }

    /// Whether a chapter with this value passes the filter.
    pub fn admits(&self, value: &str) -> bool {
        self.selected.contains(value)
    }

    /// Available values in sorted order.
    pub fn available(&self) -> impl Iterator<Item = &str> {
        self.available.iter().map(String::as_str)
    }

    /// Selected values in sorted order.
    pub fn selected(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    pub fn available_count(&self) -> usize {
        self.available.len()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_all_selected(&self) -> bool {
        self.selected.len() == self.available.len()
    }
}

/// Status selection; empty admits every status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusFilter {
    selected: BTreeSet<ChapterStatus>,
}

impl StatusFilter {
    pub fn toggle(&mut self, status: ChapterStatus) -> ToggleOutcome {
        if self.selected.remove(&status) {
            ToggleOutcome::Removed
        } else {
            self.selected.insert(status);
            ToggleOutcome::Added
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn admits(&self, status: ChapterStatus) -> bool {
        self.selected.is_empty() || self.selected.contains(&status)
    }

    pub fn contains(&self, status: ChapterStatus) -> bool {
        self.selected.contains(&status)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = ChapterStatus> + '_ {
        self.selected.iter().copied()
    }
}
