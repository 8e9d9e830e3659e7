//! Selection state for the chapter dashboard.
//!
//! [`ChapterStore`] owns the catalogue and everything the user has picked:
//! subject, class/unit/status filters, the weak-chapter toggle and sort
//! order. Views mutate it through the operation methods (or
//! [`ChapterStore::dispatch`]) and read the filtered chapters or derived
//! rows back out.
//!
//! # Version tracking
//!
//! Every mutation that changes state increments [`ChapterStore::version`].
//! Ignored toggles and no-op clears leave it untouched, so a view can keep
//! rows it derived earlier until the version moves.

use std::collections::BTreeMap;

use pyq_model::{ChapterRecord, ChapterStatus, RawChapter, Subject, ValidationError};
use tracing::{debug, info, warn};

use crate::catalogue::Catalogue;
use crate::filters::{StatusFilter, ToggleOutcome, ValueFilter};
use crate::intent::Intent;
use crate::rows::{DisplayRow, IconAssignment, SortDirection, SortKey, derive_rows};
use crate::summary::FilterSummary;

/// Initial selection for a new store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreSettings {
    pub subject: Subject,
    pub sort_key: Option<SortKey>,
    pub sort_direction: SortDirection,
    pub icons: IconAssignment,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            subject: Subject::Physics,
            sort_key: Some(SortKey::Title),
            sort_direction: SortDirection::Ascending,
            icons: IconAssignment::default(),
        }
    }
}

/// What a view should do after a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewSignal {
    /// Nothing changed.
    Unchanged,
    /// State changed; re-render.
    Changed,
    /// The subject changed; re-render and close any open filter dropdown.
    CloseFilterMenus,
}

/// The dashboard's selection state.
#[derive(Debug, Clone)]
pub struct ChapterStore {
    catalogue: Catalogue,
    subject: Subject,
    class_filter: ValueFilter,
    unit_filter: ValueFilter,
    status_filter: StatusFilter,
    weak_only: bool,
    sort_key: Option<SortKey>,
    sort_direction: SortDirection,
    icons: IconAssignment,
    version: u64,
}

impl Default for ChapterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChapterStore {
    /// Empty catalogue, Physics selected, sorted by title ascending.
    pub fn new() -> Self {
        Self::with_settings(StoreSettings::default())
    }

    pub fn with_settings(settings: StoreSettings) -> Self {
        Self {
            catalogue: Catalogue::default(),
            subject: settings.subject,
            class_filter: ValueFilter::default(),
            unit_filter: ValueFilter::default(),
            status_filter: StatusFilter::default(),
            weak_only: false,
            sort_key: settings.sort_key,
            sort_direction: settings.sort_direction,
            icons: settings.icons,
            version: 0,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Validate and install a catalogue.
    ///
    /// On error nothing changes: the previous catalogue and filters stay.
    pub fn load_catalogue(&mut self, records: Vec<RawChapter>) -> Result<(), ValidationError> {
        let catalogue = Catalogue::from_raw(records).inspect_err(|error| {
            warn!(%error, "rejected catalogue load");
        })?;
        self.install_catalogue(catalogue);
        Ok(())
    }

    /// Install an already validated catalogue.
    ///
    /// Class and unit filters are rebuilt for the current subject with
    /// everything selected. Status, weak and sort selections are kept.
    pub fn install_catalogue(&mut self, catalogue: Catalogue) {
        self.catalogue = catalogue;
        self.rebuild_value_filters();
        self.bump();
        info!(
            chapters = self.catalogue.len(),
            subject = %self.subject,
            "catalogue loaded"
        );
    }

    /// Switch subject; filters are rescoped and status cleared.
    pub fn set_subject(&mut self, subject: Subject) -> ViewSignal {
        self.subject = subject;
        self.rebuild_value_filters();
        self.status_filter.clear();
        self.bump();
        debug!(
            %subject,
            classes = self.class_filter.available_count(),
            units = self.unit_filter.available_count(),
            "subject selected"
        );
        ViewSignal::CloseFilterMenus
    }

    pub fn toggle_class_filter(&mut self, value: &str) -> ToggleOutcome {
        let outcome = self.class_filter.toggle(value);
        self.record_toggle("class", value, outcome);
        outcome
    }

    pub fn toggle_unit_filter(&mut self, value: &str) -> ToggleOutcome {
        let outcome = self.unit_filter.toggle(value);
        self.record_toggle("unit", value, outcome);
        outcome
    }

    pub fn toggle_status_filter(&mut self, status: ChapterStatus) -> ToggleOutcome {
        let outcome = self.status_filter.toggle(status);
        self.record_toggle("status", status.as_str(), outcome);
        outcome
    }

    /// Flip the weak-chapters-only toggle; returns the new value.
    pub fn toggle_weak_only(&mut self) -> bool {
        self.weak_only = !self.weak_only;
        self.bump();
        debug!(weak_only = self.weak_only, "weak filter toggled");
        self.weak_only
    }

    /// Sort-header click: the current key flips direction, any other key
    /// becomes the sort key in ascending order.
    pub fn set_sort(&mut self, key: SortKey) {
        if self.sort_key == Some(key) {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_key = Some(key);
            self.sort_direction = SortDirection::Ascending;
        }
        self.bump();
        debug!(
            key = %key,
            direction = self.sort_direction.arrow(),
            "sort changed"
        );
    }

    /// Drop the sort key; rows keep catalogue order.
    pub fn clear_sort(&mut self) -> ViewSignal {
        if self.sort_key.take().is_none() {
            return ViewSignal::Unchanged;
        }
        self.sort_direction = SortDirection::Ascending;
        self.bump();
        ViewSignal::Changed
    }

    /// Reset every filter to "show everything". Sort is untouched.
    pub fn clear_all_filters(&mut self) -> ViewSignal {
        if !self.summary().is_filtered() {
            return ViewSignal::Unchanged;
        }
        self.class_filter.select_all();
        self.unit_filter.select_all();
        self.status_filter.clear();
        self.weak_only = false;
        self.bump();
        debug!("filters cleared");
        ViewSignal::Changed
    }

    /// Apply one user intent.
    pub fn dispatch(&mut self, intent: Intent) -> ViewSignal {
        let before = self.version;
        let signal = match intent {
            Intent::SetSubject(subject) => self.set_subject(subject),
            Intent::ToggleClass(value) => {
                self.toggle_class_filter(&value);
                ViewSignal::Changed
            }
            Intent::ToggleUnit(value) => {
                self.toggle_unit_filter(&value);
                ViewSignal::Changed
            }
            Intent::ToggleStatus(status) => {
                self.toggle_status_filter(status);
                ViewSignal::Changed
            }
            Intent::ToggleWeakOnly => {
                self.toggle_weak_only();
                ViewSignal::Changed
            }
            Intent::SetSort(key) => {
                self.set_sort(key);
                ViewSignal::Changed
            }
            Intent::ClearSort => self.clear_sort(),
            Intent::ClearAllFilters => self.clear_all_filters(),
        };
        if self.version == before {
            ViewSignal::Unchanged
        } else {
            signal
        }
    }

    fn rebuild_value_filters(&mut self) {
        let chapters: Vec<&ChapterRecord> = self.catalogue.for_subject(self.subject).collect();
        self.class_filter = ValueFilter::all_of(chapters.iter().map(|c| c.class.as_str()));
        self.unit_filter = ValueFilter::all_of(chapters.iter().map(|c| c.unit.as_str()));
    }

    fn record_toggle(&mut self, filter: &'static str, value: &str, outcome: ToggleOutcome) {
        if outcome.changed() {
            self.bump();
            debug!(filter, value, ?outcome, "filter toggled");
        } else {
            debug!(filter, value, "ignored toggle of unavailable value");
        }
    }

    fn bump(&mut self) {
        self.version += 1;
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Chapters of the selected subject passing every filter, in catalogue
    /// order.
    pub fn filtered_chapters(&self) -> Vec<&ChapterRecord> {
        self.catalogue
            .for_subject(self.subject)
            .filter(|c| self.class_filter.admits(&c.class))
            .filter(|c| self.unit_filter.admits(&c.unit))
            .filter(|c| self.status_filter.admits(c.status))
            .filter(|c| !self.weak_only || c.is_weak)
            .collect()
    }

    /// Display rows for the filtered chapters in the current sort order.
    pub fn rows(&self) -> Vec<DisplayRow> {
        derive_rows(
            self.filtered_chapters(),
            self.sort_key,
            self.sort_direction,
            self.icons,
        )
    }

    pub fn summary(&self) -> FilterSummary {
        FilterSummary {
            subject: self.subject,
            selected_classes: self.class_filter.selected_count(),
            available_classes: self.class_filter.available_count(),
            selected_units: self.unit_filter.selected_count(),
            available_units: self.unit_filter.available_count(),
            statuses: self.status_filter.len(),
            weak_only: self.weak_only,
            shown: self.filtered_chapters().len(),
        }
    }

    /// Chapter count per subject, every subject included.
    pub fn subject_counts(&self) -> BTreeMap<Subject, usize> {
        let mut counts: BTreeMap<Subject, usize> =
            Subject::ALL.into_iter().map(|s| (s, 0)).collect();
        for chapter in self.catalogue.chapters() {
            *counts.entry(chapter.subject).or_default() += 1;
        }
        counts
    }

    pub fn catalogue(&self) -> &[ChapterRecord] {
        self.catalogue.chapters()
    }

    pub fn subject(&self) -> Subject {
        self.subject
    }

    pub fn class_filter(&self) -> &ValueFilter {
        &self.class_filter
    }

    pub fn unit_filter(&self) -> &ValueFilter {
        &self.unit_filter
    }

    pub fn status_filter(&self) -> &StatusFilter {
        &self.status_filter
    }

    pub fn available_classes(&self) -> impl Iterator<Item = &str> {
        self.class_filter.available()
    }

    pub fn available_units(&self) -> impl Iterator<Item = &str> {
        self.unit_filter.available()
    }

    pub fn weak_only(&self) -> bool {
        self.weak_only
    }

    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort_key
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn icon_assignment(&self) -> IconAssignment {
        self.icons
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}
